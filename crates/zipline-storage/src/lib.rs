//! Registry backends for the Zipline URL shortener.

pub mod memory;
pub mod mysql;

pub use memory::InMemoryRegistry;
pub use mysql::MySqlRegistry;

pub use zipline_core::registry::{Registry, Result};
