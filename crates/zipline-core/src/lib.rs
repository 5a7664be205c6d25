//! Core types and traits for the Zipline URL shortener.
//!
//! This crate provides the shared vocabulary used by the generator,
//! the storage backends, and the HTTP gateway: the short-code types,
//! the registry and shortener seams, and the error enums.

pub mod base66;
pub mod error;
pub mod registry;
pub mod shortcode;
pub mod shortener;

pub use base66::ShortCodeBase66;
pub use error::{CoreError, ShortenerError, StorageError};
pub use registry::Registry;
pub use shortcode::ShortCode;
pub use shortener::Shortener;
