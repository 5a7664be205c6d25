//! URL shortener service implementation.
//!
//! This crate wires a [`Registry`](zipline_core::Registry) backend and a
//! [`Generator`](zipline_generator::Generator) into the shorten/resolve
//! workflows. Core types and errors are re-exported from `zipline_core`.

pub mod service;

pub use service::ShortenerService;
pub use zipline_core::{ShortCode, Shortener, ShortenerError};
