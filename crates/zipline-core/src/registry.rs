use crate::error::StorageError;
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use std::sync::Arc;

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A durable bidirectional mapping between long URLs and short codes.
///
/// Each long URL maps to at most one short code and each short code maps
/// to exactly one long URL for its entire lifetime. Mappings are created
/// once and never mutated or deleted.
#[async_trait]
pub trait Registry: Send + Sync + 'static {
    /// Looks up the short code assigned to a long URL.
    /// Returns `None` if the URL has never been shortened.
    async fn find_code(&self, long_url: &str) -> Result<Option<ShortCode>>;

    /// Looks up the long URL a short code resolves to.
    /// Returns `None` if the code is unknown.
    async fn find_long(&self, code: &ShortCode) -> Result<Option<String>>;

    /// Registers a mapping with insert-if-absent semantics and returns the
    /// code that ended up stored for `long_url`.
    ///
    /// If a concurrent writer already registered `long_url`, the stored
    /// code is returned and `code` is discarded, so racing callers always
    /// observe the same winner. Reusing a code that already maps to a
    /// *different* long URL fails with [`StorageError::Conflict`]; an
    /// existing mapping is never overwritten.
    async fn insert(&self, long_url: &str, code: &ShortCode) -> Result<ShortCode>;
}

#[async_trait]
impl<R: Registry + ?Sized> Registry for Arc<R> {
    async fn find_code(&self, long_url: &str) -> Result<Option<ShortCode>> {
        (**self).find_code(long_url).await
    }

    async fn find_long(&self, code: &ShortCode) -> Result<Option<String>> {
        (**self).find_long(code).await
    }

    async fn insert(&self, long_url: &str, code: &ShortCode) -> Result<ShortCode> {
        (**self).insert(long_url, code).await
    }
}
