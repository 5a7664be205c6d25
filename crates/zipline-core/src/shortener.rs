use crate::error::ShortenerError;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, ShortenerError>;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Returns the short code for a long URL, creating one on first use.
    ///
    /// Repeated calls with the same URL return the identical code. An
    /// empty URL fails with [`ShortenerError::EmptyUrl`] before any
    /// storage access.
    async fn shorten(&self, long_url: &str) -> Result<ShortCode>;

    /// Resolves a short code to its original long URL.
    /// Returns `None` if no mapping exists for the code.
    async fn resolve(&self, code: &ShortCode) -> Result<Option<String>>;
}
