use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, trace};
use zipline_core::{Registry, ShortCode, Shortener, ShortenerError};
use zipline_generator::Generator;

type Result<T> = std::result::Result<T, ShortenerError>;

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Registry` and a `Generator` to handle:
/// - Idempotent shortening (one code per long URL)
/// - Short code generation for first-seen URLs
/// - Resolution of codes back to long URLs
///
/// The check-then-write sequence is not atomic, so the registry's
/// insert-if-absent contract decides races: whichever writer lands first
/// wins, and every caller receives the winning code.
#[derive(Debug, Clone)]
pub struct ShortenerService<R, G> {
    registry: Arc<R>,
    generator: Arc<G>,
}

impl<R: Registry, G: Generator> ShortenerService<R, G> {
    /// Creates a new `ShortenerService` over the given backend and generator.
    pub fn new(registry: R, generator: G) -> Self {
        Self {
            registry: Arc::new(registry),
            generator: Arc::new(generator),
        }
    }
}

#[async_trait]
impl<R: Registry, G: Generator> Shortener for ShortenerService<R, G> {
    async fn shorten(&self, long_url: &str) -> Result<ShortCode> {
        // Empty input short-circuits before any storage access.
        if long_url.is_empty() {
            return Err(ShortenerError::EmptyUrl);
        }

        if let Some(existing) = self.registry.find_code(long_url).await? {
            trace!(code = %existing, "long url already shortened");
            return Ok(existing);
        }

        let candidate: ShortCode = self.generator.generate().into();

        // `insert` reports the stored winner, which under concurrency may
        // be another writer's code rather than our candidate.
        let winner = self.registry.insert(long_url, &candidate).await?;
        debug!(code = %winner, "registered short code");
        Ok(winner)
    }

    async fn resolve(&self, code: &ShortCode) -> Result<Option<String>> {
        match self.registry.find_long(code).await? {
            Some(long_url) => {
                debug!(code = %code, url = %long_url, "resolved short code");
                Ok(Some(long_url))
            }
            None => {
                trace!(code = %code, "short code not found");
                Ok(None)
            }
        }
    }
}
