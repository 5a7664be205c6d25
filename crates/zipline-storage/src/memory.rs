use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use zipline_core::registry::{Registry, Result};
use zipline_core::{ShortCode, StorageError};

/// In-memory implementation of the registry using DashMap.
///
/// The bidirectional mapping is held as two maps. DashMap's sharded locks
/// allow concurrent reads and writes to different buckets without a
/// process-wide lock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    by_long: DashMap<String, ShortCode>,
    by_code: DashMap<String, String>,
}

impl InMemoryRegistry {
    /// Creates a new in-memory registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.by_long.len()
    }

    /// Returns true if no mapping has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.by_long.is_empty()
    }
}

#[async_trait]
impl Registry for InMemoryRegistry {
    async fn find_code(&self, long_url: &str) -> Result<Option<ShortCode>> {
        Ok(self.by_long.get(long_url).map(|entry| entry.value().clone()))
    }

    async fn find_long(&self, code: &ShortCode) -> Result<Option<String>> {
        Ok(self.by_code.get(code.as_str()).map(|entry| entry.value().clone()))
    }

    async fn insert(&self, long_url: &str, code: &ShortCode) -> Result<ShortCode> {
        // The vacant/occupied decision on the long-URL map is the atomicity
        // point: whoever claims the entry publishes the mapping, everyone
        // else gets the stored winner back.
        match self.by_long.entry(long_url.to_owned()) {
            Entry::Occupied(existing) => Ok(existing.get().clone()),
            Entry::Vacant(slot) => match self.by_code.entry(code.as_str().to_owned()) {
                // The candidate code is already taken by another long URL.
                Entry::Occupied(_) => Err(StorageError::Conflict(code.to_string())),
                Entry::Vacant(code_slot) => {
                    code_slot.insert(long_url.to_owned());
                    slot.insert(code.clone());
                    Ok(code.clone())
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> ShortCode {
        ShortCode::new_unchecked(s)
    }

    #[tokio::test]
    async fn insert_and_find_both_directions() {
        let registry = InMemoryRegistry::new();

        registry
            .insert("https://example.com/a", &code("dmzKek"))
            .await
            .unwrap();

        let found = registry.find_code("https://example.com/a").await.unwrap();
        assert_eq!(found, Some(code("dmzKek")));

        let long = registry.find_long(&code("dmzKek")).await.unwrap();
        assert_eq!(long.as_deref(), Some("https://example.com/a"));
    }

    #[tokio::test]
    async fn lookups_miss_on_unknown_keys() {
        let registry = InMemoryRegistry::new();

        assert!(registry.find_code("https://nope.example").await.unwrap().is_none());
        assert!(registry.find_long(&code("nope")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_returns_existing_code_for_known_url() {
        let registry = InMemoryRegistry::new();

        registry
            .insert("https://example.com/a", &code("first"))
            .await
            .unwrap();

        // A second writer with a different candidate gets the stored winner.
        let winner = registry
            .insert("https://example.com/a", &code("second"))
            .await
            .unwrap();
        assert_eq!(winner, code("first"));

        // The losing candidate was discarded entirely.
        assert!(registry.find_long(&code("second")).await.unwrap().is_none());
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn code_reuse_for_different_url_is_a_conflict() {
        let registry = InMemoryRegistry::new();

        registry
            .insert("https://example.com/a", &code("taken"))
            .await
            .unwrap();

        let err = registry
            .insert("https://example.com/b", &code("taken"))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Conflict(_)));

        // The existing mapping was not overwritten.
        let long = registry.find_long(&code("taken")).await.unwrap();
        assert_eq!(long.as_deref(), Some("https://example.com/a"));
    }

    #[tokio::test]
    async fn concurrent_inserts_for_one_url_agree_on_a_single_winner() {
        use std::sync::Arc;

        let registry = Arc::new(InMemoryRegistry::new());
        let mut handles = vec![];

        for i in 0..16u64 {
            let registry = Arc::clone(&registry);
            handles.push(tokio::spawn(async move {
                let candidate = ShortCode::new_unchecked(format!("cand{:02}", i));
                registry.insert("https://new.example", &candidate).await.unwrap()
            }));
        }

        let mut winners = vec![];
        for handle in handles {
            winners.push(handle.await.unwrap());
        }

        // Exactly one mapping exists and every caller saw the same code.
        assert_eq!(registry.len(), 1);
        assert!(winners.windows(2).all(|pair| pair[0] == pair[1]));

        let long = registry.find_long(&winners[0]).await.unwrap();
        assert_eq!(long.as_deref(), Some("https://new.example"));
    }
}
