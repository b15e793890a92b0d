//! Caller-owned memoization of fetched translations.
//!
//! Translated content is immutable once published, so a fetched translation
//! never needs invalidation. The cache is an explicit collaborator owned by
//! the caller rather than hidden state inside the entities; the `&mut`
//! receiver gives each key at-most-once fetch semantics without locks.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::Result;

/// Memoization map from `(asset ID, language code)` to fetched bytes.
///
/// # Example
///
/// ```no_run
/// use ondemand_sdk::{OnDemandClient, TranslationCache};
///
/// let client = OnDemandClient::builder()
///     .endpoint("https://developer-sandbox.example.com")
///     .credentials("key-id", "secret-key")
///     .build()
///     .unwrap();
///
/// let mut cache = TranslationCache::new();
/// let bytes = cache
///     .get_or_fetch(123456, "fr-fr", |asset_id, language| {
///         client.files().translation(&asset_id.to_string(), language)
///     })
///     .unwrap();
/// println!("{} bytes", bytes.len());
/// ```
#[derive(Debug, Default)]
pub struct TranslationCache {
    entries: HashMap<(i32, String), Vec<u8>>,
}

impl TranslationCache {
    pub fn new() -> TranslationCache {
        TranslationCache::default()
    }

    /// The cached translation for an asset and language, if one was fetched.
    pub fn get(&self, asset_id: i32, language_code: &str) -> Option<&[u8]> {
        self.entries
            .get(&(asset_id, language_code.to_string()))
            .map(Vec::as_slice)
    }

    /// Return the cached translation, fetching and storing it on first
    /// access. The fetch closure runs at most once per key; a failed fetch
    /// caches nothing, so the next call retries.
    pub fn get_or_fetch<F>(&mut self, asset_id: i32, language_code: &str, fetch: F) -> Result<&[u8]>
    where
        F: FnOnce(i32, &str) -> Result<Vec<u8>>,
    {
        match self.entries.entry((asset_id, language_code.to_string())) {
            Entry::Occupied(entry) => Ok(entry.into_mut().as_slice()),
            Entry::Vacant(entry) => {
                let bytes = fetch(asset_id, language_code)?;
                Ok(entry.insert(bytes).as_slice())
            }
        }
    }

    /// Number of cached translations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
