//! The collection data-provider boundary.
//!
//! The engine never fetches anything itself. Hosts implement
//! `ContentProvider` over whatever transport they have (HTTP, disk,
//! bundled assets) and hand it to the session orchestrator, which maps
//! failures into the engine error taxonomy. `InMemoryProvider` is the
//! reference implementation used by tests and embedders with static decks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::CardPair;

/// Errors from a content provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// No collection with this ID exists. Retrying cannot help.
    #[error("collection '{collection_id}' not found")]
    NotFound { collection_id: String },

    /// The provider could not be reached or returned garbage. Worth a retry.
    #[error("provider unavailable: {reason}")]
    Unavailable { reason: String },
}

impl ProviderError {
    /// Whether retrying the same request could succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            ProviderError::NotFound { .. } => false,
            ProviderError::Unavailable { .. } => true,
        }
    }
}

/// High-level metadata for one collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSummary {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub pair_count: usize,
    pub source: Option<String>,
}

impl CollectionSummary {
    /// Create a summary with just an ID and title.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            icon_url: None,
            pair_count: 0,
            source: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// A source of collections and their card pairs.
pub trait ContentProvider {
    /// Metadata for every playable collection.
    fn list_collections(&self) -> Result<Vec<CollectionSummary>, ProviderError>;

    /// The card pairs of one collection.
    fn collection_pairs(&self, collection_id: &str) -> Result<Vec<CardPair>, ProviderError>;
}

/// Provider over owned, in-memory collections.
///
/// Mirrors the behavior of a collection server: empty collections are
/// skipped when listing because there is nothing to play with, and pair
/// counts are derived from the actual content.
#[derive(Clone, Debug, Default)]
pub struct InMemoryProvider {
    collections: Vec<(CollectionSummary, Vec<CardPair>)>,
}

impl InMemoryProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collection. The summary's `pair_count` is overwritten with the
    /// real count.
    #[must_use]
    pub fn with_collection(mut self, summary: CollectionSummary, pairs: Vec<CardPair>) -> Self {
        let summary = CollectionSummary {
            pair_count: pairs.len(),
            ..summary
        };
        self.collections.push((summary, pairs));
        self
    }
}

impl ContentProvider for InMemoryProvider {
    fn list_collections(&self) -> Result<Vec<CollectionSummary>, ProviderError> {
        Ok(self
            .collections
            .iter()
            .filter(|(_, pairs)| !pairs.is_empty())
            .map(|(summary, _)| summary.clone())
            .collect())
    }

    fn collection_pairs(&self, collection_id: &str) -> Result<Vec<CardPair>, ProviderError> {
        self.collections
            .iter()
            .find(|(summary, _)| summary.id == collection_id)
            .map(|(_, pairs)| pairs.clone())
            .ok_or_else(|| ProviderError::NotFound {
                collection_id: collection_id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CardPayload;

    fn provider() -> InMemoryProvider {
        InMemoryProvider::new()
            .with_collection(
                CollectionSummary::new("animals", "Animals")
                    .with_description("Woodland creatures")
                    .with_icon_url("/collections/animals/images/otter.png"),
                vec![
                    CardPair::from_image("otter.png", "/img/otter.png"),
                    CardPair::from_image("fox.png", "/img/fox.png"),
                ],
            )
            .with_collection(CollectionSummary::new("empty", "Empty"), vec![])
            .with_collection(
                CollectionSummary::new("notes", "Study Notes"),
                vec![CardPair::new(
                    "q-1",
                    CardPayload::text("term"),
                    CardPayload::text("definition"),
                )],
            )
    }

    #[test]
    fn test_listing_skips_empty_collections() {
        let listed = provider().list_collections().unwrap();
        let ids: Vec<&str> = listed.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["animals", "notes"]);
    }

    #[test]
    fn test_pair_count_is_derived() {
        let listed = provider().list_collections().unwrap();
        assert_eq!(listed[0].pair_count, 2);
        assert_eq!(listed[1].pair_count, 1);
    }

    #[test]
    fn test_unknown_collection_is_not_found() {
        let err = provider().collection_pairs("nope").unwrap_err();
        assert!(matches!(err, ProviderError::NotFound { .. }));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_pairs_round_trip() {
        let pairs = provider().collection_pairs("animals").unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].key.as_str(), "otter.png");
    }

    #[test]
    fn test_summary_serde() {
        let summary = CollectionSummary::new("animals", "Animals").with_source("wikimedia");
        let json = serde_json::to_string(&summary).unwrap();
        let back: CollectionSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, back);
    }
}
