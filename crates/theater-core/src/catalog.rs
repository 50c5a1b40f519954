//! # Play Catalog
//!
//! Read-only lookup from play identifier to [`Play`].
//!
//! The catalog is handed to [`crate::summarize`] by the caller, so tests
//! supply a two-entry map and the CLI supplies whatever it loaded from
//! `plays.json`.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::types::Play;

/// Source of play metadata.
///
/// Implementations must be read-only: `lookup` takes `&self`, so a catalog
/// can be shared between threads summarizing different invoices.
pub trait PlayCatalog {
    /// Resolves a play id.
    ///
    /// ## Errors
    /// [`CoreError::UnknownPlay`] when the id is absent.
    fn lookup(&self, play_id: &str) -> CoreResult<&Play>;
}

impl PlayCatalog for HashMap<String, Play> {
    fn lookup(&self, play_id: &str) -> CoreResult<&Play> {
        self.get(play_id)
            .ok_or_else(|| CoreError::UnknownPlay(play_id.to_string()))
    }
}

// =============================================================================
// In-Memory Catalog
// =============================================================================

/// Catalog backed by a `HashMap`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryCatalog {
    plays: HashMap<String, Play>,
}

impl InMemoryCatalog {
    /// Builds a catalog keyed by each play's own id.
    pub fn from_plays(plays: impl IntoIterator<Item = Play>) -> Self {
        InMemoryCatalog {
            plays: plays.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }

    /// Builds a catalog from an id → play map, as found in `plays.json`.
    ///
    /// A play whose `id` is empty takes the map key as its id.
    pub fn from_map(map: HashMap<String, Play>) -> Self {
        let plays = map
            .into_iter()
            .map(|(key, mut play)| {
                if play.id.is_empty() {
                    play.id = key.clone();
                }
                (key, play)
            })
            .collect();
        InMemoryCatalog { plays }
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}

impl PlayCatalog for InMemoryCatalog {
    fn lookup(&self, play_id: &str) -> CoreResult<&Play> {
        self.plays.lookup(play_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_play() {
        let catalog = InMemoryCatalog::from_plays([Play::new("hamlet", "Hamlet", "tragedy")]);
        assert_eq!(catalog.lookup("hamlet").unwrap().name, "Hamlet");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_lookup_unknown_play() {
        let catalog = InMemoryCatalog::default();
        assert!(catalog.is_empty());
        assert_eq!(
            catalog.lookup("P99").unwrap_err(),
            CoreError::UnknownPlay("P99".to_string())
        );
    }

    #[test]
    fn test_from_map_backfills_ids() {
        let mut map = HashMap::new();
        map.insert("othello".to_string(), Play::new("", "Othello", "tragedy"));
        let catalog = InMemoryCatalog::from_map(map);

        assert_eq!(catalog.lookup("othello").unwrap().id, "othello");
    }

    #[test]
    fn test_bare_hash_map_is_a_catalog() {
        let mut map = HashMap::new();
        map.insert("as-like".to_string(), Play::new("as-like", "As You Like It", "comedy"));

        assert!(map.lookup("as-like").is_ok());
        assert!(matches!(map.lookup("hamlet"), Err(CoreError::UnknownPlay(id)) if id == "hamlet"));
    }
}
