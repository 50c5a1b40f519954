//! # Input Loading
//!
//! Reads the play catalog and invoices from JSON files.
//!
//! ```json
//! // plays.json
//! { "hamlet": { "name": "Hamlet", "type": "tragedy" } }
//!
//! // invoices.json
//! [ { "customer": "BigCo", "performances": [ { "playID": "hamlet", "audience": 55 } ] } ]
//! ```
//!
//! Genres are NOT checked here. An `"opera"` entry loads fine and only
//! fails when an invoice actually books it.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use theater_core::{InMemoryCatalog, Invoice, Play};

/// Errors while reading input files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Parses a `plays.json` document.
pub fn parse_plays(json: &str) -> Result<InMemoryCatalog, serde_json::Error> {
    let map: HashMap<String, Play> = serde_json::from_str(json)?;
    Ok(InMemoryCatalog::from_map(map))
}

/// Parses an `invoices.json` document.
pub fn parse_invoices(json: &str) -> Result<Vec<Invoice>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Loads the play catalog from disk.
pub fn load_plays(path: &Path) -> Result<InMemoryCatalog, LoadError> {
    debug!(path = %path.display(), "Loading plays");
    let json = read(path)?;
    parse_plays(&json).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads invoices from disk.
pub fn load_invoices(path: &Path) -> Result<Vec<Invoice>, LoadError> {
    debug!(path = %path.display(), "Loading invoices");
    let json = read(path)?;
    parse_invoices(&json).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
