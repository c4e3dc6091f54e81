use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardDatabaseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Anything that can turn a card ID into a card name
pub trait NameLookup {
    fn lookup(&self, id: u32) -> Option<String>;
}

#[derive(Debug, Deserialize)]
struct CardEntry {
    id: u32,
    name: String,
}

/// Card ID -> name table loaded from JSON
///
/// Format: `[{"id": 14558127, "name": "Ash Blossom & Joyous Spring"}, ...]`
#[derive(Debug, Default)]
pub struct CardDatabase {
    names: HashMap<u32, String>,
}

impl CardDatabase {
    pub fn from_file(path: &str) -> Result<Self, CardDatabaseError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, CardDatabaseError> {
        let entries: Vec<CardEntry> = serde_json::from_str(content)?;
        let names = entries.into_iter().map(|e| (e.id, e.name)).collect();
        Ok(CardDatabase { names })
    }

    /// Empty database; every lookup misses
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn card_count(&self) -> usize {
        self.names.len()
    }
}

impl NameLookup for CardDatabase {
    fn lookup(&self, id: u32) -> Option<String> {
        self.names.get(&id).cloned()
    }
}
