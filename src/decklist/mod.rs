//! Deck-list ingestion: `.ydk` text or a `ydke://` URL to a [`Deck`].

pub mod ydk;
pub mod ydke;

pub use ydk::parse_ydk;
pub use ydke::{parse_ydke, YdkeDeck, YDKE_PREFIX};

use crate::card::{NameCache, NameLookup, NameResolver};
use crate::deck::{Deck, DeckError, MAX_COPIES};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum DeckListError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid ydke:// format: '{0}'")]
    InvalidYdkeUrl(String),
    #[error("Invalid base64 in {section} section: {source}")]
    InvalidSection {
        section: &'static str,
        source: base64::DecodeError,
    },
    #[error("No main deck cards found")]
    NoMainDeck,
    #[error("'{name}' has {copies} copies. Max is {max}.", max = MAX_COPIES)]
    TooManyCopies { name: String, copies: usize },
    #[error("Deck error: {0}")]
    DeckError(#[from] DeckError),
}

/// A resolved deck along with the card ID behind each name
#[derive(Debug, Clone)]
pub struct LoadedDeck {
    pub deck: Deck,
    pub card_ids: HashMap<String, u32>,
}

/// Main-deck IDs from either input format
pub fn main_deck_ids(input: &str) -> Result<Vec<u32>, DeckListError> {
    let input = input.trim();
    let ids = if input.starts_with(YDKE_PREFIX) {
        parse_ydke(input)?.main
    } else {
        parse_ydk(input)
    };

    if ids.is_empty() {
        return Err(DeckListError::NoMainDeck);
    }
    Ok(ids)
}

/// Build a deck from `.ydk` text or a `ydke://` URL
///
/// Copies are counted per resolved name, so two IDs sharing a name count
/// together. Any name over the copy limit rejects the whole list.
pub fn load_deck<S: NameLookup, C: NameCache>(
    input: &str,
    source: &S,
    cache: &mut C,
) -> Result<LoadedDeck, DeckListError> {
    let ids = main_deck_ids(input)?;
    debug!(cards = ids.len(), "decoded main deck");

    let mut resolver = NameResolver::new(source, cache);
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut card_ids = HashMap::new();

    for id in ids {
        let name = resolver.resolve(id);
        match counts.iter_mut().find(|(n, _)| *n == name) {
            Some((_, copies)) => *copies += 1,
            None => counts.push((name.clone(), 1)),
        }
        card_ids.insert(name, id);
    }

    if let Some((name, copies)) = counts.iter().find(|(_, copies)| *copies > MAX_COPIES) {
        return Err(DeckListError::TooManyCopies {
            name: name.clone(),
            copies: *copies,
        });
    }

    let mut deck = Deck::new();
    for (name, copies) in &counts {
        deck.add_card(name, *copies)?;
    }

    info!(
        cards = deck.deck_size(),
        distinct = deck.len(),
        "loaded deck"
    );
    Ok(LoadedDeck { deck, card_ids })
}

/// Read a deck-list file and load it
pub fn load_deck_file<S: NameLookup, C: NameCache>(
    path: &str,
    source: &S,
    cache: &mut C,
) -> Result<LoadedDeck, DeckListError> {
    let content = std::fs::read_to_string(path)?;
    load_deck(&content, source, cache)
}
