use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;
use thiserror::Error;

pub const MIN_DECK_SIZE: usize = 40;
pub const MAX_DECK_SIZE: usize = 60;
pub const MAX_COPIES: usize = 3;
pub const HAND_SIZE: usize = 5;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DeckError {
    #[error("'{name}' has {copies} copies. Max is {max}.", max = MAX_COPIES)]
    InvalidCopyCount { name: String, copies: usize },
    #[error("Card not in deck: {0}")]
    UnknownCard(String),
    #[error("Total counts ({requested}) exceed deck size ({deck_size})")]
    InvalidPartitionTarget { requested: usize, deck_size: usize },
}

/// Role a card plays when judging an opening hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Engine,
    NonEngine,
    Brick,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Engine, Category::NonEngine, Category::Brick];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Engine => write!(f, "engine"),
            Self::NonEngine => write!(f, "non-engine"),
            Self::Brick => write!(f, "brick"),
        }
    }
}

/// A deck: card name -> copy count, kept in insertion order, plus the three
/// category sets over those names
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<(String, usize)>,
    index: HashMap<String, usize>,
    engine: HashSet<String>,
    non_engine: HashSet<String>,
    brick: HashSet<String>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the copy count for a card. Overwriting keeps the card's original
    /// position in the iteration order.
    pub fn add_card(&mut self, name: &str, copies: usize) -> Result<(), DeckError> {
        if copies < 1 || copies > MAX_COPIES {
            return Err(DeckError::InvalidCopyCount {
                name: name.to_string(),
                copies,
            });
        }

        match self.index.get(name) {
            Some(&i) => self.cards[i].1 = copies,
            None => {
                self.index.insert(name.to_string(), self.cards.len());
                self.cards.push((name.to_string(), copies));
            }
        }
        Ok(())
    }

    /// Total number of cards, counting every copy
    pub fn deck_size(&self) -> usize {
        self.cards.iter().map(|(_, copies)| copies).sum()
    }

    /// Number of distinct card names
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
        self.index.clear();
        self.clear_categories();
    }

    pub fn copies(&self, name: &str) -> Option<usize> {
        self.index.get(name).map(|&i| self.cards[i].1)
    }

    /// Cards with their copy counts, in insertion order
    pub fn cards(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.cards.iter().map(|(name, copies)| (name.as_str(), *copies))
    }

    /// One entry per physical card, copies of the same card adjacent
    pub fn flatten(&self) -> Vec<String> {
        self.cards
            .iter()
            .flat_map(|(name, copies)| std::iter::repeat(name.clone()).take(*copies))
            .collect()
    }

    pub fn category_of(&self, name: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|&category| self.set(category).contains(name))
    }

    /// Names assigned to a category
    pub fn cards_in(&self, category: Category) -> &HashSet<String> {
        self.set(category)
    }

    /// Sum of copy counts over the cards assigned to a category
    pub fn category_total(&self, category: Category) -> usize {
        self.set(category)
            .iter()
            .filter_map(|name| self.copies(name))
            .sum()
    }

    /// Tag a card with a category by hand, moving it out of any other one
    pub fn assign(&mut self, name: &str, category: Category) -> Result<(), DeckError> {
        if !self.index.contains_key(name) {
            return Err(DeckError::UnknownCard(name.to_string()));
        }
        for other in Category::ALL {
            self.set_mut(other).remove(name);
        }
        self.set_mut(category).insert(name.to_string());
        Ok(())
    }

    pub fn clear_categories(&mut self) {
        self.engine.clear();
        self.non_engine.clear();
        self.brick.clear();
    }

    fn set(&self, category: Category) -> &HashSet<String> {
        match category {
            Category::Engine => &self.engine,
            Category::NonEngine => &self.non_engine,
            Category::Brick => &self.brick,
        }
    }

    pub(crate) fn set_mut(&mut self, category: Category) -> &mut HashSet<String> {
        match category {
            Category::Engine => &mut self.engine,
            Category::NonEngine => &mut self.non_engine,
            Category::Brick => &mut self.brick,
        }
    }
}
