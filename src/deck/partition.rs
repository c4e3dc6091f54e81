//! Greedy assignment of whole cards to brick / non-engine / engine.

use super::model::{Category, Deck, DeckError};
use serde::Serialize;
use tracing::debug;

/// Requested number of cards per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PartitionTargets {
    pub brick: usize,
    pub non_engine: usize,
    pub engine: usize,
}

impl PartitionTargets {
    pub fn new(brick: usize, non_engine: usize, engine: usize) -> Self {
        PartitionTargets {
            brick,
            non_engine,
            engine,
        }
    }

    /// Sum of the three targets, `None` if it does not fit in a `usize`
    pub fn checked_total(&self) -> Option<usize> {
        self.brick
            .checked_add(self.non_engine)?
            .checked_add(self.engine)
    }

    /// Sum of the three targets, saturating at `usize::MAX`
    pub fn total(&self) -> usize {
        self.checked_total().unwrap_or(usize::MAX)
    }
}

/// Rebuild the deck's category sets from the targets.
///
/// Passes run brick, then non-engine, then engine over the insertion order.
/// A card is taken only if all its copies fit in what is left of the target,
/// but every card the pass looks at uses up its copy count either way. Cards
/// claimed by an earlier pass are skipped without touching the target.
pub fn partition(deck: &mut Deck, targets: PartitionTargets) -> Result<(), DeckError> {
    let deck_size = deck.deck_size();
    match targets.checked_total() {
        Some(requested) if requested <= deck_size => {}
        _ => {
            return Err(DeckError::InvalidPartitionTarget {
                requested: targets.total(),
                deck_size,
            })
        }
    }

    deck.clear_categories();

    let order: Vec<(String, usize)> = deck
        .cards()
        .map(|(name, copies)| (name.to_string(), copies))
        .collect();

    let passes = [
        (Category::Brick, targets.brick),
        (Category::NonEngine, targets.non_engine),
        (Category::Engine, targets.engine),
    ];

    for (category, target) in passes {
        let mut remaining = target;
        for (name, copies) in &order {
            if remaining == 0 {
                break;
            }
            if deck.category_of(name).is_some() {
                continue;
            }
            if *copies <= remaining {
                deck.set_mut(category).insert(name.clone());
            }
            remaining = remaining.saturating_sub(*copies);
        }

        debug!(
            %category,
            requested = target,
            realized = deck.category_total(category),
            "partition pass complete"
        );
    }

    Ok(())
}

impl Deck {
    pub fn partition(&mut self, targets: PartitionTargets) -> Result<(), DeckError> {
        partition(self, targets)
    }
}
