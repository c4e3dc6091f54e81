use super::hypergeometric::choose;
use serde::Serialize;

/// Probability of every (engine, non-engine) split of an opening hand
///
/// `cells[e][ne]` is `None` when the split cannot happen at all (not enough
/// copies in a pool, or more cards than the hand holds), which keeps it apart
/// from a split that is possible but has a tiny probability.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JointTable {
    pub hand_size: usize,
    pub cells: Vec<Vec<Option<f64>>>,
}

impl JointTable {
    pub fn get(&self, engine: usize, non_engine: usize) -> Option<f64> {
        self.cells
            .get(engine)
            .and_then(|row| row.get(non_engine))
            .copied()
            .flatten()
    }

    /// All defined cells as ((engine, non_engine), probability)
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), f64)> + '_ {
        self.cells.iter().enumerate().flat_map(|(e, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(ne, cell)| cell.map(|p| ((e, ne), p)))
        })
    }

    /// Sum over the defined cells; 1.0 whenever the hand fits in the deck
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, p)| p).sum()
    }

    /// Largest engine or non-engine count the table holds a row/column for
    pub fn span(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }
}

/// Rows and columns stop at `min(hand_size, deck_size)`; anything past
/// that cannot be drawn and reads back as absent through [`JointTable::get`].
pub fn joint_table(
    deck_size: usize,
    engine_count: usize,
    non_engine_count: usize,
    hand_size: usize,
) -> JointTable {
    let span = hand_size.min(deck_size).saturating_add(1);
    let mut cells = vec![vec![None; span]; span];

    let denominator = choose(deck_size, hand_size);
    let other_count = engine_count
        .checked_add(non_engine_count)
        .and_then(|categorized| deck_size.checked_sub(categorized));

    if let (Some(other_count), true) = (other_count, denominator > 0.0) {
        for e in 0..=hand_size.min(engine_count) {
            for ne in 0..=(hand_size - e).min(non_engine_count) {
                let other_in_hand = hand_size - e - ne;
                if other_in_hand > other_count {
                    continue;
                }
                cells[e][ne] = Some(
                    choose(engine_count, e)
                        * choose(non_engine_count, ne)
                        * choose(other_count, other_in_hand)
                        / denominator,
                );
            }
        }
    }

    JointTable { hand_size, cells }
}
