//! Monte Carlo sampling of opening hands, used to sanity-check the exact
//! figures against what repeated shuffles actually produce.

use super::hand::{analyze_hand, draw_test_hand};
use crate::deck::{Category, Deck};
use crate::rng::DrawRng;
use indicatif::ProgressBar;
use serde::Serialize;

/// Counts collected over many sampled hands
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleSummary {
    pub trials: usize,
    pub hand_size: usize,
    /// `engine[k]`: hands holding exactly k engine cards
    pub engine: Vec<usize>,
    pub non_engine: Vec<usize>,
    pub brick: Vec<usize>,
    /// `joint[e][ne]`: hands with e engine and ne non-engine cards
    pub joint: Vec<Vec<usize>>,
}

impl SampleSummary {
    /// Drawn hands never hold more cards than the deck, so the tallies stop there
    fn new(hand_size: usize, deck_size: usize) -> Self {
        let span = hand_size.min(deck_size).saturating_add(1);
        SampleSummary {
            trials: 0,
            hand_size,
            engine: vec![0; span],
            non_engine: vec![0; span],
            brick: vec![0; span],
            joint: vec![vec![0; span]; span],
        }
    }

    pub fn histogram(&self, category: Category) -> &[usize] {
        match category {
            Category::Engine => &self.engine,
            Category::NonEngine => &self.non_engine,
            Category::Brick => &self.brick,
        }
    }

    /// Observed frequency of exactly `k` cards of a category
    pub fn exact_rate(&self, category: Category, k: usize) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        let hits = self.histogram(category).get(k).copied().unwrap_or(0);
        hits as f64 / self.trials as f64
    }

    /// Observed frequency of `k` or more cards of a category
    pub fn at_least_rate(&self, category: Category, k: usize) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        let hits: usize = self.histogram(category).iter().skip(k).sum();
        hits as f64 / self.trials as f64
    }
}

/// Draw `trials` hands and tally their composition
pub fn sample_hands(
    deck: &Deck,
    hand_size: usize,
    trials: usize,
    rng: &mut DrawRng,
    progress: Option<&ProgressBar>,
) -> SampleSummary {
    let mut summary = SampleSummary::new(hand_size, deck.deck_size());

    for i in 0..trials {
        let hand = draw_test_hand(deck, hand_size, rng);
        let analysis = analyze_hand(deck, &hand);

        summary.engine[analysis.engine] += 1;
        summary.non_engine[analysis.non_engine] += 1;
        summary.brick[analysis.brick] += 1;
        summary.joint[analysis.engine][analysis.non_engine] += 1;
        summary.trials += 1;

        if let Some(bar) = progress {
            if (i + 1) % 1000 == 0 {
                bar.inc(1000);
            }
        }
    }

    if let Some(bar) = progress {
        bar.set_position(trials as u64);
        bar.finish();
    }

    summary
}
