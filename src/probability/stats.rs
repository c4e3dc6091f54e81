//! Summary statistics for a categorized deck.

use super::hypergeometric::{at_least, hypergeometric};
use super::joint::{joint_table, JointTable};
use crate::deck::{Category, Deck};
use serde::Serialize;

/// Exact and cumulative draw probabilities for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub total: usize,
    /// `exact[k]`: probability of exactly k copies in hand,
    /// k in 0..=min(hand_size, deck_size)
    pub exact: Vec<f64>,
    /// `at_least[k]`: probability of k or more copies in hand
    pub at_least: Vec<f64>,
}

impl CategoryStats {
    pub fn calculate(deck_size: usize, total: usize, hand_size: usize) -> Self {
        let span = hand_size.min(deck_size);
        CategoryStats {
            total,
            exact: (0..=span)
                .map(|k| hypergeometric(deck_size, total, hand_size, k))
                .collect(),
            at_least: (0..=span)
                .map(|k| at_least(deck_size, total, hand_size, k))
                .collect(),
        }
    }

    pub fn exactly(&self, k: usize) -> f64 {
        self.exact.get(k).copied().unwrap_or(0.0)
    }

    pub fn at_least(&self, k: usize) -> f64 {
        self.at_least.get(k).copied().unwrap_or(0.0)
    }
}

/// Chance of seeing a brick in the opening hand or on the next draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BrickRisk {
    /// At least one brick in the opening hand
    pub opening: f64,
    /// Next card is a brick, as bricks / cards left after the hand
    pub next_draw: f64,
    /// `opening + P(no brick in opening) * next_draw`
    pub by_next_draw: f64,
}

impl BrickRisk {
    /// The next-draw term uses the full brick count over the cards left,
    /// treating it as independent of the opening hand having no bricks.
    pub fn calculate(deck_size: usize, brick_total: usize, hand_size: usize) -> Self {
        let opening = at_least(deck_size, brick_total, hand_size, 1);
        let none_in_opening = hypergeometric(deck_size, brick_total, hand_size, 0);

        let next_draw = if deck_size > hand_size {
            brick_total as f64 / (deck_size - hand_size) as f64
        } else {
            0.0
        };

        BrickRisk {
            opening,
            next_draw,
            by_next_draw: opening + none_in_opening * next_draw,
        }
    }
}

/// Every figure shown for a deck once its categories are set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeckProbabilities {
    pub deck_size: usize,
    pub hand_size: usize,
    pub engine: CategoryStats,
    pub non_engine: CategoryStats,
    pub brick: CategoryStats,
    pub joint: JointTable,
    pub brick_risk: BrickRisk,
}

impl DeckProbabilities {
    pub fn calculate(deck: &Deck, hand_size: usize) -> Self {
        let deck_size = deck.deck_size();
        let engine_total = deck.category_total(Category::Engine);
        let non_engine_total = deck.category_total(Category::NonEngine);
        let brick_total = deck.category_total(Category::Brick);

        DeckProbabilities {
            deck_size,
            hand_size,
            engine: CategoryStats::calculate(deck_size, engine_total, hand_size),
            non_engine: CategoryStats::calculate(deck_size, non_engine_total, hand_size),
            brick: CategoryStats::calculate(deck_size, brick_total, hand_size),
            joint: joint_table(deck_size, engine_total, non_engine_total, hand_size),
            brick_risk: BrickRisk::calculate(deck_size, brick_total, hand_size),
        }
    }

    pub fn category(&self, category: Category) -> &CategoryStats {
        match category {
            Category::Engine => &self.engine,
            Category::NonEngine => &self.non_engine,
            Category::Brick => &self.brick,
        }
    }
}

/// Odds of each category on the card drawn after a given hand
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NextCardOdds {
    pub remaining_deck: usize,
    pub engine_remaining: usize,
    pub non_engine_remaining: usize,
    pub brick_remaining: usize,
}

impl NextCardOdds {
    pub fn calculate(deck: &Deck, hand: &[String]) -> Self {
        let remaining = |category: Category| {
            let in_hand = hand
                .iter()
                .filter(|card| deck.cards_in(category).contains(card.as_str()))
                .count();
            deck.category_total(category).saturating_sub(in_hand)
        };

        NextCardOdds {
            remaining_deck: deck.deck_size().saturating_sub(hand.len()),
            engine_remaining: remaining(Category::Engine),
            non_engine_remaining: remaining(Category::NonEngine),
            brick_remaining: remaining(Category::Brick),
        }
    }

    pub fn remaining(&self, category: Category) -> usize {
        match category {
            Category::Engine => self.engine_remaining,
            Category::NonEngine => self.non_engine_remaining,
            Category::Brick => self.brick_remaining,
        }
    }

    pub fn probability(&self, category: Category) -> f64 {
        if self.remaining_deck == 0 {
            return 0.0;
        }
        self.remaining(category) as f64 / self.remaining_deck as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{PartitionTargets, HAND_SIZE};

    fn categorized_forty() -> Deck {
        let mut deck = Deck::new();
        deck.add_card("E1", 3).unwrap();
        deck.add_card("N1", 2).unwrap();
        for i in 0..35 {
            deck.add_card(&format!("B{}", i), 1).unwrap();
        }
        deck.assign("E1", Category::Engine).unwrap();
        deck.assign("N1", Category::NonEngine).unwrap();
        for i in 0..35 {
            deck.assign(&format!("B{}", i), Category::Brick).unwrap();
        }
        deck
    }

    #[test]
    fn test_forty_card_scenario() {
        let deck = categorized_forty();
        let probs = DeckProbabilities::calculate(&deck, HAND_SIZE);

        assert_eq!(probs.deck_size, 40);
        assert_eq!(probs.engine.total, 3);
        assert_eq!(probs.non_engine.total, 2);
        assert_eq!(probs.brick.total, 35);

        let engine_sum: f64 = probs.engine.exact.iter().sum();
        assert!((engine_sum - 1.0).abs() < 1e-9);
        assert!((probs.engine.at_least(1) - (1.0 - probs.engine.exactly(0))).abs() < 1e-12);
        assert!((probs.joint.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_stats_vectors_cover_hand() {
        let stats = CategoryStats::calculate(40, 9, 6);
        assert_eq!(stats.exact.len(), 7);
        assert_eq!(stats.at_least.len(), 7);
        assert!((stats.at_least(0) - 1.0).abs() < 1e-9);
        assert_eq!(stats.exactly(12), 0.0);
    }

    #[test]
    fn test_hand_larger_than_deck() {
        let stats = CategoryStats::calculate(40, 9, usize::MAX);
        assert_eq!(stats.exact.len(), 41);
        assert!(stats.exact.iter().all(|&p| p == 0.0));
        assert_eq!(stats.at_least(0), 0.0);
        assert_eq!(stats.exactly(usize::MAX), 0.0);

        let risk = BrickRisk::calculate(40, 9, usize::MAX);
        assert_eq!(risk.opening, 0.0);
        assert_eq!(risk.by_next_draw, 0.0);
    }

    #[test]
    fn test_brick_risk_formula() {
        let risk = BrickRisk::calculate(40, 6, 5);
        let opening = at_least(40, 6, 5, 1);
        let none = hypergeometric(40, 6, 5, 0);

        assert!((risk.opening - opening).abs() < 1e-12);
        assert!((risk.next_draw - 6.0 / 35.0).abs() < 1e-12);
        assert!((risk.by_next_draw - (opening + none * 6.0 / 35.0)).abs() < 1e-12);
    }

    #[test]
    fn test_brick_risk_without_cards_left() {
        let risk = BrickRisk::calculate(5, 2, 5);
        assert_eq!(risk.next_draw, 0.0);
        assert!((risk.by_next_draw - risk.opening).abs() < 1e-12);
        assert!((risk.opening - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_no_bricks_means_no_risk() {
        let risk = BrickRisk::calculate(40, 0, 5);
        assert_eq!(risk.opening, 0.0);
        assert_eq!(risk.by_next_draw, 0.0);
    }

    #[test]
    fn test_uncategorized_deck() {
        let mut deck = Deck::new();
        deck.add_card("A", 3).unwrap();
        deck.add_card("B", 3).unwrap();
        deck.partition(PartitionTargets::default()).unwrap();

        let probs = DeckProbabilities::calculate(&deck, HAND_SIZE);
        assert_eq!(probs.engine.exactly(0), 1.0);
        assert_eq!(probs.brick.at_least(1), 0.0);
        assert_eq!(probs.joint.get(0, 0), Some(1.0));
    }

    #[test]
    fn test_next_card_odds() {
        let deck = categorized_forty();
        let hand: Vec<String> = ["E1", "E1", "B0", "B1", "N1"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let odds = NextCardOdds::calculate(&deck, &hand);
        assert_eq!(odds.remaining_deck, 35);
        assert_eq!(odds.engine_remaining, 1);
        assert_eq!(odds.non_engine_remaining, 1);
        assert_eq!(odds.brick_remaining, 33);
        assert!((odds.probability(Category::Brick) - 33.0 / 35.0).abs() < 1e-12);
    }

    #[test]
    fn test_next_card_odds_empty_remainder() {
        let mut deck = Deck::new();
        deck.add_card("A", 2).unwrap();
        let hand = vec!["A".to_string(), "A".to_string()];

        let odds = NextCardOdds::calculate(&deck, &hand);
        assert_eq!(odds.remaining_deck, 0);
        assert_eq!(odds.probability(Category::Engine), 0.0);
    }
}
