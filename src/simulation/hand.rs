use crate::deck::{Category, Deck};
use crate::rng::DrawRng;
use serde::Serialize;

/// Draw a random test hand
/// Decks smaller than the hand size give back every card they have
pub fn draw_test_hand(deck: &Deck, hand_size: usize, rng: &mut DrawRng) -> Vec<String> {
    let mut cards = deck.flatten();
    rng.shuffle(&mut cards);
    cards.truncate(hand_size);
    cards
}

/// Category counts of a hand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HandAnalysis {
    pub engine: usize,
    pub non_engine: usize,
    pub brick: usize,
    pub uncategorized: usize,
}

impl HandAnalysis {
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Engine => self.engine,
            Category::NonEngine => self.non_engine,
            Category::Brick => self.brick,
        }
    }
}

pub fn analyze_hand(deck: &Deck, hand: &[String]) -> HandAnalysis {
    let mut analysis = HandAnalysis::default();
    for card in hand {
        match deck.category_of(card) {
            Some(Category::Engine) => analysis.engine += 1,
            Some(Category::NonEngine) => analysis.non_engine += 1,
            Some(Category::Brick) => analysis.brick += 1,
            None => analysis.uncategorized += 1,
        }
    }
    analysis
}

/// The card drawn after the opening hand
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextCard {
    pub name: String,
    pub category: Option<Category>,
}

/// Pick the next card from what the hand left in the deck
///
/// Each hand card removes one copy. None when nothing is left.
pub fn simulate_next_card(deck: &Deck, hand: &[String], rng: &mut DrawRng) -> Option<NextCard> {
    let mut remaining = deck.flatten();
    for card in hand {
        if let Some(pos) = remaining.iter().position(|c| c == card) {
            remaining.remove(pos);
        }
    }

    rng.pick(&remaining).map(|name| NextCard {
        name: name.clone(),
        category: deck.category_of(name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::PartitionTargets;

    fn small_deck() -> Deck {
        let mut deck = Deck::new();
        deck.add_card("X", 1).unwrap();
        deck.add_card("Y", 2).unwrap();
        deck
    }

    #[test]
    fn test_draw_small_deck_returns_all_cards() {
        let deck = small_deck();
        let mut rng = DrawRng::new(Some(1));

        let mut hand = draw_test_hand(&deck, 5, &mut rng);
        assert_eq!(hand.len(), 3);

        hand.sort();
        assert_eq!(hand, vec!["X", "Y", "Y"]);
    }

    #[test]
    fn test_draw_is_reproducible() {
        let mut deck = Deck::new();
        for i in 0..20 {
            deck.add_card(&format!("C{}", i), 2).unwrap();
        }

        let a = draw_test_hand(&deck, 5, &mut DrawRng::new(Some(99)));
        let b = draw_test_hand(&deck, 5, &mut DrawRng::new(Some(99)));
        assert_eq!(a.len(), 5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_analyze_hand() {
        let mut deck = Deck::new();
        deck.add_card("Brick", 2).unwrap();
        deck.add_card("Trap", 1).unwrap();
        deck.add_card("Starter", 3).unwrap();
        deck.add_card("Filler", 3).unwrap();
        deck.partition(PartitionTargets::new(2, 1, 3)).unwrap();

        let hand: Vec<String> = ["Starter", "Starter", "Brick", "Filler", "Trap"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let analysis = analyze_hand(&deck, &hand);
        assert_eq!(
            analysis,
            HandAnalysis {
                engine: 2,
                non_engine: 1,
                brick: 1,
                uncategorized: 1
            }
        );
        assert_eq!(analysis.count(Category::Engine), 2);
    }

    #[test]
    fn test_next_card_when_deck_exhausted() {
        let mut deck = Deck::new();
        deck.add_card("A", 2).unwrap();
        deck.add_card("B", 3).unwrap();
        let hand = deck.flatten();

        let mut rng = DrawRng::new(Some(3));
        assert_eq!(simulate_next_card(&deck, &hand, &mut rng), None);
    }

    #[test]
    fn test_next_card_comes_from_remaining_copies() {
        let mut deck = Deck::new();
        deck.add_card("A", 1).unwrap();
        deck.add_card("B", 1).unwrap();
        deck.assign("B", Category::Brick).unwrap();
        let hand = vec!["A".to_string()];

        let mut rng = DrawRng::new(Some(5));
        for _ in 0..20 {
            let next = simulate_next_card(&deck, &hand, &mut rng).unwrap();
            assert_eq!(next.name, "B");
            assert_eq!(next.category, Some(Category::Brick));
        }
    }
}
