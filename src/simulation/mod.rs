pub mod hand;
pub mod sample;

pub use hand::{analyze_hand, draw_test_hand, simulate_next_card, HandAnalysis, NextCard};
pub use sample::{sample_hands, SampleSummary};
