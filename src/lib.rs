pub mod card;
pub mod deck;
pub mod decklist;
pub mod probability;
pub mod report;
pub mod rng;
pub mod simulation;
