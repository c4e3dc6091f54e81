pub mod model;
pub mod partition;

pub use model::{
    Category, Deck, DeckError, HAND_SIZE, MAX_COPIES, MAX_DECK_SIZE, MIN_DECK_SIZE,
};
pub use partition::{partition, PartitionTargets};
