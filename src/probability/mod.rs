pub mod hypergeometric;
pub mod joint;
pub mod stats;

pub use hypergeometric::{at_least, choose, hypergeometric};
pub use joint::{joint_table, JointTable};
pub use stats::{BrickRisk, CategoryStats, DeckProbabilities, NextCardOdds};
