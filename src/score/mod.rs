pub mod aggregation;
pub mod leaderboard;
pub mod resolver;

pub use aggregation::*;
pub use leaderboard::*;
pub use resolver::*;
