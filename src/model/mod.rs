pub mod day;
pub mod group;
pub mod types;
pub mod wolf;

pub use day::*;
pub use group::*;
pub use types::*;
pub use wolf::*;
