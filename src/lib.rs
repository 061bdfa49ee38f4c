pub mod args;
pub mod error;
pub mod grouping;
pub mod model;
pub mod score;
pub mod settlement;
pub mod storage;
pub mod wolf;

pub use error::CoreError;
