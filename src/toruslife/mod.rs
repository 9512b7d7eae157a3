//! Engine internals and public API.

mod board;
mod engine;
mod error;
mod rules;
mod shapes;

pub use board::Board;
pub use engine::{ToroidalLife, ToroidalLifeConfig};
pub use error::EngineError;
pub use rules::{Rule, RuleTable};
pub use shapes::Shape;
