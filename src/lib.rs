//! Fixed-size toroidal Life-like cellular automaton engine.

pub mod toruslife;

pub use toruslife::{Board, EngineError, Rule, Shape, ToroidalLife, ToroidalLifeConfig};
