//! Landing page scoring.
//!
//! Pages are scored per criterion on a 1-10 scale, either by an LLM or by a
//! deterministic heuristic that also serves as the fallback.

pub mod actions;
pub mod error;
pub mod extract;
pub mod heuristic;
pub mod models;
pub mod normalize;
pub mod prompts;

pub use actions::*;
pub use error::ScoringError;
pub use models::*;
