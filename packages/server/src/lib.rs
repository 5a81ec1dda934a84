// Landing Page Scorer - API Core
//
// Scores marketing landing pages against named criteria, with an LLM when
// configured and a deterministic heuristic otherwise.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
