//! Kernel module - server infrastructure and dependencies.

pub mod ai;
pub mod deps;
pub mod errors;
pub mod test_dependencies;
pub mod traits;

pub use ai::OpenAIAdapter;
pub use deps::{ScoringSettings, ServerDeps};
pub use errors::ClientError;
pub use test_dependencies::{MockAI, MockCall};
pub use traits::*;
