// HTTP routes
pub mod health;
pub mod scoring;

pub use health::*;
pub use scoring::*;
