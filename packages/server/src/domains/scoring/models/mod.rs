pub mod criteria;
pub mod score;

pub use criteria::*;
pub use score::*;
