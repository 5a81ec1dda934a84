//! Scoring domain actions - entry-point business logic
//!
//! Called directly from the HTTP routes. Actions never fail: every LLM
//! problem is absorbed into a heuristic result.

pub mod compare_pages;
pub mod score_page;

pub use compare_pages::{compare_pages, score_delta};
pub use score_page::{score_page, FALLBACK_NOTES_PREFIX};
