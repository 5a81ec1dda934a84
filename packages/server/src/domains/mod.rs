// Business domains
pub mod scoring;
