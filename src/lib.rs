//! Intern Match - skill matching and ranking engine for the research
//! internship marketplace
//!
//! This library scores how well a student's skill set fits an internship's
//! required skills and orders listings accordingly. It is pure and
//! synchronous: the only shared state is a static synonym table, so every
//! operation is safe to call concurrently from any number of threads.

pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::{
    are_related, calculate_match_score, normalize, rank_listings, sort_by_match_score,
};
pub use models::{Internship, ListingQuery, MatchLevel, RankResult, RankedInternship};
