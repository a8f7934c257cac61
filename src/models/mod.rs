// Model exports
pub mod domain;

pub use domain::{Internship, ListingQuery, MatchLevel, RankResult, RankedInternship};
