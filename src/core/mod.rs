// Core algorithm exports
pub mod filters;
pub mod normalize;
pub mod ranker;
pub mod related;
pub mod scoring;

pub use filters::{matches_query, matches_research_area, matches_search_term, matches_skill_filter};
pub use normalize::{fold, normalize};
pub use ranker::{good_match_count, rank_listings, sort_by_match_score};
pub use related::are_related;
pub use scoring::calculate_match_score;
