use crate::core::filters::matches_query;
use crate::core::scoring::calculate_match_score;
use crate::models::{Internship, ListingQuery, MatchLevel, RankResult, RankedInternship};

/// Score every listing against the student's skills and sort by score
///
/// Each listing is scored via [`calculate_match_score`] against its own
/// required-skill list and annotated with the score and derived level; input
/// records otherwise pass through untouched. Sorting is descending by score
/// with a stable sort, so listings with equal scores keep their original
/// relative order. An empty input yields an empty result.
pub fn sort_by_match_score(
    internships: Vec<Internship>,
    student_skills: &[String],
) -> Vec<RankedInternship> {
    let mut ranked: Vec<RankedInternship> = internships
        .into_iter()
        .map(|internship| {
            let match_score = calculate_match_score(student_skills, &internship.required_skills);
            RankedInternship {
                internship,
                match_score,
                match_level: MatchLevel::from_score(match_score),
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    ranked
}

/// Filter-and-rank pipeline for a student's listing view
///
/// # Pipeline stages
/// 1. Search-term filter (title, description, research area, professor)
/// 2. Research-area filter
/// 3. Skill-keyword filter
/// 4. Scoring and stable ranking
pub fn rank_listings(
    internships: Vec<Internship>,
    query: &ListingQuery,
    student_skills: &[String],
) -> RankResult {
    let total_candidates = internships.len();

    let filtered: Vec<Internship> = internships
        .into_iter()
        .filter(|listing| matches_query(listing, query))
        .collect();

    let listings = sort_by_match_score(filtered, student_skills);

    tracing::debug!(
        "Ranked {} of {} listings ({} good matches)",
        listings.len(),
        total_candidates,
        good_match_count(&listings)
    );

    RankResult {
        listings,
        total_candidates,
    }
}

/// Number of listings classified Good or better
pub fn good_match_count(listings: &[RankedInternship]) -> usize {
    listings
        .iter()
        .filter(|l| matches!(l.match_level, MatchLevel::Excellent | MatchLevel::Good))
        .count()
}
