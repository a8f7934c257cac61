use crate::models::{Internship, ListingQuery};

/// Check a listing against a free-text search term
///
/// Case-insensitive substring over title, description, research area and
/// professor name, mirroring the dashboard search box.
#[inline]
pub fn matches_search_term(listing: &Internship, term: &str) -> bool {
    let term = term.to_lowercase();
    if term.is_empty() {
        return true;
    }

    listing.title.to_lowercase().contains(&term)
        || listing.description.to_lowercase().contains(&term)
        || listing
            .research_area
            .as_deref()
            .is_some_and(|area| area.to_lowercase().contains(&term))
        || listing
            .professor_name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(&term))
}

/// Check a listing against a research-area filter (exact match)
#[inline]
pub fn matches_research_area(listing: &Internship, area: &str) -> bool {
    listing.research_area.as_deref() == Some(area)
}

/// Check a listing against skill filter keywords
///
/// A listing passes when any keyword is a case-insensitive substring of any
/// of its required skills. An empty keyword list passes everything.
#[inline]
pub fn matches_skill_filter(listing: &Internship, keywords: &[String]) -> bool {
    if keywords.is_empty() {
        return true;
    }

    keywords.iter().any(|keyword| {
        let keyword = keyword.to_lowercase();
        listing
            .required_skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(&keyword))
    })
}

/// Combined check against all listing query constraints
#[inline]
pub fn matches_query(listing: &Internship, query: &ListingQuery) -> bool {
    if let Some(term) = &query.search_term {
        if !matches_search_term(listing, term) {
            return false;
        }
    }

    if let Some(area) = &query.research_area {
        if !matches_research_area(listing, area) {
            return false;
        }
    }

    matches_skill_filter(listing, &query.skills)
}
