use serde::{Deserialize, Serialize};

/// Internship listing as seen by the matching engine
///
/// Canonical field names are camelCase on the wire; snake_case aliases accept
/// records coming straight from the relational layer. Fields the engine does
/// not interpret ride along in `extra` untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Internship {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "researchArea", alias = "research_area", default)]
    pub research_area: Option<String>,
    #[serde(rename = "professorName", alias = "professor_name", default)]
    pub professor_name: Option<String>,
    #[serde(rename = "requiredSkills", alias = "required_skills", default)]
    pub required_skills: Vec<String>,
    #[serde(rename = "createdAt", alias = "created_at", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Internship annotated with its match score for one student
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedInternship {
    #[serde(flatten)]
    pub internship: Internship,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "matchLevel")]
    pub match_level: MatchLevel,
}

/// Classification of a match score for presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLevel {
    Excellent,
    Good,
    Partial,
    Low,
}

impl MatchLevel {
    /// Classify a 0-100 score. Thresholds are inclusive lower bounds,
    /// checked from the highest.
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            MatchLevel::Excellent
        } else if score >= 60 {
            MatchLevel::Good
        } else if score >= 40 {
            MatchLevel::Partial
        } else {
            MatchLevel::Low
        }
    }

    /// Display label shown next to a listing
    pub fn label(&self) -> &'static str {
        match self {
            MatchLevel::Excellent => "Excellent Match",
            MatchLevel::Good => "Good Match",
            MatchLevel::Partial => "Partial Match",
            MatchLevel::Low => "Low Match",
        }
    }
}

/// Listing filter parameters
#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
    pub search_term: Option<String>,
    pub research_area: Option<String>,
    pub skills: Vec<String>,
}

/// Result of the filter-and-rank pipeline
#[derive(Debug)]
pub struct RankResult {
    pub listings: Vec<RankedInternship>,
    pub total_candidates: usize,
}
