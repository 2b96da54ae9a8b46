//! Wire types exchanged with the advisor discovery backend
//!
//! Field names follow the backend's JSON (snake_case). Optional fields the
//! backend may omit default to `None` or an empty list.

use serde::{Deserialize, Serialize};

/// Faculty identifier as assigned by the backend
pub type FacultyId = i64;

// ========================================
// Faculty & Papers
// ========================================

/// A faculty member returned by the backend
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Faculty {
    pub id: FacultyId,
    pub name: String,
    #[serde(default)]
    pub affiliation: Option<String>,
    #[serde(default)]
    pub h_index: Option<u32>,
    #[serde(default)]
    pub paper_count: Option<u32>,
    /// Semantic Scholar author id, used to build the profile link
    #[serde(default)]
    pub semantic_scholar_id: Option<String>,
    #[serde(default)]
    pub research_tags: Vec<String>,
}

/// A paper attached to a search result
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Paper {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub citation_count: Option<u32>,
}

/// One ranked match: a faculty member, a similarity in [0, 1], and top papers
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SearchResult {
    pub faculty: Faculty,
    pub similarity: f64,
    #[serde(default)]
    pub papers: Vec<Paper>,
}

// ========================================
// Search & Explain
// ========================================

/// Body of `POST /api/search/`
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
    pub limit: u32,
    pub min_h_index: u32,
    /// `null` when no university filter is selected
    pub universities: Option<&'a [String]>,
}

/// Body of `POST /api/search/explain`
#[derive(Debug, Clone, Serialize)]
pub struct ExplanationRequest<'a> {
    pub interests: &'a str,
    pub faculty_id: FacultyId,
}

/// Qualitative level for one explanation axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum MatchLevel {
    High,
    Medium,
    Low,
    /// Any level string the client does not recognise
    #[serde(other)]
    Unknown,
}

/// One axis of an explanation breakdown
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BreakdownItem {
    pub level: MatchLevel,
    pub reason: String,
}

/// Up to three qualitative axes describing why a faculty member matches
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ExplanationBreakdown {
    #[serde(default)]
    pub topic_alignment: Option<BreakdownItem>,
    #[serde(default)]
    pub paper_relevance: Option<BreakdownItem>,
    #[serde(default)]
    pub research_fit: Option<BreakdownItem>,
}

impl ExplanationBreakdown {
    /// Present axes in display order, with their labels
    pub fn axes(&self) -> Vec<(&'static str, &BreakdownItem)> {
        [
            ("Topic alignment", self.topic_alignment.as_ref()),
            ("Paper relevance", self.paper_relevance.as_ref()),
            ("Research fit", self.research_fit.as_ref()),
        ]
        .into_iter()
        .filter_map(|(label, item)| item.map(|i| (label, i)))
        .collect()
    }
}

/// Response of `POST /api/search/explain`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Explanation {
    pub explanation: String,
    #[serde(default)]
    pub breakdown: Option<ExplanationBreakdown>,
}

// ========================================
// CV Upload
// ========================================

/// Response of `POST /api/upload/cv`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CvUploadResponse {
    pub extracted_interests: String,
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

// ========================================
// Exploration Sessions
// ========================================

/// A paper shown during an exploration round
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExplorePaper {
    pub id: i64,
    pub title: String,
    #[serde(default, rename = "abstract")]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub faculty_name: Option<String>,
}

/// Body of `POST /api/explore/start`
#[derive(Debug, Clone, Serialize)]
pub struct ExploreStartRequest<'a> {
    pub initial_interest: &'a str,
}

/// Response of `POST /api/explore/start`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExploreStart {
    pub session_id: String,
    #[serde(default)]
    pub papers: Vec<ExplorePaper>,
    pub prompt: String,
}

/// Body of `POST /api/explore/respond`
#[derive(Debug, Clone, Serialize)]
pub struct ExploreRespondRequest<'a> {
    pub session_id: &'a str,
    pub response: &'a str,
}

/// Response of `POST /api/explore/respond`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExploreStep {
    #[serde(default)]
    pub papers: Vec<ExplorePaper>,
    pub prompt: String,
    #[serde(default)]
    pub is_ready: bool,
}

/// Body of `POST /api/explore/finish`
#[derive(Debug, Clone, Serialize)]
pub struct ExploreFinishRequest<'a> {
    pub session_id: &'a str,
}

/// A faculty member matched to the synthesized research direction
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FacultyMatch {
    pub faculty: Faculty,
    pub similarity: f64,
    pub explanation: String,
    #[serde(default)]
    pub key_paper: Option<String>,
}

/// Response of `POST /api/explore/finish`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExploreFinish {
    pub direction_summary: String,
    pub direction_description: String,
    #[serde(default)]
    pub faculty_matches: Vec<FacultyMatch>,
}

// ========================================
// Errors
// ========================================

/// Error body returned by the backend on non-success status
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorBody {
    /// Human-readable detail, when the backend provides one
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Detail as display text. Validation errors carry structured detail,
    /// which is rendered as compact JSON.
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            Some(serde_json::Value::Null) | None => None,
            Some(serde_json::Value::String(_)) => None,
            Some(other) => Some(other.to_string()),
        }
    }
}
