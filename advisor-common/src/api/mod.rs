//! Shared API types
//!
//! Pure data definitions with no HTTP framework dependencies. The client
//! crate wraps these with its own transport.

pub mod types;

pub use types::{
    BreakdownItem, CvUploadResponse, ErrorBody, Explanation, ExplanationBreakdown,
    ExplanationRequest, ExploreFinish, ExploreFinishRequest, ExplorePaper,
    ExploreRespondRequest, ExploreStart, ExploreStartRequest, ExploreStep, Faculty,
    FacultyId, FacultyMatch, MatchLevel, Paper, SearchRequest, SearchResult,
};
