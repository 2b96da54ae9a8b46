//! Backend API layer
//!
//! `AdvisorBackend` is the seam between screen state and the network: the
//! screens only talk to this trait, `ApiClient` implements it over HTTP.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};

use advisor_common::api::{
    CvUploadResponse, Explanation, ExploreFinish, ExploreStart, ExploreStep, FacultyId,
    SearchResult,
};
use async_trait::async_trait;

use crate::upload::CvFile;

/// Optional filters sent alongside a CV upload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadOptions {
    pub limit: Option<u32>,
    pub min_h_index: Option<u32>,
    pub universities: Option<Vec<String>>,
}

impl UploadOptions {
    /// Query parameters in wire order. Zero or empty values are left out.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(min_h) = self.min_h_index.filter(|h| *h > 0) {
            pairs.push(("min_h_index", min_h.to_string()));
        }
        if let Some(universities) = &self.universities {
            for u in universities {
                pairs.push(("universities", u.clone()));
            }
        }
        pairs
    }
}

/// Calls the discovery backend exposes
///
/// Every call is an independent round-trip: no caching, deduplication,
/// retry or cancellation.
#[async_trait]
pub trait AdvisorBackend: Send + Sync {
    /// Ranked faculty matches for a free-text interest
    async fn search_faculty(
        &self,
        query: &str,
        limit: u32,
        min_h_index: u32,
        universities: &[String],
    ) -> ApiResult<Vec<SearchResult>>;

    /// Upload an already-validated CV and get matches for its extracted interests
    async fn upload_cv(&self, file: &CvFile, options: &UploadOptions)
        -> ApiResult<CvUploadResponse>;

    /// Why a faculty member matches the given interests
    async fn get_explanation(&self, interests: &str, faculty_id: FacultyId)
        -> ApiResult<Explanation>;

    async fn start_exploration(&self, interest: &str) -> ApiResult<ExploreStart>;

    async fn respond_to_exploration(&self, session_id: &str, response: &str)
        -> ApiResult<ExploreStep>;

    async fn finish_exploration(&self, session_id: &str) -> ApiResult<ExploreFinish>;
}
