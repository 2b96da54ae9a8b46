//! HTTP client for the advisor discovery backend

use std::time::Duration;

use advisor_common::api::{
    CvUploadResponse, ErrorBody, Explanation, ExplanationRequest, ExploreFinish,
    ExploreFinishRequest, ExploreRespondRequest, ExploreStart, ExploreStartRequest,
    ExploreStep, FacultyId, SearchRequest, SearchResult,
};
use advisor_common::config::ClientConfig;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{AdvisorBackend, ApiError, ApiResult, UploadOptions};
use crate::upload::CvFile;

const USER_AGENT: &str = concat!("advisor-finder/", env!("CARGO_PKG_VERSION"));

/// Backend API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url`
    ///
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> ApiResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from resolved configuration
    pub fn from_config(config: &ClientConfig) -> ApiResult<Self> {
        Self::new(config.api_url.clone(), config.request_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a JSON body and decode a JSON response
    async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(endpoint = %url, "Calling backend");

        let response = self
            .http_client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode(&url, response).await
    }
}

/// Map a response to a typed body or an `ApiError`
async fn decode<T: DeserializeOwned>(url: &str, response: reqwest::Response) -> ApiResult<T> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message());
        tracing::warn!(
            endpoint = %url,
            status = status.as_u16(),
            detail = detail.as_deref().unwrap_or(""),
            "Backend returned error status"
        );
        return Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        });
    }

    response.json::<T>().await.map_err(|e| {
        tracing::warn!(endpoint = %url, error = %e, "Failed to decode backend response");
        ApiError::Parse(e.to_string())
    })
}

#[async_trait]
impl AdvisorBackend for ApiClient {
    async fn search_faculty(
        &self,
        query: &str,
        limit: u32,
        min_h_index: u32,
        universities: &[String],
    ) -> ApiResult<Vec<SearchResult>> {
        let body = SearchRequest {
            query,
            limit,
            min_h_index,
            universities: (!universities.is_empty()).then_some(universities),
        };
        let results: Vec<SearchResult> = self.post_json("/api/search/", &body).await?;

        tracing::info!(count = results.len(), "Search returned results");
        Ok(results)
    }

    async fn upload_cv(
        &self,
        file: &CvFile,
        options: &UploadOptions,
    ) -> ApiResult<CvUploadResponse> {
        let url = self.url("/api/upload/cv");
        tracing::debug!(endpoint = %url, file = %file.file_name, "Uploading CV");

        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http_client
            .post(&url)
            .query(&options.query_pairs())
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let upload: CvUploadResponse = decode(&url, response).await?;
        tracing::info!(count = upload.results.len(), "CV upload returned results");
        Ok(upload)
    }

    async fn get_explanation(
        &self,
        interests: &str,
        faculty_id: FacultyId,
    ) -> ApiResult<Explanation> {
        let body = ExplanationRequest {
            interests,
            faculty_id,
        };
        self.post_json("/api/search/explain", &body).await
    }

    async fn start_exploration(&self, interest: &str) -> ApiResult<ExploreStart> {
        let body = ExploreStartRequest {
            initial_interest: interest,
        };
        let start: ExploreStart = self.post_json("/api/explore/start", &body).await?;

        tracing::info!(
            session_id = %start.session_id,
            papers = start.papers.len(),
            "Exploration session started"
        );
        Ok(start)
    }

    async fn respond_to_exploration(
        &self,
        session_id: &str,
        response: &str,
    ) -> ApiResult<ExploreStep> {
        let body = ExploreRespondRequest {
            session_id,
            response,
        };
        self.post_json("/api/explore/respond", &body).await
    }

    async fn finish_exploration(&self, session_id: &str) -> ApiResult<ExploreFinish> {
        let body = ExploreFinishRequest { session_id };
        let finish: ExploreFinish = self.post_json("/api/explore/finish", &body).await?;

        tracing::info!(
            session_id = %session_id,
            matches = finish.faculty_matches.len(),
            "Exploration session finished"
        );
        Ok(finish)
    }
}
