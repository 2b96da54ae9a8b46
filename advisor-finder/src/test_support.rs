//! Scripted in-memory backend for screen and explorer tests

use std::collections::VecDeque;
use std::sync::Mutex;

use advisor_common::api::{
    CvUploadResponse, Explanation, ExploreFinish, ExploreStart, ExploreStep, Faculty, FacultyId,
    SearchResult,
};
use async_trait::async_trait;

use crate::api::{AdvisorBackend, ApiError, ApiResult, UploadOptions};
use crate::upload::CvFile;

/// Arguments of the last `search_faculty` call
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCall {
    pub query: String,
    pub limit: u32,
    pub min_h_index: u32,
    pub universities: Vec<String>,
}

/// Backend that replays queued responses and records every call
///
/// An unscripted call fails with a network error.
#[derive(Default)]
pub struct FakeBackend {
    calls: Mutex<Vec<&'static str>>,
    search: Mutex<VecDeque<ApiResult<Vec<SearchResult>>>>,
    upload: Mutex<VecDeque<ApiResult<CvUploadResponse>>>,
    explain: Mutex<VecDeque<ApiResult<Explanation>>>,
    start: Mutex<VecDeque<ApiResult<ExploreStart>>>,
    respond: Mutex<VecDeque<ApiResult<ExploreStep>>>,
    finish: Mutex<VecDeque<ApiResult<ExploreFinish>>>,
    pub last_search: Mutex<Option<SearchCall>>,
    pub last_upload: Mutex<Option<UploadOptions>>,
    pub last_explain: Mutex<Option<(String, FacultyId)>>,
}

fn next<T>(queue: &Mutex<VecDeque<ApiResult<T>>>, name: &str) -> ApiResult<T> {
    queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| Err(ApiError::Network(format!("unscripted call: {}", name))))
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_search(&self, r: ApiResult<Vec<SearchResult>>) -> &Self {
        self.search.lock().unwrap().push_back(r);
        self
    }

    pub fn push_upload(&self, r: ApiResult<CvUploadResponse>) -> &Self {
        self.upload.lock().unwrap().push_back(r);
        self
    }

    pub fn push_explain(&self, r: ApiResult<Explanation>) -> &Self {
        self.explain.lock().unwrap().push_back(r);
        self
    }

    pub fn push_start(&self, r: ApiResult<ExploreStart>) -> &Self {
        self.start.lock().unwrap().push_back(r);
        self
    }

    pub fn push_respond(&self, r: ApiResult<ExploreStep>) -> &Self {
        self.respond.lock().unwrap().push_back(r);
        self
    }

    pub fn push_finish(&self, r: ApiResult<ExploreFinish>) -> &Self {
        self.finish.lock().unwrap().push_back(r);
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, name: &'static str) {
        self.calls.lock().unwrap().push(name);
    }
}

#[async_trait]
impl AdvisorBackend for FakeBackend {
    async fn search_faculty(
        &self,
        query: &str,
        limit: u32,
        min_h_index: u32,
        universities: &[String],
    ) -> ApiResult<Vec<SearchResult>> {
        self.record("search");
        *self.last_search.lock().unwrap() = Some(SearchCall {
            query: query.to_string(),
            limit,
            min_h_index,
            universities: universities.to_vec(),
        });
        next(&self.search, "search")
    }

    async fn upload_cv(
        &self,
        _file: &CvFile,
        options: &UploadOptions,
    ) -> ApiResult<CvUploadResponse> {
        self.record("upload");
        *self.last_upload.lock().unwrap() = Some(options.clone());
        next(&self.upload, "upload")
    }

    async fn get_explanation(
        &self,
        interests: &str,
        faculty_id: FacultyId,
    ) -> ApiResult<Explanation> {
        self.record("explain");
        *self.last_explain.lock().unwrap() = Some((interests.to_string(), faculty_id));
        next(&self.explain, "explain")
    }

    async fn start_exploration(&self, _interest: &str) -> ApiResult<ExploreStart> {
        self.record("start");
        next(&self.start, "start")
    }

    async fn respond_to_exploration(
        &self,
        _session_id: &str,
        _response: &str,
    ) -> ApiResult<ExploreStep> {
        self.record("respond");
        next(&self.respond, "respond")
    }

    async fn finish_exploration(&self, _session_id: &str) -> ApiResult<ExploreFinish> {
        self.record("finish");
        next(&self.finish, "finish")
    }
}

pub fn faculty(id: FacultyId, name: &str) -> Faculty {
    Faculty {
        id,
        name: name.to_string(),
        affiliation: Some("Carnegie Mellon University".to_string()),
        h_index: Some(42),
        paper_count: Some(120),
        semantic_scholar_id: Some(format!("{}", 1000 + id)),
        research_tags: vec!["machine learning".to_string()],
    }
}

pub fn search_result(id: FacultyId, similarity: f64) -> SearchResult {
    SearchResult {
        faculty: faculty(id, &format!("Faculty {}", id)),
        similarity,
        papers: Vec::new(),
    }
}
