//! Home search screen state
//!
//! A search is either a free-text query or a CV upload. Both replace the
//! result list wholesale. `SearchScreen::view` collapses the state into a
//! single thing to show: loading, an error, an empty result, or cards.

use std::collections::HashMap;
use std::path::Path;

use advisor_common::api::{Explanation, FacultyId, SearchResult};

use crate::api::{AdvisorBackend, UploadOptions};
use crate::compare::{CompareSelection, CompareToggle};
use crate::explore::ActionOutcome;
use crate::filters::Filters;
use crate::render::{self, truncate_chars, CompareColumn, ResultCard, SKELETON_COUNT};
use crate::upload::CvFile;

pub const EXAMPLE_QUERIES: [&str; 6] = [
    "machine learning for healthcare diagnostics",
    "natural language processing and large language models",
    "computer vision for autonomous vehicles",
    "reinforcement learning and robotics",
    "statistical inference and causal discovery",
    "quantum computing algorithms",
];

/// Example queries offered on an empty result
pub const EMPTY_STATE_EXAMPLES: usize = 4;

const ECHO_CHARS: usize = 100;

pub const SEARCH_FAILED: &str = "Search failed. Please check your connection and try again.";
pub const UPLOAD_FAILED: &str = "Upload failed";
pub const EXPLAIN_FAILED: &str = "Failed to load explanation";

/// Which kind of search produced the current results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Text,
    Cv,
}

/// Per-card explanation state
#[derive(Debug, Clone, PartialEq)]
pub enum ExplanationState {
    Loading,
    Loaded(Explanation),
    Failed(String),
}

/// What the screen shows right now
#[derive(Debug, Clone, PartialEq)]
pub enum SearchView {
    /// Nothing searched yet
    Idle,
    Loading { skeletons: usize },
    Error(String),
    Empty {
        /// The searched text, cut to 100 characters
        echo: Option<String>,
        suggestions: Vec<String>,
        examples: Vec<&'static str>,
    },
    Results(Vec<ResultCard>),
}

#[derive(Debug, Default)]
pub struct SearchScreen {
    mode: SearchMode,
    query: String,
    filters: Filters,
    compare: CompareSelection,
    results: Vec<SearchResult>,
    extracted_interests: Option<String>,
    explanations: HashMap<FacultyId, ExplanationState>,
    searched: bool,
    loading: bool,
    error: Option<String>,
}

impl SearchScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut Filters {
        &mut self.filters
    }

    pub fn compare(&self) -> &CompareSelection {
        &self.compare
    }

    pub fn compare_mut(&mut self) -> &mut CompareSelection {
        &mut self.compare
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn extracted_interests(&self) -> Option<&str> {
        self.extracted_interests.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.loading
    }

    pub fn explanation(&self, faculty_id: FacultyId) -> Option<&ExplanationState> {
        self.explanations.get(&faculty_id)
    }

    /// Interests used for explanations and the empty-state echo
    ///
    /// After a CV search these are the extracted interests, falling back to
    /// the query when the backend extracted nothing.
    pub fn interests(&self) -> &str {
        match (self.mode, self.extracted_interests.as_deref()) {
            (SearchMode::Cv, Some(interests)) => interests,
            _ => &self.query,
        }
    }

    /// Toggle a card from the current results into the compare selection
    pub fn toggle_compare(&mut self, faculty_id: FacultyId) -> Option<CompareToggle> {
        let result = self.results.iter().find(|r| r.faculty.id == faculty_id)?;
        Some(self.compare.toggle(result))
    }

    /// Columns for the side-by-side view, once at least two are selected
    pub fn compare_view(&self) -> Option<Vec<CompareColumn>> {
        self.compare
            .can_compare()
            .then(|| render::compare_columns(self.compare.selected()))
    }

    pub async fn search(&mut self, backend: &dyn AdvisorBackend) -> ActionOutcome {
        if self.loading || self.query.trim().is_empty() {
            return ActionOutcome::Skipped;
        }

        self.mode = SearchMode::Text;
        self.loading = true;
        self.error = None;
        self.extracted_interests = None;
        self.searched = true;

        let result = backend
            .search_faculty(
                &self.query,
                self.filters.result_count(),
                self.filters.min_h_index(),
                self.filters.universities(),
            )
            .await;
        self.loading = false;

        match result {
            Ok(results) => {
                self.replace_results(results);
                ActionOutcome::Applied
            }
            Err(e) => {
                tracing::error!(error = %e, "Search failed");
                self.error = Some(SEARCH_FAILED.to_string());
                ActionOutcome::Failed
            }
        }
    }

    /// Validate a CV locally, then upload it with the current filters
    ///
    /// A locally rejected file never reaches `backend`.
    pub async fn upload(&mut self, backend: &dyn AdvisorBackend, path: &Path) -> ActionOutcome {
        if self.loading {
            return ActionOutcome::Skipped;
        }

        let file = match CvFile::from_path(path) {
            Ok(file) => file,
            Err(rejection) => {
                tracing::warn!(path = %path.display(), reason = %rejection, "CV rejected locally");
                self.error = Some(rejection.to_string());
                return ActionOutcome::Failed;
            }
        };

        self.mode = SearchMode::Cv;
        self.loading = true;
        self.error = None;
        self.extracted_interests = None;
        self.searched = true;

        let options = UploadOptions {
            limit: Some(self.filters.result_count()),
            min_h_index: Some(self.filters.min_h_index()),
            universities: self.filters.universities_param().map(|u| u.to_vec()),
        };
        let result = backend.upload_cv(&file, &options).await;
        self.loading = false;

        match result {
            Ok(upload) => {
                tracing::info!(interests = %upload.extracted_interests, "CV interests extracted");
                self.extracted_interests = Some(upload.extracted_interests);
                self.replace_results(upload.results);
                ActionOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(error = %e, "CV upload failed");
                self.error = Some(e.user_message(UPLOAD_FAILED));
                ActionOutcome::Failed
            }
        }
    }

    /// Fetch the explanation for one card. A failure only affects that card.
    pub async fn explain(
        &mut self,
        backend: &dyn AdvisorBackend,
        faculty_id: FacultyId,
    ) -> ActionOutcome {
        if matches!(self.explanations.get(&faculty_id), Some(ExplanationState::Loading)) {
            return ActionOutcome::Skipped;
        }

        let interests = self.interests().to_string();
        self.explanations.insert(faculty_id, ExplanationState::Loading);

        let state = match backend.get_explanation(&interests, faculty_id).await {
            Ok(explanation) => ExplanationState::Loaded(explanation),
            Err(e) => {
                tracing::warn!(faculty_id, error = %e, "Explanation request failed");
                ExplanationState::Failed(e.user_message(EXPLAIN_FAILED))
            }
        };
        let outcome = match state {
            ExplanationState::Failed(_) => ActionOutcome::Failed,
            _ => ActionOutcome::Applied,
        };
        self.explanations.insert(faculty_id, state);
        outcome
    }

    pub fn view(&self) -> SearchView {
        if self.loading {
            return SearchView::Loading {
                skeletons: SKELETON_COUNT,
            };
        }
        if let Some(error) = &self.error {
            return SearchView::Error(error.clone());
        }
        if !self.searched {
            return SearchView::Idle;
        }
        if self.results.is_empty() {
            return SearchView::Empty {
                echo: self.echo(),
                suggestions: self.suggestions(),
                examples: EXAMPLE_QUERIES[..EMPTY_STATE_EXAMPLES].to_vec(),
            };
        }
        SearchView::Results(render::result_cards(&self.results))
    }

    fn replace_results(&mut self, results: Vec<SearchResult>) {
        self.results = results;
        self.explanations.clear();
    }

    fn echo(&self) -> Option<String> {
        let searched = self.interests();
        if searched.is_empty() {
            None
        } else {
            Some(truncate_chars(searched, ECHO_CHARS))
        }
    }

    fn suggestions(&self) -> Vec<String> {
        let mut suggestions = vec![
            "Try broader or more general terms (e.g., \"machine learning\" instead of \"few-shot meta-learning for medical imaging\")".to_string(),
            "Check spelling and try alternative terminology".to_string(),
        ];
        if self.filters.min_h_index() > 0 {
            suggestions.push(format!(
                "Lower the minimum h-index filter (currently set to {})",
                self.filters.min_h_index()
            ));
        }
        if !self.filters.universities().is_empty() {
            suggestions.push("Remove university filters to expand results".to_string());
        }
        suggestions.push("Try one of the example queries below".to_string());
        suggestions
    }
}
