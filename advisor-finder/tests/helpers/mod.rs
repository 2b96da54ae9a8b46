//! Test Helper Utilities
//!
//! Shared utilities for advisor-finder integration tests

#![allow(dead_code)]

pub mod mock_backend;

pub use mock_backend::{MockBackend, UploadedFile};

use advisor_common::api::{Faculty, SearchResult};
use serde_json::{json, Value};

/// Faculty JSON as the backend sends it, with optional fields omitted
pub fn faculty_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "affiliation": "Stanford University",
        "h_index": 35,
        "semantic_scholar_id": format!("{}", 5000 + id),
        "research_tags": ["causal inference", "statistics"]
    })
}

pub fn search_result_json(id: i64, name: &str, similarity: f64) -> Value {
    json!({
        "faculty": faculty_json(id, name),
        "similarity": similarity,
        "papers": [
            {"id": id * 10, "title": "Identifying causal effects", "year": 2022, "citation_count": 14}
        ]
    })
}

pub fn faculty(id: i64) -> Faculty {
    Faculty {
        id,
        name: format!("Faculty {}", id),
        affiliation: None,
        h_index: None,
        paper_count: None,
        semantic_scholar_id: None,
        research_tags: Vec::new(),
    }
}

pub fn search_result(id: i64) -> SearchResult {
    SearchResult {
        faculty: faculty(id),
        similarity: 0.5,
        papers: Vec::new(),
    }
}

/// Write a small file that sniffs as a PDF
pub fn write_pdf(dir: &std::path::Path, name: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"%PDF-1.5\n1 0 obj << >> endobj\n%%EOF\n")
        .expect("Failed to write test PDF");
    path
}
