//! In-process mock of the advisor discovery backend
//!
//! Binds an axum router on 127.0.0.1:0, answers each route with a scripted
//! status and JSON body, and records every request it sees.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Multipart, OriginalUri, RawQuery, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

/// One multipart field received on the upload route
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub field_name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub len: usize,
}

#[derive(Default)]
struct Recorded {
    hits: Vec<String>,
    bodies: Vec<(String, Value)>,
    upload_query: Option<String>,
    uploads: Vec<UploadedFile>,
    responses: HashMap<String, (StatusCode, Value)>,
}

#[derive(Clone, Default)]
struct MockState {
    inner: Arc<Mutex<Recorded>>,
}

impl MockState {
    fn scripted(&self, path: &str) -> (StatusCode, Json<Value>) {
        let inner = self.inner.lock().unwrap();
        match inner.responses.get(path) {
            Some((status, body)) => (*status, Json(body.clone())),
            None => (
                StatusCode::NOT_FOUND,
                Json(json!({"detail": format!("unscripted route {}", path)})),
            ),
        }
    }
}

pub struct MockBackend {
    pub base_url: String,
    state: MockState,
}

impl MockBackend {
    /// Start the mock server on an ephemeral port
    pub async fn start() -> Self {
        let state = MockState::default();

        let app = Router::new()
            .route("/api/search/", post(json_endpoint))
            .route("/api/search/explain", post(json_endpoint))
            .route("/api/upload/cv", post(upload_endpoint))
            .route("/api/explore/start", post(json_endpoint))
            .route("/api/explore/respond", post(json_endpoint))
            .route("/api/explore/finish", post(json_endpoint))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Mock backend has no address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock backend failed");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// Answer `path` with `status` and `body` from now on
    pub fn respond(&self, path: &str, status: u16, body: Value) -> &Self {
        let status = StatusCode::from_u16(status).expect("Invalid status code");
        self.state
            .inner
            .lock()
            .unwrap()
            .responses
            .insert(path.to_string(), (status, body));
        self
    }

    /// Paths hit so far, in order
    pub fn hits(&self) -> Vec<String> {
        self.state.inner.lock().unwrap().hits.clone()
    }

    /// JSON bodies received on `path`, in order
    pub fn bodies(&self, path: &str) -> Vec<Value> {
        self.state
            .inner
            .lock()
            .unwrap()
            .bodies
            .iter()
            .filter(|(p, _)| p == path)
            .map(|(_, b)| b.clone())
            .collect()
    }

    pub fn upload_query(&self) -> Option<String> {
        self.state.inner.lock().unwrap().upload_query.clone()
    }

    pub fn uploads(&self) -> Vec<UploadedFile> {
        self.state.inner.lock().unwrap().uploads.clone()
    }
}

async fn json_endpoint(
    State(state): State<MockState>,
    OriginalUri(uri): OriginalUri,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let path = uri.path().to_string();
    {
        let mut inner = state.inner.lock().unwrap();
        inner.hits.push(path.clone());
        inner.bodies.push((path.clone(), body));
    }
    state.scripted(&path)
}

async fn upload_endpoint(
    State(state): State<MockState>,
    RawQuery(query): RawQuery,
    mut multipart: Multipart,
) -> (StatusCode, Json<Value>) {
    let mut uploads = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let field_name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let len = field.bytes().await.map(|b| b.len()).unwrap_or(0);
        uploads.push(UploadedFile {
            field_name,
            file_name,
            content_type,
            len,
        });
    }

    {
        let mut inner = state.inner.lock().unwrap();
        inner.hits.push("/api/upload/cv".to_string());
        inner.upload_query = query;
        inner.uploads.extend(uploads);
    }
    state.scripted("/api/upload/cv")
}
