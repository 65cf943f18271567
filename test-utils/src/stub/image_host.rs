//! Stub image host server.
//!
//! Imitates the asset host's upload and destroy endpoints. Uploads return a
//! generated `public_id` and `secure_url`; destroy calls are recorded so
//! cascade tests can assert which assets were cleaned up.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex,
};

use axum::{extract::State, routing::post, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Default)]
struct HostState {
    counter: AtomicU64,
    uploaded: Mutex<Vec<String>>,
    deleted: Mutex<Vec<String>>,
}

/// Handle to a running stub image host.
///
/// The server task is aborted when the handle is dropped.
pub struct StubImageHost {
    /// Base URL to hand to `ImageStoreClient`.
    pub base_url: String,
    state: Arc<HostState>,
    handle: tokio::task::JoinHandle<()>,
}

impl StubImageHost {
    /// Asset ids of every upload the stub has accepted, in order.
    pub fn uploaded_assets(&self) -> Vec<String> {
        self.state.uploaded.lock().unwrap().clone()
    }

    /// Asset ids of every destroy call the stub has received, in order.
    pub fn deleted_assets(&self) -> Vec<String> {
        self.state.deleted.lock().unwrap().clone()
    }
}

impl Drop for StubImageHost {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn upload(State(state): State<Arc<HostState>>, Json(body): Json<Value>) -> Json<Value> {
    let folder = body
        .get("folder")
        .and_then(Value::as_str)
        .unwrap_or("uploads");
    let n = state.counter.fetch_add(1, Ordering::SeqCst);
    let public_id = format!("{}/stub_asset_{}", folder, n);

    state.uploaded.lock().unwrap().push(public_id.clone());

    Json(json!({
        "public_id": public_id,
        "secure_url": format!("https://images.example.test/{}.jpg", public_id),
    }))
}

async fn destroy(State(state): State<Arc<HostState>>, Json(body): Json<Value>) -> Json<Value> {
    if let Some(public_id) = body.get("public_id").and_then(Value::as_str) {
        state.deleted.lock().unwrap().push(public_id.to_string());
    }

    Json(json!({ "result": "ok" }))
}

/// Spawns a stub image host accepting uploads and destroy calls.
///
/// # Returns
/// - `StubImageHost` - Handle carrying the server's base URL and call records
pub async fn spawn() -> StubImageHost {
    let state = Arc::new(HostState::default());

    let app = Router::new()
        .route("/upload", post(upload))
        .route("/destroy", post(destroy))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind stub image host");
    let addr = listener.local_addr().expect("stub image host has no address");
    let handle = tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    StubImageHost {
        base_url: format!("http://{}", addr),
        state,
        handle,
    }
}
