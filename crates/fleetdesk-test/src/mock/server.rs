//! Stub server lifecycle and request handling.

use std::collections::HashMap;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, Uri};
use axum::response::{IntoResponse, Response};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::{RecordedRequest, StubResponse};
use crate::TRACING_TARGET_STUB;

type RouteKey = (String, String);

#[derive(Default)]
struct StubState {
    routes: RwLock<HashMap<RouteKey, StubResponse>>,
    requests: RwLock<Vec<RecordedRequest>>,
}

/// HTTP server on an ephemeral loopback port that replays canned responses.
///
/// Requests without a registered response get a 404 with a JSON `detail`.
/// The server task is aborted when the handle is dropped.
pub struct StubServer {
    addr: SocketAddr,
    state: Arc<StubState>,
    task: JoinHandle<()>,
}

impl StubServer {
    /// Binds `127.0.0.1:0` and starts serving in a background task.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be bound.
    pub async fn start() -> io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(StubState::default());

        let router = Router::new()
            .fallback(handle_request)
            .with_state(Arc::clone(&state));

        let task = tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, router).await {
                tracing::warn!(target: TRACING_TARGET_STUB, error = %err, "Stub server stopped");
            }
        });

        tracing::debug!(target: TRACING_TARGET_STUB, %addr, "Stub server listening");
        Ok(Self { addr, state, task })
    }

    /// Returns the base URL, e.g. `http://127.0.0.1:49152`.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Registers the reply for a method and exact path, replacing any earlier one.
    pub async fn respond(&self, method: &str, path: &str, response: StubResponse) {
        let key = (method.to_ascii_uppercase(), path.to_owned());
        self.state.routes.write().await.insert(key, response);
    }

    /// Returns every request received so far, oldest first.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.read().await.clone()
    }

    /// Returns the most recent request.
    pub async fn last_request(&self) -> Option<RecordedRequest> {
        self.state.requests.read().await.last().cloned()
    }
}

impl std::fmt::Debug for StubServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StubServer")
            .field("addr", &self.addr)
            .finish_non_exhaustive()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn handle_request(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let recorded = RecordedRequest::new(
        method.as_str(),
        uri.path(),
        uri.query(),
        &headers,
        body.to_vec(),
    );

    tracing::debug!(
        target: TRACING_TARGET_STUB,
        method = %recorded.method,
        path = %recorded.path,
        "Stub received request"
    );

    let key = (recorded.method.clone(), recorded.path.clone());
    let response = state.routes.read().await.get(&key).cloned();
    state.requests.write().await.push(recorded);

    response
        .unwrap_or_else(StubResponse::unmatched)
        .into_response()
}
