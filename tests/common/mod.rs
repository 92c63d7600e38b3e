//! A stub of the Rancher API for the integration tests.
//!
//! An axum router on its own tokio runtime answers every request with a canned response,
//! chosen by method and request target (path and query), and records the requests it received.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use tokio::runtime::Runtime;

#[derive(Debug, Clone)]
pub struct Route {
    pub method: &'static str,
    pub target: String,
    pub status: u16,
    pub body: Vec<u8>,
}

impl Route {
    pub fn new(method: &'static str, target: &str, status: u16, body: impl Into<Vec<u8>>) -> Self {
        Route { method, target: target.to_string(), status, body: body.into() }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub target: String,
    pub authorization: Option<String>,
}

struct StubState {
    routes: Vec<Route>,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct StubServer {
    base_url: String,
    state: Arc<StubState>,
    // serves the router for as long as the server is alive.
    _runtime: Runtime,
}

impl StubServer {
    /// Start the server; `routes` gets the base url of the server, so responses can contain urls pointing back to it.
    pub fn start<F>(routes: F) -> StubServer
    where
        F: FnOnce(&str) -> Vec<Route>,
    {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .expect("build stub server runtime");
        let listener = runtime
            .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
            .expect("bind stub server");
        let base_url = format!("http://{}", listener.local_addr().expect("local address"));

        let state = Arc::new(StubState {
            routes: routes(&base_url),
            requests: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .fallback(respond)
            .with_state(state.clone());
        runtime.spawn(async move {
            axum::serve(listener, app).await.expect("stub server");
        });

        StubServer { base_url, state, _runtime: runtime }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, target: &str) -> String {
        format!("{}{}", self.base_url, target)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn respond(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let target = uri
        .path_and_query()
        .map(|path_and_query| path_and_query.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        target: target.clone(),
        authorization,
    });

    match state.routes.iter().find(|route| route.method == method.as_str() && route.target == target) {
        Some(route) => (
            StatusCode::from_u16(route.status).expect("valid status code"),
            [(header::CONTENT_TYPE, "application/json")],
            route.body.clone(),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            br#"{"type":"error","status":"404","code":"NotFound"}"#.to_vec(),
        )
            .into_response(),
    }
}
