//! In-process mock of the course API.
//!
//! Routes answer with canned `(status, body)` pairs; anything else is a 404
//! with an empty body. Every request, including the warm-up, is recorded.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, Method, StatusCode, Uri},
    Router,
};
use course_quiz::{ApiClient, Config};
use tokio::net::TcpListener;
use url::Url;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: String,
}

impl Recorded {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

#[derive(Default)]
struct MockState {
    routes: HashMap<(Method, String), (u16, String)>,
    requests: Mutex<Vec<Recorded>>,
}

#[derive(Default)]
pub struct MockApi {
    routes: HashMap<(Method, String), (u16, String)>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default().route(Method::GET, "/health", 200, "ok")
    }

    pub fn route(mut self, method: Method, path: &str, status: u16, body: impl Into<String>) -> Self {
        self.routes
            .insert((method, path.to_string()), (status, body.into()));
        self
    }

    pub fn get(self, path: &str, body: serde_json::Value) -> Self {
        self.route(Method::GET, path, 200, body.to_string())
    }

    pub fn post(self, path: &str, body: serde_json::Value) -> Self {
        self.route(Method::POST, path, 200, body.to_string())
    }

    pub async fn spawn(self) -> MockServer {
        let state = Arc::new(MockState {
            routes: self.routes,
            requests: Mutex::new(Vec::new()),
        });
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        MockServer {
            base_url: Url::parse(&format!("http://{addr}")).unwrap(),
            state,
        }
    }
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    state.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });

    match state.routes.get(&(method, uri.path().to_string())) {
        Some((status, body)) => (
            StatusCode::from_u16(*status).unwrap(),
            body.clone(),
        ),
        None => (StatusCode::NOT_FOUND, String::new()),
    }
}

pub struct MockServer {
    pub base_url: Url,
    state: Arc<MockState>,
}

impl MockServer {
    /// Client that skips the warm-up, so recorded requests are only the
    /// ones under test.
    pub fn client(&self) -> ApiClient {
        let config = Config {
            base_url: self.base_url.clone(),
            warm_up: false,
            ..Config::default()
        };
        ApiClient::from_config(&config)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }
}
