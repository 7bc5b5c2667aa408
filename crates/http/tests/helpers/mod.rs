//! Test harness for search client integration tests.
//!
//! Stands up a throwaway axum backend on an ephemeral port that answers every
//! request with a canned status and body and records the query pairs it saw.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use prodsearch_core::ClientConfig;
use prodsearch_http::SearchClient;
use std::sync::{Arc, Mutex};

pub type QueryPairs = Vec<(String, String)>;

struct Canned {
    status: StatusCode,
    body: String,
    seen: Mutex<Vec<QueryPairs>>,
}

pub struct StubBackend {
    canned: Arc<Canned>,
    pub base_url: String,
}

async fn answer(State(canned): State<Arc<Canned>>, Query(pairs): Query<QueryPairs>) -> impl IntoResponse {
    canned.seen.lock().unwrap().push(pairs);
    (
        canned.status,
        [("content-type", "application/json")],
        canned.body.clone(),
    )
}

impl StubBackend {
    /// Serve `body` with `status` on both the search and lists paths.
    pub async fn start(status: u16, body: impl Into<String>) -> Self {
        let canned = Arc::new(Canned {
            status: StatusCode::from_u16(status).expect("valid status"),
            body: body.into(),
            seen: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .route("/api/semantic-search", get(answer))
            .route("/api/lists", get(answer))
            .with_state(canned.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
        let addr = listener.local_addr().expect("stub addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server");
        });

        StubBackend {
            canned,
            base_url: format!("http://{addr}"),
        }
    }

    pub fn client(&self) -> SearchClient {
        SearchClient::new(&config_for(&self.base_url))
    }

    /// Query pairs of every request received so far.
    pub fn requests(&self) -> Vec<QueryPairs> {
        self.canned.seen.lock().unwrap().clone()
    }
}

pub fn config_for(base_url: &str) -> ClientConfig {
    ClientConfig {
        api_base: base_url.to_string(),
        ..ClientConfig::default()
    }
}

/// A base URL nothing listens on.
pub async fn dead_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{addr}")
}

pub fn product_json(name: &str, images: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "images": images,
        "sizes": ["S", "M"],
        "currency": "USD",
        "current_price": 25,
    })
}
