//! Mock catalog and exchange-rate API for store tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use vitrina::ApiConfig;

/// A canned response for one path.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: format!(r#"{{"error": {status}}}"#),
        }
    }

    /// A 200 response whose body is not valid JSON.
    pub fn garbage() -> Self {
        Self {
            status: 200,
            body: "<html>definitely not json</html>".to_string(),
        }
    }
}

#[derive(Clone)]
struct MockState {
    routes: Arc<Mutex<HashMap<String, MockResponse>>>,
}

/// Mock server answering the three catalog endpoints by path.
pub struct MockApi {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockApi {
    /// Start the server on an ephemeral port.
    pub async fn start() -> Self {
        let state = MockState {
            routes: Arc::new(Mutex::new(HashMap::new())),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(handle_request))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Set the response returned for `path`.
    pub async fn set(&self, path: &str, resp: MockResponse) {
        self.state
            .routes
            .lock()
            .await
            .insert(path.to_string(), resp);
    }

    /// An [`ApiConfig`] pointing all three endpoints at this server.
    pub fn api_config(&self) -> ApiConfig {
        let base = format!("http://{}", self.addr);
        ApiConfig {
            products_url: format!("{base}/products"),
            categories_url: format!("{base}/products/categories"),
            exchange_url: format!("{base}/dollar"),
        }
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_request(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    let path = req.uri().path().to_string();
    let resp = state.routes.lock().await.get(&path).cloned();

    match resp {
        Some(resp) => Response::builder()
            .status(StatusCode::from_u16(resp.status).unwrap())
            .header("content-type", "application/json")
            .body(Body::from(resp.body))
            .unwrap(),
        None => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::empty())
            .unwrap(),
    }
}
