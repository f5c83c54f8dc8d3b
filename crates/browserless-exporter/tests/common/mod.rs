//! Test support: a fake browserless upstream served by axum on 127.0.0.1:0.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{extract::State, http::StatusCode, routing::get, Router};
use tokio::net::TcpListener;

pub const FULL: &str = r#"{"successful":10,"error":1,"queued":2,"rejected":0,"unhealthy":0,"timedout":1,"totalTime":523.4,"meanTime":52.3,"maxTime":100.1,"minTime":10.0,"maxConcurrent":5}"#;

/// Canned response: status, body, artificial delay.
#[derive(Clone)]
pub struct Canned {
    pub status: StatusCode,
    pub body: String,
    pub delay: Duration,
}

impl Canned {
    pub fn ok(body: &str) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }
}

#[derive(Clone)]
pub struct FakeUpstream {
    pub addr: SocketAddr,
    next: Arc<Mutex<Canned>>,
    hits: Arc<Mutex<u32>>,
}

impl FakeUpstream {
    pub async fn start(first: Canned) -> Self {
        let next = Arc::new(Mutex::new(first));
        let hits = Arc::new(Mutex::new(0));
        let app = Router::new()
            .route("/metrics/total", get(serve))
            .with_state((Arc::clone(&next), Arc::clone(&hits)));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self { addr, next, hits }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/metrics/total", self.addr)
    }

    pub fn set(&self, canned: Canned) {
        *self.next.lock().unwrap() = canned;
    }

    pub fn hits(&self) -> u32 {
        *self.hits.lock().unwrap()
    }
}

type Shared = (Arc<Mutex<Canned>>, Arc<Mutex<u32>>);

async fn serve(State((next, hits)): State<Shared>) -> (StatusCode, String) {
    *hits.lock().unwrap() += 1;
    let canned = next.lock().unwrap().clone();
    if !canned.delay.is_zero() {
        tokio::time::sleep(canned.delay).await;
    }
    (canned.status, canned.body)
}

/// An endpoint on a port nobody listens on.
pub async fn refused_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/metrics/total")
}
