//! Shared helpers for HTTP integration tests.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`, so no
//! socket is bound.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tower::ServiceExt;

use brainstorm::adapters::http::{app_router, with_middleware};
use brainstorm::adapters::InMemorySessionRepository;
use brainstorm::config::{FeatureFlags, ServerConfig};
use brainstorm::domain::foundation::{SessionId, Timestamp};
use brainstorm::domain::session::{BrainstormSession, Idea};
use brainstorm::ports::SessionRepository;

/// Test application over a shared in-memory store.
pub struct TestApp {
    pub repository: Arc<InMemorySessionRepository>,
    router: Router,
}

impl TestApp {
    /// Empty store, full middleware stack.
    pub fn new() -> Self {
        Self::with_config(&ServerConfig::default(), &FeatureFlags::default())
    }

    /// Empty store under the given server settings and feature flags.
    pub fn with_config(server: &ServerConfig, features: &FeatureFlags) -> Self {
        let repository = Arc::new(InMemorySessionRepository::new());
        let router = with_middleware(app_router(repository.clone(), features), server);
        Self { repository, router }
    }

    /// Store pre-filled with `count` sessions, session `n` holding `n` ideas.
    pub async fn with_sessions(count: i32) -> Self {
        let app = Self::new();
        for n in 1..=count {
            app.repository
                .add(&session_with_ideas(n, n as usize))
                .await
                .unwrap();
        }
        app
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> Response {
        self.send(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn post_raw(&self, uri: &str, content_type: &str, body: &str) -> Response {
        self.send(
            Request::post(uri)
                .header(header::CONTENT_TYPE, content_type)
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn post_form(&self, uri: &str, body: &str) -> Response {
        self.post_raw(uri, "application/x-www-form-urlencoded", body)
            .await
    }

    pub async fn stored(&self, id: i32) -> Option<BrainstormSession> {
        self.repository
            .find_by_id(SessionId::new(id))
            .await
            .unwrap()
    }
}

pub fn session_with_ideas(id: i32, idea_count: usize) -> BrainstormSession {
    let created = Timestamp::from_ymd(2016, 7, 2).unwrap();
    let ideas = (1..=idea_count)
        .map(|n| {
            Idea::reconstitute(
                format!("Idea {}", n),
                format!("Idea {} description", n),
                created,
            )
        })
        .collect();
    BrainstormSession::reconstitute(
        SessionId::new(id),
        format!("Test Session {}", id),
        created,
        ideas,
    )
}

pub async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response) -> Option<String> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

pub fn assert_status(response: &Response, expected: StatusCode) {
    assert_eq!(
        response.status(),
        expected,
        "unexpected status with headers {:?}",
        response.headers()
    );
}
