// HTTP test fixtures: full router over an in-memory store

use crate::{build_router, AppState, SessionSettings};
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use tally_core::port::time_provider::FixedTimeProvider;
use tally_infra_sqlite::{create_pool, run_migrations, SqliteStore};
use tally_infra_system::{Argon2PasswordHasher, RandomTokenProvider};
use tower::ServiceExt;

/// 2025-03-15 00:00:00 UTC
pub(crate) const NOW: i64 = 1_741_996_800_000;
pub(crate) const PASSWORD: &str = "counter-secret";

pub(crate) struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub clock: Arc<FixedTimeProvider>,
}

pub(crate) async fn test_app() -> TestApp {
    test_app_with(SessionSettings::default()).await
}

pub(crate) async fn test_app_with(settings: SessionSettings) -> TestApp {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();

    let clock = Arc::new(FixedTimeProvider::new(NOW));
    let state = AppState::from_store(
        Arc::new(SqliteStore::new(pool)),
        Arc::new(Argon2PasswordHasher::new()),
        Arc::new(RandomTokenProvider::new()),
        clock.clone(),
        &settings,
    );

    TestApp {
        router: build_router(state.clone()),
        state,
        clock,
    }
}

impl TestApp {
    pub async fn provision(&self, handle: &str) {
        self.state
            .auth
            .provision_user(&format!("{}@shop.rs", handle), handle, handle, PASSWORD)
            .await
            .unwrap();
    }

    /// Provision a user and return a bearer token for it
    pub async fn login_as(&self, handle: &str) -> String {
        self.provision(handle).await;
        let (status, body) = self
            .send(
                "POST",
                "/api/auth/login",
                None,
                Some(serde_json::json!({
                    "email": format!("{}@shop.rs", handle),
                    "password": PASSWORD,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }

    pub async fn raw(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.raw(request).await;
        let status = response.status();
        (status, read_json(response).await)
    }
}

pub(crate) async fn read_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    }
}
