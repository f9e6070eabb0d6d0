#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response},
};
use fxconvert_conversion::{
    ConversionError, ConversionPayload, ConversionProvider, ConversionRequest,
};
use fxconvert_core::amount::ParseMode;
use fxconvert_server::{api::app_router, build_state_with_provider, config::Config};

/// Answers `"<amount> <from> = converted <to>"` and fails for listed targets.
pub struct FakeProvider {
    failing: HashSet<String>,
}

impl FakeProvider {
    pub fn new(failing: &[&str]) -> Self {
        Self {
            failing: failing.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[async_trait]
impl ConversionProvider for FakeProvider {
    fn id(&self) -> &'static str {
        "FAKE"
    }

    async fn convert(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionPayload, ConversionError> {
        if self.failing.contains(request.target.code()) {
            return Err(ConversionError::status(503, "upstream down"));
        }
        Ok(ConversionPayload::from(
            format!(
                "{} {} = converted {}",
                request.amount, request.source, request.target
            )
            .as_str(),
        ))
    }
}

pub fn build_test_router(failing: &[&str]) -> axum::Router {
    build_test_router_with_mode(failing, ParseMode::Strict)
}

pub fn build_test_router_with_mode(failing: &[&str], mode: ParseMode) -> axum::Router {
    let config = Config {
        amount_mode: mode,
        ..Config::default()
    };
    let state = build_state_with_provider(&config, Arc::new(FakeProvider::new(failing))).unwrap();
    app_router(state, &config)
}

pub fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
