//! HTTP adapter: `GET /solve?scramble=<tokens>`.
//!
//! Each request runs its own `ScrambleSession`; nothing is shared between
//! requests except the immutable `SessionCfg`. A repeated `scramble` key keeps
//! its last value. Any failure (query decoding, session limits) becomes a 500
//! with `{"error": ...}`.

use anyhow::Context;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use rubik::api::SessionCfg;
use tower_http::trace::TraceLayer;

use crate::response::{error_json, solve_scramble};

const JSON_UTF8: &str = "application/json; charset=utf-8";

pub fn router(cfg: SessionCfg) -> Router {
    Router::new()
        .route("/solve", get(solve))
        .layer(TraceLayer::new_for_http())
        .with_state(cfg)
}

pub async fn serve(bind: &str, cfg: SessionCfg) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("binding {bind}"))?;
    tracing::info!(bind, example = "/solve?scramble=U%20R%20U'", "listening");
    axum::serve(listener, router(cfg)).await?;
    Ok(())
}

/// Last `scramble` value in the query, empty when absent.
fn last_scramble(pairs: Vec<(String, String)>) -> String {
    pairs
        .into_iter()
        .rev()
        .find(|(key, _)| key == "scramble")
        .map(|(_, value)| value)
        .unwrap_or_default()
}

async fn solve(
    State(cfg): State<SessionCfg>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(pairs) = params?;
    let scramble = last_scramble(pairs);
    let body = serde_json::to_string(&solve_scramble(&scramble, cfg)?)?;
    Ok(json_response(StatusCode::OK, body))
}

fn json_response(status: StatusCode, body: String) -> Response {
    (
        status,
        [
            (header::CONTENT_TYPE, JSON_UTF8),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        body,
    )
        .into_response()
}

/// Any handler error, rendered as a 500 JSON body.
pub struct ApiError(anyhow::Error);

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.0.to_string();
        tracing::warn!(error = %message, "solve failed");
        json_response(StatusCode::INTERNAL_SERVER_ERROR, error_json(&message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{HeaderMap, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn get_json(app: Router, uri: &str) -> (StatusCode, HeaderMap, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let headers = resp.headers().clone();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, headers, serde_json::from_slice(&bytes).unwrap())
    }

    fn assert_headers(headers: &HeaderMap) {
        assert_eq!(headers[header::CONTENT_TYPE], JSON_UTF8);
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn solve_returns_history() {
        let (status, headers, v) =
            get_json(router(SessionCfg::default()), "/solve?scramble=U%20R%20U'").await;
        assert_eq!(status, StatusCode::OK);
        assert_headers(&headers);
        assert_eq!(v["states"].as_array().unwrap().len(), 7);
        assert_eq!(v["moves"], json!(["U", "R'", "U'"]));
        assert_eq!(v["scrambleLength"], 3);
        assert_eq!(v["finalSolved"], true);
        assert_eq!(v["mismatches"], json!([]));
        assert_eq!(v["states"][6], v["states"][0]);
    }

    #[tokio::test]
    async fn missing_or_empty_scramble_is_solved() {
        for uri in ["/solve", "/solve?scramble=", "/solve?other=1"] {
            let (status, _, v) = get_json(router(SessionCfg::default()), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(v["states"].as_array().unwrap().len(), 1);
            assert_eq!(v["moves"], json!([]));
            assert_eq!(v["scrambleLength"], 0);
            assert_eq!(v["finalSolved"], true);
        }
    }

    #[tokio::test]
    async fn whitespace_collapses_and_unknown_tokens_count() {
        let (status, _, v) = get_json(
            router(SessionCfg::default()),
            "/solve?scramble=%20%20U+++Q%09R%20",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v["scrambleLength"], 3);
        assert_eq!(v["states"].as_array().unwrap().len(), 7);
        assert_eq!(v["moves"], json!(["R'", "U'"]));
        assert_eq!(v["finalSolved"], true);
    }

    #[tokio::test]
    async fn failures_are_500_with_error_body() {
        let cfg = SessionCfg {
            max_scramble_len: 2,
        };
        let (status, headers, v) = get_json(router(cfg), "/solve?scramble=U%20R%20F").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_headers(&headers);
        assert_eq!(v["error"], "scramble has 3 tokens, limit is 2");
    }

    #[tokio::test]
    async fn repeated_scramble_key_keeps_last_value() {
        let (status, headers, v) = get_json(
            router(SessionCfg::default()),
            "/solve?scramble=U&other=x&scramble=R%20F",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_headers(&headers);
        assert_eq!(v["scrambleLength"], 2);
        assert_eq!(v["moves"], json!(["F'", "R'"]));
        assert_eq!(v["finalSolved"], true);
    }
}
