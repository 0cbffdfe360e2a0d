//! HTTP entry point that triggers an update run.

use axum::{
    Router,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::any,
};
use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::constants::UPDATE_ROUTE;
use crate::data_fetcher::update_league_data;
use crate::error::AppError;

/// Shared handler state
#[derive(Clone)]
pub struct ServerState {
    client: Client,
    config: Arc<Config>,
}

impl ServerState {
    pub fn new(client: Client, config: Config) -> Self {
        Self {
            client,
            config: Arc::new(config),
        }
    }
}

#[derive(Debug, Serialize)]
struct UpdateResponse {
    status: &'static str,
    #[serde(rename = "gamesCount")]
    games_count: usize,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
}

/// Builds the router. Every method reaches the handler, which runs the
/// update for GET and answers 405 to any other method, HEAD included.
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .route(UPDATE_ROUTE, any(update))
        .with_state(state)
}

/// Serves the router on an already bound listener until the process stops.
pub async fn serve(listener: TcpListener, state: ServerState) -> Result<(), AppError> {
    if let Ok(addr) = listener.local_addr() {
        info!("Listening for update requests on http://{addr}{UPDATE_ROUTE}");
    }
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

async fn update(method: Method, State(state): State<ServerState>) -> Response {
    if method != Method::GET {
        return method_not_allowed();
    }

    match update_league_data(&state.client, &state.config, None).await {
        Ok(summary) => {
            info!("Update finished: {} games for {}", summary.games_count, summary.date);
            (
                StatusCode::OK,
                Json(UpdateResponse {
                    status: "ok",
                    games_count: summary.games_count,
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!("Update failed ({}): {e}", e.origin());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update data",
                }),
            )
                .into_response()
        }
    }
}

fn method_not_allowed() -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    async fn spawn_server(config: Config) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let state = ServerState::new(create_test_http_client(), config);
        tokio::spawn(async move {
            serve(listener, state).await.unwrap();
        });
        format!("http://{addr}{UPDATE_ROUTE}")
    }

    fn config_for(upstream: &MockServer, output: &std::path::Path) -> Config {
        Config {
            schedule_csv_url: format!("{}/schedule.csv", upstream.uri()),
            roster_csv_url: format!("{}/roster.csv", upstream.uri()),
            proxy_url: format!("{}/get", upstream.uri()),
            output_path: output.to_string_lossy().to_string(),
            player_delay_ms: 0,
            game_delay_ms: 0,
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_get_runs_update() {
        let upstream = MockServer::start().await;
        // A schedule with no rows scores zero games whatever today is.
        Mock::given(method("GET"))
            .and(path("/schedule.csv"))
            .respond_with(ResponseTemplate::new(200).set_body_string("Date,Team 1,Team 2\n"))
            .mount(&upstream)
            .await;
        Mock::given(method("GET"))
            .and(path("/roster.csv"))
            .respond_with(ResponseTemplate::new(200).set_body_string("Team,playing?\n"))
            .mount(&upstream)
            .await;

        let temp_dir = tempfile::tempdir().unwrap();
        let output = temp_dir.path().join("data.json");
        let url = spawn_server(config_for(&upstream, &output)).await;

        let response = reqwest::get(&url).await.unwrap();
        assert_eq!(response.status(), 200);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, serde_json::json!({ "status": "ok", "gamesCount": 0 }));
        assert!(output.exists());
    }

    #[tokio::test]
    async fn test_upstream_failure_returns_500() {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&upstream)
            .await;

        let temp_dir = tempfile::tempdir().unwrap();
        let output = temp_dir.path().join("data.json");
        let url = spawn_server(config_for(&upstream, &output)).await;

        let response = reqwest::get(&url).await.unwrap();
        assert_eq!(response.status(), 500);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Failed to update data" }));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_other_methods_are_rejected() {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&upstream)
            .await;

        let temp_dir = tempfile::tempdir().unwrap();
        let url = spawn_server(config_for(&upstream, &temp_dir.path().join("data.json"))).await;
        let client = create_test_http_client();

        for request in [client.post(&url), client.put(&url), client.delete(&url)] {
            let response = request.send().await.unwrap();
            assert_eq!(response.status(), 405);
            assert_eq!(response.text().await.unwrap(), "Method Not Allowed");
        }
    }

    #[tokio::test]
    async fn test_head_is_rejected_without_running_update() {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("Date,Team 1,Team 2\n"))
            .expect(0)
            .mount(&upstream)
            .await;

        let temp_dir = tempfile::tempdir().unwrap();
        let output = temp_dir.path().join("data.json");
        let url = spawn_server(config_for(&upstream, &output)).await;

        let response = create_test_http_client().head(&url).send().await.unwrap();
        assert_eq!(response.status(), 405);
        assert!(!output.exists());
    }
}
