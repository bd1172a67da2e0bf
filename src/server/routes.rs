//! HTTP routes and the access-guard middleware
//!
//! Every route sits behind [`require_allowed_ip`]: the caller's source IP is
//! checked against the allow-list before any handler runs, and a denied
//! caller gets a 403 with the canonical message and nothing else.

use crate::access::AccessGuard;
use crate::config::AppConfig;
use crate::generators::GeneratorRegistry;
use axum::{
    Json, Router,
    extract::{ConnectInfo, Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Shared state for request handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<GeneratorRegistry>,
    pub guard: Arc<AccessGuard>,
    pub config: Arc<AppConfig>,
}

/// Error body returned for 403 and 404 responses
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Service info returned by the index endpoint
#[derive(Serialize)]
struct ModuleInfo {
    name: String,
    version: String,
    generator_count: usize,
}

/// One entry in the generator listing
#[derive(Serialize)]
struct GeneratorSummary {
    id: String,
    title: String,
    description: String,
}

/// Full generator detail including options and their schema
#[derive(Serialize)]
struct GeneratorDetail {
    id: String,
    title: String,
    description: String,
    options: serde_json::Value,
    options_schema: schemars::Schema,
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(module_info))
        .route("/generators", get(list_generators))
        .route("/generators/{id}", get(generator_detail))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_allowed_ip,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Guard middleware: refuse callers whose IP matches no allow-list entry.
async fn require_allowed_ip(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    let ip = addr.ip().to_string();
    match state.guard.require(&ip) {
        Ok(()) => next.run(request).await,
        Err(denied) => {
            warn!(
                ip = %denied.ip,
                path = %request.uri().path(),
                "Denied request from unlisted IP"
            );
            (
                StatusCode::FORBIDDEN,
                Json(ErrorBody {
                    error: denied.to_string(),
                }),
            )
                .into_response()
        }
    }
}

async fn not_found(uri: axum::http::Uri) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: format!("No such route: {}", uri.path()),
        }),
    )
}

async fn module_info(State(state): State<AppState>) -> Json<ModuleInfo> {
    Json(ModuleInfo {
        name: state.config.server.name.clone(),
        version: state.config.server.version.clone(),
        generator_count: state.registry.len(),
    })
}

async fn list_generators(State(state): State<AppState>) -> Json<Vec<GeneratorSummary>> {
    let mut generators: Vec<GeneratorSummary> = state
        .registry
        .iter()
        .map(|(id, generator)| GeneratorSummary {
            id: id.to_string(),
            title: generator.title().to_string(),
            description: generator.description().to_string(),
        })
        .collect();
    generators.sort_by(|a, b| a.id.cmp(&b.id));
    Json(generators)
}

async fn generator_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GeneratorDetail>, (StatusCode, Json<ErrorBody>)> {
    let generator = state.registry.get(&id).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorBody {
                error: format!("Unknown generator: {}", id),
            }),
        )
    })?;

    Ok(Json(GeneratorDetail {
        id,
        title: generator.title().to_string(),
        description: generator.description().to_string(),
        options: generator.options(),
        options_schema: generator.options_schema(),
    }))
}
