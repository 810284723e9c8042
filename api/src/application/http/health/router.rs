use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_health::{__path_get_health, get_health},
    get_service_info::{__path_get_service_info, get_service_info},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_health))]
pub struct HealthApiDoc;

/// Routes served outside the API root path.
#[derive(OpenApi)]
#[openapi(paths(get_service_info))]
pub struct RootApiDoc;

pub fn health_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/health", state.args.server.root_path),
        get(get_health),
    )
}

pub fn root_routes() -> Router<AppState> {
    Router::new().route("/", get(get_service_info))
}
