use axum::extract::State;
use nutrilens_core::domain::health::{entities::HealthReport, ports::HealthCheckService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Service health",
    description = "Reports whether the classifier model is loaded and which external sources are configured.",
    responses(
        (status = 200, body = HealthReport)
    )
)]
pub async fn get_health(State(state): State<AppState>) -> Result<Response<HealthReport>, ApiError> {
    let report = state.service.health().await.map_err(ApiError::from)?;
    Ok(Response::OK(report))
}
