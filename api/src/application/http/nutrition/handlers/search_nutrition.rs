use axum::extract::{Path, State};
use nutrilens_core::domain::{
    common::entities::app_errors::CoreError,
    nutrition::{entities::NutritionRecord, ports::NutritionService},
};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/search-nutrition/{food_name}",
    tag = "nutrition",
    summary = "Nutrition facts for a food",
    description = "Looks the food up in USDA FoodData Central and returns its nutrients per 100 g.",
    params(
        ("food_name" = String, Path, description = "Food name or classifier label"),
    ),
    responses(
        (status = 200, body = NutritionRecord),
        (status = 404, description = "No nutrition data found", body = ApiErrorResponse)
    )
)]
pub async fn search_nutrition(
    Path(food_name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<NutritionRecord>, ApiError> {
    let record = state
        .service
        .search_nutrition(food_name.clone())
        .await
        .map_err(|e| match e {
            CoreError::NotFound => {
                ApiError::NotFound(format!("Nutrition information not found for '{food_name}'"))
            }
            other => ApiError::from(other),
        })?;

    Ok(Response::OK(record))
}
