use axum::extract::State;
use nutrilens_core::domain::nutrition::{
    entities::FoodSearchOutcome, ports::NutritionService, value_objects::SearchFoodsInput,
};

use crate::application::http::{
    nutrition::validators::SearchFoodsQuery,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateQuery},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/search-foods",
    tag = "nutrition",
    summary = "Search foods",
    description = "Free-text search in USDA FoodData Central. Each hit carries its nutrients per 100 g; hits whose details could not be fetched are returned with zero amounts and `nutrients_available` set to false.",
    params(SearchFoodsQuery),
    responses(
        (status = 200, body = FoodSearchOutcome),
        (status = 422, description = "Empty query or limit out of range", body = ApiErrorResponse)
    )
)]
pub async fn search_foods(
    State(state): State<AppState>,
    ValidateQuery(params): ValidateQuery<SearchFoodsQuery>,
) -> Result<Response<FoodSearchOutcome>, ApiError> {
    let limit = u32::try_from(params.limit)
        .map_err(|_| ApiError::UnProcessableEntity("limit must be between 1 and 50".to_string()))?;

    let outcome = state
        .service
        .search_foods(SearchFoodsInput::new(params.query, limit))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(outcome))
}
