use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    search_foods::{__path_search_foods, search_foods},
    search_nutrition::{__path_search_nutrition, search_nutrition},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(search_nutrition, search_foods))]
pub struct NutritionApiDoc;

pub fn nutrition_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/search-nutrition/{{food_name}}",
                state.args.server.root_path
            ),
            get(search_nutrition),
        )
        .route(
            &format!("{}/search-foods", state.args.server.root_path),
            get(search_foods),
        )
}
