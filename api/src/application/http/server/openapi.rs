use utoipa::OpenApi;

use crate::application::http::{
    assistant::router::AssistantApiDoc,
    classification::router::ClassificationApiDoc,
    health::router::{HealthApiDoc, RootApiDoc},
    nutrition::router::NutritionApiDoc,
    server::api_entities::api_error::ApiErrorResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriLens API",
        description = "Classifies food photos and looks up their nutrition facts."
    ),
    components(schemas(ApiErrorResponse))
)]
pub struct ApiDoc;

/// OpenAPI document with every feature route prefixed by `root_path`.
pub fn api_doc(root_path: &str) -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(ClassificationApiDoc::openapi());
    openapi.merge(NutritionApiDoc::openapi());
    openapi.merge(AssistantApiDoc::openapi());
    openapi.merge(HealthApiDoc::openapi());

    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();
    openapi.paths = paths;

    openapi.merge(RootApiDoc::openapi());
    openapi
}
