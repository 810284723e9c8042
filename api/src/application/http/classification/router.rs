use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

use super::{
    handlers::classify_image::{__path_classify_image, classify_image},
    validators::MAX_UPLOAD_SIZE,
};
use crate::application::http::server::app_state::AppState;

/// Room for the multipart framing around the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(classify_image))]
pub struct ClassificationApiDoc;

pub fn classification_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/classify", state.args.server.root_path),
        post(classify_image).layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE + MULTIPART_OVERHEAD)),
    )
}
