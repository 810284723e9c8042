use axum::extract::{Multipart, State};
use nutrilens_core::domain::classification::{
    entities::ClassifiedImage, ports::ClassificationService, value_objects::ClassifyImageInput,
};

use crate::application::http::{
    classification::validators::{ClassifyImageForm, MAX_UPLOAD_SIZE},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/classify",
    tag = "classification",
    summary = "Classify a food photo",
    description = "Predicts the food shown in the uploaded image and attaches its nutrition facts per 100 g. Nutrition comes from USDA FoodData Central when available and from local data otherwise.",
    request_body(content = ClassifyImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = ClassifiedImage),
        (status = 400, description = "Not an image, missing file field or undecodable image", body = ApiErrorResponse),
        (status = 500, description = "Inference failed", body = ApiErrorResponse)
    )
)]
pub async fn classify_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<ClassifiedImage>, ApiError> {
    let mut upload: Option<ClassifyImageInput> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {e}")))?;

        if data.len() > MAX_UPLOAD_SIZE {
            return Err(ApiError::BadRequest(format!(
                "File too large. Max size is {MAX_UPLOAD_SIZE} bytes"
            )));
        }

        upload = Some(ClassifyImageInput {
            filename,
            content_type,
            image_data: data.to_vec(),
        });
    }

    let input = upload.ok_or_else(|| ApiError::BadRequest("Missing file field".to_string()))?;

    let result = state
        .service
        .classify_image(input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
