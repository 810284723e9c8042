use utoipa::ToSchema;

/// Largest accepted upload.
pub const MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

/// Multipart form of `POST /classify`. Only used for the OpenAPI document.
#[derive(Debug, ToSchema)]
pub struct ClassifyImageForm {
    /// Food photo, any common image format.
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
