use image::{DynamicImage, RgbImage, imageops::FilterType};
use tokio::task;
use tracing::error;

use crate::domain::{
    classification::value_objects::ImageDimensions, common::entities::app_errors::CoreError,
};

pub fn ensure_image_content_type(content_type: Option<&str>) -> Result<(), CoreError> {
    match content_type {
        Some(content_type) if content_type.trim().to_ascii_lowercase().starts_with("image/") => {
            Ok(())
        }
        _ => Err(CoreError::InvalidInput(
            "Invalid file type. Please upload an image.".to_string(),
        )),
    }
}

pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, CoreError> {
    if bytes.is_empty() {
        return Err(CoreError::InvalidInput("Empty file uploaded".to_string()));
    }

    image::load_from_memory(bytes)
        .map_err(|e| CoreError::InvalidInput(format!("Failed to process image: {e}")))
}

/// Resizes to the model grid and drops any alpha or palette information.
pub fn prepare_input(image: &DynamicImage, dimensions: ImageDimensions) -> RgbImage {
    image
        .resize_exact(dimensions.width, dimensions.height, FilterType::CatmullRom)
        .to_rgb8()
}

/// Decodes and resizes an upload on the blocking pool.
pub async fn preprocess_upload(
    image_data: Vec<u8>,
    dimensions: ImageDimensions,
) -> Result<RgbImage, CoreError> {
    task::spawn_blocking(move || {
        let image = decode_image(&image_data)?;
        Ok(prepare_input(&image, dimensions))
    })
    .await
    .map_err(|e| {
        error!(error = %e, "Image preprocessing task failed");
        CoreError::InternalServerError
    })?
}
