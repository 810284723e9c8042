mod common;

use std::time::{Duration, Instant};

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use common::{FakeUsda, ROOT, png_bytes, spawn_fake_usda, test_args, test_server};
use serde_json::Value;

fn image_form(bytes: Vec<u8>, mime: &str) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(bytes).file_name("photo.png").mime_type(mime),
    )
}

#[tokio::test]
async fn test_degraded_classifier_returns_sentinel_with_local_nutrition() {
    let server = test_server(test_args(None));

    let response = server
        .post(&format!("{ROOT}/classify"))
        .multipart(image_form(png_bytes(), "image/png"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["filename"], "photo.png");
    assert_eq!(body["predicted_class"], "apple");
    assert_eq!(body["confidence"], 0.95);
    assert_eq!(body["nutrition_info"]["name"], "apple");
    assert_eq!(body["nutrition_info"]["calories"], 52.0);
    assert_eq!(body["nutrition_info"]["source"], "fallback");
    assert_eq!(body["nutrition_info"]["serving_size"], "100g");
}

#[tokio::test]
async fn test_classification_prefers_external_nutrition() {
    let base_url = spawn_fake_usda(FakeUsda::ThreeHitsSecondBroken).await;
    let server = test_server(test_args(Some(base_url)));

    let response = server
        .post(&format!("{ROOT}/classify"))
        .multipart(image_form(png_bytes(), "image/png"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["predicted_class"], "apple");
    assert_eq!(body["nutrition_info"]["source"], "USDA FoodData Central");
    assert_eq!(body["nutrition_info"]["fdc_id"], 1001);
    assert_eq!(body["nutrition_info"]["carbs"], 13.8);
}

#[tokio::test]
async fn test_external_failure_still_classifies() {
    let base_url = spawn_fake_usda(FakeUsda::Failing).await;
    let server = test_server(test_args(Some(base_url)));

    let response = server
        .post(&format!("{ROOT}/classify"))
        .multipart(image_form(png_bytes(), "image/png"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["nutrition_info"]["source"], "fallback");
    assert_eq!(body["nutrition_info"]["calories"], 52.0);
}

#[tokio::test]
async fn test_slow_nutrition_source_times_out_to_fallback() {
    let base_url = spawn_fake_usda(FakeUsda::Slow).await;
    let mut args = test_args(Some(base_url));
    args.usda.usda_timeout_secs = 1;
    let server = test_server(args);

    let started = Instant::now();
    let response = server
        .post(&format!("{ROOT}/classify"))
        .multipart(image_form(png_bytes(), "image/png"))
        .await;
    let elapsed = started.elapsed();

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["predicted_class"], "apple");
    assert_eq!(body["nutrition_info"]["source"], "fallback");
    assert_eq!(body["nutrition_info"]["calories"], 52.0);
    assert!(elapsed < Duration::from_secs(3), "took {elapsed:?}");
}

#[tokio::test]
async fn test_non_image_upload_is_rejected() {
    let server = test_server(test_args(None));

    let response = server
        .post(&format!("{ROOT}/classify"))
        .multipart(image_form(b"name,calories\napple,52\n".to_vec(), "text/csv"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "Invalid file type. Please upload an image."
    );
}

#[tokio::test]
async fn test_undecodable_image_is_rejected() {
    let server = test_server(test_args(None));

    let response = server
        .post(&format!("{ROOT}/classify"))
        .multipart(image_form(vec![0x89, b'P', b'N', b'G', 0, 1, 2, 3], "image/png"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let message = response.json::<Value>()["message"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(message.starts_with("Failed to process image"), "{message}");
}

#[tokio::test]
async fn test_missing_file_field_is_rejected() {
    let server = test_server(test_args(None));

    let response = server
        .post(&format!("{ROOT}/classify"))
        .multipart(MultipartForm::new().add_text("note", "no file here"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "Missing file field");
}
