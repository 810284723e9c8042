#![allow(dead_code)]

use std::{io::Cursor, path::PathBuf, sync::Arc, time::Duration};

use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_test::TestServer;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use nutrilens_api::{
    application::http::server::http_server::{router, state},
    args::{Args, ClassifierArgs, GeminiArgs, LogArgs, ServerArgs, UsdaArgs},
};
use nutrilens_core::domain::classification::value_objects::InputLayout;
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const ROOT: &str = "/api/v1";

/// Arguments built directly so the environment of the test process cannot leak in.
pub fn test_args(usda_base_url: Option<String>) -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: ROOT.to_string(),
            allowed_origins: vec!["*".to_string()],
            metrics_enabled: false,
        },
        classifier: ClassifierArgs {
            model_path: PathBuf::from("tests/fixtures/missing-model.onnx"),
            img_width: 150,
            img_height: 150,
            input_layout: InputLayout::Nhwc,
        },
        usda: UsdaArgs {
            usda_api_key: usda_base_url.as_ref().map(|_| "test-key".to_string()),
            usda_base_url: usda_base_url
                .unwrap_or_else(|| "http://127.0.0.1:9/fdc/v1".to_string()),
            usda_timeout_secs: 2,
        },
        gemini: GeminiArgs {
            gemini_api_key: None,
            gemini_model: "gemini-2.0-flash".to_string(),
            gemini_base_url: "http://127.0.0.1:9/v1beta".to_string(),
            gemini_timeout_secs: 2,
        },
        log: LogArgs {
            log_level: "info".to_string(),
            log_json: false,
        },
    }
}

pub fn test_server(args: Args) -> TestServer {
    let state = state(Arc::new(args)).unwrap();
    TestServer::new(router(state).unwrap()).unwrap()
}

pub fn png_bytes() -> Vec<u8> {
    let image = RgbImage::from_fn(64, 48, |x, y| Rgb([(x * 4) as u8, (y * 5) as u8, 90]));
    let mut bytes = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(image)
        .write_to(&mut bytes, ImageFormat::Png)
        .unwrap();
    bytes.into_inner()
}

pub fn food_details(fdc_id: u64, description: &str) -> Value {
    json!({
        "fdcId": fdc_id,
        "description": description,
        "dataType": "Foundation",
        "foodNutrients": [
            { "number": "208", "name": "Energy", "amount": 52.0, "unitName": "KCAL" },
            { "number": "203", "name": "Protein", "amount": 0.26, "unitName": "G" },
            { "number": "204", "name": "Total lipid (fat)", "amount": 0.17, "unitName": "G" },
            { "number": "205", "name": "Carbohydrate, by difference", "amount": 13.81, "unitName": "G" },
            { "number": "291", "name": "Fiber, total dietary", "amount": 2.4, "unitName": "G" },
            { "number": "269.3", "name": "Sugars, Total", "amount": 10.39, "unitName": "G" },
            { "number": "307", "name": "Sodium, Na", "amount": 1.0, "unitName": "MG" }
        ]
    })
}

/// Behaviour of the fake FoodData Central server.
#[derive(Clone, Copy)]
pub enum FakeUsda {
    /// Three hits for any query; details of the second one fail.
    ThreeHitsSecondBroken,
    /// Every request answers 500.
    Failing,
    /// Searches find nothing.
    Empty,
    /// Searches answer long after any client timeout.
    Slow,
}

pub async fn spawn_fake_usda(mode: FakeUsda) -> String {
    let search = move |Query(params): Query<Vec<(String, String)>>| async move {
        assert!(params.iter().any(|(k, v)| k == "api_key" && v == "test-key"));
        match mode {
            FakeUsda::Failing => {
                (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response()
            }
            FakeUsda::Empty => Json(json!({ "totalHits": 0, "foods": [] })).into_response(),
            FakeUsda::Slow => {
                tokio::time::sleep(Duration::from_secs(10)).await;
                Json(json!({ "totalHits": 0, "foods": [] })).into_response()
            }
            FakeUsda::ThreeHitsSecondBroken => Json(json!({
                "totalHits": 3,
                "foods": [
                    { "fdcId": 1001, "description": "Apples, raw", "dataType": "Foundation",
                      "foodNutrients": [{ "nutrientNumber": "208", "value": 52.0 }] },
                    { "fdcId": 1002, "description": "Apple juice", "dataType": "SR Legacy",
                      "foodNutrients": [{ "nutrientNumber": "208", "value": 46.0 }] },
                    { "fdcId": 1003, "description": "Applesauce", "dataType": "SR Legacy" }
                ]
            }))
            .into_response(),
        }
    };

    let details = move |Path(fdc_id): Path<u64>| async move {
        match (mode, fdc_id) {
            (FakeUsda::Failing, _) | (_, 1002) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "detail failure").into_response()
            }
            (_, id) => Json(food_details(id, "Apples, raw")).into_response(),
        }
    };

    let app = Router::new()
        .route("/fdc/v1/foods/search", get(search))
        .route("/fdc/v1/food/{fdc_id}", get(details));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/fdc/v1")
}
