mod common;

use axum::http::StatusCode;
use common::{FakeUsda, ROOT, spawn_fake_usda, test_args, test_server};
use serde_json::Value;

#[tokio::test]
async fn test_search_nutrition_returns_external_record() {
    let base_url = spawn_fake_usda(FakeUsda::ThreeHitsSecondBroken).await;
    let server = test_server(test_args(Some(base_url)));

    let response = server.get(&format!("{ROOT}/search-nutrition/apple")).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["name"], "apple");
    assert_eq!(body["description"], "Apples, raw");
    assert_eq!(body["calories"], 52.0);
    assert_eq!(body["protein"], 0.3);
    assert_eq!(body["sugars"], 10.4);
    assert_eq!(body["source"], "USDA FoodData Central");
}

#[tokio::test]
async fn test_search_nutrition_upstream_error_is_not_found() {
    let base_url = spawn_fake_usda(FakeUsda::Failing).await;
    let server = test_server(test_args(Some(base_url)));

    let response = server.get(&format!("{ROOT}/search-nutrition/banana")).await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["message"],
        "Nutrition information not found for 'banana'"
    );
}

#[tokio::test]
async fn test_search_nutrition_without_source_is_not_found() {
    let server = test_server(test_args(None));

    let response = server.get(&format!("{ROOT}/search-nutrition/apple")).await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_foods_keeps_failed_detail_as_placeholder() {
    let base_url = spawn_fake_usda(FakeUsda::ThreeHitsSecondBroken).await;
    let server = test_server(test_args(Some(base_url)));

    let response = server
        .get(&format!("{ROOT}/search-foods"))
        .add_query_param("query", "apple")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["query"], "apple");
    assert_eq!(body["total_found"], 3);

    let results = body["results"].as_array().unwrap();
    let ids: Vec<u64> = results.iter().filter_map(|r| r["fdc_id"].as_u64()).collect();
    assert_eq!(ids, vec![1001, 1002, 1003]);

    let failed = &results[1];
    assert_eq!(failed["name"], "Apple juice");
    assert_eq!(failed["nutrients_available"], false);
    assert_eq!(failed["search_nutrients"]["calories"], 46.0);
    for field in ["calories", "protein", "carbs", "fat", "fiber", "sugars", "sodium"] {
        assert_eq!(failed[field], 0.0, "{field}");
    }

    assert_eq!(results[0]["calories"], 52.0);
    assert_eq!(results[2]["nutrients_available"], true);
    assert!(results[0].get("search_nutrients").is_none());
}

#[tokio::test]
async fn test_search_foods_limit_truncates_results() {
    let base_url = spawn_fake_usda(FakeUsda::ThreeHitsSecondBroken).await;
    let server = test_server(test_args(Some(base_url)));

    let response = server
        .get(&format!("{ROOT}/search-foods"))
        .add_query_param("query", "apple")
        .add_query_param("limit", 1)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["total_found"], 1);
    assert_eq!(body["results"][0]["fdc_id"], 1001);
}

#[tokio::test]
async fn test_search_foods_without_matches_has_message() {
    let base_url = spawn_fake_usda(FakeUsda::Empty).await;
    let server = test_server(test_args(Some(base_url)));

    let response = server
        .get(&format!("{ROOT}/search-foods"))
        .add_query_param("query", "dragonfruit")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["total_found"], 0);
    assert_eq!(body["results"], Value::Array(Vec::new()));
    assert_eq!(body["message"], "No foods found matching 'dragonfruit'");
}

#[tokio::test]
async fn test_search_foods_rejects_out_of_range_limit() {
    let server = test_server(test_args(None));

    for limit in [0, 51, -1] {
        let response = server
            .get(&format!("{ROOT}/search-foods"))
            .add_query_param("query", "apple")
            .add_query_param("limit", limit)
            .await;

        assert_eq!(
            response.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "limit {limit}"
        );
    }
}

#[tokio::test]
async fn test_search_foods_rejects_missing_query() {
    let server = test_server(test_args(None));

    let response = server.get(&format!("{ROOT}/search-foods")).await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}
