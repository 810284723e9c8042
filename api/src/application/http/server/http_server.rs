use std::sync::Arc;

use anyhow::Context;
use axum::{
    Json, Router,
    http::{
        HeaderValue, Method,
        header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE},
    },
    routing::get,
};
use axum_prometheus::PrometheusMetricLayer;
use nutrilens_core::{application::create_service, domain::common::NutriLensConfig};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{debug, info_span};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    application::http::{
        assistant::router::assistant_routes,
        classification::router::classification_routes,
        health::router::{health_routes, root_routes},
        nutrition::router::nutrition_routes,
        server::{app_state::AppState, openapi::api_doc},
    },
    args::Args,
};

pub fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = NutriLensConfig::from(args.as_ref());
    let service = create_service(config)?;

    Ok(AppState::new(args, service))
}

fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, anyhow::Error> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, CONTENT_LENGTH, ACCEPT]);

    if allowed_origins.iter().any(|origin| origin.trim() == "*") {
        return Ok(cors.allow_origin(AllowOrigin::any()));
    }

    let origins = allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin.trim())
                .with_context(|| format!("invalid allowed origin '{origin}'"))
        })
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", origins);

    Ok(cors.allow_origin(origins).allow_credentials(true))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let cors = cors_layer(&state.args.server.allowed_origins)?;

    let root_path = state.args.server.root_path.clone();
    let openapi = api_doc(&root_path);

    let mut router = Router::new()
        .merge(Scalar::with_url(
            format!("{root_path}/scalar"),
            openapi.clone(),
        ))
        .route(
            &format!("{root_path}/api-docs/openapi.json"),
            get(move || async move { Json(openapi) }),
        )
        .merge(root_routes())
        .merge(classification_routes(state.clone()))
        .merge(nutrition_routes(state.clone()))
        .merge(assistant_routes(state.clone()))
        .merge(health_routes(state.clone()));

    if state.args.server.metrics_enabled {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
        router = router
            .route(
                &format!("{root_path}/metrics"),
                get(|| async move { metric_handle.render() }),
            )
            .layer(prometheus_layer);
    }

    let router = router.layer(trace_layer).layer(cors).with_state(state);
    Ok(router)
}
