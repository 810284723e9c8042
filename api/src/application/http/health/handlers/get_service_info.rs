use nutrilens_core::domain::health::entities::ServiceInfo;

use crate::application::http::server::api_entities::response::Response;

pub const SERVICE_NAME: &str = "NutriLens API";

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    summary = "Service information",
    responses(
        (status = 200, body = ServiceInfo)
    )
)]
pub async fn get_service_info() -> Response<ServiceInfo> {
    Response::OK(ServiceInfo::new(SERVICE_NAME, env!("CARGO_PKG_VERSION")))
}
