use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, health::entities::HealthReport};

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckService: Send + Sync {
    fn health(&self) -> impl Future<Output = Result<HealthReport, CoreError>> + Send;
}
