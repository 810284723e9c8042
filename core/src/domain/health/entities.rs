use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::classification::value_objects::ClassifierMode;

/// Model family served by the classifier.
pub const MODEL_TYPE: &str = "cnn";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub model_type: String,
}

impl ServiceInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            model_type: MODEL_TYPE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthReport {
    /// Always `ok` while the process serves requests; degraded sources are reported separately.
    pub status: String,
    pub classifier_mode: ClassifierMode,
    pub nutrition_source_configured: bool,
    pub assistant_configured: bool,
    pub checked_at: DateTime<Utc>,
}
