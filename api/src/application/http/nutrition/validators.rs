use nutrilens_core::domain::nutrition::value_objects::DEFAULT_SEARCH_LIMIT;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

fn default_limit() -> i64 {
    i64::from(DEFAULT_SEARCH_LIMIT)
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchFoodsQuery {
    /// Free-text food name.
    #[serde(default)]
    #[validate(length(min = 1, message = "query is required"))]
    pub query: String,

    /// Number of results, 1 to 50.
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 50, message = "limit must be between 1 and 50"))]
    pub limit: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_bounds() {
        let query = |limit| SearchFoodsQuery {
            query: "apple".to_string(),
            limit,
        };

        assert!(query(1).validate().is_ok());
        assert!(query(50).validate().is_ok());
        assert!(query(0).validate().is_err());
        assert!(query(51).validate().is_err());
    }

    #[test]
    fn test_limit_defaults_to_ten() {
        let query: SearchFoodsQuery = serde_json::from_str(r#"{"query":"pear"}"#).unwrap();
        assert_eq!(query.limit, 10);
    }
}
