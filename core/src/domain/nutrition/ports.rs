use std::future::Future;

use serde_json::Value;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::{
        entities::{FoodSearchHit, FoodSearchOutcome, NutritionRecord},
        value_objects::SearchFoodsInput,
    },
};

/// Client of the external food composition database.
#[cfg_attr(test, mockall::automock)]
pub trait FoodDataRepository: Send + Sync {
    /// False when no credential is available. Callers skip every request in that case.
    fn is_configured(&self) -> bool;

    fn search_foods(
        &self,
        query: String,
        page_size: u32,
    ) -> impl Future<Output = Result<Vec<FoodSearchHit>, CoreError>> + Send;

    /// Raw detail payload for one food.
    fn get_food_details(
        &self,
        fdc_id: u64,
    ) -> impl Future<Output = Result<Value, CoreError>> + Send;

    fn close(&self) -> impl Future<Output = ()> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait NutritionService: Send + Sync {
    /// Never fails: errors are logged and yield an empty list.
    fn search_by_name(
        &self,
        query: String,
        page_size: u32,
    ) -> impl Future<Output = Vec<FoodSearchHit>> + Send;

    /// Never fails: errors are logged and yield `None`.
    fn get_details(&self, fdc_id: u64) -> impl Future<Output = Option<Value>> + Send;

    /// Best external record for a classifier label, or `None` when the source is
    /// unavailable or has no match.
    fn lookup_by_label(
        &self,
        label: String,
    ) -> impl Future<Output = Option<NutritionRecord>> + Send;

    fn search_nutrition(
        &self,
        food_name: String,
    ) -> impl Future<Output = Result<NutritionRecord, CoreError>> + Send;

    fn search_foods(
        &self,
        input: SearchFoodsInput,
    ) -> impl Future<Output = Result<FoodSearchOutcome, CoreError>> + Send;
}
