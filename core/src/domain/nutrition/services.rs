use futures::{StreamExt, stream};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::domain::{
    assistant::ports::AssistantClient,
    classification::ports::Classifier,
    common::{entities::app_errors::CoreError, services::Service},
    nutrition::{
        entities::{FoodSearchHit, FoodSearchOutcome, FoodSummary, NutritionRecord},
        extraction::{extract_nutrition_data, try_extract_nutrition_data},
        ports::{FoodDataRepository, NutritionService},
        search_terms::search_term_for,
        value_objects::{
            DETAIL_FETCH_CONCURRENCY, LOOKUP_PAGE_SIZE, MAX_SEARCH_LIMIT, SearchFoodsInput,
        },
    },
};

impl<C, F, A> NutritionService for Service<C, F, A>
where
    C: Classifier,
    F: FoodDataRepository,
    A: AssistantClient,
{
    async fn search_by_name(&self, query: String, page_size: u32) -> Vec<FoodSearchHit> {
        if !self.food_data.is_configured() {
            debug!(query = %query, "Nutrition source unavailable, skipping search");
            return Vec::new();
        }

        match self.food_data.search_foods(query.clone(), page_size).await {
            Ok(hits) => {
                info!(query = %query, hits = hits.len(), "Food search completed");
                hits
            }
            Err(e) => {
                warn!(query = %query, error = %e, "Food search failed");
                Vec::new()
            }
        }
    }

    async fn get_details(&self, fdc_id: u64) -> Option<Value> {
        if !self.food_data.is_configured() {
            return None;
        }

        match self.food_data.get_food_details(fdc_id).await {
            Ok(details) => Some(details),
            Err(e) => {
                warn!(fdc_id, error = %e, "Food details request failed");
                None
            }
        }
    }

    #[instrument(skip(self), fields(stage = "enrich"))]
    async fn lookup_by_label(&self, label: String) -> Option<NutritionRecord> {
        if !self.food_data.is_configured() {
            return None;
        }

        let term = search_term_for(&label);
        let hits = self.search_by_name(term.clone(), LOOKUP_PAGE_SIZE).await;

        let Some(first) = hits.into_iter().next() else {
            info!(term = %term, "No foods found for label");
            return None;
        };

        let Some(fdc_id) = first.fdc_id else {
            warn!(term = %term, "Best match has no food id");
            return None;
        };

        let details = self.get_details(fdc_id).await?;
        Some(extract_nutrition_data(&details, &label))
    }

    async fn search_nutrition(&self, food_name: String) -> Result<NutritionRecord, CoreError> {
        if food_name.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "Food name must not be empty".to_string(),
            ));
        }

        self.lookup_by_label(food_name.clone())
            .await
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, input), fields(query = %input.query, limit = input.limit))]
    async fn search_foods(&self, input: SearchFoodsInput) -> Result<FoodSearchOutcome, CoreError> {
        if input.limit == 0 || input.limit > MAX_SEARCH_LIMIT {
            return Err(CoreError::InvalidInput(format!(
                "limit must be between 1 and {MAX_SEARCH_LIMIT}"
            )));
        }

        let query = input.query.trim().to_string();
        if query.is_empty() {
            return Err(CoreError::InvalidInput(
                "query must not be empty".to_string(),
            ));
        }

        let mut hits = self.search_by_name(query.clone(), input.limit).await;
        hits.truncate(input.limit as usize);

        let identified: Vec<(u64, FoodSearchHit)> = hits
            .into_iter()
            .filter_map(|hit| match hit.fdc_id {
                Some(fdc_id) => Some((fdc_id, hit)),
                None => {
                    warn!(description = ?hit.description, "Skipping search hit without food id");
                    None
                }
            })
            .collect();

        let summaries: Vec<_> = identified
            .iter()
            .map(|(fdc_id, hit)| self.summarize_hit(*fdc_id, hit, &query))
            .collect();
        let results: Vec<FoodSummary> = stream::iter(summaries)
            .buffered(DETAIL_FETCH_CONCURRENCY)
            .collect()
            .await;

        if results.is_empty() {
            return Ok(FoodSearchOutcome::empty(query));
        }

        Ok(FoodSearchOutcome::found(query, results))
    }
}

impl<C, F, A> Service<C, F, A>
where
    C: Classifier,
    F: FoodDataRepository,
    A: AssistantClient,
{
    async fn summarize_hit(&self, fdc_id: u64, hit: &FoodSearchHit, query: &str) -> FoodSummary {
        let Some(details) = self.get_details(fdc_id).await else {
            return FoodSummary::placeholder(fdc_id, hit);
        };

        let name = hit.description.as_deref().unwrap_or(query);
        match try_extract_nutrition_data(&details, name) {
            Ok(record) => FoodSummary::from_record(fdc_id, hit, record),
            Err(e) => {
                warn!(fdc_id, error = %e, "Failed to normalize food details");
                FoodSummary::placeholder(fdc_id, hit)
            }
        }
    }
}
