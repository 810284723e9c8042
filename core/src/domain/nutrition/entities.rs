use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::round_amount;

/// Every amount is expressed per 100 g of edible portion.
pub const SERVING_BASIS: &str = "100g";

/// Provenance tag carried by every nutrition record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum NutritionSource {
    #[serde(rename = "USDA FoodData Central")]
    External,
    #[serde(rename = "fallback")]
    Fallback,
}

/// Calories, protein, carbohydrate and fat for one food.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroNutrients {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugars: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
    pub source: NutritionSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fdc_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    pub serving_size: String,
}

impl NutritionRecord {
    /// Record built from the local table or the generic default.
    pub fn fallback(name: &str, macros: MacroNutrients) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            calories: round_amount(macros.calories),
            protein: round_amount(macros.protein),
            carbs: round_amount(macros.carbs),
            fat: round_amount(macros.fat),
            fiber: None,
            sugars: None,
            sodium: None,
            source: NutritionSource::Fallback,
            fdc_id: None,
            data_type: None,
            serving_size: SERVING_BASIS.to_string(),
        }
    }

    pub fn with_source(mut self, source: NutritionSource) -> Self {
        self.source = source;
        self
    }
}

/// Nutrients that came back inline with a search hit. Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PartialNutrients {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
}

impl PartialNutrients {
    pub fn is_empty(&self) -> bool {
        self.calories.is_none()
            && self.protein.is_none()
            && self.carbs.is_none()
            && self.fat.is_none()
    }
}

/// One hit of a free-text food search, in the relevance order of the external source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodSearchHit {
    pub fdc_id: Option<u64>,
    pub description: Option<String>,
    pub data_type: Option<String>,
    pub nutrients: PartialNutrients,
    pub serving_size: String,
}

/// Formatted entry of the bulk food search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodSummary {
    pub fdc_id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugars: f64,
    pub sodium: f64,
    pub serving_size: String,
    pub source: NutritionSource,
    /// False when the detail fetch or normalization failed and every amount is a zero placeholder.
    pub nutrients_available: bool,
    /// Amounts reported inline by the search itself. Only set on placeholders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_nutrients: Option<PartialNutrients>,
}

impl FoodSummary {
    pub fn from_record(fdc_id: u64, hit: &FoodSearchHit, record: NutritionRecord) -> Self {
        Self {
            fdc_id,
            name: record.description.unwrap_or(record.name),
            data_type: record.data_type.or_else(|| hit.data_type.clone()),
            calories: record.calories,
            protein: record.protein,
            carbs: record.carbs,
            fat: record.fat,
            fiber: record.fiber.unwrap_or_default(),
            sugars: record.sugars.unwrap_or_default(),
            sodium: record.sodium.unwrap_or_default(),
            serving_size: record.serving_size,
            source: record.source,
            nutrients_available: true,
            search_nutrients: None,
        }
    }

    pub fn placeholder(fdc_id: u64, hit: &FoodSearchHit) -> Self {
        Self {
            fdc_id,
            name: hit
                .description
                .clone()
                .unwrap_or_else(|| format!("Food {fdc_id}")),
            data_type: hit.data_type.clone(),
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            fiber: 0.0,
            sugars: 0.0,
            sodium: 0.0,
            serving_size: hit.serving_size.clone(),
            source: NutritionSource::External,
            nutrients_available: false,
            search_nutrients: (!hit.nutrients.is_empty()).then(|| hit.nutrients.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodSearchOutcome {
    pub query: String,
    pub results: Vec<FoodSummary>,
    pub total_found: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FoodSearchOutcome {
    pub fn found(query: String, results: Vec<FoodSummary>) -> Self {
        Self {
            query,
            total_found: results.len(),
            results,
            message: None,
        }
    }

    pub fn empty(query: String) -> Self {
        let message = format!("No foods found matching '{query}'");
        Self {
            query,
            results: Vec::new(),
            total_found: 0,
            message: Some(message),
        }
    }
}
