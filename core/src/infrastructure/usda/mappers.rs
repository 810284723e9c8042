use serde::Deserialize;
use serde_json::Value;

use crate::domain::nutrition::{
    entities::{FoodSearchHit, SERVING_BASIS},
    extraction::NutrientMap,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub foods: Vec<SearchFood>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFood {
    #[serde(default)]
    pub fdc_id: Option<u64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub data_type: Option<String>,
    #[serde(default)]
    pub food_nutrients: Vec<SearchNutrient>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchNutrient {
    #[serde(default)]
    pub nutrient_number: Option<Value>,
    #[serde(default)]
    pub value: Option<f64>,
}

impl SearchNutrient {
    fn code(&self) -> Option<String> {
        match self.nutrient_number.as_ref()? {
            Value::String(code) => Some(code.clone()),
            Value::Number(code) => Some(code.to_string()),
            _ => None,
        }
    }
}

impl From<SearchFood> for FoodSearchHit {
    fn from(food: SearchFood) -> Self {
        let codes: Vec<(Option<String>, Option<f64>)> = food
            .food_nutrients
            .iter()
            .map(|n| (n.code(), n.value))
            .collect();
        let nutrients = NutrientMap::from_search_entries(
            codes.iter().map(|(code, value)| (code.as_deref(), *value)),
        );

        FoodSearchHit {
            fdc_id: food.fdc_id,
            description: food.description,
            data_type: food.data_type,
            nutrients: nutrients.to_partial(),
            serving_size: SERVING_BASIS.to_string(),
        }
    }
}

impl SearchResponse {
    pub fn into_hits(self) -> Vec<FoodSearchHit> {
        self.foods.into_iter().map(FoodSearchHit::from).collect()
    }
}
