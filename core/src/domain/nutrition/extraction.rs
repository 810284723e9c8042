//! Normalization of FoodData Central nutrient payloads.
//!
//! Nutrients are keyed by their FDC nutrient number. Amounts are per 100 g.

use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::{error, info};

use crate::domain::{
    common::{entities::app_errors::CoreError, round_amount},
    nutrition::{
        entities::{NutritionRecord, NutritionSource, PartialNutrients, SERVING_BASIS},
        fallback::{GENERIC_NUTRITION, default_nutrition},
    },
};

/// Energy in kcal, then Atwater general factors, then Atwater specific factors.
pub const ENERGY_CODES: [&str; 3] = ["208", "957", "958"];
pub const PROTEIN_CODE: &str = "203";
pub const FAT_CODE: &str = "204";
pub const CARBS_CODE: &str = "205";
pub const FIBER_CODE: &str = "291";
pub const SUGARS_CODE: &str = "269.3";
/// Milligrams.
pub const SODIUM_CODE: &str = "307";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutrientMap {
    amounts: HashMap<String, f64>,
}

impl NutrientMap {
    pub fn insert(&mut self, code: impl Into<String>, amount: f64) {
        self.amounts.insert(code.into(), amount);
    }

    pub fn get(&self, code: &str) -> Option<f64> {
        self.amounts.get(code).copied()
    }

    /// Absent codes count as zero.
    pub fn amount(&self, code: &str) -> f64 {
        self.get(code).unwrap_or_default()
    }

    /// First energy code present, in preference order.
    pub fn energy(&self) -> Option<f64> {
        ENERGY_CODES.iter().find_map(|code| self.get(code))
    }

    /// Parses the `foodNutrients` array of a food detail payload.
    ///
    /// Both the abridged shape (`{"number": "208", "amount": 52.0}`) and the full shape
    /// (`{"nutrient": {"number": "208"}, "amount": 52.0}`) are accepted. Entries without
    /// a number or with a null amount are skipped; a missing amount counts as zero.
    pub fn from_detail_entries(entries: &Value) -> Result<Self, CoreError> {
        let entries = entries
            .as_array()
            .ok_or_else(|| malformed("foodNutrients is not an array"))?;

        let mut map = Self::default();
        for entry in entries {
            let entry = entry
                .as_object()
                .ok_or_else(|| malformed("nutrient entry is not an object"))?;

            let Some(code) = detail_nutrient_code(entry) else {
                continue;
            };

            let amount = match entry.get("amount") {
                None => 0.0,
                Some(Value::Null) => continue,
                Some(Value::Number(number)) => number
                    .as_f64()
                    .ok_or_else(|| malformed("nutrient amount out of range"))?,
                Some(other) => {
                    return Err(malformed(&format!(
                        "nutrient {code} has a non-numeric amount: {other}"
                    )));
                }
            };

            map.insert(code, amount);
        }

        Ok(map)
    }

    /// Parses the inline `foodNutrients` of a search hit. Malformed entries are ignored.
    pub fn from_search_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Option<&'a str>, Option<f64>)>,
    {
        let mut map = Self::default();
        for (code, value) in entries {
            if let (Some(code), Some(value)) = (code, value)
                && !code.is_empty()
            {
                map.insert(code, value);
            }
        }
        map
    }

    pub fn to_partial(&self) -> PartialNutrients {
        PartialNutrients {
            calories: self.energy().map(round_amount),
            protein: self.get(PROTEIN_CODE).map(round_amount),
            carbs: self.get(CARBS_CODE).map(round_amount),
            fat: self.get(FAT_CODE).map(round_amount),
        }
    }
}

fn detail_nutrient_code(entry: &Map<String, Value>) -> Option<String> {
    entry
        .get("number")
        .or_else(|| entry.get("nutrient").and_then(|n| n.get("number")))
        .and_then(|code| match code {
            Value::String(code) if !code.is_empty() => Some(code.clone()),
            Value::Number(code) => Some(code.to_string()),
            _ => None,
        })
}

fn malformed(reason: &str) -> CoreError {
    CoreError::ExternalServiceError(format!("malformed food details: {reason}"))
}

/// Normalizes a food detail payload into a [`NutritionRecord`] tagged as external.
pub fn try_extract_nutrition_data(
    details: &Value,
    food_name: &str,
) -> Result<NutritionRecord, CoreError> {
    let details = details
        .as_object()
        .ok_or_else(|| malformed("payload is not an object"))?;

    let nutrients = match details.get("foodNutrients") {
        None | Some(Value::Null) => NutrientMap::default(),
        Some(entries) => NutrientMap::from_detail_entries(entries)?,
    };

    let description = details
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or(food_name)
        .to_string();

    let record = NutritionRecord {
        name: food_name.to_string(),
        description: Some(description),
        calories: round_amount(nutrients.energy().unwrap_or_default()),
        protein: round_amount(nutrients.amount(PROTEIN_CODE)),
        carbs: round_amount(nutrients.amount(CARBS_CODE)),
        fat: round_amount(nutrients.amount(FAT_CODE)),
        fiber: Some(round_amount(nutrients.amount(FIBER_CODE))),
        sugars: Some(round_amount(nutrients.amount(SUGARS_CODE))),
        sodium: Some(round_amount(nutrients.amount(SODIUM_CODE))),
        source: NutritionSource::External,
        fdc_id: details.get("fdcId").and_then(Value::as_u64),
        data_type: details
            .get("dataType")
            .and_then(Value::as_str)
            .map(str::to_string),
        serving_size: SERVING_BASIS.to_string(),
    };

    info!(
        food_name,
        calories = record.calories,
        protein = record.protein,
        "Extracted nutrition data"
    );

    Ok(record)
}

/// Same as [`try_extract_nutrition_data`] but never fails: a malformed payload yields the
/// generic record tagged as fallback.
pub fn extract_nutrition_data(details: &Value, food_name: &str) -> NutritionRecord {
    match try_extract_nutrition_data(details, food_name) {
        Ok(record) => record,
        Err(e) => {
            error!(food_name, error = %e, "Error extracting nutrition data");
            let mut record = default_nutrition(food_name);
            record.calories = GENERIC_NUTRITION.calories;
            record.protein = GENERIC_NUTRITION.protein;
            record.carbs = GENERIC_NUTRITION.carbs;
            record.fat = GENERIC_NUTRITION.fat;
            record
        }
    }
}
