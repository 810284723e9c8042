use crate::domain::nutrition::entities::{MacroNutrients, NutritionRecord};

/// Last-resort values for any food missing from [`STATIC_NUTRITION`].
pub const GENERIC_NUTRITION: MacroNutrients = MacroNutrients {
    calories: 100.0,
    protein: 2.0,
    carbs: 20.0,
    fat: 0.5,
};

pub const STATIC_NUTRITION: &[(&str, MacroNutrients)] = &[
    (
        "apple",
        MacroNutrients {
            calories: 52.0,
            protein: 0.3,
            carbs: 14.0,
            fat: 0.2,
        },
    ),
    (
        "banana",
        MacroNutrients {
            calories: 89.0,
            protein: 1.1,
            carbs: 23.0,
            fat: 0.3,
        },
    ),
    (
        "carrot",
        MacroNutrients {
            calories: 41.0,
            protein: 0.9,
            carbs: 10.0,
            fat: 0.2,
        },
    ),
    (
        "tomato",
        MacroNutrients {
            calories: 18.0,
            protein: 0.9,
            carbs: 3.9,
            fat: 0.2,
        },
    ),
    (
        "orange",
        MacroNutrients {
            calories: 47.0,
            protein: 0.9,
            carbs: 12.0,
            fat: 0.1,
        },
    ),
    (
        "grapes",
        MacroNutrients {
            calories: 69.0,
            protein: 0.7,
            carbs: 16.0,
            fat: 0.2,
        },
    ),
];

pub fn static_nutrition(label: &str) -> Option<MacroNutrients> {
    STATIC_NUTRITION
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, macros)| *macros)
}

/// Never fails: unknown labels get [`GENERIC_NUTRITION`].
pub fn default_nutrition(label: &str) -> NutritionRecord {
    let macros = static_nutrition(label).unwrap_or(GENERIC_NUTRITION);
    NutritionRecord::fallback(label, macros)
}
