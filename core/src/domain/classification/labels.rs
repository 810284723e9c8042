/// Output units of the classifier, in index order. The names are the dataset's folder
/// names, misspellings included.
pub const CLASS_LABELS: [&str; 36] = [
    "apple",
    "banana",
    "beetroot",
    "bell pepper",
    "cabbage",
    "capsicum",
    "carrot",
    "cauliflower",
    "chilli pepper",
    "corn",
    "cucumber",
    "eggplant",
    "garlic",
    "ginger",
    "grapes",
    "jalepeno",
    "kiwi",
    "lemon",
    "lettuce",
    "mango",
    "onion",
    "orange",
    "paprika",
    "pear",
    "peas",
    "pineapple",
    "pomegranate",
    "potato",
    "raddish",
    "soy beans",
    "spinach",
    "sweetcorn",
    "sweetpotato",
    "tomato",
    "turnip",
    "watermelon",
];

/// Prediction returned by the degraded classifier.
pub const SENTINEL_LABEL: &str = "apple";
pub const SENTINEL_CONFIDENCE: f64 = 0.95;

pub fn label_for_index(index: usize) -> String {
    CLASS_LABELS
        .get(index)
        .map(|label| (*label).to_string())
        .unwrap_or_else(|| format!("class_{index}"))
}
