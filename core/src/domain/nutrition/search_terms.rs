/// Classifier labels come from dataset folder names; some are misspelled or too terse
/// to find a good match in FoodData Central.
pub const LABEL_SEARCH_TERMS: &[(&str, &str)] = &[
    ("sweetcorn", "sweet corn"),
    ("jalepeno", "jalapeño peppers"),
    ("chilli pepper", "hot peppers"),
    ("bell pepper", "bell peppers"),
    ("capsicum", "bell peppers"),
    ("beetroot", "beets"),
    ("raddish", "radishes"),
    ("sweetpotato", "sweet potato"),
    ("soy beans", "soybeans"),
    ("peas", "green peas"),
];

/// Search phrase for a label. Labels without a mapping are searched as given.
pub fn search_term_for(label: &str) -> String {
    let key = label.trim().to_lowercase();
    LABEL_SEARCH_TERMS
        .iter()
        .find(|(from, _)| *from == key)
        .map(|(_, to)| (*to).to_string())
        .unwrap_or_else(|| label.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_labels() {
        assert_eq!(search_term_for("jalepeno"), "jalapeño peppers");
        assert_eq!(search_term_for("Sweetcorn"), "sweet corn");
        assert_eq!(search_term_for("capsicum"), "bell peppers");
    }

    #[test]
    fn test_unmapped_label_is_passed_through() {
        assert_eq!(search_term_for("Granny Smith"), "Granny Smith");
    }
}
