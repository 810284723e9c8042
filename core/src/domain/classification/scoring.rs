const DISTRIBUTION_TOLERANCE: f32 = 1e-3;

/// Returns the scores unchanged when they already form a probability distribution,
/// otherwise applies softmax.
pub fn to_probabilities(scores: &[f32]) -> Vec<f32> {
    if is_distribution(scores) {
        return scores.to_vec();
    }

    let max = scores
        .iter()
        .copied()
        .filter(|s| s.is_finite())
        .fold(f32::NEG_INFINITY, f32::max);
    if !max.is_finite() {
        return vec![0.0; scores.len()];
    }

    let exps: Vec<f32> = scores
        .iter()
        .map(|s| if s.is_finite() { (s - max).exp() } else { 0.0 })
        .collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

fn is_distribution(scores: &[f32]) -> bool {
    !scores.is_empty()
        && scores.iter().all(|s| (0.0..=1.0).contains(s))
        && (scores.iter().sum::<f32>() - 1.0).abs() <= DISTRIBUTION_TOLERANCE
}

/// Index and value of the highest score. Ties resolve to the lowest index; NaN never wins.
pub fn arg_max(scores: &[f32]) -> Option<(usize, f32)> {
    scores
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, s)| !s.is_nan())
        .fold(None, |best, (i, s)| match best {
            Some((_, b)) if s <= b => best,
            _ => Some((i, s)),
        })
}
