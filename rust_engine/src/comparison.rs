use crate::config::{get_comparison_text, COMPARISON};
use crate::types::{ComparisonVerdict, IvfResults, OutcomeComparison, SpontaneousResults};

pub fn classify_difference(absolute_diff: f64) -> ComparisonVerdict {
    if absolute_diff > COMPARISON.material_difference {
        ComparisonVerdict::IvfFavored
    } else if absolute_diff < -COMPARISON.material_difference {
        ComparisonVerdict::SpontaneousFavored
    } else {
        ComparisonVerdict::Comparable
    }
}

/// IVF (single cycle) against spontaneous conception over `time_horizon`
/// months. `relative_diff` is a ratio of the spontaneous figure and is 0 when
/// that figure is 0.
pub fn compare_outcomes(spontaneous: &SpontaneousResults, ivf: &IvfResults, time_horizon: u32) -> OutcomeComparison {
    let absolute_diff = ivf.healthy_baby - spontaneous.healthy_baby;
    let relative_diff = if spontaneous.healthy_baby > 0.0 {
        absolute_diff / spontaneous.healthy_baby
    } else {
        0.0
    };
    let classification = classify_difference(absolute_diff);

    OutcomeComparison {
        time_horizon,
        absolute_diff,
        relative_diff,
        classification,
        summary: get_comparison_text(classification),
    }
}
