use crate::{core::config::FIRST_MONTH_HOURS, quantity::hours::Hours};

/// Distribute the hour budget over the project months.
///
/// Month 1 always books `min(70, H)`; the remainder follows the quantized
/// percentages for months 2..N, rounded to two decimals per month. A
/// zero-sum percentage sequence splits the remainder equally.
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn allocate(total_hours: Hours, percentages: &[f64]) -> Vec<Hours> {
    let first = total_hours.min(FIRST_MONTH_HOURS);
    let remaining = (total_hours - first).max(Hours::ZERO);

    let mut plan = Vec::with_capacity(percentages.len() + 1);
    plan.push(first);

    let k = percentages.len();
    if k == 0 {
        return plan;
    }

    let percent_sum: f64 = percentages.iter().sum();
    for &pct in percentages {
        let share = if percent_sum <= 0.0 { 1.0 / k as f64 } else { pct / 100.0 };
        plan.push((remaining * share).round_to_hundredths());
    }
    plan
}
