use serde::Deserialize;

/// Shape of the effort ramp for the months after month 1.
///
/// The historical calculator variants only disagreed on these numbers, so
/// they are a parameter set rather than separate code paths.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
pub struct ProfileShape {
    /// How sharply weight concentrates at the two ends. Higher is sharper.
    pub steepness: i32,

    pub start_emphasis: f64,

    /// Kept above `start_emphasis` so the final month outweighs the first.
    pub end_emphasis: f64,
}

impl Default for ProfileShape {
    fn default() -> Self {
        Self { steepness: 3, start_emphasis: 1.6, end_emphasis: 1.8 }
    }
}

/// Generate `k` raw percentages summing to 100, smallest near the middle and
/// largest at the two ends, with the last month weighted above the first.
///
/// Positions are evenly spaced over `[0, 1]` and weighted with
/// `(1 - x)^steepness * start_emphasis + x^steepness * end_emphasis`.
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn ramp_percentages(k: usize, shape: ProfileShape) -> Vec<f64> {
    if k == 0 {
        return Vec::new();
    }
    if k == 1 {
        // A single position is ill-defined on [0, 1]; skip the formula.
        return vec![100.0];
    }
    let weights: Vec<f64> = (0..k)
        .map(|index| {
            let x = index as f64 / (k - 1) as f64;
            (1.0 - x).powi(shape.steepness) * shape.start_emphasis
                + x.powi(shape.steepness) * shape.end_emphasis
        })
        .collect();
    let sum: f64 = weights.iter().sum();
    weights.into_iter().map(|weight| 100.0 * weight / sum).collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn empty_ok() {
        assert!(ramp_percentages(0, ProfileShape::default()).is_empty());
    }

    #[test]
    fn single_month_gets_everything() {
        let percentages = ramp_percentages(1, ProfileShape::default());
        assert_eq!(percentages, vec![100.0]);
    }

    #[test]
    fn sums_to_one_hundred() {
        for k in 2..=19 {
            let sum: f64 = ramp_percentages(k, ProfileShape::default()).iter().sum();
            assert_abs_diff_eq!(sum, 100.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn default_shape_values_ok() {
        let percentages = ramp_percentages(5, ProfileShape::default());
        assert_abs_diff_eq!(percentages[0], 30.117_647, epsilon = 1e-5);
        assert_abs_diff_eq!(percentages[2], 8.0, epsilon = 1e-9);
        assert_abs_diff_eq!(percentages[4], 33.882_353, epsilon = 1e-5);
    }

    #[test]
    fn last_month_outweighs_the_first() {
        for k in 2..=12 {
            let percentages = ramp_percentages(k, ProfileShape::default());
            assert!(percentages[k - 1] > percentages[0], "k = {k}");
        }
    }

    #[test]
    fn ends_outweigh_the_middle() {
        let percentages = ramp_percentages(7, ProfileShape::default());
        let middle = percentages[3];
        assert!(percentages[0] > middle);
        assert!(percentages[6] > middle);
    }

    #[test]
    fn raising_end_emphasis_raises_the_last_weight() {
        let base = ProfileShape::default();
        let raised = ProfileShape { end_emphasis: 2.4, ..base };
        for k in 2..=12 {
            let before = ramp_percentages(k, base);
            let after = ramp_percentages(k, raised);
            assert!(after[k - 1] > before[k - 1], "k = {k}");
        }
    }
}
