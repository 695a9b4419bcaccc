use itertools::Itertools;

/// One hundred percent expressed in 5%-units.
const TOTAL_UNITS: usize = 20;

const UNIT_PERCENT: f64 = 5.0;

const SUM_EPSILON: f64 = 1e-6;
const FLOOR_EPSILON: f64 = 1e-9;

/// Convert raw percentages into multiples of 5%.
///
/// When `normalize` is on, the result is an apportionment of 20 indivisible
/// 5%-units: every month gets at least `min_percent`, the rest follows the
/// input weights by the largest-remainder method (ties broken by month
/// order), and the output sums to exactly 100. Zero or empty weights fall
/// back to equal shares.
///
/// When `normalize` is off, each entry is only rounded to the nearest
/// multiple of 5 and the caller is responsible for [`validate`].
#[must_use]
#[expect(clippy::cast_possible_truncation)]
#[expect(clippy::cast_precision_loss)]
#[expect(clippy::cast_sign_loss)]
pub fn quantize_to_fives(raw: &[f64], normalize: bool, min_percent: f64) -> Vec<f64> {
    let weights: Vec<f64> = raw.iter().map(|pct| pct.max(0.0)).collect();
    let k = weights.len();
    if k == 0 {
        return weights;
    }

    if !normalize {
        return weights.iter().map(|pct| (pct / UNIT_PERCENT).round() * UNIT_PERCENT).collect();
    }

    let mut min_units = (min_percent / UNIT_PERCENT).ceil() as usize;
    if k * min_units > TOTAL_UNITS {
        // The floor does not fit; shrink it so the total still can. Not
        // expected for realistic month counts.
        min_units = (TOTAL_UNITS / k).max(1);
    }

    let mut units = vec![min_units; k];
    let remaining = TOTAL_UNITS.saturating_sub(k * min_units);
    if remaining == 0 {
        return units.into_iter().map(|unit| unit as f64 * UNIT_PERCENT).collect();
    }

    let weight_sum: f64 = weights.iter().sum();
    let ideal: Vec<f64> = if weight_sum <= 0.0 {
        vec![remaining as f64 / k as f64; k]
    } else {
        weights.iter().map(|weight| weight / weight_sum * remaining as f64).collect()
    };

    let mut leftover = remaining;
    for (unit, share) in units.iter_mut().zip(&ideal) {
        let whole = share.floor() as usize;
        *unit += whole;
        leftover -= whole;
    }

    // Largest-remainder apportionment of the leftover whole units.
    let order = (0..k).sorted_by(|&left, &right| {
        let left_fraction = ideal[left] - ideal[left].floor();
        let right_fraction = ideal[right] - ideal[right].floor();
        right_fraction.total_cmp(&left_fraction).then(left.cmp(&right))
    });
    for index in order.take(leftover) {
        units[index] += 1;
    }

    units.into_iter().map(|unit| unit as f64 * UNIT_PERCENT).collect()
}

/// An invariant a non-normalized percentage sequence failed to meet.
///
/// Month numbers are 1-based project months; the sequence starts at month 2
/// because month 1 is fixed.
#[derive(Copy, Clone, Debug, PartialEq, derive_more::Display)]
pub enum ConstraintViolation {
    #[display("the percentages must add up to exactly 100% (got {_0:.2}%)")]
    SumNotHundred(f64),

    #[display("month {_0} is below the {_1}% minimum")]
    BelowMinimum(usize, f64),

    #[display("month {_0} must be a multiple of 5%")]
    NotMultipleOfFive(usize),
}

/// Check the invariants the normalizing mode guarantees by construction.
#[must_use]
pub fn validate(percentages: &[f64], min_percent: f64) -> Vec<ConstraintViolation> {
    let mut violations = Vec::new();
    let sum: f64 = percentages.iter().sum();
    if (sum - 100.0).abs() > SUM_EPSILON {
        violations.push(ConstraintViolation::SumNotHundred(sum));
    }
    for (index, &pct) in percentages.iter().enumerate() {
        let month = index + 2;
        if pct < min_percent - FLOOR_EPSILON {
            violations.push(ConstraintViolation::BelowMinimum(month, min_percent));
        }
        if (pct / UNIT_PERCENT - (pct / UNIT_PERCENT).round()).abs() > FLOOR_EPSILON {
            violations.push(ConstraintViolation::NotMultipleOfFive(month));
        }
    }
    violations
}
