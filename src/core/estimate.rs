use itertools::Itertools;

use crate::{
    core::{
        config::{ProfileMode, ProjectConfig},
        hours,
        profile::ramp_percentages,
        quantize::{ConstraintViolation, quantize_to_fives, validate},
        schedule::{Estimate, roll_up},
    },
    prelude::*,
};

#[derive(Debug, PartialEq, derive_more::Display, derive_more::Error)]
pub enum EstimateError {
    #[display("the project needs at least one month")]
    NoMonths,

    #[display("expected {expected} percentages for the months after month 1, got {actual}")]
    WrongPercentageCount { expected: usize, actual: usize },

    #[display("invalid percentages: {}", violations.iter().join("; "))]
    InvalidPercentages { violations: Vec<ConstraintViolation> },
}

/// Run the whole pipeline: profile → quantizer → hour allocator → cost
/// rollup. Pure; identical configs yield identical estimates.
#[instrument(skip_all, fields(months = config.total_months))]
pub fn estimate(config: &ProjectConfig) -> Result<Estimate, EstimateError> {
    if config.total_months == 0 {
        return Err(EstimateError::NoMonths);
    }
    let k = config.total_months - 1;

    let (raw, normalize) = match &config.profile {
        ProfileMode::Auto(shape) => (ramp_percentages(k, *shape), true),
        ProfileMode::Manual { percentages, normalize } => {
            if percentages.len() != k {
                return Err(EstimateError::WrongPercentageCount {
                    expected: k,
                    actual: percentages.len(),
                });
            }
            (percentages.clone(), *normalize)
        }
    };

    let quantized = quantize_to_fives(&raw, normalize, config.min_percent);
    if !normalize && k > 0 {
        let violations = validate(&quantized, config.min_percent);
        if !violations.is_empty() {
            return Err(EstimateError::InvalidPercentages { violations });
        }
    }
    debug!(?quantized, "profile settled");

    let plan = hours::allocate(config.total_hours, &quantized);
    Ok(roll_up(config, &quantized, &plan))
}
