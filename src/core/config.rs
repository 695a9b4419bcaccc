use std::str::FromStr;

use bon::Builder;
use serde::Deserialize;

use crate::{
    core::profile::ProfileShape,
    prelude::*,
    quantity::{cost::Reais, hours::Hours, rate::HourlyRate},
};

/// Hours always booked on the first project month, regardless of the profile.
pub const FIRST_MONTH_HOURS: Hours = Hours(70.0);

/// Default hour multiplier for the infrastructure installation charge.
pub const INSTALLATION_RATE_HOURS: f64 = 20.0;

/// Default hour multiplier for the initial mapping charge.
pub const MAPPING_RATE_HOURS: f64 = 50.0;

/// Everything one estimation run needs. Passed by value into the stateless
/// pipeline; identical configs always produce identical estimates.
#[derive(Builder, Clone, Debug)]
pub struct ProjectConfig {
    /// Project duration in months, the fixed first month included.
    pub total_months: usize,

    pub total_hours: Hours,

    pub hourly_rate: HourlyRate,

    /// Recurring charges billed every month.
    #[builder(default)]
    pub monthly_fees: Vec<MonthlyFee>,

    #[builder(default = OneOffCharge::RateHours(INSTALLATION_RATE_HOURS))]
    pub installation: OneOffCharge,

    #[builder(default = OneOffCharge::RateHours(MAPPING_RATE_HOURS))]
    pub mapping: OneOffCharge,

    /// Homologation is always quoted flat, never derived from hours.
    #[builder(default = Reais::ZERO)]
    pub homologation: Reais,

    /// Minimum percentage any distributed month may receive.
    #[builder(default = 5.0)]
    pub min_percent: f64,

    #[builder(default)]
    pub profile: ProfileMode,
}

/// How the percentages for months 2..N are obtained.
#[derive(Clone, Debug)]
pub enum ProfileMode {
    /// Generate them from the asymmetric-U shape.
    Auto(ProfileShape),

    /// Caller-supplied percentages, one per month after month 1.
    ///
    /// With `normalize` off the values are kept as given and rejected when
    /// they break the sum/floor/granularity invariants.
    Manual { percentages: Vec<f64>, normalize: bool },
}

impl Default for ProfileMode {
    fn default() -> Self {
        Self::Auto(ProfileShape::default())
    }
}

/// A charge incurred exactly once, independent of the project duration.
#[derive(Copy, Clone, Debug)]
pub enum OneOffCharge {
    /// A flat amount quoted directly.
    Flat(Reais),

    /// A multiple of the hourly rate.
    RateHours(f64),
}

impl OneOffCharge {
    pub fn resolve(self, rate: HourlyRate) -> Reais {
        match self {
            Self::Flat(amount) => amount,
            Self::RateHours(multiplier) => rate * multiplier,
        }
    }
}

/// A named recurring monthly charge, optionally switching to a new amount at
/// a pivot month.
#[derive(Clone, Debug, Deserialize)]
pub struct MonthlyFee {
    pub name: String,
    pub amount: Reais,
    #[serde(default)]
    pub pivot: Option<FeePivot>,
}

#[derive(Copy, Clone, Debug, Deserialize)]
pub struct FeePivot {
    /// 1-based project month from which the new amount applies (inclusive).
    pub month: usize,
    pub amount: Reais,
}

impl MonthlyFee {
    /// The amount charged on the given 1-based project month.
    pub fn amount_on(&self, month: usize) -> Reais {
        match self.pivot {
            Some(pivot) if month >= pivot.month => pivot.amount,
            _ => self.amount,
        }
    }
}

impl FromStr for MonthlyFee {
    type Err = Error;

    /// Parse `NAME=AMOUNT` or `NAME=AMOUNT@MONTH=NEWAMOUNT`.
    fn from_str(s: &str) -> Result<Self> {
        let (name, spec) = s.split_once('=').context("expected `NAME=AMOUNT`")?;
        ensure!(!name.is_empty(), "the fee needs a name");
        let Some((amount, pivot)) = spec.split_once('@') else {
            return Ok(Self { name: name.to_string(), amount: Reais(spec.parse()?), pivot: None });
        };
        let (month, new_amount) =
            pivot.split_once('=').context("expected `@MONTH=NEWAMOUNT` after the pivot marker")?;
        Ok(Self {
            name: name.to_string(),
            amount: Reais(amount.parse()?),
            pivot: Some(FeePivot { month: month.parse()?, amount: Reais(new_amount.parse()?) }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_fee_ok() {
        let fee: MonthlyFee = "nuvem=693".parse().unwrap();
        assert_eq!(fee.name, "nuvem");
        assert_eq!(fee.amount, Reais(693.0));
        assert!(fee.pivot.is_none());
    }

    #[test]
    fn parse_pivoted_fee_ok() {
        let fee: MonthlyFee = "cigam=693@5=2079".parse().unwrap();
        assert_eq!(fee.amount, Reais(693.0));
        let pivot = fee.pivot.unwrap();
        assert_eq!(pivot.month, 5);
        assert_eq!(pivot.amount, Reais(2079.0));
    }

    #[test]
    fn parse_unnamed_fee_fails() {
        assert!("=693".parse::<MonthlyFee>().is_err());
        assert!("693".parse::<MonthlyFee>().is_err());
    }

    #[test]
    fn pivot_switches_from_its_month_on() {
        let fee: MonthlyFee = "cigam=693@5=2079".parse().unwrap();
        assert_eq!(fee.amount_on(1), Reais(693.0));
        assert_eq!(fee.amount_on(4), Reais(693.0));
        assert_eq!(fee.amount_on(5), Reais(2079.0));
        assert_eq!(fee.amount_on(7), Reais(2079.0));
    }

    #[test]
    fn one_off_charge_resolves_against_the_rate() {
        let rate = HourlyRate(255.0);
        assert_eq!(OneOffCharge::Flat(Reais(1000.0)).resolve(rate), Reais(1000.0));
        assert_eq!(OneOffCharge::RateHours(20.0).resolve(rate), Reais(5100.0));
    }
}
