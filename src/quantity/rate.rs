use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use serde::{Deserialize, Serialize};

use crate::quantity::{cost::Reais, hours::Hours};

/// Reais charged per worked hour.
#[derive(
    Clone,
    Copy,
    Default,
    Deserialize,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::From,
    derive_more::FromStr,
)]
#[must_use]
pub struct HourlyRate(pub f64);

impl HourlyRate {
    pub const ZERO: Self = Self(0.0);
}

impl Display for HourlyRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "R$ {:.2}/h", self.0)
    }
}

impl Debug for HourlyRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Mul<HourlyRate> for Hours {
    type Output = Reais;

    fn mul(self, rhs: HourlyRate) -> Self::Output {
        Reais(self.0 * rhs.0)
    }
}

/// Rate times an hour multiplier, for charges quoted as «N times the rate».
impl Mul<f64> for HourlyRate {
    type Output = Reais;

    fn mul(self, rhs: f64) -> Self::Output {
        Reais(self.0 * rhs)
    }
}
