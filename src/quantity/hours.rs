use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use serde::{Deserialize, Serialize};

/// Booked effort in hours.
#[derive(
    Clone,
    Copy,
    Default,
    Deserialize,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Sub,
    derive_more::Sum,
)]
#[must_use]
pub struct Hours(pub f64);

impl Hours {
    pub const ZERO: Self = Self(0.0);

    pub fn min(mut self, rhs: Self) -> Self {
        if rhs < self {
            self = rhs;
        }
        self
    }

    pub fn max(mut self, rhs: Self) -> Self {
        if rhs > self {
            self = rhs;
        }
        self
    }

    /// Round to two decimal places.
    pub fn round_to_hundredths(self) -> Self {
        Self((self.0 * 100.0).round() / 100.0)
    }
}

impl Display for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} h", self.0)
    }
}

impl Debug for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Mul<f64> for Hours {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}
