use std::{
    fmt::{Debug, Display, Formatter},
    ops::{Div, Mul},
};

use serde::{Deserialize, Serialize};

use crate::fmt::brl;

/// Monetary amount in Brazilian reais.
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
    derive_more::Neg,
    derive_more::Sub,
    derive_more::Sum,
)]
#[must_use]
pub struct Reais(pub f64);

impl Reais {
    pub const ZERO: Self = Self(0.0);

    /// Round to whole cents.
    pub fn round_to_cents(self) -> Self {
        Self((self.0 * 100.0).round() / 100.0)
    }
}

impl Display for Reais {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", brl(self.0))
    }
}

impl Debug for Reais {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Mul<f64> for Reais {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Div<f64> for Reais {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn round_to_cents_ok() {
        assert_abs_diff_eq!(Reais(1.005).round_to_cents().0, 1.01);
        assert_abs_diff_eq!(Reais(17_850.004).round_to_cents().0, 17_850.0);
    }

    #[test]
    fn display_ok() {
        assert_eq!(Reais(1234.5).to_string(), "R$ 1.234,50");
    }
}
