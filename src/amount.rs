use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed-point decimal with 4 decimal places, stored as a scaled integer.
///
/// Used for both fuel quantities (liters or kg) and rupee amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Amount(i64);

impl Amount {
    const SCALE: i64 = 10_000;

    pub fn from_float(value: f64) -> Self {
        Amount((value * Self::SCALE as f64).round() as i64)
    }

    pub const fn from_scaled(value: i64) -> Self {
        Amount(value)
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Amount {
    /// Renders with up to 4 fractional digits; `{:.2}` style precision
    /// truncates to fewer.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        let whole = abs / Self::SCALE;
        let mut frac = abs % Self::SCALE;

        let digits = f.precision().unwrap_or(4).min(4);
        if digits == 0 {
            return write!(f, "{sign}{whole}");
        }
        for _ in digits..4 {
            frac /= 10;
        }
        write!(f, "{sign}{whole}.{frac:0digits$}")
    }
}

impl std::ops::Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::ops::Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Amount(self.0 - rhs.0)
    }
}

impl std::ops::SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl std::ops::Mul for Amount {
    type Output = Self;

    /// Fixed-point multiply: quantity × unit price.
    fn mul(self, rhs: Self) -> Self::Output {
        Amount(self.0 * rhs.0 / Self::SCALE)
    }
}

impl std::ops::Div for Amount {
    type Output = Self;

    /// Fixed-point divide (truncating): amount ÷ unit price.
    fn div(self, rhs: Self) -> Self::Output {
        Amount(self.0 * Self::SCALE / rhs.0)
    }
}
