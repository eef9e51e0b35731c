//! Lovelace amounts.
//!
//! Amounts are fixed-point integers (u64 lovelace) to avoid floating-point errors.
//! 1 ADA = 1 000 000 lovelace.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use crate::error::TypeError;

/// Lovelace per ADA.
pub const LOVELACE_PER_ADA: u64 = 1_000_000;

/// Number of fractional ADA digits shown in the UI.
const DISPLAY_DECIMALS: u32 = 3;

/// An amount of lovelace. Never negative by construction.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Lovelace(u64);

impl Lovelace {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn from_ada(ada: u64) -> Self {
        Self(ada.saturating_mul(LOVELACE_PER_ADA))
    }

    pub fn raw(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Parse a decimal ADA amount such as `"12"` or `"0.5"`.
    ///
    /// At most six fractional digits are accepted (one lovelace).
    pub fn parse_ada(input: &str) -> Result<Self, TypeError> {
        let s = input.trim();
        let invalid = || TypeError::InvalidAmount(input.to_string());
        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        if frac.len() > 6 {
            return Err(invalid());
        }
        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let mut frac_raw: u64 = if frac.is_empty() {
            0
        } else {
            frac.parse().map_err(|_| invalid())?
        };
        for _ in frac.len()..6 {
            frac_raw *= 10;
        }
        whole
            .checked_mul(LOVELACE_PER_ADA)
            .and_then(|w| w.checked_add(frac_raw))
            .map(Self)
            .ok_or_else(invalid)
    }

    /// ADA value floored to three decimals with trailing zeros trimmed.
    ///
    /// `1_234_567_891` lovelace renders as `"1234.567"`, `2_000_000` as `"2"`.
    pub fn to_ada_display(&self) -> String {
        let step = LOVELACE_PER_ADA / 10u64.pow(DISPLAY_DECIMALS);
        let whole = self.0 / LOVELACE_PER_ADA;
        let frac = (self.0 % LOVELACE_PER_ADA) / step;
        if frac == 0 {
            return whole.to_string();
        }
        let digits = format!("{:0width$}", frac, width = DISPLAY_DECIMALS as usize);
        format!("{whole}.{}", digits.trim_end_matches('0'))
    }
}

impl Add for Lovelace {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Lovelace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} lovelace", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_floors_to_three_decimals() {
        assert_eq!(Lovelace::new(1_234_567_891).to_ada_display(), "1234.567");
        assert_eq!(Lovelace::new(999).to_ada_display(), "0");
        assert_eq!(Lovelace::new(1_999_999).to_ada_display(), "1.999");
    }

    #[test]
    fn display_trims_trailing_zeros() {
        assert_eq!(Lovelace::new(2_000_000).to_ada_display(), "2");
        assert_eq!(Lovelace::new(2_500_000).to_ada_display(), "2.5");
        assert_eq!(Lovelace::new(2_050_000).to_ada_display(), "2.05");
    }

    #[test]
    fn parse_ada_whole_and_fractional() {
        assert_eq!(Lovelace::parse_ada("12").unwrap(), Lovelace::from_ada(12));
        assert_eq!(Lovelace::parse_ada("0.5").unwrap(), Lovelace::new(500_000));
        assert_eq!(Lovelace::parse_ada(".000001").unwrap(), Lovelace::new(1));
        assert_eq!(Lovelace::parse_ada(" 3. ").unwrap(), Lovelace::from_ada(3));
    }

    #[test]
    fn parse_ada_rejects_garbage() {
        for bad in ["", ".", "-1", "1e6", "abc", "1.0000001", "1,5"] {
            assert!(Lovelace::parse_ada(bad).is_err(), "{bad:?} should fail");
        }
    }

    #[test]
    fn parse_ada_rejects_overflow() {
        assert!(Lovelace::parse_ada("18446744073709551615").is_err());
    }
}
