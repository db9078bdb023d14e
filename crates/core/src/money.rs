//! Euro amounts held as integer cents.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Fixed VAT rate applied to end-user prices.
pub const VAT_RATE_PERCENT: u64 = 24;

/// Price in the smallest currency unit (euro cents).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Convert a decimal euro amount (as found in price lists) to cents.
    ///
    /// Rounds to the nearest cent. Negative and non-finite amounts are rejected.
    pub fn from_euros(euros: f64) -> DomainResult<Self> {
        if !euros.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if euros < 0.0 {
            return Err(DomainError::validation(format!(
                "price must not be negative (got {euros})"
            )));
        }
        let cents = (euros * 100.0).round();
        if cents > u64::MAX as f64 {
            return Err(DomainError::validation("price is out of range"));
        }
        Ok(Self(cents as u64))
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    pub fn euros(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// The amount with VAT added, rounded half-up to the cent.
    pub fn with_vat(&self) -> Money {
        let gross = (self.0 as u128 * (100 + VAT_RATE_PERCENT) as u128 + 50) / 100;
        Money(gross.min(u64::MAX as u128) as u64)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02} EUR", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_euros_rounds_to_nearest_cent() {
        assert_eq!(Money::from_euros(3890.0).unwrap().cents(), 389_000);
        assert_eq!(Money::from_euros(12.345).unwrap().cents(), 1_235);
        assert_eq!(Money::from_euros(0.0).unwrap(), Money::ZERO);
    }

    #[test]
    fn from_euros_rejects_negative_and_nan() {
        assert!(matches!(
            Money::from_euros(-1.0),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            Money::from_euros(f64::NAN),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            Money::from_euros(f64::INFINITY),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn with_vat_adds_twenty_four_percent() {
        assert_eq!(Money::from_cents(100_000).with_vat().cents(), 124_000);
        // 0.01 * 1.24 = 0.0124 -> rounds down to one cent
        assert_eq!(Money::from_cents(1).with_vat().cents(), 1);
        // 0.03 * 1.24 = 0.0372 -> rounds half-up to four cents
        assert_eq!(Money::from_cents(3).with_vat().cents(), 4);
    }

    #[test]
    fn display_formats_euros_and_cents() {
        assert_eq!(Money::from_cents(389_005).to_string(), "3890.05 EUR");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: VAT-inclusive price stays within half a cent of net * 1.24.
            #[test]
            fn vat_is_within_rounding_of_exact(cents in 0u64..1_000_000_000) {
                let gross = Money::from_cents(cents).with_vat().cents() as i128;
                let exact_times_100 = cents as i128 * 124;
                prop_assert!((gross * 100 - exact_times_100).abs() <= 50);
            }

            /// Property: VAT never lowers a price.
            #[test]
            fn vat_is_monotone(a in 0u64..1_000_000_000, b in 0u64..1_000_000_000) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                prop_assert!(Money::from_cents(lo).with_vat() <= Money::from_cents(hi).with_vat());
            }
        }
    }
}
