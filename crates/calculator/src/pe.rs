//! Population-equivalent sizing.

/// Reference water usage in litres per person per day (1 PE).
pub const REFERENCE_USAGE_LITRES: f64 = 150.0;

/// `ceil(occupants * usage / 150)`.
///
/// Callers pass validated input (`effective_occupants >= 1`, `usage > 0`),
/// for which the result is always at least 1.
pub fn compute_pe(effective_occupants: u32, water_usage_per_person: f64) -> u32 {
    let load = effective_occupants as f64 * water_usage_per_person / REFERENCE_USAGE_LITRES;
    let pe = load.ceil();
    if pe < 1.0 {
        1
    } else if pe >= u32::MAX as f64 {
        u32::MAX
    } else {
        pe as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_usage_is_one_pe_per_person() {
        assert_eq!(compute_pe(1, 150.0), 1);
        assert_eq!(compute_pe(4, 150.0), 4);
        assert_eq!(compute_pe(37, 150.0), 37);
    }

    #[test]
    fn rounds_partial_load_up() {
        // 4 * 160 / 150 = 4.27
        assert_eq!(compute_pe(4, 160.0), 5);
        // 3 * 100 / 150 = 2
        assert_eq!(compute_pe(3, 100.0), 2);
        // 1 * 10 / 150 = 0.07
        assert_eq!(compute_pe(1, 10.0), 1);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn pe_is_positive(n in 1u32..10_000, usage in 1.0f64..1_000.0) {
                prop_assert!(compute_pe(n, usage) >= 1);
            }

            #[test]
            fn reference_usage_is_identity(n in 1u32..100_000) {
                prop_assert_eq!(compute_pe(n, REFERENCE_USAGE_LITRES), n);
            }

            #[test]
            fn monotone_in_occupants(n in 1u32..10_000, extra in 0u32..1_000, usage in 1.0f64..1_000.0) {
                prop_assert!(compute_pe(n, usage) <= compute_pe(n + extra, usage));
            }

            #[test]
            fn monotone_in_usage(n in 1u32..10_000, usage in 1.0f64..1_000.0, extra in 0.0f64..500.0) {
                prop_assert!(compute_pe(n, usage) <= compute_pe(n, usage + extra));
            }
        }
    }
}
