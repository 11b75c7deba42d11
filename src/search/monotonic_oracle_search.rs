/// This file implements three-way binary search against a comparison oracle.
/// The engine owns no knowledge of the target: it only narrows the interval that
/// must contain it, asking the oracle one candidate per step. Because every answer
/// discards at least half of the remaining interval, a range of `n` candidates is
/// resolved in `O(log n)` oracle calls, which is what makes the engine usable when
/// each comparison is expensive (a remote call, a measurement, a simulation run).
/// The engine assumes the strict single-crossing contract documented on the
/// `MonotonicOracle` trait; an implementation that violates it can steer the
/// search anywhere, but only into a well-defined error, never into an unbounded
/// loop.
use crate::{
    prelude::IntegerMathError,
    search::search_traits::{MonotonicOracle, OracleResponse},
};

/// Finds the hidden target in `[1, n]` by interrogating the oracle.
///
/// # Parameters
/// - `n`: Upper end of the search range. Must be at least 1; any value up
///   to `i64::MAX` is supported.
/// - `oracle`: The comparison capability. See `MonotonicOracle` for the
///   contract it must honor.
///
/// # Returns
/// - `Ok(target)` – The unique candidate the oracle answered `Exact` for.
/// - `Err(IntegerMathError::InvalidInput)` – If `n < 1`.
/// - `Err(IntegerMathError::TargetNotFound)` – If the interval is exhausted
///   without an `Exact` answer, which means the target lies outside `[1, n]`
///   or the oracle broke the monotonicity contract.
pub fn monotonic_search(
    n: i64,
    oracle: &dyn MonotonicOracle,
) -> Result<i64, IntegerMathError> {
    if n < 1 {
        return Err(IntegerMathError::InvalidInput(
            "search range must contain at least the candidate 1",
        ));
    }

    // The interval is tracked in i128: the midpoint sum below would overflow
    // an i64 once right approaches i64::MAX, and so would the +1 step after
    // a Higher answer at the top of the range.
    let mut left: i128 = 1;
    let mut right: i128 = n as i128;

    while left <= right {
        // Bias the midpoint to the upper half. With the lower-biased midpoint
        // a two-element interval would re-test its lower element after a
        // Higher answer and never shrink.
        let candidate = (left + right + 1) / 2;

        match oracle.compare(candidate as i64) {
            OracleResponse::Exact => return Ok(candidate as i64),
            OracleResponse::Lower => right = candidate - 1,
            OracleResponse::Higher => left = candidate + 1,
        }
    }

    Err(IntegerMathError::TargetNotFound(
        "oracle reported no exact match anywhere in the range",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search_traits::HiddenTarget;
    use std::cell::Cell;

    /// Oracle wrapper that counts how many comparisons the engine spends.
    struct CountingOracle {
        inner: HiddenTarget,
        calls: Cell<u32>,
    }

    impl MonotonicOracle for CountingOracle {
        fn compare(&self, candidate: i64) -> OracleResponse {
            self.calls.set(self.calls.get() + 1);
            self.inner.compare(candidate)
        }
    }

    /// Oracle that always claims the target is above the candidate.
    struct AlwaysHigher;

    impl MonotonicOracle for AlwaysHigher {
        fn compare(&self, _: i64) -> OracleResponse {
            OracleResponse::Higher
        }
    }

    /// Oracle that always claims the target is below the candidate.
    struct AlwaysLower;

    impl MonotonicOracle for AlwaysLower {
        fn compare(&self, _: i64) -> OracleResponse {
            OracleResponse::Lower
        }
    }

    #[test]
    fn test_every_target_in_small_ranges_is_found() {
        for n in 1i64..=64 {
            for target in 1..=n {
                let oracle = HiddenTarget::new(target);
                assert_eq!(monotonic_search(n, &oracle), Ok(target));
            }
        }
    }

    #[test]
    fn test_concrete_guessing_game() {
        let oracle = HiddenTarget::new(6);
        assert_eq!(monotonic_search(10, &oracle), Ok(6));
    }

    #[test]
    fn test_full_range_targets_and_call_count() {
        for target in [1, 2, i64::MAX / 2, i64::MAX - 1, i64::MAX] {
            let oracle = CountingOracle {
                inner: HiddenTarget::new(target),
                calls: Cell::new(0),
            };
            assert_eq!(monotonic_search(i64::MAX, &oracle), Ok(target));
            // A 63-bit range must resolve within 63 halvings.
            assert!(oracle.calls.get() <= 63);
        }
    }

    #[test]
    fn test_empty_and_negative_ranges_are_rejected() {
        let oracle = HiddenTarget::new(1);
        assert_eq!(
            monotonic_search(0, &oracle),
            Err(IntegerMathError::InvalidInput(
                "search range must contain at least the candidate 1"
            ))
        );
        assert_eq!(
            monotonic_search(-3, &oracle),
            Err(IntegerMathError::InvalidInput(
                "search range must contain at least the candidate 1"
            ))
        );
    }

    #[test]
    fn test_contract_breaking_oracles_terminate() {
        assert_eq!(
            monotonic_search(1000, &AlwaysHigher),
            Err(IntegerMathError::TargetNotFound(
                "oracle reported no exact match anywhere in the range"
            ))
        );
        assert_eq!(
            monotonic_search(1000, &AlwaysLower),
            Err(IntegerMathError::TargetNotFound(
                "oracle reported no exact match anywhere in the range"
            ))
        );
        // A target just outside the range is indistinguishable from a broken
        // contract: the interval drains and the engine reports it.
        let oracle = HiddenTarget::new(11);
        assert_eq!(
            monotonic_search(10, &oracle),
            Err(IntegerMathError::TargetNotFound(
                "oracle reported no exact match anywhere in the range"
            ))
        );
    }
}
