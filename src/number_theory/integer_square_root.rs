use crate::prelude::IntegerMathError;

/// Computes the integer square root of a `u128` using the
/// Newton–Raphson method.
///
/// The integer square root of `x` is defined as the largest integer `r`
/// such that:
///
/// ```text
/// r * r <= x
/// ```
///
/// This function:
/// - Works for the entire `u128` domain
/// - Uses only integer arithmetic, so the convergence test is an exact
///   comparison of successive iterates rather than a floating-point
///   tolerance
/// - Never squares an iterate, so no intermediate value can overflow
/// - Converges in `O(log log x)` iterations
///
/// # Algorithm
/// The starting guess is `2^ceil(b / 2)`, where `b` is the bit length of
/// `x`. Since `x < 2^b`, that guess is strictly above the true root, and
/// from above the Newton iterate
///
/// ```text
/// a' = (a + x / a) / 2
/// ```
///
/// decreases monotonically while staying at or above `floor(sqrt(x))`.
/// The first step that fails to decrease therefore stops exactly on
/// `floor(sqrt(x))`, with no correction needed afterwards.
///
/// # Edge Cases
/// - `x = 0` returns 0 and `x = 1` returns 1, each being its own root.
pub fn integer_sqrt_u128(x: u128) -> u128 {
    if x < 2 {
        return x;
    }

    let bit_length = 128 - x.leading_zeros();
    let mut current = 1u128 << ((bit_length + 1) / 2);

    loop {
        let next = (current + x / current) / 2;
        if next >= current {
            return current;
        }
        current = next;
    }
}

/// Computes the integer square root of a `u128` by bisection.
///
/// Maintains the bracket `[low, high]` around the root and tests each
/// midpoint with a division:
///
/// ```text
/// mid <= x / mid    exactly when    mid * mid <= x    (mid > 0)
/// ```
///
/// so no product is ever formed and the full `u128` domain is safe.
///
/// Slower than [`integer_sqrt_u128`] (`O(log x)` halvings against
/// `O(log log x)` Newton steps), but derived independently, which makes
/// it a useful cross-check and a benchmark opponent for the Newton
/// strategy.
pub fn integer_sqrt_binary_search_u128(x: u128) -> u128 {
    if x < 2 {
        return x;
    }

    // The root of any x >= 2 is at most x / 2.
    let mut low: u128 = 1;
    let mut high: u128 = x / 2;
    let mut result: u128 = 1;

    while low <= high {
        let mid = low + (high - low) / 2;

        if mid <= x / mid {
            result = mid;
            low = mid + 1;
        } else {
            high = mid - 1;
        }
    }

    result
}

/// Checked signed entry point for [`integer_sqrt_u128`].
///
/// # Parameters
/// - `x`: The radicand. Any value in `[0, i64::MAX]` is supported.
///
/// # Returns
/// - `Ok(r)` – `floor(sqrt(x))`, satisfying `r * r <= x < (r + 1) * (r + 1)`.
/// - `Err(IntegerMathError::InvalidInput)` – If `x` is negative.
///
/// The result always fits back into an `i64` because it never exceeds
/// the input.
pub fn integer_sqrt(x: i64) -> Result<i64, IntegerMathError> {
    if x < 0 {
        return Err(IntegerMathError::InvalidInput(
            "square root of a negative integer",
        ));
    }
    Ok(integer_sqrt_u128(x as u128) as i64)
}
