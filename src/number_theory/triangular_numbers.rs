use crate::{
    number_theory::integer_square_root::integer_sqrt_u128, prelude::IntegerMathError,
};

/// Computes the `k`-th triangular number over the `u128` domain.
///
/// # Overview
/// The `k`-th triangular number is the sum of the first `k` positive
/// integers:
///
/// ```text
/// T(k) = 1 + 2 + ... + k = k * (k + 1) / 2
/// ```
///
/// Exactly one of `k` and `k + 1` is even, so that factor is halved
/// before multiplying and the product is exact: the division never
/// truncates and the only way to fail is a genuine overflow of the
/// final product.
///
/// # Returns
/// - `Some(T(k))` when the result fits in a `u128`.
/// - `None` when it does not.
pub fn triangular_u128(k: u128) -> Option<u128> {
    let (even, odd) = if k % 2 == 0 {
        (k, k.checked_add(1)?)
    } else {
        (k.checked_add(1)?, k)
    };
    (even / 2).checked_mul(odd)
}

/// Computes the `k`-th triangular number on the checked signed surface.
///
/// # Parameters
/// - `k`: The index. Any value in `[0, i64::MAX]` is accepted, though
///   only indices up to 4294967295 produce a sum that fits the output
///   type.
///
/// # Returns
/// - `Ok(T(k))` – The sum `k * (k + 1) / 2`.
/// - `Err(IntegerMathError::InvalidInput)` – If `k` is negative.
/// - `Err(IntegerMathError::OutOfRange)` – If the sum exceeds `i64::MAX`.
pub fn triangular_number(k: i64) -> Result<i64, IntegerMathError> {
    if k < 0 {
        return Err(IntegerMathError::InvalidInput(
            "triangular number of a negative index",
        ));
    }
    let sum = triangular_u128(k as u128).ok_or(IntegerMathError::OutOfRange(
        "triangular number exceeds the unsigned 128-bit domain",
    ))?;
    i64::try_from(sum).map_err(|_| {
        IntegerMathError::OutOfRange("triangular number exceeds the signed 64-bit domain")
    })
}

/// Inverts the triangular-number function.
///
/// # Overview
/// Returns the largest integer `k >= 0` whose triangular number does
/// not exceed `n`:
///
/// ```text
/// k * (k + 1) / 2 <= n < (k + 1) * (k + 2) / 2
/// ```
///
/// # Algorithm
/// Solving `k * (k + 1) / 2 = n` for `k` gives the closed form
/// `k = (sqrt(8n + 1) - 1) / 2`. The discriminant `8n + 1` is formed in
/// `u128`, where it cannot overflow for any non-negative `i64` input,
/// and its root is taken with the exact integer square root. The
/// estimate one above the closed form then overshoots the answer by
/// exactly one, so the downward correction loop runs a single step.
/// With a floating-point root the estimate could land one or two off
/// near rounding boundaries; the exact root removes that hazard while
/// keeping the loop as a checked invariant rather than an assumption.
///
/// # Edge Cases
/// - `n = 0` returns 0.
///
/// # Parameters
/// - `n`: The value to invert. Any value in `[0, i64::MAX]` is
///   supported.
///
/// # Returns
/// - `Ok(k)` – The largest index with `T(k) <= n`.
/// - `Err(IntegerMathError::InvalidInput)` – If `n` is negative.
pub fn triangular_inverse(n: i64) -> Result<i64, IntegerMathError> {
    if n < 0 {
        return Err(IntegerMathError::InvalidInput(
            "triangular inverse of a negative integer",
        ));
    }

    let wide = n as u128;
    let root = integer_sqrt_u128(8 * wide + 1);
    let mut k = (root - 1) / 2 + 1;
    while k * (k + 1) / 2 > wide {
        k -= 1;
    }
    Ok(k as i64)
}
