/// Here are the traits and answer types used by oracle-driven search
/// engines. They are defined here to keep the engines decoupled from the
/// capabilities they consume.

/// - `OracleResponse`: The answer an oracle gives for a single candidate,
///   locating the hidden target relative to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleResponse {
    /// The hidden target is below the candidate.
    Lower,
    /// The hidden target is above the candidate.
    Higher,
    /// The candidate is the hidden target.
    Exact,
}

/// - `MonotonicOracle`: A trait for black-box comparison capabilities. It
///   has a method `compare` that takes a candidate and reports where the
///   hidden target lies relative to it. Implementations must be monotonic
///   over the search range (answers cross from `Higher` to `Lower` exactly
///   once, around a single `Exact` point) and must answer repeated calls
///   with the same candidate identically. Engines assume this contract; a
///   non-monotonic implementation gets a well-defined error, not an
///   unbounded loop, but no particular answer.
pub trait MonotonicOracle {
    fn compare(&self, candidate: i64) -> OracleResponse;
}

/// - `HiddenTarget`: The library-provided deterministic oracle wrapping a
///   fixed target value. It is the test double for the search engines and
///   a ready-made adapter for callers that want to drive a search against
///   a value they already hold.
#[derive(Debug, Clone, Copy)]
pub struct HiddenTarget {
    target: i64,
}

impl HiddenTarget {
    pub fn new(target: i64) -> Self {
        HiddenTarget { target }
    }
}

impl MonotonicOracle for HiddenTarget {
    fn compare(&self, candidate: i64) -> OracleResponse {
        if self.target < candidate {
            OracleResponse::Lower
        } else if self.target > candidate {
            OracleResponse::Higher
        } else {
            OracleResponse::Exact
        }
    }
}
