//! Strategy traits implemented by the engines.
//!
//! Several algorithms solve the same problem with different time/space
//! trade-offs. Each capability is a separate trait so callers can hold a
//! strategy for exactly the result shape they need: a bare LCS length, or a
//! reconstructed list of aligned runs.
//!
//! All strategies over the same trait must agree on the scalar answer;
//! interval *boundaries* may differ between strategies when several equally
//! long subsequences exist, but the total covered length may not.

use crate::interval::MatchInterval;
use crate::sequence::Sequence;

/// Computes the length of the longest common subsequence.
pub trait LengthEngine {
    fn lcs_len(&self, a: &Sequence, b: &Sequence) -> usize;
}

/// Reconstructs the aligned runs of one longest common subsequence.
///
/// Returned intervals are ordered left to right, maximal, and cover exactly
/// `lcs_len(a, b)` positions in total.
pub trait IntervalEngine {
    fn lcs_intervals(&self, a: &Sequence, b: &Sequence) -> Vec<MatchInterval>;
}
