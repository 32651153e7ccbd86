//! The similarity engines.
//!
//! Several strategies solve the same problems with different trade-offs:
//! - [`dense`]      : reference DP for lengths, intervals, edit distance.
//! - [`sparse`]     : Hunt–Szymanski position lists, length only.
//! - [`hirschberg`] : linear-space interval reconstruction.
//! - [`myers`]      : edit-graph diff, `O((n+m)·D)`.
//! - [`substring`]  : longest common substring, two variants.
//! - [`banded`]     : k-bounded edit distance with an "exceeds" sentinel.

pub mod banded;
pub mod dense;
pub mod hirschberg;
pub mod myers;
pub mod sparse;
pub mod substring;

use crate::interval::MatchInterval;
use crate::sequence::Sequence;
use crate::utils::fits_dense_table;

/// Interval reconstruction with automatic strategy selection.
///
/// Uses the dense table while it fits the cell budget and Hirschberg's
/// linear-space recursion beyond it. Both cover the same total length;
/// run boundaries may differ between the two on tied subsequences.
pub fn lcs_intervals_auto(a: &Sequence, b: &Sequence) -> Vec<MatchInterval> {
    if fits_dense_table(a.len(), b.len()) {
        dense::lcs_intervals(a, b)
    } else {
        hirschberg::lcs_intervals(a, b)
    }
}
