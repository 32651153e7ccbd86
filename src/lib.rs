//! Sequence similarity and alignment engines.
//!
//! This crate computes how two pieces of text relate: the length and
//! location of their longest common subsequence, their longest common
//! substring, and their Levenshtein distance, plus a distance bound for
//! cheap rejection and a parallel dispatcher for one-against-many
//! workloads.
//!
//! ## Core idea
//! 1. Decode text into a [`Sequence`] of code points, so a position always
//!    means a character, never a byte.
//! 2. Pick an engine for the result shape you need: a bare length, a list
//!    of [`MatchInterval`] runs, or a distance.
//! 3. For collections, let [`batch::GroupDispatcher`] fan the pairs out
//!    over a worker pool and hand back results in input order.
//!
//! The convenience functions below accept `&str` and choose a strategy
//! for you; the [`engines`] module exposes each algorithm directly.
//!
//! ## Quick start
//! ```
//! assert_eq!(seqsim::lcs_len("ABCBDAB", "BDCABA"), 4);
//! assert_eq!(seqsim::edit_distance("kitten", "sitting"), 3);
//!
//! let iv = seqsim::longest_substring("abcdxyz", "xyzabcd").unwrap();
//! assert_eq!((iv.start_a, iv.start_b, iv.len), (0, 3, 4));
//! ```
//!
//! ## Built-in engines
//! - dense DP: the reference formulation for all three problems
//! - Hunt–Szymanski position lists: LCS length in match-pair time
//! - Hirschberg: LCS intervals in linear space
//! - Myers: LCS intervals in `O((n+m)·D)`
//! - diagonal and rolling-row longest-substring search
//! - banded Levenshtein with an explicit "exceeds k" sentinel

pub mod batch;
pub mod engines;
pub mod error;
pub mod interval;
pub mod sequence;
pub mod traits;
mod utils;

pub use crate::batch::{GroupDispatcher, Metric};
pub use crate::engines::banded::BoundedDistance;
pub use crate::error::{Error, Result};
pub use crate::interval::{covered_len, MatchInterval};
pub use crate::sequence::Sequence;

use crate::engines::{banded, dense, myers, sparse, substring};

/// Length of the longest common subsequence of two strings.
pub fn lcs_len(a: &str, b: &str) -> usize {
    dense::lcs_len(&Sequence::from(a), &Sequence::from(b))
}

/// LCS length via the position-list engine; same answer as [`lcs_len`],
/// usually faster on long inputs with little alphabet overlap.
pub fn lcs_len_sparse(a: &str, b: &str) -> usize {
    sparse::lcs_len(&Sequence::from(a), &Sequence::from(b))
}

/// Aligned runs of one longest common subsequence, left to right.
///
/// Strategy is chosen by input size; see
/// [`engines::lcs_intervals_auto`].
pub fn lcs_intervals(a: &str, b: &str) -> Vec<MatchInterval> {
    engines::lcs_intervals_auto(&Sequence::from(a), &Sequence::from(b))
}

/// Aligned runs via the Myers edit-graph engine; preferable when the
/// inputs are known to be similar.
pub fn lcs_intervals_diff(a: &str, b: &str) -> Vec<MatchInterval> {
    myers::lcs_intervals(&Sequence::from(a), &Sequence::from(b))
}

/// Location of the longest common substring, or `None` if the strings
/// share no character.
pub fn longest_substring(a: &str, b: &str) -> Option<MatchInterval> {
    substring::longest_match(&Sequence::from(a), &Sequence::from(b))
}

/// Length of the longest common substring.
pub fn longest_substring_len(a: &str, b: &str) -> usize {
    substring::longest_match_len(&Sequence::from(a), &Sequence::from(b))
}

/// Levenshtein distance between two strings.
pub fn edit_distance(a: &str, b: &str) -> usize {
    dense::edit_distance(&Sequence::from(a), &Sequence::from(b))
}

/// Levenshtein distance if it is at most `k`, the
/// [`BoundedDistance::Exceeds`] sentinel otherwise.
pub fn edit_distance_bounded(a: &str, b: &str, k: usize) -> BoundedDistance {
    banded::edit_distance_bounded(&Sequence::from(a), &Sequence::from(b), k)
}
