//! Hunt–Szymanski style length-only engine.
//!
//! Instead of filling a table, record for every code point its positions in
//! the shorter sequence, then reduce LCS to the longest strictly increasing
//! subsequence of those positions while scanning the longer sequence. Cost
//! depends on the number of matching pairs rather than on `n·m`, which wins
//! on long inputs with little alphabet overlap, when only the length is
//! needed.

use std::collections::HashMap;

use crate::sequence::Sequence;
use crate::traits::LengthEngine;
use crate::utils::trim_common_affixes;

/// Position-list + LIS strategy for LCS length.
#[derive(Debug, Clone, Copy, Default)]
pub struct SparseLis;

impl LengthEngine for SparseLis {
    fn lcs_len(&self, a: &Sequence, b: &Sequence) -> usize {
        lcs_len(a, b)
    }
}

/// LCS length via the longest-increasing-subsequence reduction.
pub fn lcs_len(a: &Sequence, b: &Sequence) -> usize {
    lcs_len_slices(a.codes(), b.codes())
}

pub(crate) fn lcs_len_slices(a: &[u32], b: &[u32]) -> usize {
    if a.len() < b.len() {
        return lcs_len_slices(b, a);
    }
    let (prefix, suffix, core_a, core_b) = trim_common_affixes(a, b);
    if core_b.is_empty() {
        return prefix + suffix;
    }

    let mut positions: HashMap<u32, Vec<u32>> = HashMap::new();
    for (j, &code) in core_b.iter().enumerate() {
        positions.entry(code).or_default().push(j as u32);
    }

    // tails[l] = smallest end position of an increasing subsequence of
    // length l+1. Candidate positions for one code must be visited in
    // decreasing order so a single scan step cannot chain two matches of
    // the same element of `core_a`.
    let mut tails: Vec<u32> = Vec::with_capacity(core_b.len());
    for code in core_a {
        let Some(candidates) = positions.get(code) else {
            continue;
        };
        for &j in candidates.iter().rev() {
            match tails.last() {
                Some(&last) if j <= last => {
                    let slot = tails.partition_point(|&t| t < j);
                    tails[slot] = j;
                }
                _ => tails.push(j),
            }
        }
    }

    prefix + suffix + tails.len()
}
