//! Hirschberg's linear-space LCS reconstruction.
//!
//! Divide-and-conquer over the longer sequence: compute the forward DP row
//! for the left half and the reverse DP row for the right half, split the
//! shorter sequence at the column maximizing their sum, and recurse. Only
//! two rows are live at any point, so memory stays `O(n+m)` while the
//! result covers exactly as many positions as the dense engine's.

use crate::engines::dense::{lcs_row_forward, lcs_row_reverse};
use crate::interval::{covered_len, MatchInterval, RunStitcher};
use crate::sequence::Sequence;
use crate::traits::{IntervalEngine, LengthEngine};
use crate::utils::trim_common_affixes;

/// Linear-space divide-and-conquer strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hirschberg;

impl IntervalEngine for Hirschberg {
    fn lcs_intervals(&self, a: &Sequence, b: &Sequence) -> Vec<MatchInterval> {
        lcs_intervals(a, b)
    }
}

impl LengthEngine for Hirschberg {
    fn lcs_len(&self, a: &Sequence, b: &Sequence) -> usize {
        covered_len(&lcs_intervals(a, b))
    }
}

/// LCS interval reconstruction in `O(n+m)` space.
pub fn lcs_intervals(a: &Sequence, b: &Sequence) -> Vec<MatchInterval> {
    lcs_intervals_slices(a.codes(), b.codes())
}

pub(crate) fn lcs_intervals_slices(a: &[u32], b: &[u32]) -> Vec<MatchInterval> {
    if a.len() < b.len() {
        return lcs_intervals_slices(b, a)
            .into_iter()
            .map(MatchInterval::transposed)
            .collect();
    }

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("hirschberg", n = a.len(), m = b.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let (prefix, suffix, core_a, core_b) = trim_common_affixes(a, b);

    let mut stitcher = RunStitcher::new();
    stitcher.push_run(0, 0, prefix);
    if !core_b.is_empty() {
        let mut pairs = Vec::new();
        split_recursive(core_a, 0, core_b, 0, &mut pairs);
        for (i, j) in pairs {
            stitcher.push_pair(prefix + i, prefix + j);
        }
    }
    stitcher.push_run(prefix + core_a.len(), prefix + core_b.len(), suffix);
    stitcher.finish()
}

/// Collect `(i, j)` match pairs of one optimal LCS, in ascending order.
///
/// Offsets are positions of the slices within the trimmed cores.
fn split_recursive(
    a: &[u32],
    a_off: usize,
    b: &[u32],
    b_off: usize,
    out: &mut Vec<(usize, usize)>,
) {
    if a.is_empty() || b.is_empty() {
        return;
    }
    if a.len() == 1 {
        if let Some(p) = b.iter().position(|&code| code == a[0]) {
            out.push((a_off, b_off + p));
        }
        return;
    }

    let mid = a.len() / 2;
    // rows are dropped before recursing, keeping peak memory at O(m)
    let split = {
        let forward = lcs_row_forward(&a[..mid], b);
        let reverse = lcs_row_reverse(&a[mid..], b);
        let mut split = 0;
        let mut best = 0;
        for (j, (f, r)) in forward.iter().zip(&reverse).enumerate() {
            let sum = f + r;
            if sum > best {
                best = sum;
                split = j;
            }
        }
        split
    };

    split_recursive(&a[..mid], a_off, &b[..split], b_off, out);
    split_recursive(&a[mid..], a_off + mid, &b[split..], b_off + split, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::dense;

    fn seq(s: &str) -> Sequence {
        Sequence::from(s)
    }

    #[test]
    fn covers_same_length_as_dense() {
        let samples = [
            ("ABCBDAB", "BDCABA"),
            ("AGGTAB", "GXTXAYB"),
            ("ACCGGTCGAGTGCGCGGAAGCCGGCCGAA", "GTCGTTCGGAATGCCGTTGCTCTGTAAA"),
            ("ABAB", "BABA"),
            ("", "XYZ"),
            ("SAME", "SAME"),
        ];
        for (a, b) in samples {
            let (a, b) = (seq(a), seq(b));
            let runs = lcs_intervals(&a, &b);
            assert_eq!(
                covered_len(&runs),
                dense::lcs_len(&a, &b),
                "coverage mismatch on {a:?} vs {b:?}"
            );
        }
    }

    #[test]
    fn intervals_reference_matching_content() {
        let a = seq("ACCGGTCGAGTGCGCGGAAGCCGGCCGAA");
        let b = seq("GTCGTTCGGAATGCCGTTGCTCTGTAAA");
        for iv in lcs_intervals(&a, &b) {
            assert_eq!(
                &a.codes()[iv.start_a..iv.start_a + iv.len],
                &b.codes()[iv.start_b..iv.start_b + iv.len]
            );
        }
    }

    #[test]
    fn intervals_are_ordered_and_disjoint() {
        let a = seq("XMJYAUZ");
        let b = seq("MZJAWXU");
        let runs = lcs_intervals(&a, &b);
        for w in runs.windows(2) {
            assert!(w[0].start_a + w[0].len <= w[1].start_a);
            assert!(w[0].start_b + w[0].len <= w[1].start_b);
        }
    }

    #[test]
    fn shorter_first_argument_keeps_caller_order() {
        let a = seq("中文");
        let b = seq("ab中文cd");
        let runs = lcs_intervals(&a, &b);
        assert_eq!(
            runs,
            vec![MatchInterval {
                start_a: 0,
                start_b: 2,
                len: 2
            }]
        );
    }

    #[test]
    fn single_element_sides() {
        assert_eq!(
            lcs_intervals(&seq("A"), &seq("ZZAZ")),
            vec![MatchInterval {
                start_a: 0,
                start_b: 2,
                len: 1
            }]
        );
        assert!(lcs_intervals(&seq("A"), &seq("ZZZ")).is_empty());
    }
}
