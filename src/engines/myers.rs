//! Myers' edit-graph diff engine.
//!
//! Nodes `(x, y)` of the edit graph stand for "consumed `x` of A and `y`
//! of B"; diagonal edges are free where the elements match. For each
//! candidate distance `d` the engine keeps, per diagonal `k = x - y`, the
//! furthest `x` reachable with exactly `d` non-diagonal edges, extending
//! greedily along matches after every step. The search stops at the first
//! `d` whose frontier reaches `(n, m)`; retracing the frontiers backward
//! yields the aligned runs. Runtime `O((n+m)·D)` where `D` is the number
//! of inserted plus deleted elements, so near-identical inputs resolve far
//! below the `O(n·m)` of the dense table.

use crate::interval::{covered_len, MatchInterval, RunStitcher};
use crate::sequence::Sequence;
use crate::traits::{IntervalEngine, LengthEngine};
use crate::utils::trim_common_affixes;

/// Edit-graph greedy strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct MyersDiff;

impl IntervalEngine for MyersDiff {
    fn lcs_intervals(&self, a: &Sequence, b: &Sequence) -> Vec<MatchInterval> {
        lcs_intervals(a, b)
    }
}

impl LengthEngine for MyersDiff {
    fn lcs_len(&self, a: &Sequence, b: &Sequence) -> usize {
        covered_len(&lcs_intervals(a, b))
    }
}

/// LCS interval reconstruction via the edit-graph search.
pub fn lcs_intervals(a: &Sequence, b: &Sequence) -> Vec<MatchInterval> {
    let (_, runs) = search(a.codes(), b.codes());
    runs
}

/// Number of insertions plus deletions in a shortest edit script
/// (the `D` the search terminates at; substitutions are not an edit-graph
/// move). Satisfies `lcs_len = (n + m - D) / 2`.
pub fn indel_distance(a: &Sequence, b: &Sequence) -> usize {
    let (d, _) = search(a.codes(), b.codes());
    d
}

fn search(a: &[u32], b: &[u32]) -> (usize, Vec<MatchInterval>) {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("myers", n = a.len(), m = b.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let (prefix, suffix, core_a, core_b) = trim_common_affixes(a, b);
    let (d, middle) = middle_runs(core_a, core_b);

    let mut stitcher = RunStitcher::new();
    stitcher.push_run(0, 0, prefix);
    for (x, y, len) in middle {
        stitcher.push_run(prefix + x, prefix + y, len);
    }
    stitcher.push_run(prefix + core_a.len(), prefix + core_b.len(), suffix);
    (d, stitcher.finish())
}

/// Forward search over the trimmed cores.
///
/// Returns the terminating `d` and the aligned runs in ascending order,
/// as `(x, y, len)` relative to the cores.
fn middle_runs(a: &[u32], b: &[u32]) -> (usize, Vec<(usize, usize, usize)>) {
    let n = a.len();
    let m = b.len();
    if n == 0 || m == 0 {
        return (n + m, Vec::new());
    }

    let max_d = n + m;
    let offset = max_d as isize;
    // v[offset + k] = furthest x on diagonal k; all-zero init is safe
    // because the k == ±d guards keep reads inside the previous round.
    let mut v = vec![0isize; 2 * max_d + 1];
    // Snapshot of round r covers diagonals -r..=r at index k + r.
    let mut trace: Vec<Vec<isize>> = Vec::new();

    let mut reached = None;
    'search: for d in 0..=max_d {
        let d_i = d as isize;
        let mut k = -d_i;
        while k <= d_i {
            let idx = (offset + k) as usize;
            let mut x = if k == -d_i || (k != d_i && v[idx - 1] < v[idx + 1]) {
                v[idx + 1]
            } else {
                v[idx - 1] + 1
            };
            let mut y = x - k;
            // the usize casts also reject negative y before any indexing
            while (x as usize) < n && (y as usize) < m && a[x as usize] == b[y as usize] {
                x += 1;
                y += 1;
            }
            v[idx] = x;
            if x >= n as isize && y >= m as isize {
                reached = Some(d);
                break 'search;
            }
            k += 2;
        }
        let lo = (offset - d_i) as usize;
        let hi = (offset + d_i) as usize;
        trace.push(v[lo..=hi].to_vec());
    }

    let d = reached.expect("edit graph search must reach (n, m) within n + m steps");

    // Retrace: replay each round's move decision from the previous
    // frontier and emit the diagonal run that followed it.
    let mut runs_rev: Vec<(usize, usize, usize)> = Vec::new();
    let mut x = n as isize;
    let mut y = m as isize;
    for e in (1..=d).rev() {
        let prev = &trace[e - 1];
        let at = |kk: isize| prev[(kk + e as isize - 1) as usize];
        let k = x - y;
        let e_i = e as isize;
        let (prev_k, via_down) = if k == -e_i || (k != e_i && at(k - 1) < at(k + 1)) {
            (k + 1, true)
        } else {
            (k - 1, false)
        };
        let prev_x = at(prev_k);
        let prev_y = prev_x - prev_k;
        let mid_x = if via_down { prev_x } else { prev_x + 1 };
        let run = (x - mid_x) as usize;
        if run > 0 {
            runs_rev.push((mid_x as usize, (mid_x - k) as usize, run));
        }
        x = prev_x;
        y = prev_y;
    }
    if x > 0 {
        // leading snake of the d = 0 round
        runs_rev.push((0, 0, x as usize));
    }
    runs_rev.reverse();
    (d, runs_rev)
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
            ("AB", "BA"),
            ("SAME", "SAME"),
            ("", ""),
            ("", "XYZ"),
            ("abc", "xyz"),
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
    fn indel_distance_relates_to_lcs_length() {
        let cases = [("ABCBDAB", "BDCABA"), ("kitten", "sitting"), ("", "abc")];
        for (a, b) in cases {
            let (a, b) = (seq(a), seq(b));
            let d = indel_distance(&a, &b);
            let lcs = dense::lcs_len(&a, &b);
            assert_eq!(a.len() + b.len() - d, 2 * lcs, "on {a:?} vs {b:?}");
        }
    }

    #[test]
    fn intervals_reference_matching_content() {
        let a = seq("the quick brown fox");
        let b = seq("the quiet brown cat");
        for iv in lcs_intervals(&a, &b) {
            assert_eq!(
                &a.codes()[iv.start_a..iv.start_a + iv.len],
                &b.codes()[iv.start_b..iv.start_b + iv.len]
            );
        }
    }

    #[test]
    fn near_identical_inputs() {
        let a = seq("ACCGGTCGAGTGCGCGGAAGCCGGCCGAA");
        let mut edited = String::from("ACCGGTCGAGTGCGCGGAAGCCGGCCGAA");
        edited.replace_range(10..11, "");
        let b = seq(&edited);
        assert_eq!(indel_distance(&a, &b), 1);
        assert_eq!(covered_len(&lcs_intervals(&a, &b)), b.len());
    }

    #[test]
    fn disjoint_inputs_have_no_runs() {
        let a = seq("aaa");
        let b = seq("bbb");
        assert!(lcs_intervals(&a, &b).is_empty());
        assert_eq!(indel_distance(&a, &b), 6);
    }
}
