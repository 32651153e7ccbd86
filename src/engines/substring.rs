//! Longest common substring engines.
//!
//! Two variants with identical results: an ending-position DP that rolls a
//! single row over the shorter sequence, and a diagonal sweep that keeps
//! one running counter per diagonal. Ties between equally long runs go to
//! the earliest ending cell in row-major order over the internally-longer
//! sequence's axis; the diagonal variant enforces the same winner by
//! explicit comparison, since its scan order differs.

use crate::interval::MatchInterval;
use crate::sequence::Sequence;

/// Longest common substring via the ending-position DP.
///
/// `None` when the inputs share no element. `O(n·m)` time,
/// `O(min(n,m))` memory.
pub fn longest_match(a: &Sequence, b: &Sequence) -> Option<MatchInterval> {
    if a.len() < b.len() {
        return longest_match(b, a).map(MatchInterval::transposed);
    }
    rolling_row(a.codes(), b.codes())
}

/// Longest common substring via the diagonal sweep.
///
/// Same answer and tie-break as [`longest_match`], `O(min(n,m))` memory,
/// and early exit on diagonals too short to matter.
pub fn longest_match_diag(a: &Sequence, b: &Sequence) -> Option<MatchInterval> {
    if a.len() < b.len() {
        return longest_match_diag(b, a).map(MatchInterval::transposed);
    }
    diagonal_sweep(a.codes(), b.codes())
}

/// Length of the longest common substring.
pub fn longest_match_len(a: &Sequence, b: &Sequence) -> usize {
    longest_match(a, b).map_or(0, |iv| iv.len)
}

/// Ending-position DP over `a` (longer) and `b` (shorter):
/// `row[j]` holds the length of the common run ending at `(i, j)`.
fn rolling_row(a: &[u32], b: &[u32]) -> Option<MatchInterval> {
    let m = b.len();
    if m == 0 {
        return None;
    }

    let mut row = vec![0u32; m];
    let mut best_len = 0usize;
    let mut best_end = (0usize, 0usize);
    for (i, &ca) in a.iter().enumerate() {
        let mut top_left = 0;
        for (j, &cb) in b.iter().enumerate() {
            let temp = row[j];
            if cb == ca {
                row[j] = top_left + 1;
                if row[j] as usize > best_len {
                    best_len = row[j] as usize;
                    best_end = (i, j);
                }
            } else {
                row[j] = 0;
            }
            top_left = temp;
        }
    }

    (best_len > 0).then(|| {
        MatchInterval::new(
            best_end.0 + 1 - best_len,
            best_end.1 + 1 - best_len,
            best_len,
        )
    })
}

/// One pass per diagonal of the `(a, b)` grid, `a` longer.
fn diagonal_sweep(a: &[u32], b: &[u32]) -> Option<MatchInterval> {
    let n = a.len();
    let m = b.len();
    if m == 0 {
        return None;
    }

    let mut best: Option<MatchInterval> = None;

    let mut scan = |start_i: usize, start_j: usize, best: &mut Option<MatchInterval>| {
        let mut len = 0usize;
        let mut i = start_i;
        let mut j = start_j;
        while i < n && j < m {
            if a[i] == b[j] {
                len += 1;
                let candidate = MatchInterval::new(i + 1 - len, j + 1 - len, len);
                let wins = match best {
                    None => true,
                    Some(cur) => {
                        len > cur.len
                            || (len == cur.len
                                && (candidate.start_a, candidate.start_b)
                                    < (cur.start_a, cur.start_b))
                    }
                };
                if wins {
                    *best = Some(candidate);
                }
            } else {
                len = 0;
            }
            i += 1;
            j += 1;
        }
    };

    for start_i in 0..n {
        // this diagonal cannot reach the best length any more
        let reach = (n - start_i).min(m);
        if best.is_some_and(|cur| reach < cur.len) {
            break;
        }
        scan(start_i, 0, &mut best);
    }
    for start_j in 1..m {
        let reach = (m - start_j).min(n);
        if best.is_some_and(|cur| reach < cur.len) {
            break;
        }
        scan(0, start_j, &mut best);
    }

    best
}

/// Slice-level length entry for the batch dispatcher.
pub(crate) fn substring_len_slices(a: &[u32], b: &[u32]) -> usize {
    if a.len() < b.len() {
        return substring_len_slices(b, a);
    }
    rolling_row(a, b).map_or(0, |iv| iv.len)
}
