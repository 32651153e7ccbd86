//! Shared helpers for the engines.

/// Length of the common prefix of two slices.
#[inline]
pub(crate) fn common_prefix(a: &[u32], b: &[u32]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Length of the common suffix of two slices.
#[inline]
pub(crate) fn common_suffix(a: &[u32], b: &[u32]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

/// Common prefix/suffix trim shared by all pairwise engines.
///
/// Returns `(prefix, suffix, core_a, core_b)` where the cores are the
/// remaining middle slices. The suffix never overlaps the prefix.
pub(crate) fn trim_common_affixes<'a>(
    a: &'a [u32],
    b: &'a [u32],
) -> (usize, usize, &'a [u32], &'a [u32]) {
    let prefix = common_prefix(a, b);
    let (a, b) = (&a[prefix..], &b[prefix..]);
    let suffix = common_suffix(a, b);
    let core_a = &a[..a.len() - suffix];
    let core_b = &b[..b.len() - suffix];
    (prefix, suffix, core_a, core_b)
}

/// Dense-table cell budget above which interval reconstruction switches
/// from the full-table engine to Hirschberg's linear-space recursion.
pub(crate) const DENSE_CELL_LIMIT: usize = 1 << 22;

/// True when an `(n, m)` pair is small enough for a full dense table.
#[inline]
pub(crate) fn fits_dense_table(n: usize, m: usize) -> bool {
    match n.checked_mul(m) {
        Some(cells) => cells <= DENSE_CELL_LIMIT,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_disjoint_affixes() {
        let a = [1, 2, 9, 9, 5, 6];
        let b = [1, 2, 7, 5, 6];
        let (p, s, ca, cb) = trim_common_affixes(&a, &b);
        assert_eq!(p, 2);
        assert_eq!(s, 2);
        assert_eq!(ca, &[9, 9]);
        assert_eq!(cb, &[7]);
    }

    #[test]
    fn identical_inputs_leave_empty_core() {
        let a = [3, 1, 4];
        let (p, s, ca, cb) = trim_common_affixes(&a, &a);
        assert_eq!(p + s, 3);
        assert!(ca.is_empty() && cb.is_empty());
    }

    #[test]
    fn suffix_does_not_overlap_prefix() {
        // "aa" vs "aaa": the prefix consumes both elements of the shorter
        // side, so the suffix scan must stop at the leftover element.
        let a = [7, 7];
        let b = [7, 7, 7];
        let (p, s, ca, cb) = trim_common_affixes(&a, &b);
        assert_eq!(p, 2);
        assert_eq!(s, 0);
        assert!(ca.is_empty());
        assert_eq!(cb, &[7]);
    }

    #[test]
    fn dense_budget_boundary() {
        assert!(fits_dense_table(1 << 11, 1 << 11));
        assert!(!fits_dense_table(1 << 11, (1 << 11) + 1));
        assert!(!fits_dense_table(usize::MAX, 2));
    }
}
