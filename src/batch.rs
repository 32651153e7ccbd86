//! One-to-many batch dispatch.
//!
//! Compares one anchor against an ordered list of raw-text targets on a
//! fixed-size worker pool. Targets are decoded inside the workers, so a
//! decode failure is confined to its own result slot and never disturbs
//! sibling computations. The output vector is indexed exactly like the
//! input list regardless of completion order; with the `parallel` feature
//! disabled the same jobs run on the calling thread.

use crate::engines::{dense, sparse, substring};
use crate::error::{Error, Result};
use crate::sequence::Sequence;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The pairwise metric computed for every `(anchor, target)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// LCS length, via the position-list engine.
    LcsLength,
    /// Longest common substring length.
    SubstringLength,
    /// Levenshtein distance.
    EditDistance,
}

/// Builder-style dispatcher for group comparisons.
///
/// ```
/// use seqsim::batch::{GroupDispatcher, Metric};
///
/// let targets = ["sitting", "mitten", "kitten"];
/// let results = GroupDispatcher::new(Metric::EditDistance)
///     .with_threads(2)
///     .unwrap()
///     .run(b"kitten", &targets)
///     .unwrap();
/// let distances: Vec<usize> = results.into_iter().map(|r| r.unwrap()).collect();
/// assert_eq!(distances, vec![3, 1, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct GroupDispatcher {
    metric: Metric,
    threads: usize,
}

impl GroupDispatcher {
    /// New dispatcher using every available hardware thread.
    pub fn new(metric: Metric) -> Self {
        let threads = std::thread::available_parallelism().map_or(1, |n| n.get());
        Self { metric, threads }
    }

    /// Override the worker count.
    ///
    /// Fails with [`Error::InvalidConcurrency`] when `threads` is zero.
    pub fn with_threads(mut self, threads: usize) -> Result<Self> {
        if threads == 0 {
            return Err(Error::InvalidConcurrency);
        }
        self.threads = threads;
        Ok(self)
    }

    /// Compare `anchor` against every target.
    ///
    /// The `i`-th slot of the output is the result for `targets[i]`,
    /// identical to what a sequential loop would produce. An undecodable
    /// anchor fails the whole call; an undecodable target fails only its
    /// slot.
    pub fn run<T: AsRef<[u8]> + Sync>(
        &self,
        anchor: &[u8],
        targets: &[T],
    ) -> Result<Vec<Result<usize>>> {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!(
            "group_dispatch",
            targets = targets.len(),
            threads = self.threads
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let anchor = Sequence::from_utf8(anchor)?;
        if targets.is_empty() {
            return Ok(Vec::new());
        }
        if self.threads == 1 {
            return Ok(self.run_sequential(&anchor, targets));
        }
        self.run_pooled(&anchor, targets)
    }

    fn run_sequential<T: AsRef<[u8]>>(
        &self,
        anchor: &Sequence,
        targets: &[T],
    ) -> Vec<Result<usize>> {
        targets
            .iter()
            .map(|t| self.eval_pair(anchor, t.as_ref()))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn run_pooled<T: AsRef<[u8]> + Sync>(
        &self,
        anchor: &Sequence,
        targets: &[T],
    ) -> Result<Vec<Result<usize>>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .map_err(|e| Error::Pool(e.to_string()))?;
        // Each index is produced by exactly one worker; collect places it
        // at its input position, so no further synchronization is needed.
        Ok(pool.install(|| {
            targets
                .par_iter()
                .map(|t| self.eval_pair(anchor, t.as_ref()))
                .collect()
        }))
    }

    #[cfg(not(feature = "parallel"))]
    fn run_pooled<T: AsRef<[u8]> + Sync>(
        &self,
        anchor: &Sequence,
        targets: &[T],
    ) -> Result<Vec<Result<usize>>> {
        Ok(self.run_sequential(anchor, targets))
    }

    fn eval_pair(&self, anchor: &Sequence, target: &[u8]) -> Result<usize> {
        let target = Sequence::from_utf8(target)?;
        let (a, b) = (anchor.codes(), target.codes());
        Ok(match self.metric {
            Metric::LcsLength => sparse::lcs_len_slices(a, b),
            Metric::SubstringLength => substring::substring_len_slices(a, b),
            Metric::EditDistance => dense::edit_distance_slices(a, b),
        })
    }
}

/// LCS length of the anchor against every target.
pub fn lcs_len_group<T: AsRef<[u8]> + Sync>(
    anchor: &[u8],
    targets: &[T],
) -> Result<Vec<Result<usize>>> {
    GroupDispatcher::new(Metric::LcsLength).run(anchor, targets)
}

/// Longest-common-substring length of the anchor against every target.
pub fn substring_len_group<T: AsRef<[u8]> + Sync>(
    anchor: &[u8],
    targets: &[T],
) -> Result<Vec<Result<usize>>> {
    GroupDispatcher::new(Metric::SubstringLength).run(anchor, targets)
}

/// Levenshtein distance of the anchor against every target.
pub fn edit_distance_group<T: AsRef<[u8]> + Sync>(
    anchor: &[u8],
    targets: &[T],
) -> Result<Vec<Result<usize>>> {
    GroupDispatcher::new(Metric::EditDistance).run(anchor, targets)
}
