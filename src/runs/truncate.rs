use std::iter::FusedIterator;

/// Drops every run of consecutive equal values longer than `limit`.
///
/// Runs of length `<= limit` are copied to the output in full. Runs are
/// defined purely by adjacency: the input is expected to be sorted, but this
/// is not checked, and equal values that are not adjacent are never merged
/// into one run. A `limit` of zero drops everything.
///
/// # Examples
///
/// ```rust
/// use setwise::runs::truncate_runs;
///
/// // Leading run of three exceeds the limit
/// assert_eq!(truncate_runs(&[10, 10, 10, 20, 30], 2), vec![20, 30]);
///
/// // Trailing singleton is always kept
/// assert_eq!(truncate_runs(&[10, 10, 10, 20], 2), vec![20]);
/// ```
#[must_use]
pub fn truncate_runs<T: PartialEq + Clone>(sorted: &[T], limit: usize) -> Vec<T> {
    RunTruncator::new(limit).truncate(sorted)
}

/// Truncates duplicate runs with a fixed limit.
///
/// # Examples
///
/// ```rust
/// use setwise::runs::RunTruncator;
///
/// let truncator = RunTruncator::new(1);
/// let kept: Vec<&i64> = truncator.runs(&[1, 2, 2, 3]).collect();
/// assert_eq!(kept, vec![&1, &3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunTruncator {
    limit: usize,
}

impl RunTruncator {
    /// Creates a truncator that keeps runs of at most `limit` values.
    #[inline]
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Returns the longest run length that is kept.
    #[inline]
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Returns a lazy iterator over the values of `sorted` that survive
    /// truncation. No allocation takes place.
    #[must_use]
    pub const fn runs<'a, T: PartialEq>(&self, sorted: &'a [T]) -> TruncatedRuns<'a, T> {
        TruncatedRuns {
            pending: &[],
            remaining: sorted,
            limit: self.limit,
        }
    }

    /// Returns the values of `sorted` that survive truncation.
    #[must_use]
    pub fn truncate<T: PartialEq + Clone>(&self, sorted: &[T]) -> Vec<T> {
        self.runs(sorted).cloned().collect()
    }
}

/// Iterator over the values kept by a [`RunTruncator`].
///
/// Created by [`RunTruncator::runs`].
#[derive(Debug, Clone)]
pub struct TruncatedRuns<'a, T> {
    /// The tail of an accepted run not yet yielded.
    pending: &'a [T],
    remaining: &'a [T],
    limit: usize,
}

impl<'a, T: PartialEq> Iterator for TruncatedRuns<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((first, rest)) = self.pending.split_first() {
                self.pending = rest;
                return Some(first);
            }

            let head = self.remaining.first()?;
            let run_length = self
                .remaining
                .iter()
                .take_while(|value| *value == head)
                .count();
            let (run, rest) = self.remaining.split_at(run_length);
            self.remaining = rest;

            if run_length <= self.limit {
                self.pending = run;
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.pending.len(),
            Some(self.pending.len() + self.remaining.len()),
        )
    }
}

impl<T: PartialEq> FusedIterator for TruncatedRuns<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::middle_run_dropped(vec![10, 20, 20, 20, 30], vec![10, 30])]
    #[case::middle_run_kept(vec![10, 20, 20, 30], vec![10, 20, 20, 30])]
    #[case::trailing_run_dropped(vec![10, 20, 30, 30, 30], vec![10, 20])]
    #[case::trailing_run_kept(vec![10, 20, 30, 30], vec![10, 20, 30, 30])]
    #[case::leading_run_dropped(vec![10, 10, 10, 20, 30], vec![20, 30])]
    #[case::leading_run_kept(vec![10, 10, 20, 30], vec![10, 10, 20, 30])]
    fn test_truncate_runs_limit_two(#[case] input: Vec<i64>, #[case] expected: Vec<i64>) {
        assert_eq!(truncate_runs(&input, 2), expected);
    }

    #[rstest]
    fn test_size_hint_upper_bound_is_input_length() {
        let truncator = RunTruncator::new(2);
        let runs = truncator.runs(&[1, 1, 1, 2]);
        assert_eq!(runs.size_hint(), (0, Some(4)));
    }

    #[rstest]
    fn test_iterator_is_fused() {
        let truncator = RunTruncator::new(1);
        let mut runs = truncator.runs(&[7]);
        assert_eq!(runs.next(), Some(&7));
        assert_eq!(runs.next(), None);
        assert_eq!(runs.next(), None);
    }

    const KEPT_SINGLES: TruncatedRuns<'static, i64> = RunTruncator::new(1).runs(&[1, 2, 2, 3]);

    #[rstest]
    fn test_runs_in_const_context() {
        let kept: Vec<i64> = KEPT_SINGLES.copied().collect();
        assert_eq!(kept, vec![1, 3]);
    }
}
