//! Bounded archive of the best distinct solutions.

use railforge_core::ScoredSolution;

/// Keeps the `capacity` best solutions seen, at most one per objective value.
///
/// A best-effort report of the run; the search never resumes from it.
///
/// # Example
///
/// ```
/// use railforge_core::{LineScore, ScoredSolution, Solution};
/// use railforge_solver::archive::SolutionArchive;
///
/// let scored = |value| ScoredSolution::new(Solution::new(), LineScore { value, ..LineScore::default() });
///
/// let mut archive = SolutionArchive::new(2);
/// assert!(archive.offer(scored(1.0)));
/// assert!(archive.offer(scored(3.0)));
/// assert!(!archive.offer(scored(3.0)));
/// assert!(archive.offer(scored(2.0)));
/// assert!(!archive.offer(scored(0.5)));
///
/// let values: Vec<f64> = archive.iter().map(|s| s.value()).collect();
/// assert_eq!(values, vec![3.0, 2.0]);
/// ```
#[derive(Debug, Clone)]
pub struct SolutionArchive {
    capacity: usize,
    entries: Vec<ScoredSolution>,
}

impl SolutionArchive {
    pub const DEFAULT_CAPACITY: usize = 5;

    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity + 1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Inserts `candidate` if its value is new and ranks within capacity.
    ///
    /// Returns true if the archive changed.
    pub fn offer(&mut self, candidate: ScoredSolution) -> bool {
        let value = candidate.value();
        if self.capacity == 0 || self.entries.iter().any(|e| e.value() == value) {
            return false;
        }
        if self.entries.len() >= self.capacity
            && self.entries.last().is_some_and(|worst| worst.value() >= value)
        {
            return false;
        }

        let position = self
            .entries
            .iter()
            .position(|e| e.value() < value)
            .unwrap_or(self.entries.len());
        self.entries.insert(position, candidate);
        self.entries.truncate(self.capacity);
        true
    }

    /// Best entry, if any.
    pub fn best(&self) -> Option<&ScoredSolution> {
        self.entries.first()
    }

    /// Entries from best to worst.
    pub fn iter(&self) -> impl Iterator<Item = &ScoredSolution> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<ScoredSolution> {
        self.entries
    }
}

impl Default for SolutionArchive {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use railforge_core::{LineScore, Solution};

    use super::*;

    fn scored(value: f64) -> ScoredSolution {
        ScoredSolution::new(
            Solution::new(),
            LineScore {
                value,
                ..LineScore::default()
            },
        )
    }

    #[test]
    fn test_keeps_top_entries_sorted() {
        let mut archive = SolutionArchive::default();
        for value in [4.0, 9.0, 1.0, 7.0, 3.0, 8.0, 2.0] {
            archive.offer(scored(value));
        }
        let values: Vec<f64> = archive.iter().map(ScoredSolution::value).collect();
        assert_eq!(values, vec![9.0, 8.0, 7.0, 4.0, 3.0]);
        assert_eq!(archive.best().map(ScoredSolution::value), Some(9.0));
    }

    #[test]
    fn test_rejects_duplicate_values() {
        let mut archive = SolutionArchive::new(3);
        assert!(archive.offer(scored(1.0)));
        assert!(!archive.offer(scored(1.0)));
        assert_eq!(archive.len(), 1);
    }

    #[test]
    fn test_zero_capacity_stays_empty() {
        let mut archive = SolutionArchive::new(0);
        assert!(!archive.offer(scored(1.0)));
        assert!(archive.is_empty());
    }
}
