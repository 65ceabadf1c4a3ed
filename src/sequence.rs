//! Permutation sequences and the EDD starting solution.

use crate::job::JobSet;

/// An ordering of every job in a [`JobSet`] exactly once.
///
/// Stored as positions into the job set (a permutation of `0..n`), so the
/// permutation invariant can be checked without looking at job ids.
/// Position determines processing order on the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sequence(Vec<usize>);

impl Sequence {
    /// Earliest Due Date starting solution: positions sorted by ascending
    /// due date. The sort is stable, so jobs with equal due dates keep
    /// their input order.
    pub fn edd(jobs: &JobSet) -> Self {
        let mut order: Vec<usize> = (0..jobs.len()).collect();
        order.sort_by_key(|&k| jobs[k].due_date);
        Self(order)
    }

    /// Builds a sequence directly from job-set positions.
    ///
    /// `order` must be a permutation of `0..n` for the job set it will be
    /// evaluated against; this is debug-checked on use, not here.
    pub fn from_positions(order: Vec<usize>) -> Self {
        Self(order)
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the empty sequence.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Job-set positions in processing order.
    pub fn positions(&self) -> &[usize] {
        &self.0
    }

    /// Swaps the jobs at positions `i` and `j` in place.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    /// True when every position `0..n` occurs exactly once.
    pub fn is_permutation(&self) -> bool {
        let n = self.0.len();
        let mut seen = vec![false; n];
        for &k in &self.0 {
            if k >= n || seen[k] {
                return false;
            }
            seen[k] = true;
        }
        true
    }

    /// Job ids in processing order.
    pub fn job_ids(&self, jobs: &JobSet) -> Vec<u32> {
        self.0.iter().map(|&k| jobs[k].id).collect()
    }
}
