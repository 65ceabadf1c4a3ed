//! Job records and the immutable job set.

use std::collections::HashSet;
use std::ops::Index;

use crate::error::TabuError;

/// A single job to be processed on the machine.
///
/// Identity is by `id`; a [`JobSet`] never contains two jobs with the same
/// id. All fields are plain integers, matching the usual `1||Σ wⱼTⱼ`
/// instance format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Job {
    /// External identifier.
    pub id: u32,
    /// Tardiness weight `w_j`.
    pub weight: u64,
    /// Processing time `p_j`. Must be positive.
    pub processing_time: u64,
    /// Due date `d_j`.
    pub due_date: u64,
}

impl Job {
    /// Creates a job record.
    pub fn new(id: u32, weight: u64, processing_time: u64, due_date: u64) -> Self {
        Self {
            id,
            weight,
            processing_time,
            due_date,
        }
    }
}

/// Immutable collection of the jobs to sequence.
///
/// Constructed once, then shared read-only by every component of the
/// solver. Construction validates that ids are unique and processing times
/// positive.
///
/// # Examples
///
/// ```
/// use smtwt_tabu::{Job, JobSet};
///
/// let jobs = JobSet::new(vec![
///     Job::new(1, 1, 6, 9),
///     Job::new(2, 1, 4, 12),
/// ]).unwrap();
/// assert_eq!(jobs.len(), 2);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JobSet {
    jobs: Vec<Job>,
}

impl JobSet {
    /// Validates and wraps a list of jobs.
    ///
    /// # Errors
    ///
    /// Returns [`TabuError::Config`] if two jobs share an id or a job has a
    /// zero processing time.
    pub fn new(jobs: Vec<Job>) -> Result<Self, TabuError> {
        let mut seen = HashSet::with_capacity(jobs.len());
        for job in &jobs {
            if job.processing_time == 0 {
                return Err(TabuError::Config(format!(
                    "job {} has zero processing time",
                    job.id
                )));
            }
            if !seen.insert(job.id) {
                return Err(TabuError::Config(format!("duplicate job id {}", job.id)));
            }
        }
        Ok(Self { jobs })
    }

    /// Number of jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// True when the set holds no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// The jobs in their original input order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }
}

impl Index<usize> for JobSet {
    type Output = Job;

    fn index(&self, index: usize) -> &Job {
        &self.jobs[index]
    }
}
