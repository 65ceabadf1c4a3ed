//! Total weighted tardiness evaluation.

use crate::job::JobSet;
use crate::sequence::Sequence;

/// Completion time of each position: the cumulative processing time of all
/// jobs up to and including it, starting at time 0.
pub fn completion_times(jobs: &JobSet, seq: &Sequence) -> Vec<u64> {
    let mut clock = 0u64;
    seq.positions()
        .iter()
        .map(|&k| {
            clock += jobs[k].processing_time;
            clock
        })
        .collect()
}

/// Total weighted tardiness of a sequence:
/// `Σ wⱼ · max(0, Cⱼ − dⱼ)` over all positions, left to right.
///
/// Pure and O(n); never fails for a well-formed sequence.
pub fn total_weighted_tardiness(jobs: &JobSet, seq: &Sequence) -> u64 {
    let mut clock = 0u64;
    let mut total = 0u64;
    for &k in seq.positions() {
        let job = jobs[k];
        clock += job.processing_time;
        total += job.weight * clock.saturating_sub(job.due_date);
    }
    total
}
