//! Exhaustive pairwise-swap neighborhood with incremental scoring.
//!
//! Every position pair `(i, j)` with `i < j` is a candidate move. A swap
//! only changes completion times inside `i..=j`, so each candidate is
//! scored in `O(j - i + 1)` against precomputed completion times and
//! prefix sums instead of re-evaluating the whole sequence. The scorer
//! never mutates the sequence, which also makes the sweep safe to run in
//! parallel (the `parallel` feature).

use crate::job::JobSet;
use crate::moves::Move;
use crate::sequence::Sequence;

/// A scored candidate move: the swap and the objective of the sequence
/// that would result from applying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// The swap.
    pub mv: Move,
    /// Total weighted tardiness after the swap.
    pub objective: u64,
}

/// Incremental swap scorer over a fixed sequence.
///
/// Precomputes per-position completion times and prefix weighted-tardiness
/// sums in O(n), then answers [`objective_after`](Self::objective_after)
/// queries without touching the sequence.
pub struct SwapScorer<'a> {
    jobs: &'a JobSet,
    seq: &'a Sequence,
    completions: Vec<u64>,
    /// `prefix_wt[k]` is the weighted tardiness of positions `0..k`.
    prefix_wt: Vec<u64>,
}

impl<'a> SwapScorer<'a> {
    /// Builds the scorer for `seq`.
    pub fn new(jobs: &'a JobSet, seq: &'a Sequence) -> Self {
        let n = seq.len();
        let mut completions = Vec::with_capacity(n);
        let mut prefix_wt = Vec::with_capacity(n + 1);
        prefix_wt.push(0);
        let mut clock = 0u64;
        let mut acc = 0u64;
        for &k in seq.positions() {
            let job = jobs[k];
            clock += job.processing_time;
            acc += job.weight * clock.saturating_sub(job.due_date);
            completions.push(clock);
            prefix_wt.push(acc);
        }
        Self {
            jobs,
            seq,
            completions,
            prefix_wt,
        }
    }

    /// Objective of the unmodified sequence.
    pub fn total(&self) -> u64 {
        self.prefix_wt.last().copied().unwrap_or(0)
    }

    /// Objective of the sequence with positions `mv.i` and `mv.j` swapped.
    ///
    /// Positions outside `i..=j` keep their completion times, so only that
    /// segment is re-walked.
    pub fn objective_after(&self, mv: Move) -> u64 {
        let (i, j) = (mv.i, mv.j);
        let mut clock = if i == 0 { 0 } else { self.completions[i - 1] };
        let mut segment = 0u64;
        for k in i..=j {
            let pos = match k {
                _ if k == i => j,
                _ if k == j => i,
                _ => k,
            };
            let job = self.jobs[self.seq.positions()[pos]];
            clock += job.processing_time;
            segment += job.weight * clock.saturating_sub(job.due_date);
        }
        // Same multiset of processing times in the segment, so the clock
        // must land back on the original completion time of j.
        debug_assert_eq!(clock, self.completions[j]);
        let old_segment = self.prefix_wt[j + 1] - self.prefix_wt[i];
        self.total() - old_segment + segment
    }
}

/// Finds the best admissible swap of `seq`.
///
/// Scans all pairs `0 ≤ i < j < n` in ascending lexicographic order,
/// skipping moves for which `is_tabu` returns true. Comparison is strict
/// less-than against the running best, so among equally good candidates
/// the lexicographically earliest pair wins. Returns `None` when the
/// sequence has fewer than two positions or every move is tabu.
pub fn best_swap<F>(jobs: &JobSet, seq: &Sequence, is_tabu: F) -> Option<Candidate>
where
    F: Fn(Move) -> bool + Sync,
{
    let n = seq.len();
    if n < 2 {
        return None;
    }
    let scorer = SwapScorer::new(jobs, seq);

    #[cfg(feature = "parallel")]
    return scan_parallel(&scorer, n, &is_tabu);

    #[cfg(not(feature = "parallel"))]
    scan_sequential(&scorer, n, &is_tabu)
}

#[cfg(not(feature = "parallel"))]
fn scan_sequential<F>(scorer: &SwapScorer<'_>, n: usize, is_tabu: &F) -> Option<Candidate>
where
    F: Fn(Move) -> bool,
{
    let mut best: Option<Candidate> = None;
    for i in 0..n - 1 {
        for j in (i + 1)..n {
            let mv = Move::new(i, j);
            if is_tabu(mv) {
                continue;
            }
            let objective = scorer.objective_after(mv);
            if best.map_or(true, |b| objective < b.objective) {
                best = Some(Candidate { mv, objective });
            }
        }
    }
    best
}

/// Parallel sweep. Minimizing the total key `(objective, i, j)` reproduces
/// the sequential tie-break exactly, so results are identical.
#[cfg(feature = "parallel")]
fn scan_parallel<F>(scorer: &SwapScorer<'_>, n: usize, is_tabu: &F) -> Option<Candidate>
where
    F: Fn(Move) -> bool + Sync,
{
    use rayon::prelude::*;

    (0..n - 1)
        .into_par_iter()
        .flat_map(|i| ((i + 1)..n).into_par_iter().map(move |j| Move::new(i, j)))
        .filter(|&mv| !is_tabu(mv))
        .map(|mv| Candidate {
            mv,
            objective: scorer.objective_after(mv),
        })
        .min_by_key(|c| (c.objective, c.mv.i, c.mv.j))
}
