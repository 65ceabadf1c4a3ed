//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from the EDD sequence and seed the incumbent with it
//! 2. At each iteration:
//!    a. Scan every pairwise swap and select the best non-tabu move
//!    b. If every move is tabu, select the best move ignoring tabu status
//!    c. Apply the move unconditionally (worsening moves are how the
//!       search escapes local optima), add it to the tabu list
//!    d. Replace the incumbent on strict improvement
//! 3. Terminate after `max_iterations` iterations and return the incumbent
//!
//! # References
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

use log::{debug, trace};

use crate::config::TabuConfig;
use crate::error::TabuError;
use crate::job::JobSet;
use crate::moves::Move;
use crate::neighborhood;
use crate::objective::total_weighted_tardiness;
use crate::sequence::Sequence;
use crate::tabu_list::TabuList;

/// One record of the per-iteration search trace, for external reporting.
/// The engine itself does no formatting or I/O.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationTrace {
    /// Iteration number, starting at 0.
    pub iteration: usize,
    /// The swap applied this iteration.
    pub applied_move: Move,
    /// Objective of the working sequence after the swap.
    pub objective: u64,
    /// Tabu list content after recording the move, oldest first.
    pub tabu_list: Vec<Move>,
}

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult {
    /// Best sequence found (the incumbent).
    pub best: Sequence,
    /// Total weighted tardiness of the best sequence.
    pub best_objective: u64,
    /// Objective of the EDD starting sequence.
    pub initial_objective: u64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Iteration at which the incumbent was found. 0 can mean either the
    /// first iteration or that the EDD seed was never improved.
    pub best_iteration: usize,
    /// Per-iteration trace.
    pub trace: Vec<IterationTrace>,
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes the search on `jobs`.
    ///
    /// The algorithm is fully deterministic: the same job set and
    /// configuration always produce the same result.
    ///
    /// # Errors
    ///
    /// Returns [`TabuError::Config`] before any search work when the
    /// configuration is invalid or the job set has fewer than two jobs
    /// (no swap is possible).
    ///
    /// # Examples
    ///
    /// ```
    /// use smtwt_tabu::{Job, JobSet, TabuConfig, TabuRunner};
    ///
    /// let jobs = JobSet::new(vec![
    ///     Job::new(1, 1, 6, 9),
    ///     Job::new(2, 1, 4, 12),
    ///     Job::new(3, 1, 8, 15),
    ///     Job::new(4, 1, 2, 8),
    /// ])?;
    /// let result = TabuRunner::run(&jobs, &TabuConfig::default())?;
    /// assert!(result.best_objective <= result.initial_objective);
    /// # Ok::<(), smtwt_tabu::TabuError>(())
    /// ```
    pub fn run(jobs: &JobSet, config: &TabuConfig) -> Result<TabuResult, TabuError> {
        config.validate().map_err(TabuError::Config)?;
        if jobs.len() < 2 {
            return Err(TabuError::Config(format!(
                "job set has {} job(s); at least 2 are required to swap",
                jobs.len()
            )));
        }

        // Seed the incumbent with the starting solution so it is never
        // unset, even if no iteration improves on it.
        let mut current = Sequence::edd(jobs);
        let initial_objective = total_weighted_tardiness(jobs, &current);
        let mut best = current.clone();
        let mut best_objective = initial_objective;
        let mut best_iteration = 0;

        let mut tabu = TabuList::new(config.tabu_tenure);
        let mut history = Vec::with_capacity(config.max_iterations);

        debug!(
            "starting search: {} jobs, initial objective {initial_objective}",
            jobs.len()
        );

        for iteration in 0..config.max_iterations {
            // Best non-tabu swap; when every swap is tabu, tabu status
            // turns soft and the globally best swap is taken instead.
            let candidate = neighborhood::best_swap(jobs, &current, |mv| tabu.contains(mv))
                .or_else(|| neighborhood::best_swap(jobs, &current, |_| false))
                .ok_or(TabuError::Invariant(
                    "no swap candidates for a job set of size >= 2",
                ))?;

            current.swap(candidate.mv.i, candidate.mv.j);
            tabu.record(candidate.mv);

            let objective_now = total_weighted_tardiness(jobs, &current);
            debug_assert_eq!(objective_now, candidate.objective);
            if !current.is_permutation() {
                return Err(TabuError::Invariant(
                    "working sequence is no longer a permutation",
                ));
            }

            if objective_now < best_objective {
                best = current.clone();
                best_objective = objective_now;
                best_iteration = iteration;
                debug!(
                    "iteration {iteration}: swap {} improves incumbent to {objective_now}",
                    candidate.mv
                );
            } else {
                debug!(
                    "iteration {iteration}: swap {} gives objective {objective_now}",
                    candidate.mv
                );
            }
            trace!("iteration {iteration}: tabu list {:?}", tabu.snapshot());

            history.push(IterationTrace {
                iteration,
                applied_move: candidate.mv,
                objective: objective_now,
                tabu_list: tabu.snapshot(),
            });
        }

        Ok(TabuResult {
            best,
            best_objective,
            initial_objective,
            iterations: config.max_iterations,
            best_iteration,
            trace: history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::Job;
    use proptest::prelude::*;

    fn six_jobs() -> JobSet {
        JobSet::new(vec![
            Job::new(1, 1, 6, 9),
            Job::new(2, 1, 4, 12),
            Job::new(3, 1, 8, 15),
            Job::new(4, 1, 2, 8),
            Job::new(5, 1, 10, 20),
            Job::new(6, 1, 3, 22),
        ])
        .unwrap()
    }

    // ---- Configuration errors ----

    #[test]
    fn test_rejects_zero_iterations() {
        let config = TabuConfig::default().with_max_iterations(0);
        let result = TabuRunner::run(&six_jobs(), &config);
        assert!(matches!(result, Err(TabuError::Config(_))));
    }

    #[test]
    fn test_rejects_zero_tenure() {
        let config = TabuConfig::default().with_tabu_tenure(0);
        let result = TabuRunner::run(&six_jobs(), &config);
        assert!(matches!(result, Err(TabuError::Config(_))));
    }

    #[test]
    fn test_rejects_job_set_too_small() {
        let jobs = JobSet::new(vec![Job::new(1, 1, 5, 5)]).unwrap();
        let result = TabuRunner::run(&jobs, &TabuConfig::default());
        assert!(matches!(result, Err(TabuError::Config(_))));
    }

    // ---- Reference instance ----

    #[test]
    fn test_reference_instance_initial_objective() {
        let result = TabuRunner::run(&six_jobs(), &TabuConfig::default()).unwrap();
        assert_eq!(result.initial_objective, 26);
        assert!(result.best_objective <= 26);
    }

    #[test]
    fn test_reference_instance_first_move() {
        let result = TabuRunner::run(&six_jobs(), &TabuConfig::default()).unwrap();
        // From the EDD seed the single best swap exchanges the last two
        // jobs, dropping the objective from 26 to 19.
        assert_eq!(result.trace[0].applied_move, Move::new(4, 5));
        assert_eq!(result.trace[0].objective, 19);
        assert_eq!(result.best_iteration, 0);
    }

    #[test]
    fn test_reference_instance_matches_bruteforce_optimum() {
        let jobs = six_jobs();
        let result = TabuRunner::run(&jobs, &TabuConfig::default()).unwrap();

        // Exhaustive oracle over all 720 permutations.
        fn permutations(order: &mut Vec<usize>, k: usize, out: &mut Vec<Sequence>) {
            if k == order.len() {
                out.push(Sequence::from_positions(order.clone()));
                return;
            }
            for idx in k..order.len() {
                order.swap(k, idx);
                permutations(order, k + 1, out);
                order.swap(k, idx);
            }
        }
        let mut all = Vec::new();
        let mut order: Vec<usize> = (0..jobs.len()).collect();
        permutations(&mut order, 0, &mut all);
        assert_eq!(all.len(), 720);
        let optimum = all
            .iter()
            .map(|seq| total_weighted_tardiness(&jobs, seq))
            .min()
            .unwrap();

        assert_eq!(optimum, 19);
        assert_eq!(result.best_objective, optimum);
    }

    #[test]
    fn test_result_is_permutation_of_input() {
        let jobs = six_jobs();
        let result = TabuRunner::run(&jobs, &TabuConfig::default()).unwrap();
        assert!(result.best.is_permutation());
        let mut ids = result.best.job_ids(&jobs);
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    // ---- Incumbent & trace ----

    #[test]
    fn test_incumbent_is_running_minimum() {
        let result = TabuRunner::run(&six_jobs(), &TabuConfig::default()).unwrap();
        let trace_min = result.trace.iter().map(|t| t.objective).min().unwrap();
        assert_eq!(
            result.best_objective,
            result.initial_objective.min(trace_min)
        );
    }

    #[test]
    fn test_trace_covers_every_iteration() {
        let config = TabuConfig::default().with_max_iterations(17);
        let result = TabuRunner::run(&six_jobs(), &config).unwrap();
        assert_eq!(result.iterations, 17);
        assert_eq!(result.trace.len(), 17);
        for (idx, record) in result.trace.iter().enumerate() {
            assert_eq!(record.iteration, idx);
        }
    }

    #[test]
    fn test_tabu_snapshots_respect_tenure() {
        let config = TabuConfig::default().with_tabu_tenure(3);
        let result = TabuRunner::run(&six_jobs(), &config).unwrap();
        for record in &result.trace {
            assert!(record.tabu_list.len() <= 3);
            assert_eq!(record.tabu_list.last(), Some(&record.applied_move));
        }
    }

    // ---- All-tabu fallback ----

    #[test]
    fn test_all_tabu_falls_back_instead_of_aborting() {
        // Two jobs leave a single possible move; after the first iteration
        // it is tabu for the rest of the run, so every later iteration
        // exercises the fallback.
        let jobs = JobSet::new(vec![Job::new(1, 1, 2, 0), Job::new(2, 1, 1, 0)]).unwrap();
        let config = TabuConfig::default().with_max_iterations(5);
        let result = TabuRunner::run(&jobs, &config).unwrap();

        // EDD keeps input order (equal due dates): [1, 2] costs 5, the
        // swapped order [2, 1] costs 4; the search oscillates between them.
        assert_eq!(result.initial_objective, 5);
        assert_eq!(result.best_objective, 4);
        assert_eq!(result.best_iteration, 0);
        let objectives: Vec<u64> = result.trace.iter().map(|t| t.objective).collect();
        assert_eq!(objectives, vec![4, 5, 4, 5, 4]);
        for record in &result.trace {
            assert_eq!(record.applied_move, Move::new(0, 1));
        }
    }

    // ---- Randomized instances ----

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_incumbent_never_worse_than_seed(
            spec in prop::collection::vec((0u64..8, 1u64..15, 0u64..60), 2..8),
        ) {
            let jobs = JobSet::new(
                spec.iter()
                    .enumerate()
                    .map(|(idx, &(w, p, d))| Job::new(idx as u32, w, p, d))
                    .collect(),
            )
            .unwrap();
            let config = TabuConfig::default().with_max_iterations(30);
            let result = TabuRunner::run(&jobs, &config).unwrap();
            prop_assert!(result.best_objective <= result.initial_objective);
            prop_assert!(result.best.is_permutation());
            let trace_min = result.trace.iter().map(|t| t.objective).min().unwrap();
            prop_assert_eq!(result.best_objective, result.initial_objective.min(trace_min));
        }
    }
}
