//! Tabu Search for single-machine total weighted tardiness sequencing.
//!
//! Given a fixed set of jobs, each with a processing time, due date, and
//! weight, the solver searches for a processing order minimizing
//! `Σ wⱼ · max(0, Cⱼ − dⱼ)`, where `Cⱼ` is the completion time of job `j`
//! (the `1||Σ wⱼTⱼ` problem). The search starts from the Earliest Due Date
//! ordering and repeatedly applies the best pairwise swap, keeping a
//! short-term memory (the tabu list) of recent swaps to forbid immediate
//! re-application, which lets it climb out of local optima without cycling.
//!
//! The algorithm is a heuristic with no optimality guarantee, and it is
//! fully deterministic: the same job set and configuration always produce
//! the same sequence.
//!
//! # Examples
//!
//! ```
//! use smtwt_tabu::{Job, JobSet, TabuConfig, TabuRunner};
//!
//! let jobs = JobSet::new(vec![
//!     Job::new(1, 1, 6, 9),
//!     Job::new(2, 1, 4, 12),
//!     Job::new(3, 1, 8, 15),
//!     Job::new(4, 1, 2, 8),
//!     Job::new(5, 1, 10, 20),
//!     Job::new(6, 1, 3, 22),
//! ])?;
//!
//! let config = TabuConfig::default()
//!     .with_max_iterations(100)
//!     .with_tabu_tenure(10);
//! let result = TabuRunner::run(&jobs, &config)?;
//!
//! assert!(result.best_objective <= result.initial_objective);
//! println!(
//!     "best order {:?} with total weighted tardiness {}",
//!     result.best.job_ids(&jobs),
//!     result.best_objective
//! );
//! # Ok::<(), smtwt_tabu::TabuError>(())
//! ```
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

pub mod config;
pub mod error;
pub mod job;
pub mod moves;
pub mod neighborhood;
pub mod objective;
pub mod runner;
pub mod sequence;
pub mod tabu_list;

pub use config::TabuConfig;
pub use error::TabuError;
pub use job::{Job, JobSet};
pub use moves::Move;
pub use neighborhood::Candidate;
pub use runner::{IterationTrace, TabuResult, TabuRunner};
pub use sequence::Sequence;
pub use tabu_list::TabuList;
