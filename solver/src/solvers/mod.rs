mod time_limited_solver;
mod timed_solver;

use std::{fmt, time::Duration};

pub use time_limited_solver::{TimeLimitedSolver, WORKER_STACK_SIZE};
pub use timed_solver::TimedSolver;

use crate::{Algorithm, Assignment, SATSolution, CNF};

/// Deadline of a single solve unless configured otherwise
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// What the harness reports for one (formula, engine) run
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Completed(SATSolution),
    TimedOut,
    Errored(String),
    /// No engine of that name, nothing was solved
    UnknownAlgorithm(String),
}

impl Outcome {
    pub fn solution(&self) -> Option<&SATSolution> {
        match self {
            Outcome::Completed(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn witness(&self) -> Option<&Assignment> {
        self.solution().and_then(SATSolution::witness)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Completed(solution) => write!(f, "{}", solution),
            Outcome::TimedOut => write!(f, "TIMED OUT"),
            Outcome::Errored(message) => write!(f, "ERROR: {}", message),
            Outcome::UnknownAlgorithm(_) => write!(f, "Unknown algorithm"),
        }
    }
}

/// Runs the engine called `algorithm` on its own copy of `formula` under `timeout`
pub fn solve_with_timeout(algorithm: &str, formula: &CNF, timeout: Duration) -> Outcome {
    solve_with_limits(algorithm, formula, timeout, WORKER_STACK_SIZE)
}

/// Like [`solve_with_timeout`], with the worker thread getting `stack_size` bytes of stack
pub fn solve_with_limits(algorithm: &str, formula: &CNF, timeout: Duration, stack_size: usize) -> Outcome {
    match algorithm.parse::<Algorithm>() {
        Ok(algorithm) => TimeLimitedSolver::new(algorithm.solver(), timeout)
            .with_stack_size(stack_size)
            .solve_limited(formula.clone()),
        Err(_) => Outcome::UnknownAlgorithm(algorithm.trim().to_string()),
    }
}
