use crate::sat_solver::Solver;
use crate::{CNF, SATSolution};
use std::time::{Instant, Duration};
use super::{Outcome, TimeLimitedSolver};

/// A wrapper for another solver which exposes time performance
/// measurement
pub struct TimedSolver<S> {
    solver: S,
}

impl<S> TimedSolver<S> {
    /// Wraps a solver in a `TimedSolver`
    pub fn new(solver: S) -> Self {
        TimedSolver{solver}
    }
}

impl<S: Solver> TimedSolver<S> {
    /// Solves a given formula but measures time additionally
    pub fn solve_timed(&self, formula: &CNF) -> (Duration, SATSolution) {
        let start = Instant::now();
        let solution = self.solver.solve(formula);
        (start.elapsed(), solution)
    }
}

impl<S: Solver + Send + Sync + 'static> TimedSolver<TimeLimitedSolver<S>> {
    /// Measures a run under the deadline, including the time spent waiting on a worker that overran
    pub fn solve_limited_timed(&self, formula: CNF) -> (Duration, Outcome) {
        let start = Instant::now();
        let outcome = self.solver.solve_limited(formula);
        (start.elapsed(), outcome)
    }
}
