use std::{
    any::Any,
    panic::{catch_unwind, AssertUnwindSafe},
    sync::{mpsc::{channel, RecvTimeoutError}, Arc},
    thread,
    time::Duration,
};
use crate::{CNF, Interrupt, Solver};
use super::Outcome;

const TARGET: &str = "solver::harness";

/// Stack of a worker thread; the recursive engines go as deep as
/// the formula has variables.
pub const WORKER_STACK_SIZE: usize = 64 * 1024 * 1024;

/// Runs every solve on its own worker thread and stops waiting after `max_duration`.
/// A worker that overruns gets its [`Interrupt`] raised and its late result is dropped.
/// Panics inside the engine are reported as [`Outcome::Errored`].
pub struct TimeLimitedSolver<S> {
    solver: Arc<S>,
    max_duration: Duration,
    stack_size: usize,
}

impl<S: Solver + Send + Sync + 'static> TimeLimitedSolver<S> {
    pub fn new(solver: S, max_duration: Duration) -> TimeLimitedSolver<S> {
        TimeLimitedSolver {
            solver: Arc::new(solver),
            max_duration,
            stack_size: WORKER_STACK_SIZE,
        }
    }

    /// Overrides [`WORKER_STACK_SIZE`]; deep DPLL recursion needs more on large formulas
    pub fn with_stack_size(mut self, stack_size: usize) -> Self {
        self.stack_size = stack_size;
        self
    }

    /// Solves a fresh copy of the formula under the deadline
    pub fn solve_limited(&self, formula: CNF) -> Outcome {
        self.run(formula, Interrupt::new())
    }

    fn run(&self, formula: CNF, interrupt: Interrupt) -> Outcome {
        let (sender, recv) = channel();
        let solver = self.solver.clone();
        let worker_interrupt = interrupt.clone();

        let spawned = thread::Builder::new()
            .name("solver-worker".to_string())
            .stack_size(self.stack_size)
            .spawn(move || {
                let result = catch_unwind(AssertUnwindSafe(|| {
                    solver.solve_interruptible(&formula, &worker_interrupt)
                }));
                // Nobody listens anymore once the deadline passed
                let _ = sender.send(result.map_err(panic_message));
            });

        if let Err(err) = spawned {
            return Outcome::Errored(format!("could not start worker: {}", err));
        }

        match recv.recv_timeout(self.max_duration) {
            Ok(Ok(solution)) => Outcome::Completed(solution),
            Ok(Err(message)) => {
                log::warn!(target: TARGET, "Engine failed: {}", message);
                Outcome::Errored(message)
            },
            Err(RecvTimeoutError::Timeout) => {
                log::warn!(target: TARGET, "No result after {:?}, abandoning worker", self.max_duration);
                interrupt.raise();
                Outcome::TimedOut
            },
            Err(RecvTimeoutError::Disconnected) =>
                Outcome::Errored("worker exited without a result".to_string()),
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "engine panicked".to_string()
    }
}
