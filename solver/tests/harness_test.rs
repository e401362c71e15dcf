use std::{
    sync::{Arc, atomic::{AtomicBool, Ordering}},
    thread::sleep,
    time::{Duration, Instant},
};

use solver::{
    solve_with_limits, solve_with_timeout, solvers::TimedSolver, Dpll, Interrupt, Outcome,
    SATSolution, Solver, TimeLimitedSolver, CNF,
};

const DEADLINE: Duration = Duration::from_millis(100);
const SCHEDULING_MARGIN: Duration = Duration::from_millis(500);

/// Spins until interrupted, then records that it stopped
struct Spinner {
    stopped: Arc<AtomicBool>,
}

impl Solver for Spinner {
    fn solve_interruptible(&self, _formula: &CNF, interrupt: &Interrupt) -> SATSolution {
        while !interrupt.is_raised() {
            sleep(Duration::from_millis(1));
        }
        self.stopped.store(true, Ordering::SeqCst);
        SATSolution::Unknown
    }
}

/// Ignores interruption altogether
struct Sleeper;

impl Solver for Sleeper {
    fn solve_interruptible(&self, _formula: &CNF, _interrupt: &Interrupt) -> SATSolution {
        sleep(Duration::from_secs(5));
        SATSolution::Unsatisfiable
    }
}

struct Panicker;

/// Recurses `depth` calls deep before answering
struct Recurser {
    depth: usize,
}

fn descend(depth: usize) -> usize {
    let frame = [depth; 16];
    match depth {
        0 => 0,
        _ => 1 + descend(frame[depth % 16] - 1),
    }
}

impl Solver for Recurser {
    fn solve_interruptible(&self, _formula: &CNF, _interrupt: &Interrupt) -> SATSolution {
        if descend(self.depth) == self.depth {
            SATSolution::Unsatisfiable
        } else {
            SATSolution::Unknown
        }
    }
}

impl Solver for Panicker {
    fn solve_interruptible(&self, _formula: &CNF, _interrupt: &Interrupt) -> SATSolution {
        panic!("boom")
    }
}

#[test]
fn spinning_engine_times_out_and_stops() {
    let stopped = Arc::new(AtomicBool::new(false));
    let solver = TimeLimitedSolver::new(Spinner { stopped: stopped.clone() }, DEADLINE);

    let start = Instant::now();
    let outcome = solver.solve_limited(CNF::empty());
    assert_eq!(outcome, Outcome::TimedOut);
    assert!(start.elapsed() < DEADLINE + SCHEDULING_MARGIN);
    assert_eq!(outcome.to_string(), "TIMED OUT");

    let waited = Instant::now();
    while !stopped.load(Ordering::SeqCst) && waited.elapsed() < SCHEDULING_MARGIN {
        sleep(Duration::from_millis(5));
    }
    assert!(stopped.load(Ordering::SeqCst));
}

#[test]
fn uncooperative_engine_is_abandoned() {
    let start = Instant::now();
    let outcome = TimeLimitedSolver::new(Sleeper, DEADLINE).solve_limited(CNF::empty());
    assert_eq!(outcome, Outcome::TimedOut);
    assert!(start.elapsed() < DEADLINE + SCHEDULING_MARGIN);
}

#[test]
fn panics_are_reported_as_errors() {
    let outcome = TimeLimitedSolver::new(Panicker, Duration::from_secs(5)).solve_limited(CNF::empty());
    assert_eq!(outcome, Outcome::Errored("boom".to_string()));
    assert_eq!(outcome.to_string(), "ERROR: boom");

    // the next run is unaffected
    let outcome = solve_with_timeout("dpll", &CNF::empty(), Duration::from_secs(5));
    assert_eq!(outcome.to_string(), "SATISFIABLE");
}

#[test]
fn unknown_algorithm_is_not_solved() {
    let outcome = solve_with_timeout("walksat", &CNF::empty(), Duration::from_secs(1));
    assert_eq!(outcome, Outcome::UnknownAlgorithm("walksat".to_string()));
    assert_eq!(outcome.to_string(), "Unknown algorithm");
}

#[test]
fn statuses_by_name() {
    let contradiction = CNF::from_literals(vec![vec![1], vec![-1]]).unwrap();
    let choice = CNF::from_literals(vec![vec![1, 2], vec![-1, -2]]).unwrap();

    for name in &["dpll", "dp", "resolution", "cdcl"] {
        let outcome = solve_with_timeout(name, &contradiction, Duration::from_secs(5));
        assert_eq!(outcome.to_string(), "UNSATISFIABLE", "{}", name);

        let outcome = solve_with_timeout(name, &choice, Duration::from_secs(5));
        assert_eq!(outcome.to_string(), "SATISFIABLE", "{}", name);
        let witnessed = *name == "dpll" || *name == "cdcl";
        assert_eq!(outcome.witness().is_some(), witnessed, "{}", name);
    }
}

#[test]
fn timing_a_limited_run() {
    let solver = TimedSolver::new(TimeLimitedSolver::new(Sleeper, DEADLINE));
    let (duration, outcome) = solver.solve_limited_timed(CNF::empty());
    assert_eq!(outcome, Outcome::TimedOut);
    assert!(duration >= DEADLINE);
}

#[test]
fn deep_recursion_on_a_larger_stack() {
    let solver = TimeLimitedSolver::new(Recurser { depth: 100_000 }, Duration::from_secs(30))
        .with_stack_size(256 * 1024 * 1024);
    assert_eq!(solver.solve_limited(CNF::empty()), Outcome::Completed(SATSolution::Unsatisfiable));
}

#[test]
fn engines_by_name_with_custom_stack() {
    let formula = CNF::from_literals(vec![vec![1, -2], vec![2]]).unwrap();
    for name in &["dpll", "dp", "resolution", "cdcl"] {
        let outcome = solve_with_limits(name, &formula, Duration::from_secs(5), 4 * 1024 * 1024);
        assert_eq!(outcome.to_string(), "SATISFIABLE", "{}", name);
    }
    assert_eq!(
        solve_with_limits("walksat", &formula, Duration::from_secs(5), 4 * 1024 * 1024),
        Outcome::UnknownAlgorithm("walksat".to_string())
    );
}

#[test]
fn timing_a_plain_run() {
    let formula = CNF::from_literals(vec![vec![1, 2], vec![-1, -2]]).unwrap();
    let (duration, solution) = TimedSolver::new(Dpll::new()).solve_timed(&formula);
    assert!(solution.witness().map_or(false, |witness| witness.satisfies(&formula)));
    assert!(duration < Duration::from_secs(5));
}
