/// The CNF representation of a formula
pub mod cnf;
/// Partial truth assignments
mod assignment;
/// Errors of loading formulas and picking engines
pub mod error;
/// The Solver trait which has to be implemented by each engine
pub mod sat_solver;
/// Module that specifies the output of a solver
mod sat_solution;
/// Reduction of a formula under a partial assignment
pub mod simplify;
/// Unit propagation to a fixpoint
pub mod unit_propagation;
/// Branching heuristics shared by the search engines
pub mod branching_strategy;
/// Module that contains the recursive DPLL solver
mod dpll;
/// Davis–Putnam variable elimination
pub mod dp;
/// Saturation by resolution
pub mod resolution;
/// Decision stack search without clause learning
mod cdcl;
pub mod bruteforce;
mod algorithm;
/// Timeouts, timing and outcome classification of single runs
pub mod solvers;
/// Formula files, one formula per line
pub mod loader;
/// Random formulas for benchmarking
pub mod generator;

pub use cnf::{CNFClause, CNFVar, VarId, CNF};
pub use assignment::Assignment;
pub use error::{Error, Result};
pub use sat_solver::{Interrupt, Solver};
pub use sat_solution::SATSolution;
pub use branching_strategy::{BranchingStrategy, FirstUnassigned, MostFrequent};
pub use dpll::Dpll;
pub use dp::DavisPutnam;
pub use resolution::Resolution;
pub use cdcl::CdclLite;
pub use bruteforce::Bruteforce;
pub use algorithm::Algorithm;
pub use solvers::{
    solve_with_limits, solve_with_timeout, Outcome, TimeLimitedSolver, TimedSolver, DEFAULT_TIMEOUT,
    WORKER_STACK_SIZE,
};
