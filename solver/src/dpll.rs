use crate::{
    branching_strategy::{BranchingStrategy, MostFrequent},
    sat_solver::{Interrupt, Solver},
    simplify::simplify,
    Assignment, SATSolution, CNF,
};

const TARGET: &str = "solver::dpll";

/// Recursive Davis–Putnam–Logemann–Loveland search.
///
/// Every call simplifies the formula under its own copy of the assignment and
/// branches on the variable picked by `B`, trying `true` before `false`.
/// Siblings only ever share the simplified formula by reference, so no branch can
/// observe what another one did. The recursion depth is bounded by the number of
/// distinct variables.
#[derive(Clone, Debug, Default)]
pub struct Dpll<B = MostFrequent> {
    branching_strategy: B,
}

impl Dpll<MostFrequent> {
    pub fn new() -> Self {
        Dpll { branching_strategy: MostFrequent }
    }
}

impl<B: BranchingStrategy> Dpll<B> {
    pub fn with_strategy(branching_strategy: B) -> Self {
        Dpll { branching_strategy }
    }

    fn dpll(&self, formula: &CNF, assignment: Assignment, interrupt: &Interrupt) -> SATSolution {
        if interrupt.is_raised() {
            return SATSolution::Unknown;
        }

        let formula = simplify(formula, &assignment);

        if formula.is_empty() {
            return SATSolution::Satisfiable(Some(assignment));
        }
        if formula.has_empty_clause() {
            return SATSolution::Unsatisfiable;
        }

        let variable = match self.branching_strategy.pick_branching_variable(&formula, &assignment) {
            Some(variable) => variable,
            // a non-empty formula without empty clauses always has a literal left
            None => return SATSolution::Unknown,
        };

        for &value in &[true, false] {
            log::debug!(target: TARGET, "Branching on {} = {} at depth {}", variable, value, assignment.len());
            let mut branch = assignment.clone();
            branch.assign(variable, value);

            match self.dpll(&formula, branch, interrupt) {
                SATSolution::Unsatisfiable => {},
                solution => return solution,
            }
        }

        SATSolution::Unsatisfiable
    }
}

impl<B: BranchingStrategy> Solver for Dpll<B> {
    fn solve_interruptible(&self, formula: &CNF, interrupt: &Interrupt) -> SATSolution {
        self.dpll(formula, Assignment::new(), interrupt)
    }
}
