use crate::{
    branching_strategy::{BranchingStrategy, FirstUnassigned},
    sat_solver::{Interrupt, Solver},
    unit_propagation::{unit_propagation, Propagation},
    Assignment, SATSolution, VarId, CNF,
};

const TARGET: &str = "solver::cdcl";

/// Iterative search over an explicit decision stack with unit propagation and
/// chronological backtracking. No clauses are learned: on a conflict the most
/// recent decision that was not flipped yet is set to `false` instead.
#[derive(Clone, Debug, Default)]
pub struct CdclLite<B = FirstUnassigned> {
    branching_strategy: B,
}

impl CdclLite<FirstUnassigned> {
    pub fn new() -> Self {
        CdclLite { branching_strategy: FirstUnassigned }
    }
}

impl<B: BranchingStrategy> CdclLite<B> {
    pub fn with_strategy(branching_strategy: B) -> Self {
        CdclLite { branching_strategy }
    }
}

impl<B: BranchingStrategy> Solver for CdclLite<B> {
    fn solve_interruptible(&self, formula: &CNF, interrupt: &Interrupt) -> SATSolution {
        ExecutionState::new(formula, &self.branching_strategy).cdcl(interrupt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssignmentType {
    /// Branched on with `true`, `false` not tried yet
    Branching,
    /// Branched on and flipped to `false` after a conflict
    Flipped,
    /// Implied by unit propagation
    Forced,
}

#[derive(Debug, Clone, Copy)]
struct StackEntry {
    variable: VarId,
    level: usize,
    assignment_type: AssignmentType,
}

struct ExecutionState<'a, B> {
    formula: &'a CNF,
    branching_strategy: &'a B,
    assignment: Assignment,
    decision_level: usize,
    decision_stack: Vec<StackEntry>,
}

impl<'a, B: BranchingStrategy> ExecutionState<'a, B> {
    fn new(formula: &'a CNF, branching_strategy: &'a B) -> Self {
        ExecutionState {
            formula,
            branching_strategy,
            assignment: Assignment::new(),
            decision_level: 0,
            decision_stack: Vec::new(),
        }
    }

    fn cdcl(mut self, interrupt: &Interrupt) -> SATSolution {
        loop {
            if interrupt.is_raised() {
                return SATSolution::Unknown;
            }

            if self.propagate().is_conflict() {
                if self.decision_level == 0 || !self.backtrack() {
                    return SATSolution::Unsatisfiable;
                }
                continue;
            }

            match self.branching_strategy.pick_branching_variable(self.formula, &self.assignment) {
                Some(variable) => self.decide(variable),
                None => return SATSolution::Satisfiable(Some(self.assignment)),
            }
        }
    }

    /// Runs unit propagation and puts every forced variable on the stack
    /// at the current level, conflict or not, so that it can be undone.
    fn propagate(&mut self) -> Propagation {
        let before = self.assignment.len();
        let result = unit_propagation(self.formula, &mut self.assignment);

        let level = self.decision_level;
        let forced: Vec<VarId> = self.assignment.assigned_since(before).collect();
        self.decision_stack.extend(forced.into_iter().map(|variable| StackEntry {
            variable,
            level,
            assignment_type: AssignmentType::Forced,
        }));
        result
    }

    fn decide(&mut self, variable: VarId) {
        self.decision_level += 1;
        log::debug!(target: TARGET, "Deciding {} = true at level {}", variable, self.decision_level);
        self.assignment.assign(variable, true);
        self.decision_stack.push(StackEntry {
            variable,
            level: self.decision_level,
            assignment_type: AssignmentType::Branching,
        });
    }

    /// Undoes assignments down to the latest unflipped decision and flips it.
    /// Returns false if there is none left.
    fn backtrack(&mut self) -> bool {
        while let Some(entry) = self.decision_stack.pop() {
            self.assignment.unassign(entry.variable);

            if entry.assignment_type == AssignmentType::Branching {
                log::debug!(target: TARGET, "Conflict, flipping {} at level {}", entry.variable, entry.level);
                self.decision_level = entry.level;
                self.assignment.assign(entry.variable, false);
                self.decision_stack.push(StackEntry {
                    assignment_type: AssignmentType::Flipped,
                    ..entry
                });
                return true;
            }
        }
        false
    }
}
