use crate::{
    assignment::IndexSet,
    branching_strategy::{BranchingStrategy, FirstUnassigned},
    sat_solver::{Interrupt, Solver},
    Assignment, CNFClause, SATSolution, VarId, CNF,
};

const TARGET: &str = "solver::dp";

/// The original Davis–Putnam procedure: variables are eliminated one by one
/// by resolving every clause containing `x` with every clause containing `¬x`.
/// Only decides satisfiability, no witness is built.
#[derive(Clone, Debug, Default)]
pub struct DavisPutnam<B = FirstUnassigned> {
    branching_strategy: B,
}

impl DavisPutnam<FirstUnassigned> {
    pub fn new() -> Self {
        DavisPutnam { branching_strategy: FirstUnassigned }
    }
}

impl<B: BranchingStrategy> DavisPutnam<B> {
    pub fn with_strategy(branching_strategy: B) -> Self {
        DavisPutnam { branching_strategy }
    }

    fn dp(&self, mut formula: CNF, interrupt: &Interrupt) -> SATSolution {
        let nothing_assigned = Assignment::new();

        loop {
            if interrupt.is_raised() {
                return SATSolution::Unknown;
            }
            if formula.is_empty() {
                return SATSolution::Satisfiable(None);
            }
            if formula.has_empty_clause() {
                return SATSolution::Unsatisfiable;
            }

            let variable = match self.branching_strategy.pick_branching_variable(&formula, &nothing_assigned) {
                Some(variable) => variable,
                None => return SATSolution::Unknown,
            };

            formula = match eliminate_variable(formula, variable) {
                Some(reduced) => reduced,
                None => return SATSolution::Unsatisfiable,
            };
        }
    }
}

impl<B: BranchingStrategy> Solver for DavisPutnam<B> {
    fn solve_interruptible(&self, formula: &CNF, interrupt: &Interrupt) -> SATSolution {
        let formula: CNF = formula.clauses.iter()
            .filter(|clause| !clause.is_tautology())
            .cloned()
            .collect();
        self.dp(formula, interrupt)
    }
}

/// Replaces all clauses mentioning `variable` by their non-tautological resolvents.
/// Returns `None` as soon as the empty clause is derived.
/// Expects a formula without tautological clauses.
pub fn eliminate_variable(formula: CNF, variable: VarId) -> Option<CNF> {
    let (mut positive, mut negative, mut reduced) = (Vec::new(), Vec::new(), CNF::empty());
    for clause in formula {
        let polarity = clause.vars.iter()
            .find(|lit| lit.id == variable)
            .map(|lit| lit.sign);
        match polarity {
            Some(true) => positive.push(clause),
            Some(false) => negative.push(clause),
            None => reduced.push(clause),
        }
    }

    let mut resolvents: IndexSet<CNFClause> = IndexSet::default();
    for pos in &positive {
        for neg in &negative {
            let resolvent = pos.vars.iter()
                .chain(neg.vars.iter())
                .filter(|lit| lit.id != variable)
                .copied()
                .collect::<CNFClause>()
                .normalized();

            if resolvent.is_empty() {
                log::debug!(target: TARGET, "Resolving {} and {} on {} gives the empty clause", pos, neg, variable);
                return None;
            }
            if !resolvent.is_tautology() {
                resolvents.insert(resolvent);
            }
        }
    }

    log::debug!(target: TARGET, "Eliminated {}: {} x {} clauses gave {} resolvents",
        variable, positive.len(), negative.len(), resolvents.len());

    reduced.clauses.extend(resolvents);
    Some(reduced)
}
