use crate::{
    assignment::IndexSet,
    sat_solver::{Interrupt, Solver},
    CNFClause, SATSolution, CNF,
};

const TARGET: &str = "solver::resolution";

/// Saturates the clause set under resolution. Deriving the empty clause refutes
/// the formula; a round that adds no new clause proves it satisfiable.
/// Verdict only, and by far the slowest of the engines.
#[derive(Clone, Copy, Debug, Default)]
pub struct Resolution;

impl Solver for Resolution {
    fn solve_interruptible(&self, formula: &CNF, interrupt: &Interrupt) -> SATSolution {
        if formula.has_empty_clause() {
            return SATSolution::Unsatisfiable;
        }

        let mut clauses: IndexSet<CNFClause> = formula.clauses.iter()
            .filter(|clause| !clause.is_tautology())
            .map(CNFClause::normalized)
            .collect();

        let mut round = 0;
        loop {
            let mut derived: IndexSet<CNFClause> = IndexSet::default();

            for (i, first) in clauses.iter().enumerate() {
                for second in clauses.iter().skip(i + 1) {
                    if interrupt.is_raised() {
                        return SATSolution::Unknown;
                    }
                    for resolvent in resolve(first, second) {
                        if resolvent.is_empty() {
                            log::debug!(target: TARGET, "Derived the empty clause from {} and {} in round {}", first, second, round);
                            return SATSolution::Unsatisfiable;
                        }
                        if !clauses.contains(&resolvent) {
                            derived.insert(resolvent);
                        }
                    }
                }
            }

            if derived.is_empty() {
                log::debug!(target: TARGET, "Saturated after {} rounds with {} clauses", round, clauses.len());
                return SATSolution::Satisfiable(None);
            }

            log::debug!(target: TARGET, "Round {} derived {} clauses", round, derived.len());
            clauses.extend(derived);
            round += 1;
        }
    }
}

/// All non-tautological resolvents of two clauses, one per complementary pair.
/// Clauses without a complementary pair have none.
pub fn resolve(first: &CNFClause, second: &CNFClause) -> Vec<CNFClause> {
    let first = first.normalized();
    let mut resolvents: Vec<CNFClause> = Vec::new();

    for lit in &first.vars {
        if !second.vars.contains(&-*lit) {
            continue;
        }
        let resolvent = first.vars.iter()
            .chain(second.vars.iter())
            .filter(|other| other.id != lit.id)
            .copied()
            .collect::<CNFClause>()
            .normalized();

        if !resolvent.is_tautology() && !resolvents.contains(&resolvent) {
            resolvents.push(resolvent);
        }
    }
    resolvents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CNFVar;

    fn clause(lits: Vec<i32>) -> CNFClause {
        lits.into_iter().filter_map(CNFVar::from_i32).collect()
    }

    #[test]
    fn resolving_unit_and_negation_gives_empty_clause() {
        assert_eq!(resolve(&clause(vec![1]), &clause(vec![-1])), vec![CNFClause::new()]);
    }

    #[test]
    fn resolvent_joins_the_rest() {
        assert_eq!(resolve(&clause(vec![1, 2]), &clause(vec![-1, 3])), vec![clause(vec![2, 3])]);
    }

    #[test]
    fn no_complementary_pair_no_resolvent() {
        assert!(resolve(&clause(vec![1, 2]), &clause(vec![1, 3])).is_empty());
    }

    #[test]
    fn two_complementary_pairs_only_give_tautologies() {
        assert!(resolve(&clause(vec![1, 2]), &clause(vec![-1, -2])).is_empty());
    }

    #[test]
    fn verdicts() {
        let formula = |clauses: Vec<Vec<i32>>| CNF::from_literals(clauses).unwrap();
        assert!(Resolution.solve(&formula(vec![vec![1], vec![-1]])).is_unsat());
        assert!(Resolution.solve(&formula(vec![vec![1], vec![2], vec![-1, -2]])).is_unsat());
        assert_eq!(Resolution.solve(&formula(vec![vec![1, 2], vec![-1, -2]])), SATSolution::Satisfiable(None));
        assert!(Resolution.solve(&formula(vec![vec![]])).is_unsat());
        assert!(Resolution.solve(&CNF::empty()).is_sat());
    }
}
