use crate::{simplify::simplify, Assignment, CNF};

const TARGET: &str = "solver::propagation";

/// Outcome of propagating unit clauses to a fixpoint
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Propagation {
    /// Every clause is satisfied
    Satisfied,
    /// No unit clause is left and nothing is falsified
    Fixpoint,
    /// A clause became empty or two unit clauses disagree
    Conflict,
}

impl Propagation {
    pub fn is_conflict(self) -> bool {
        self == Propagation::Conflict
    }
}

/// Repeatedly simplifies `formula` and assigns the literals of all unit clauses
/// until a fixpoint or a conflict is reached. Forced literals are written into
/// `assignment`, also when propagation ends in a conflict.
pub fn unit_propagation(formula: &CNF, assignment: &mut Assignment) -> Propagation {
    let mut formula = simplify(formula, assignment);

    loop {
        if formula.is_empty() {
            return Propagation::Satisfied;
        }
        if formula.has_empty_clause() {
            return Propagation::Conflict;
        }

        let units: Vec<_> = formula.clauses.iter()
            .filter_map(|clause| clause.unit())
            .collect();

        if units.is_empty() {
            return Propagation::Fixpoint;
        }

        for lit in units {
            match assignment.get(lit.id) {
                Some(value) if value != lit.sign => {
                    log::trace!(target: TARGET, "Unit {} contradicts the assignment", lit);
                    return Propagation::Conflict;
                },
                _ => {
                    log::trace!(target: TARGET, "Propagated {}", lit);
                    assignment.assign(lit.id, lit.sign);
                },
            }
        }

        formula = simplify(&formula, assignment);
    }
}
