use crate::{Assignment, CNF, CNFClause};

/// Reduces `formula` under a partial assignment: satisfied clauses are dropped,
/// falsified literals are removed and a clause left with nothing becomes the
/// empty clause, which is kept as a conflict marker.
pub fn simplify(formula: &CNF, assignment: &Assignment) -> CNF {
    formula.clauses.iter()
        .filter_map(|clause| simplify_clause(clause, assignment))
        .collect()
}

/// `None` if the clause is satisfied, otherwise its unassigned literals
fn simplify_clause(clause: &CNFClause, assignment: &Assignment) -> Option<CNFClause> {
    let mut reduced = CNFClause::new();
    for lit in &clause.vars {
        match assignment.literal_value(lit) {
            Some(true) => return None,
            Some(false) => {},
            None => reduced.push(*lit),
        }
    }
    Some(reduced)
}
