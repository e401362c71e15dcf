use crate::{assignment::IndexMap, Assignment, CNF, VarId};

pub trait BranchingStrategy {
    /// Picks the next variable to branch on, or `None` if there is no variable to be picked
    fn pick_branching_variable(&self, formula: &CNF, assignment: &Assignment) -> Option<VarId>;
}

/// Picks the unassigned variable occurring in the most literals, polarity ignored.
/// Ties go to the variable seen first.
#[derive(Clone, Copy, Debug, Default)]
pub struct MostFrequent;

impl BranchingStrategy for MostFrequent {
    fn pick_branching_variable(&self, formula: &CNF, assignment: &Assignment) -> Option<VarId> {
        let mut occurrences: IndexMap<VarId, usize> = IndexMap::default();
        for lit in formula.clauses.iter().flat_map(|clause| clause.vars.iter()) {
            if !assignment.contains(lit.id) {
                *occurrences.entry(lit.id).or_insert(0) += 1;
            }
        }

        let mut best: Option<(VarId, usize)> = None;
        for (id, count) in occurrences {
            match best {
                Some((_, max)) if max >= count => {},
                _ => best = Some((id, count)),
            }
        }
        best.map(|(id, _)| id)
    }
}

/// Picks the first unassigned variable in order of appearance
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstUnassigned;

impl BranchingStrategy for FirstUnassigned {
    fn pick_branching_variable(&self, formula: &CNF, assignment: &Assignment) -> Option<VarId> {
        formula.clauses.iter()
            .flat_map(|clause| clause.vars.iter())
            .map(|lit| lit.id)
            .find(|id| !assignment.contains(*id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formula(clauses: Vec<Vec<i32>>) -> CNF {
        CNF::from_literals(clauses).unwrap()
    }

    #[test]
    fn most_frequent_ignores_polarity() {
        let formula = formula(vec![vec![1, 2], vec![-2, 3], vec![-2, -1], vec![3]]);
        assert_eq!(MostFrequent.pick_branching_variable(&formula, &Assignment::new()), Some(2));
    }

    #[test]
    fn ties_go_to_first_seen() {
        let formula = formula(vec![vec![4, 1], vec![-1, -4]]);
        assert_eq!(MostFrequent.pick_branching_variable(&formula, &Assignment::new()), Some(4));
    }

    #[test]
    fn no_literals_no_variable() {
        assert_eq!(MostFrequent.pick_branching_variable(&CNF::empty(), &Assignment::new()), None);
        assert_eq!(MostFrequent.pick_branching_variable(&formula(vec![vec![]]), &Assignment::new()), None);
        assert_eq!(FirstUnassigned.pick_branching_variable(&CNF::empty(), &Assignment::new()), None);
    }

    #[test]
    fn first_unassigned_skips_assigned() {
        let formula = formula(vec![vec![3, 1], vec![2]]);
        let assignment: Assignment = vec![(3, false)].into_iter().collect();
        assert_eq!(FirstUnassigned.pick_branching_variable(&formula, &assignment), Some(1));
        assert_eq!(MostFrequent.pick_branching_variable(&formula, &assignment), Some(1));
    }
}
