use std::fmt;
use itertools::Itertools;

use crate::{CNF, CNFClause, CNFVar, VarId};

pub(crate) type BuildHasher = std::hash::BuildHasherDefault<rustc_hash::FxHasher>;
pub(crate) type IndexMap<K, V> = indexmap::IndexMap<K, V, BuildHasher>;
pub(crate) type IndexSet<V> = indexmap::IndexSet<V, BuildHasher>;

/// A partial truth assignment. Keeps the order in which variables were assigned,
/// which is what the CDCL-lite trail relies on when undoing propagated literals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assignment {
    values: IndexMap<VarId, bool>,
}

impl Assignment {
    pub fn new() -> Assignment {
        Assignment::default()
    }

    pub fn get(&self, id: VarId) -> Option<bool> {
        self.values.get(&id).copied()
    }

    pub fn contains(&self, id: VarId) -> bool {
        self.values.contains_key(&id)
    }

    /// Sets a variable, returning its previous value
    pub fn assign(&mut self, id: VarId, value: bool) -> Option<bool> {
        self.values.insert(id, value)
    }

    /// Removes a variable without disturbing the order of the remaining ones
    pub fn unassign(&mut self, id: VarId) -> Option<bool> {
        self.values.shift_remove(&id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Variables in assignment order, starting at position `from`
    pub fn assigned_since(&self, from: usize) -> impl Iterator<Item=VarId> + '_ {
        self.values.keys().skip(from).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item=(VarId, bool)> + '_ {
        self.values.iter().map(|(id, value)| (*id, *value))
    }

    /// `Some(true)` if the literal holds, `Some(false)` if it is falsified
    pub fn literal_value(&self, lit: &CNFVar) -> Option<bool> {
        self.get(lit.id).map(|value| value == lit.sign)
    }

    pub fn satisfies_clause(&self, clause: &CNFClause) -> bool {
        clause.vars.iter().any(|lit| self.literal_value(lit) == Some(true))
    }

    /// Every clause contains at least one literal made true
    pub fn satisfies(&self, formula: &CNF) -> bool {
        formula.clauses.iter().all(|clause| self.satisfies_clause(clause))
    }
}

impl std::iter::FromIterator<(VarId, bool)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (VarId, bool)>>(iter: T) -> Self {
        Assignment{values: iter.into_iter().collect()}
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.values.iter()
            .map(|(id, value)| format!("{}: {}", id, value))
            .join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unassign_keeps_order() {
        let mut assignment: Assignment = vec![(3, true), (1, false), (2, true)].into_iter().collect();
        assignment.unassign(1);
        assert_eq!(assignment.assigned_since(0).collect::<Vec<_>>(), vec![3, 2]);
        assert_eq!(assignment.to_string(), "{3: true, 2: true}");
    }

    #[test]
    fn satisfaction_check() {
        let formula = CNF::from_literals(vec![vec![1, 2], vec![-1, -2]]).unwrap();
        let witness: Assignment = vec![(1, true), (2, false)].into_iter().collect();
        let partial: Assignment = vec![(1, true)].into_iter().collect();
        assert!(witness.satisfies(&formula));
        assert!(!partial.satisfies(&formula));
        assert!(Assignment::new().satisfies(&CNF::empty()));
    }
}
