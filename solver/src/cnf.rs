use std::fmt;
use std::iter::FromIterator;
use std::ops::Neg;
use itertools::Itertools;

use dimacs::parse_dimacs;

use crate::error::{Error, Result};

/// Type used for referencing logical variables
pub type VarId = usize;

/// Representation of logical formulae in CNF form
/// (conjunction of clauses). The empty formula is trivially satisfiable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CNF {
    /// Vector of inner clauses
    pub clauses : Vec<CNFClause>
}

/// Representation of a clause (disjunction of literals).
/// The empty clause is falsified.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CNFClause {
    /// Vector of inner literals, duplicates allowed
    pub vars : Vec<CNFVar>
}

/// Literal: a variable together with its polarity
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq, Hash)]
pub struct CNFVar {
    /// Identifier of a variable, always at least 1
    pub id: VarId,
    /// Variable is negated iff `sign == false`
    pub sign: bool,
}

impl CNF {
    /// Creates an empty CNF formula
    pub fn empty() -> CNF {
        CNF{clauses: Vec::new()}
    }

    /// Inserts a new clause into the formula
    pub fn push(&mut self, c : CNFClause) {
        self.clauses.push(c)
    }

    /// Returns number of clauses in the formula
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// True iff there are no clauses left
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// True iff some clause lost all of its literals
    pub fn has_empty_clause(&self) -> bool {
        self.clauses.iter().any(CNFClause::is_empty)
    }

    /// Collects all variable identifiers in the order of their first appearance
    pub fn vars(&self) -> Vec<VarId> {
        self.clauses.iter()
            .flat_map(|clause| clause.vars.iter().map(CNFVar::id))
            .unique()
            .collect()
    }

    /// Builds a formula out of signed integer clauses. Fails on a literal `0`.
    pub fn from_literals<C, L>(clauses: C) -> Option<CNF>
    where C: IntoIterator<Item=L>,
          L: IntoIterator<Item=i32> {
        clauses.into_iter()
            .map(|clause| clause.into_iter().map(CNFVar::from_i32).collect::<Option<CNFClause>>())
            .collect()
    }

    /// Converts back into signed integer clauses
    pub fn to_literals(&self) -> Vec<Vec<i32>> {
        self.clauses.iter()
            .map(|clause| clause.vars.iter().map(CNFVar::to_i32).collect())
            .collect()
    }

    /// Prints formula in DIMACS compatible form
    pub fn to_dimacs(&self) -> String {
        let mut out = format!("p cnf {} {}\n",
            self.vars().into_iter().max().unwrap_or(0),
            self.clauses.len());

        for clause in &self.clauses {
            for var in &clause.vars {
                out.push_str(&var.to_i32().to_string());
                out.push(' ');
            }
            out.push_str("0\n");
        }
        out
    }

    /// Parse DIMACS string into CNF structure
    pub fn from_dimacs(input : &str) -> Result<CNF> {
        let inst = parse_dimacs(input);

        match inst {
            Ok(dimacs::Instance::Cnf{clauses, ..}) =>
                Ok(clauses.iter()
                .map(|clause|
                     clause.lits().iter()
                     .map(|lit|
                          CNFVar {
                              id: lit.var().to_u64() as VarId,
                              sign: lit.sign() == dimacs::Sign::Pos
                          }
                     ).collect::<CNFClause>()
                ).collect()),
            Ok(_) => Err(Error::Dimacs("only CNF formulae are supported".to_string())),
            Err(err) => Err(Error::Dimacs(format!("{:?}", err))),
        }
    }
}

impl FromIterator<CNFClause> for CNF {
    fn from_iter<I: IntoIterator<Item=CNFClause>>(iter: I) -> Self {
        CNF{clauses: iter.into_iter().collect()}
    }
}

impl IntoIterator for CNF {
    type Item = CNFClause;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.into_iter()
    }
}

impl CNFClause {
    /// Creates an empty CNF clause
    pub fn new() -> CNFClause {
        CNFClause{vars: vec![]}
    }

    /// Adds a single literal into the clause
    pub fn push(&mut self, v : CNFVar) {
        self.vars.push(v)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// The only literal of a unit clause
    pub fn unit(&self) -> Option<CNFVar> {
        match self.vars.as_slice() {
            [lit] => Some(*lit),
            _ => None,
        }
    }

    /// Checks whether the clause holds a literal together with its negation
    pub fn is_tautology(&self) -> bool {
        self.vars.iter().any(|lit| self.vars.contains(&-*lit))
    }

    /// Sorted copy without duplicated literals
    pub fn normalized(&self) -> CNFClause {
        let mut vars = self.vars.clone();
        vars.sort();
        vars.dedup();
        CNFClause{vars}
    }
}

impl FromIterator<CNFVar> for CNFClause {
    fn from_iter<I: IntoIterator<Item=CNFVar>>(iter: I) -> Self {
        CNFClause{vars: iter.into_iter().collect()}
    }
}

impl IntoIterator for CNFClause {
    type Item = CNFVar;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.into_iter()
    }
}

impl CNFVar {
    /// Creates variable with given identifier and positivity
    pub fn new(id: VarId, sign: bool) -> CNFVar {
        CNFVar{id, sign}
    }

    /// Creates a positive literal with given identifier
    pub fn pos(id: VarId) -> CNFVar {
        CNFVar{id, sign: true}
    }

    /// Creates a negative literal with given identifier
    pub fn neg(id: VarId) -> CNFVar{
        CNFVar{id, sign: false}
    }

    /// Gets the identifier of a variable
    pub fn id(&self) -> VarId {
        self.id
    }

    /// Checks if the literal is positive
    pub fn sign(&self) -> bool {
        self.sign
    }

    /// Converts from a signed integer; `0` does not denote a literal.
    pub fn from_i32(lit: i32) -> Option<CNFVar> {
        match lit {
            0 => None,
            _ => Some(CNFVar::new(lit.unsigned_abs() as VarId, lit > 0)),
        }
    }

    /// Converts to signed integer. The absolute value indicates
    /// the identifier and sign states for positivity.
    ///
    /// **NOTE** it is not integer-overflow friendly.
    pub fn to_i32(&self) -> i32 {
        if self.sign {
            self.id as i32
        } else {
            -(self.id as i32)
        }
    }
}

impl Neg for CNFVar {
    type Output = CNFVar;

    fn neg(self) -> CNFVar {
        CNFVar{id: self.id, sign: !self.sign}
    }
}


impl fmt::Display for CNF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.clauses.iter().join(", "))
    }
}

impl fmt::Display for CNFClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.vars.iter().join(", "))
    }
}

impl fmt::Display for CNFVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_i32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vars_in_discovery_order() {
        let formula = CNF::from_literals(vec![vec![3, -1], vec![1, 2], vec![-3]]).unwrap();
        assert_eq!(formula.vars(), vec![3, 1, 2]);
    }

    #[test]
    fn zero_is_not_a_literal() {
        assert!(CNFVar::from_i32(0).is_none());
        assert!(CNF::from_literals(vec![vec![1, 0]]).is_none());
        assert_eq!(CNFVar::from_i32(-4), Some(CNFVar::neg(4)));
    }

    #[test]
    fn tautologies() {
        let clause: CNFClause = vec![CNFVar::pos(1), CNFVar::pos(2), CNFVar::neg(1)].into_iter().collect();
        assert!(clause.is_tautology());
        assert!(!CNFClause::from_iter(vec![CNFVar::pos(1), CNFVar::pos(1)]).is_tautology());
    }

    #[test]
    fn display_matches_input_syntax() {
        let formula = CNF::from_literals(vec![vec![1, -2], vec![]]).unwrap();
        assert_eq!(formula.to_string(), "[[1, -2], []]");
    }

    #[test]
    fn dimacs_roundtrip() {
        let formula = CNF::from_literals(vec![vec![1, -2], vec![2, 3]]).unwrap();
        let parsed = CNF::from_dimacs(&formula.to_dimacs()).unwrap();
        assert_eq!(parsed.to_literals(), formula.to_literals());
    }
}
