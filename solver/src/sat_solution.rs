use std::fmt::Write as FmtWrite;

use crate::Assignment;

const MAX_LITERALS_PER_LINE: usize = 8;

/// Result of a single engine run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SATSolution {
    /// Satisfiable; `None` for engines that only decide satisfiability
    Satisfiable(Option<Assignment>),
    Unsatisfiable,
    /// The run was interrupted before reaching a verdict
    Unknown,
}

impl SATSolution {
    pub fn is_sat(&self) -> bool {
        match self {
            SATSolution::Satisfiable(_)  => true,
            _                           => false,
        }
    }

    pub fn is_unsat(&self) -> bool {
        match self {
            SATSolution::Unsatisfiable   => true,
            _                           => false,
        }
    }

    pub fn is_unknown(&self) -> bool {
        match self {
            SATSolution::Unknown => true,
            _                   => false,
        }
    }

    /// The satisfying assignment, if the engine produced one
    pub fn witness(&self) -> Option<&Assignment> {
        match self {
            SATSolution::Satisfiable(witness) => witness.as_ref(),
            _ => None,
        }
    }

    /// Same verdict, ignoring witnesses
    pub fn agrees_with(&self, other: &SATSolution) -> bool {
        self.is_sat() == other.is_sat() && self.is_unsat() == other.is_unsat()
    }

    pub fn to_dimacs(&self) -> String {
        let mut out = format!("s {}\n", self);
        if let Some(witness) = self.witness() {
            let mut iter = witness.iter().peekable();
            while iter.peek().is_some() {
                out.push('v');
                for (id, sign) in iter.by_ref().take(MAX_LITERALS_PER_LINE) {
                    // writing into a String cannot fail
                    let _ = write!(&mut out, " {}{}", if sign { "" } else { "-" }, id);
                }
                out.push_str(" 0\n");
            }
        }
        out
    }
}

impl std::fmt::Display for SATSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}",
            match self {
                SATSolution::Satisfiable(_) => "SATISFIABLE",
                SATSolution::Unsatisfiable => "UNSATISFIABLE",
                SATSolution::Unknown => "UNKNOWN",
            })
    }
}
