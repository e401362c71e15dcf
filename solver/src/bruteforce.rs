use crate::sat_solver::*;
use crate::{Assignment, SATSolution, VarId, CNF};

/// A simple CNF solver that naively checks all possible
/// valuations of the formula's variables. Serves as the reference
/// the other engines are compared against.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bruteforce;

impl Solver for Bruteforce {
    fn solve_interruptible(&self, formula: &CNF, interrupt: &Interrupt) -> SATSolution {
        // initial valuation sets all to false
        let variables = formula.vars();
        let mut valuation: Assignment = variables.iter().map(|id| (*id, false)).collect();

        match guess(formula, &variables, &mut valuation, interrupt) {
            Some(true) => SATSolution::Satisfiable(Some(valuation)),
            Some(false) => SATSolution::Unsatisfiable,
            None => SATSolution::Unknown,
        }
    }
}

fn guess(formula: &CNF, variables: &[VarId], valuation: &mut Assignment, interrupt: &Interrupt) -> Option<bool> {
    if interrupt.is_raised() {
        return None;
    }
    match variables.split_first() {
        None => Some(valuation.satisfies(formula)),
        Some((&change, rest)) => {
            if guess(formula, rest, valuation, interrupt)? {
                return Some(true);
            }
            // set current bit and try again
            valuation.assign(change, true);
            let res = guess(formula, rest, valuation, interrupt)?;
            if !res {
                // if failed set back to default
                valuation.assign(change, false);
            }
            Some(res)
        }
    }
}
