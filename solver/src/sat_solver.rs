use std::sync::{Arc, atomic::{AtomicBool, Ordering}};
use auto_impl::auto_impl;

use crate::{CNF, SATSolution};

/// Cancellation flag shared between a running engine and whoever waits on it.
/// Engines poll it and give up with [`SATSolution::Unknown`] once it is raised.
#[derive(Clone, Debug, Default)]
pub struct Interrupt(Arc<AtomicBool>);

impl Interrupt {
    pub fn new() -> Interrupt {
        Interrupt::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::Relaxed)
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// The trait which has to be implemented by each engine
#[auto_impl(&, Box, Arc)]
pub trait Solver {
    fn solve_interruptible(&self, formula: &CNF, interrupt: &Interrupt) -> SATSolution;

    fn solve(&self, formula: &CNF) -> SATSolution {
        self.solve_interruptible(formula, &Interrupt::new())
    }
}
