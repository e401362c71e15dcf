use std::{fmt, str::FromStr};

use crate::{
    error::Error,
    CdclLite, DavisPutnam, Dpll, Resolution, Solver,
};

/// The engines one can pick by name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Dpll,
    Dp,
    Resolution,
    Cdcl,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [Algorithm::Dpll, Algorithm::Dp, Algorithm::Resolution, Algorithm::Cdcl];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Dpll => "dpll",
            Algorithm::Dp => "dp",
            Algorithm::Resolution => "resolution",
            Algorithm::Cdcl => "cdcl",
        }
    }

    /// Whether a satisfiable verdict comes with an assignment
    pub fn produces_witness(self) -> bool {
        match self {
            Algorithm::Dpll | Algorithm::Cdcl => true,
            Algorithm::Dp | Algorithm::Resolution => false,
        }
    }

    pub fn solver(self) -> Box<dyn Solver + Send + Sync> {
        match self {
            Algorithm::Dpll => Box::new(Dpll::new()),
            Algorithm::Dp => Box::new(DavisPutnam::new()),
            Algorithm::Resolution => Box::new(Resolution),
            Algorithm::Cdcl => Box::new(CdclLite::new()),
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let normalized = name.trim().to_lowercase();
        Algorithm::ALL.iter()
            .copied()
            .find(|algorithm| algorithm.name() == normalized)
            .ok_or_else(|| Error::UnknownAlgorithm(name.trim().to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(" DPLL\n".parse::<Algorithm>().unwrap(), Algorithm::Dpll);
        assert_eq!("Resolution".parse::<Algorithm>().unwrap(), Algorithm::Resolution);
        assert!(matches!("walksat".parse::<Algorithm>(), Err(Error::UnknownAlgorithm(name)) if name == "walksat"));
    }
}
