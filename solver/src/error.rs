use thiserror::Error;

/// Errors surfacing from the library. Refuting a formula is not one of them.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A formula line is not a list of lists of integers.
    #[error("line {line}: {source}")]
    Syntax {
        line: usize,
        source: serde_json::Error,
    },

    #[error("line {line}: 0 is not a literal")]
    ZeroLiteral { line: usize },

    #[error("line {line}: literal {literal} is out of range")]
    LiteralOutOfRange { line: usize, literal: i64 },

    #[error("DIMACS parse error: {0}")]
    Dimacs(String),

    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, Error>;
