use std::{convert::TryFrom, fs, path::Path};

use crate::{
    error::{Error, Result},
    CNFClause, CNFVar, CNF,
};

/// Reads a formula file, see [`parse_formulas`]
pub fn load_formulas(path: impl AsRef<Path>) -> Result<Vec<CNF>> {
    let content = fs::read_to_string(path)?;
    parse_formulas(&content)
}

/// One formula per nonblank line, written as a list of clauses,
/// each a list of nonzero integers: `[[1, -2], [3]]`.
/// A single bad line rejects the whole input.
pub fn parse_formulas(input: &str) -> Result<Vec<CNF>> {
    input.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_formula(line.trim(), index + 1))
        .collect()
}

fn parse_formula(line: &str, line_number: usize) -> Result<CNF> {
    let clauses: Vec<Vec<i64>> = serde_json::from_str(line)
        .map_err(|source| Error::Syntax { line: line_number, source })?;

    clauses.into_iter()
        .map(|clause| clause.into_iter()
            .map(|literal| parse_literal(literal, line_number))
            .collect::<Result<CNFClause>>())
        .collect()
}

fn parse_literal(literal: i64, line: usize) -> Result<CNFVar> {
    if literal == 0 {
        return Err(Error::ZeroLiteral { line });
    }
    i32::try_from(literal).ok()
        .filter(|literal| *literal != i32::MIN)
        .and_then(CNFVar::from_i32)
        .ok_or(Error::LiteralOutOfRange { line, literal })
}
