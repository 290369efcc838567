//! Plain-text lattice format.
//!
//! One row per line. `#`, `1` and `x` mark occupied sites; `.`, `0` and `-`
//! mark empty ones. Whitespace between cells is ignored and blank lines are
//! skipped, so `"# . #"` and `"#.#"` describe the same row. Input without any
//! rows is the 0×0 lattice.

use percolate_core::{Lattice, LatticeError};
use thiserror::Error;

/// Errors raised while parsing a text lattice.
#[derive(Debug, Error, PartialEq)]
pub enum GridParseError {
    /// A character outside the cell alphabet.
    #[error("line {line}, column {column}: unexpected character {found:?}")]
    InvalidCell {
        /// 1-based line number.
        line: usize,
        /// 1-based character column.
        column: usize,
        /// Offending character.
        found: char,
    },
    /// A row whose width differs from the first row.
    #[error("line {line}: row has {found} cells but the first row has {expected}")]
    RaggedRow {
        /// 1-based line number.
        line: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of this row.
        found: usize,
    },
    /// The rows parsed but do not form an N×N lattice.
    #[error(transparent)]
    Shape(#[from] LatticeError),
}

/// Parses `text` into a lattice.
///
/// # Errors
/// Returns [`GridParseError`] when a character is not a cell, rows differ in
/// width, or the grid is not square.
///
/// # Examples
/// ```
/// use percolate_cli::cli::parse_lattice;
///
/// let lattice = parse_lattice("#.\n.#\n")?;
/// assert_eq!(lattice.cells(), &[true, false, false, true]);
/// assert!(parse_lattice("").map(|lattice| lattice.is_empty())?);
/// # Ok::<(), percolate_cli::cli::GridParseError>(())
/// ```
pub fn parse_lattice(text: &str) -> Result<Lattice, GridParseError> {
    let mut width = None;
    let mut rows = 0_usize;
    let mut cells = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let before = cells.len();
        for (column, character) in line.chars().enumerate() {
            if character.is_whitespace() {
                continue;
            }
            cells.push(parse_cell(character).ok_or(GridParseError::InvalidCell {
                line: line_number,
                column: column + 1,
                found: character,
            })?);
        }

        let found = cells.len() - before;
        if found == 0 {
            continue;
        }
        match width {
            None => width = Some(found),
            Some(expected) if expected != found => {
                return Err(GridParseError::RaggedRow {
                    line: line_number,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }
        rows += 1;
    }

    let columns = width.unwrap_or(0);
    Ok(Lattice::from_shape(&[rows, columns], cells)?)
}

fn parse_cell(character: char) -> Option<bool> {
    match character {
        '#' | '1' | 'x' | 'X' => Some(true),
        '.' | '0' | '-' => Some(false),
        _ => None,
    }
}
