//! Error types used in the library.
//!
//! - Most of these are very unlikely to occur during use.
//! - Every core operation is a deterministic pure function, so failures are immediate and
//!   total --- there is no partial-failure or retry model.

use crate::structures::formula::Formula;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Extraction(ExtractionError),
    Selection(SelectionError),
}

/// Noted errors during clause extraction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ExtractionError {
    /// A node in literal position which is neither an atom nor a negated atom.
    ///
    /// The formula given for extraction was not in conjunctive normal form.
    /// This does not happen for formulas produced by [cnf](Formula::cnf), though the shape is
    /// checked rather than assumed.
    NonLiteral(Formula),
}

impl From<ExtractionError> for ErrorKind {
    fn from(e: ExtractionError) -> Self {
        ErrorKind::Extraction(e)
    }
}

/// Noted errors from a selection function.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SelectionError {
    /// The selection function returned no remainders, though at least one was available.
    ///
    /// A selection function is obliged to select a nonempty subset of a nonempty remainder set.
    Empty,
}

impl From<SelectionError> for ErrorKind {
    fn from(e: SelectionError) -> Self {
        ErrorKind::Selection(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Extraction(ExtractionError::NonLiteral(formula)) => {
                write!(f, "non-literal in clause: {formula}")
            }
            ErrorKind::Selection(SelectionError::Empty) => {
                write!(f, "selection function returned no remainders")
            }
        }
    }
}

impl std::error::Error for ErrorKind {}
