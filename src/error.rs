//! Error types returned by this crate's fallible operations.

use std::fmt;

/// Identifies which part of a constraint literal was invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintField {
    /// A primary column index (or, in simple mode, a column index).
    PrimaryColumn,
    /// A secondary column index.
    SecondaryColumn,
    /// The length of a binary row.
    RowLength,
}

impl fmt::Display for ConstraintField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConstraintField::PrimaryColumn => "primary column",
            ConstraintField::SecondaryColumn => "secondary column",
            ConstraintField::RowLength => "row length",
        };
        f.write_str(s)
    }
}

/// Errors that can arise while building constraints or solving a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A solve was attempted with zero rows in the handler.
    NoConstraints,
    /// A constraint value was out of range, or a binary row had the wrong length.
    InvalidConstraint {
        which: ConstraintField,
        value: usize,
        limit: usize,
    },
    /// An internal capacity estimate was wrong. This indicates a bug in this
    /// crate rather than a usage error; it is never provoked by any sequence
    /// of valid public API calls.
    CapacityExceeded { requested: usize, capacity: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoConstraints => {
                write!(f, "cannot solve: no rows have been added")
            }
            Error::InvalidConstraint { which, value, limit } => {
                write!(
                    f,
                    "invalid constraint: {which} index/value {value} is out of range (limit {limit})"
                )
            }
            Error::CapacityExceeded { requested, capacity } => {
                write!(
                    f,
                    "internal error: requested index {requested} exceeds allocated capacity {capacity}"
                )
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
