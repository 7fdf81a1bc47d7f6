//! Row encoding and the simple/complex mode distinction.
//!
//! The two constraint shapes ("simple": a flat list of primary columns, vs.
//! "complex": separate primary/secondary lists) differ only in the shape of
//! the user-facing literal and in how column headers get threaded into the
//! ring. [`Mode`] is a sealed trait implemented by the zero-sized [`Simple`]
//! and [`Complex`] marker types so that distinction is resolved at compile
//! time: [`crate::algorithm`] and [`crate::builder`] only ever see the
//! uniform [`Row`] and never branch on mode.

use crate::error::{ConstraintField, Error, Result};

/// The column counts a handler was configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnCounts {
    pub primary: usize,
    pub secondary: usize,
}

/// A row already translated into the matrix's column-index space
/// (`0..primary + secondary`, secondary columns offset by `+primary`).
#[derive(Debug, Clone)]
pub struct Row<T> {
    pub data: T,
    pub columns: Vec<usize>,
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Simple {}
    impl Sealed for super::Complex {}
}

/// Distinguishes the simple and complex constraint-literal shapes at the
/// type level. Implemented only by [`Simple`] and [`Complex`].
pub trait Mode: sealed::Sealed {
    /// Shape of the `columns` argument to `add_sparse`.
    type Sparse;
    /// Shape of the `values` argument to `add_binary`.
    type Binary;

    fn encode_sparse(cfg: ColumnCounts, input: Self::Sparse, validate: bool) -> Result<Vec<usize>>;
    fn encode_binary(cfg: ColumnCounts, input: Self::Binary, validate: bool) -> Result<Vec<usize>>;
}

/// Marker type for matrices with only primary columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simple;

/// Marker type for matrices with both primary and secondary columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct Complex;

/// The `columns: primary ⊂ [0,P), secondary ⊂ [0,S)` literal for
/// [`Complex::encode_sparse`].
#[derive(Debug, Clone, Default)]
pub struct SparseConstraint {
    pub primary: Vec<usize>,
    pub secondary: Vec<usize>,
}

/// The `{ primary_row: len P, secondary_row: len S }` literal for
/// [`Complex::encode_binary`].
#[derive(Debug, Clone, Default)]
pub struct BinaryConstraint {
    pub primary_row: Vec<bool>,
    pub secondary_row: Vec<bool>,
}

impl Mode for Simple {
    type Sparse = Vec<usize>;
    type Binary = Vec<bool>;

    fn encode_sparse(cfg: ColumnCounts, input: Self::Sparse, validate: bool) -> Result<Vec<usize>> {
        if validate {
            for &c in &input {
                if c >= cfg.primary {
                    return Err(Error::InvalidConstraint {
                        which: ConstraintField::PrimaryColumn,
                        value: c,
                        limit: cfg.primary,
                    });
                }
            }
        }
        Ok(input)
    }

    fn encode_binary(cfg: ColumnCounts, input: Self::Binary, validate: bool) -> Result<Vec<usize>> {
        if validate && input.len() != cfg.primary {
            return Err(Error::InvalidConstraint {
                which: ConstraintField::RowLength,
                value: input.len(),
                limit: cfg.primary,
            });
        }
        Ok(input
            .into_iter()
            .enumerate()
            .filter_map(|(i, set)| set.then_some(i))
            .collect())
    }
}

impl Mode for Complex {
    type Sparse = SparseConstraint;
    type Binary = BinaryConstraint;

    fn encode_sparse(cfg: ColumnCounts, input: Self::Sparse, validate: bool) -> Result<Vec<usize>> {
        if validate {
            for &c in &input.primary {
                if c >= cfg.primary {
                    return Err(Error::InvalidConstraint {
                        which: ConstraintField::PrimaryColumn,
                        value: c,
                        limit: cfg.primary,
                    });
                }
            }
            for &c in &input.secondary {
                if c >= cfg.secondary {
                    return Err(Error::InvalidConstraint {
                        which: ConstraintField::SecondaryColumn,
                        value: c,
                        limit: cfg.secondary,
                    });
                }
            }
        }
        let mut columns = input.primary;
        columns.extend(input.secondary.into_iter().map(|s| s + cfg.primary));
        Ok(columns)
    }

    fn encode_binary(cfg: ColumnCounts, input: Self::Binary, validate: bool) -> Result<Vec<usize>> {
        if validate {
            if input.primary_row.len() != cfg.primary {
                return Err(Error::InvalidConstraint {
                    which: ConstraintField::RowLength,
                    value: input.primary_row.len(),
                    limit: cfg.primary,
                });
            }
            if input.secondary_row.len() != cfg.secondary {
                return Err(Error::InvalidConstraint {
                    which: ConstraintField::RowLength,
                    value: input.secondary_row.len(),
                    limit: cfg.secondary,
                });
            }
        }
        let mut columns: Vec<usize> = input
            .primary_row
            .into_iter()
            .enumerate()
            .filter_map(|(i, set)| set.then_some(i))
            .collect();
        columns.extend(
            input
                .secondary_row
                .into_iter()
                .enumerate()
                .filter_map(|(i, set)| set.then_some(i + cfg.primary)),
        );
        Ok(columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_sparse_passes_through() {
        let cfg = ColumnCounts { primary: 3, secondary: 0 };
        let cols = Simple::encode_sparse(cfg, vec![0, 2], true).unwrap();
        assert_eq!(cols, vec![0, 2]);
    }

    #[test]
    fn simple_sparse_rejects_out_of_range_when_validating() {
        let cfg = ColumnCounts { primary: 3, secondary: 0 };
        let err = Simple::encode_sparse(cfg, vec![5], true).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidConstraint {
                which: ConstraintField::PrimaryColumn,
                value: 5,
                limit: 3,
            }
        );
    }

    #[test]
    fn simple_sparse_skips_validation_when_disabled() {
        let cfg = ColumnCounts { primary: 3, secondary: 0 };
        // Out of range, but validation is off: no error.
        let cols = Simple::encode_sparse(cfg, vec![99], false).unwrap();
        assert_eq!(cols, vec![99]);
    }

    #[test]
    fn simple_binary_translates_to_sparse() {
        let cfg = ColumnCounts { primary: 4, secondary: 0 };
        let cols = Simple::encode_binary(cfg, vec![true, false, true, false], true).unwrap();
        assert_eq!(cols, vec![0, 2]);
    }

    #[test]
    fn simple_binary_rejects_length_mismatch() {
        let cfg = ColumnCounts { primary: 4, secondary: 0 };
        let err = Simple::encode_binary(cfg, vec![true, false], true).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidConstraint {
                which: ConstraintField::RowLength,
                value: 2,
                limit: 4,
            }
        );
    }

    #[test]
    fn complex_sparse_rewrites_secondary_indices() {
        let cfg = ColumnCounts { primary: 2, secondary: 3 };
        let cols = Complex::encode_sparse(
            cfg,
            SparseConstraint { primary: vec![1], secondary: vec![0, 2] },
            true,
        )
        .unwrap();
        assert_eq!(cols, vec![1, 2, 4]);
    }

    #[test]
    fn complex_binary_translates_and_rewrites() {
        let cfg = ColumnCounts { primary: 2, secondary: 2 };
        let cols = Complex::encode_binary(
            cfg,
            BinaryConstraint {
                primary_row: vec![true, false],
                secondary_row: vec![false, true],
            },
            true,
        )
        .unwrap();
        assert_eq!(cols, vec![0, 3]);
    }
}
