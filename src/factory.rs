//! [`DancingLinks`], the single entry point for building a
//! [`crate::solver::Solver`] or [`crate::solver::Template`] from a
//! column-shape [`Config`].

use std::marker::PhantomData;

use crate::constraints::ConstraintHandler;
use crate::row::{ColumnCounts, Complex, Simple};
use crate::solver::{Solver, Template};

/// The column shape a matrix is configured with.
///
/// `Simple` matrices have only primary columns, covered exactly once.
/// `Complex` matrices additionally have secondary columns, covered at most
/// once; rows address secondary columns through the second field of
/// [`crate::row::SparseConstraint`]/[`crate::row::BinaryConstraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Config {
    Simple { columns: usize },
    Complex {
        primary_columns: usize,
        secondary_columns: usize,
    },
}

impl Config {
    fn column_counts(self) -> ColumnCounts {
        match self {
            Config::Simple { columns } => ColumnCounts { primary: columns, secondary: 0 },
            Config::Complex { primary_columns, secondary_columns } => ColumnCounts {
                primary: primary_columns,
                secondary: secondary_columns,
            },
        }
    }
}

/// Builds [`Solver`]s and [`Template`]s for row payload type `T`.
///
/// `DancingLinks<T>` carries no state of its own — the payload type is the
/// only thing it fixes — so it is freely cloned/copied and has no need to
/// outlive the solvers it creates. The column shape (simple vs. complex) is
/// a compile-time distinction picked by which constructor you call, which is
/// why there are four of them rather than one method taking [`Config`] and
/// branching at runtime: `Solver<Simple, T>` and `Solver<Complex, T>` are
/// different monomorphizations, not variants of one type.
#[derive(Debug, Clone, Copy, Default)]
pub struct DancingLinks<T> {
    _payload: PhantomData<T>,
}

impl<T> DancingLinks<T> {
    pub fn new() -> Self {
        DancingLinks { _payload: PhantomData }
    }

    /// Creates a [`Solver`] configured for matrices with only primary columns.
    ///
    /// `validate` controls whether every added row is checked against the
    /// declared column counts (out-of-range indices, wrong-length binary
    /// rows) as it is added; turn it off only once a row source is already
    /// known to be in range, to skip the per-row bounds check. It can also be
    /// turned on later via [`Solver::validate_constraints`].
    pub fn create_simple_solver(&self, columns: usize, validate: bool) -> Solver<Simple, T> {
        Solver::new(ConstraintHandler::new(
            Config::Simple { columns }.column_counts(),
            validate,
        ))
    }

    /// Creates a [`Solver`] configured for matrices with primary and secondary columns.
    pub fn create_complex_solver(
        &self,
        primary_columns: usize,
        secondary_columns: usize,
        validate: bool,
    ) -> Solver<Complex, T> {
        Solver::new(ConstraintHandler::new(
            Config::Complex { primary_columns, secondary_columns }.column_counts(),
            validate,
        ))
    }

    /// Creates a [`Template`] configured for matrices with only primary columns.
    pub fn create_simple_template(&self, columns: usize, validate: bool) -> Template<Simple, T> {
        Template::new(ConstraintHandler::new(
            Config::Simple { columns }.column_counts(),
            validate,
        ))
    }

    /// Creates a [`Template`] configured for matrices with primary and secondary columns.
    pub fn create_complex_template(
        &self,
        primary_columns: usize,
        secondary_columns: usize,
        validate: bool,
    ) -> Template<Complex, T> {
        Template::new(ConstraintHandler::new(
            Config::Complex { primary_columns, secondary_columns }.column_counts(),
            validate,
        ))
    }
}
