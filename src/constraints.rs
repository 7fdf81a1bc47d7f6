//! The public constraint-building surface shared by [`crate::solver::Solver`]
//! and [`crate::solver::Template`].
//!
//! `ConstraintHandler` just accumulates [`Row`]s; it holds no matrix
//! state at all, so the same handler can be rebuilt into a fresh
//! [`crate::context::SearchContext`] (via [`crate::builder::build`]) as many
//! times as needed.

use std::marker::PhantomData;

use crate::error::{Error, Result};
use crate::row::{ColumnCounts, Row, Mode};

/// Accumulates rows for a matrix with `M` primary/secondary column shape and
/// per-row payload `T`.
#[derive(Debug, Clone)]
pub struct ConstraintHandler<M: Mode, T> {
    columns: ColumnCounts,
    validate: bool,
    rows: Vec<Row<T>>,
    _mode: PhantomData<M>,
}

impl<M: Mode, T> ConstraintHandler<M, T> {
    pub(crate) fn new(columns: ColumnCounts, validate: bool) -> Self {
        ConstraintHandler {
            columns,
            validate,
            rows: Vec::new(),
            _mode: PhantomData,
        }
    }

    pub(crate) fn columns(&self) -> ColumnCounts {
        self.columns
    }

    pub(crate) fn validate(&self) -> bool {
        self.validate
    }

    pub(crate) fn rows(&self) -> &[Row<T>] {
        &self.rows
    }

    /// Turns on per-row bounds/length checks for every addition from this
    /// point on. Calling this more than once has no further effect: once
    /// enabled, validation stays enabled.
    pub fn validate_constraints(&mut self) {
        self.validate = true;
    }

    /// Appends an already-encoded row, bypassing constraint validation —
    /// the row is assumed to already address columns in range. Used for
    /// [`Self::add_row`] and to seed a solver spawned from a
    /// [`crate::solver::Template`] with a deep copy of the template's rows.
    pub fn add_row(&mut self, row: Row<T>) -> &mut Self {
        self.rows.push(row);
        self
    }

    /// Adds every row in `rows` via [`Self::add_row`], in order.
    pub fn add_rows<I>(&mut self, rows: I) -> &mut Self
    where
        I: IntoIterator<Item = Row<T>>,
    {
        for row in rows {
            self.add_row(row);
        }
        self
    }

    pub(crate) fn ensure_has_rows(&self) -> Result<()> {
        if self.rows.is_empty() {
            return Err(Error::NoConstraints);
        }
        Ok(())
    }

    /// Adds one row from a sparse constraint literal (shape depends on `M`).
    pub fn add_sparse(&mut self, data: T, constraint: M::Sparse) -> Result<&mut Self> {
        let columns = M::encode_sparse(self.columns, constraint, self.validate)?;
        self.rows.push(Row { data, columns });
        Ok(self)
    }

    /// Adds one row from a binary (boolean-vector) constraint literal.
    pub fn add_binary(&mut self, data: T, constraint: M::Binary) -> Result<&mut Self> {
        let columns = M::encode_binary(self.columns, constraint, self.validate)?;
        self.rows.push(Row { data, columns });
        Ok(self)
    }

    /// Adds every row in `constraints` via [`Self::add_sparse`], in order.
    pub fn add_sparse_batch<I>(&mut self, constraints: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (T, M::Sparse)>,
    {
        for (data, constraint) in constraints {
            self.add_sparse(data, constraint)?;
        }
        Ok(self)
    }

    /// Adds every row in `constraints` via [`Self::add_binary`], in order.
    pub fn add_binary_batch<I>(&mut self, constraints: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (T, M::Binary)>,
    {
        for (data, constraint) in constraints {
            self.add_binary(data, constraint)?;
        }
        Ok(self)
    }

    /// Number of rows added so far.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
