//! The solver and template façades: the two ways to turn an accumulated
//! [`ConstraintHandler`] into search results.

use crate::algorithm::Solution;
use crate::builder;
use crate::constraints::ConstraintHandler;
use crate::context::SearchContext;
use crate::error::Result;
use crate::row::{Row, Mode};

/// Builds rows, then runs the search, producing solutions one at a time.
///
/// A `Solver` owns exactly one search: once [`Self::create_stream`] (or any
/// of the convenience methods built on top of it) has been called, the rows
/// that were accumulated at that point are frozen into a fresh matrix and
/// searched independently of any further mutation to this handler.
pub struct Solver<M: Mode, T> {
    handler: ConstraintHandler<M, T>,
}

impl<M: Mode, T: Clone> Solver<M, T> {
    pub(crate) fn new(handler: ConstraintHandler<M, T>) -> Self {
        Solver { handler }
    }

    /// Turns on per-row bounds/length checks for every addition from this
    /// point on. Idempotent: calling it twice is the same as calling it once.
    pub fn validate_constraints(&mut self) -> &mut Self {
        self.handler.validate_constraints();
        self
    }

    /// Adds one row from a sparse constraint literal.
    pub fn add_sparse(&mut self, data: T, constraint: M::Sparse) -> Result<&mut Self> {
        self.handler.add_sparse(data, constraint)?;
        Ok(self)
    }

    /// Adds one row from a binary constraint literal.
    pub fn add_binary(&mut self, data: T, constraint: M::Binary) -> Result<&mut Self> {
        self.handler.add_binary(data, constraint)?;
        Ok(self)
    }

    /// Adds every row in `constraints` via [`Self::add_sparse`].
    pub fn add_sparse_batch<I>(&mut self, constraints: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (T, M::Sparse)>,
    {
        self.handler.add_sparse_batch(constraints)?;
        Ok(self)
    }

    /// Adds every row in `constraints` via [`Self::add_binary`].
    pub fn add_binary_batch<I>(&mut self, constraints: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (T, M::Binary)>,
    {
        self.handler.add_binary_batch(constraints)?;
        Ok(self)
    }

    /// Adds one pre-encoded row, bypassing constraint validation.
    pub fn add_row(&mut self, row: Row<T>) -> &mut Self {
        self.handler.add_row(row);
        self
    }

    /// Adds every row in `rows` via [`Self::add_row`], in order.
    pub fn add_rows<I>(&mut self, rows: I) -> &mut Self
    where
        I: IntoIterator<Item = Row<T>>,
    {
        self.handler.add_rows(rows);
        self
    }

    /// Number of rows added so far.
    pub fn len(&self) -> usize {
        self.handler.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handler.is_empty()
    }

    /// Builds the matrix and returns a lazy stream of solutions.
    ///
    /// Each call to `next` on the returned iterator runs the search forward
    /// to the next solution boundary and yields it; no solution beyond the
    /// one just yielded has been computed yet.
    pub fn create_stream(&self) -> Result<SolutionStream<T>> {
        self.handler.ensure_has_rows()?;
        let ctx = builder::build(self.handler.columns(), self.handler.rows())?;
        Ok(SolutionStream { ctx })
    }

    /// The first solution, or `None` if the problem is unsolvable.
    pub fn find_one(&self) -> Result<Option<Solution<T>>> {
        Ok(self.create_stream()?.next())
    }

    /// Up to `limit` solutions, in the order the search finds them.
    pub fn find(&self, limit: usize) -> Result<Vec<Solution<T>>> {
        Ok(self.create_stream()?.take(limit).collect())
    }

    /// Every solution. Does not terminate if the search space is infinite;
    /// for exact cover over a finite row set it always does.
    pub fn find_all(&self) -> Result<Vec<Solution<T>>> {
        Ok(self.create_stream()?.collect())
    }
}

/// A lazy, resumable stream of solutions to one search.
///
/// Implements [`Iterator`] rather than `futures::Stream`: the search is pure
/// CPU work with no suspension points, so there is nothing an async runtime
/// would add.
pub struct SolutionStream<T> {
    ctx: SearchContext<T>,
}

impl<T: Clone> Iterator for SolutionStream<T> {
    type Item = Solution<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.ctx.next_solution()
    }
}

/// A frozen, reusable row list that spawns independent solvers.
///
/// Building the matrix is proportional to the number of rows; when the same
/// constraint set is solved repeatedly (e.g. exploring several related
/// problems that share a base set of rows), a `Template` lets that cost be
/// paid once per row addition and amortized across solvers, each of which
/// gets its own isolated copy of the row list to keep adding rows to before
/// it builds its own matrix.
pub struct Template<M: Mode, T> {
    handler: ConstraintHandler<M, T>,
}

impl<M: Mode, T: Clone> Template<M, T> {
    pub(crate) fn new(handler: ConstraintHandler<M, T>) -> Self {
        Template { handler }
    }

    /// Turns on per-row bounds/length checks for every addition from this
    /// point on. Idempotent: calling it twice is the same as calling it once.
    pub fn validate_constraints(&mut self) -> &mut Self {
        self.handler.validate_constraints();
        self
    }

    /// Adds one row from a sparse constraint literal.
    pub fn add_sparse(&mut self, data: T, constraint: M::Sparse) -> Result<&mut Self> {
        self.handler.add_sparse(data, constraint)?;
        Ok(self)
    }

    /// Adds one row from a binary constraint literal.
    pub fn add_binary(&mut self, data: T, constraint: M::Binary) -> Result<&mut Self> {
        self.handler.add_binary(data, constraint)?;
        Ok(self)
    }

    /// Adds one pre-encoded row, bypassing constraint validation.
    pub fn add_row(&mut self, row: Row<T>) -> &mut Self {
        self.handler.add_row(row);
        self
    }

    /// Adds every row in `rows` via [`Self::add_row`], in order.
    pub fn add_rows<I>(&mut self, rows: I) -> &mut Self
    where
        I: IntoIterator<Item = Row<T>>,
    {
        self.handler.add_rows(rows);
        self
    }

    /// Number of rows added so far.
    pub fn len(&self) -> usize {
        self.handler.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handler.is_empty()
    }

    /// Spawns a [`Solver`] seeded with a deep copy of this template's rows
    /// and its current validation flag.
    ///
    /// Mutating the returned solver (or a sibling solver spawned later) never
    /// affects this template or any other solver spawned from it, and vice
    /// versa.
    pub fn create_solver(&self) -> Solver<M, T> {
        let rows: Vec<Row<T>> = self.handler.rows().to_vec();
        let mut handler: ConstraintHandler<M, T> =
            ConstraintHandler::new(self.handler.columns(), self.handler.validate());
        handler.add_rows(rows);
        Solver::new(handler)
    }
}
