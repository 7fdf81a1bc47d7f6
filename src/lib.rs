//! [Exact cover] solver using Knuth's [dancing links (DLX)] algorithm,
//! generalized to Algorithm C's primary/secondary column distinction.
//!
//! [exact cover]: https://en.wikipedia.org/wiki/Exact_cover
//! [dancing links (DLX)]: https://en.wikipedia.org/wiki/Dancing_Links
//!
//! # Concept
//!
//! Many puzzle-like problems, such as polyomino packing, Sudoku, and the
//! N-queens problem, can be modeled as exact cover problems. This library
//! provides an efficient solver for the generic exact cover problem and its
//! generalization to constraints that may be left uncovered (secondary
//! columns), so you can model your own problem, solve it, and inspect the
//! solutions in code.
//!
//! A matrix is built from rows, each addressing a set of columns (either by
//! listing which columns it covers, or as a boolean vector the width of the
//! column count). [`Config`] picks the column shape once, up front:
//!
//! - [`Config::Simple`] — every column must be covered by exactly one
//!   chosen row.
//! - [`Config::Complex`] — primary columns as above, plus secondary columns
//!   that may be covered by at most one chosen row, or left uncovered.
//!
//! # Basic example
//!
//! ```
//! use exact_cover::DancingLinks;
//!
//! let dlx: DancingLinks<&str> = DancingLinks::new();
//! let mut solver = dlx.create_simple_solver(3, true);
//! solver.add_sparse("A", vec![0, 1, 2]).unwrap();
//! solver.add_sparse("B", vec![0]).unwrap();
//! solver.add_sparse("C", vec![1]).unwrap();
//! solver.add_sparse("D", vec![2]).unwrap();
//! solver.add_sparse("E", vec![0, 1]).unwrap();
//! solver.add_sparse("F", vec![1, 2]).unwrap();
//!
//! let solutions = solver.find_all().unwrap();
//! println!("{:?}", solutions);
//! ```
//!
//! # Lazy solving
//!
//! Solving a large exact cover problem can take a long time, and callers
//! rarely need every solution. [`Solver::create_stream`] returns a plain
//! [`Iterator`]: the search advances to the next solution boundary exactly
//! when `next` is called, and no further, so `solver.create_stream().take(n)`
//! never does more work than finding the first `n` solutions requires.
//!
//! # Templates
//!
//! Building the matrix costs time proportional to the row count. When
//! several related problems share a large common base of rows,
//! [`DancingLinks::create_simple_template`]/[`DancingLinks::create_complex_template`]
//! let that base be built once and reused: [`Template::create_solver`] spawns an independent
//! [`Solver`] seeded with a deep copy of the template's rows, so solvers
//! spawned from the same template never observe each other's, or the
//! template's, later mutations.

mod algorithm;
mod builder;
mod capacity;
mod constraints;
mod context;
pub mod error;
mod factory;
mod row;
mod solver;
mod store;

pub use algorithm::{Solution, SolutionEntry};
pub use constraints::ConstraintHandler;
pub use error::{ConstraintField, Error, Result};
pub use factory::{Config, DancingLinks};
pub use row::{BinaryConstraint, Complex, Mode, Row, Simple, SparseConstraint};
pub use solver::{Solver, SolutionStream, Template};
