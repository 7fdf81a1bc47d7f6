//! Owns the matrix stores plus the resumable algorithm cursor.

use crate::store::{ColumnStore, NodeStore};

/// A solved-or-solving matrix together with the cursor the non-recursive
/// Algorithm X state machine resumes from.
///
/// Only [`crate::algorithm`] mutates the cursor fields; everything else
/// (the builder, the façade) treats a `SearchContext` as owned-and-opaque
/// once built.
pub struct SearchContext<T> {
    pub(crate) nodes: NodeStore,
    pub(crate) columns: ColumnStore,
    pub(crate) row_data: Vec<T>,

    pub(crate) level: usize,
    pub(crate) choice: Vec<usize>,
    pub(crate) best_col_index: usize,
    pub(crate) current_node_index: usize,
    pub(crate) has_started: bool,
    pub(crate) exhausted: bool,
}

impl<T> SearchContext<T> {
    pub(crate) fn new(nodes: NodeStore, columns: ColumnStore, row_data: Vec<T>) -> Self {
        SearchContext {
            nodes,
            columns,
            row_data,
            level: 0,
            choice: Vec::new(),
            best_col_index: 0,
            current_node_index: 0,
            has_started: false,
            exhausted: false,
        }
    }

    /// Read-only access to the node store, for inspection and tests.
    pub fn nodes(&self) -> &NodeStore {
        &self.nodes
    }

    /// Read-only access to the column store, for inspection and tests.
    pub fn columns(&self) -> &ColumnStore {
        &self.columns
    }

    /// The number of rows this context was built from.
    pub fn num_rows(&self) -> usize {
        self.row_data.len()
    }
}
