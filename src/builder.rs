//! Translates a validated row list into a fresh [`crate::context::SearchContext`].

use crate::capacity;
use crate::context::SearchContext;
use crate::error::Result;
use crate::row::{ColumnCounts, Row};
use crate::store::{ColumnStore, NodeStore, NULL_INDEX, ROOT};

/// Builds a fresh matrix (and the [`SearchContext`] that owns it) from a
/// validated, already-encoded row list.
///
/// `rows` is borrowed, not consumed: the same row list is rebuilt from
/// scratch by every `find_one`/`find`/`find_all` call and by every
/// `Template::create_solver`, so [`crate::row::Row::data`] must be
/// [`Clone`].
pub fn build<T: Clone>(cfg: ColumnCounts, rows: &[Row<T>]) -> Result<SearchContext<T>> {
    let cap = capacity::estimate(cfg.primary, cfg.secondary, rows.iter().map(|r| r.columns.len()));
    let mut nodes = NodeStore::with_capacity(cap.num_nodes);
    let mut columns = ColumnStore::with_capacity(cap.num_columns);

    // Root header: node 0 / column 0, self-linked in all four directions.
    let root_node = nodes.allocate_node(ROOT, NULL_INDEX)?;
    debug_assert_eq!(root_node, ROOT);
    let root_col = columns.allocate_column(root_node)?;
    debug_assert_eq!(root_col, ROOT);

    // Primary columns: threaded into the ring immediately before the root,
    // so the final traversal order matches insertion order.
    for p in 0..cfg.primary {
        let col_idx = p + 1;
        let header = nodes.allocate_node(col_idx, NULL_INDEX)?;
        let allocated = columns.allocate_column(header)?;
        debug_assert_eq!(allocated, col_idx);
        columns.link_before(col_idx, ROOT);
    }

    // Secondary columns: headers exist but stay self-linked, outside the ring.
    for s in 0..cfg.secondary {
        let col_idx = cfg.primary + 1 + s;
        let header = nodes.allocate_node(col_idx, NULL_INDEX)?;
        let allocated = columns.allocate_column(header)?;
        debug_assert_eq!(allocated, col_idx);
    }

    let mut row_data = Vec::with_capacity(rows.len());
    for (row_idx, row) in rows.iter().enumerate() {
        row_data.push(row.data.clone());

        let mut first = None;
        let mut prev = None;
        for &col0 in &row.columns {
            let col_idx = col0 + 1; // skip root
            let node = nodes.allocate_node(col_idx, row_idx)?;

            let header = columns.head[col_idx];
            let tail = nodes.up[header];
            nodes.link_vertical(tail, node);
            nodes.link_vertical(node, header);
            columns.len[col_idx] += 1;

            if let Some(p) = prev {
                nodes.link_horizontal(p, node);
            } else {
                first = Some(node);
            }
            prev = Some(node);
        }
        if let (Some(first), Some(last)) = (first, prev) {
            nodes.link_horizontal(last, first);
        }
    }

    Ok(SearchContext::new(nodes, columns, row_data))
}
