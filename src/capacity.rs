//! Computes exact array sizes for a constraint matrix before any allocation.

/// Exact capacity needed to hold a matrix with `num_primary + num_secondary`
/// columns and the given rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    pub num_nodes: usize,
    pub num_columns: usize,
}

/// Computes the capacity for a problem from its column counts and the
/// per-row covered-column counts.
///
/// `num_nodes = 1 (root) + (P+S) (headers) + sum of |row.covered_columns|`.
/// `num_columns = 1 + P + S`.
pub fn estimate<I>(num_primary: usize, num_secondary: usize, row_lengths: I) -> Capacity
where
    I: IntoIterator<Item = usize>,
{
    let num_columns = 1 + num_primary + num_secondary;
    let mut num_nodes = num_columns;
    for len in row_lengths {
        num_nodes += len;
    }
    Capacity {
        num_nodes,
        num_columns,
    }
}
