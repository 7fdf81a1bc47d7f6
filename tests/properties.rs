//! Property tests for the cross-entry-point correctness laws: `find_all`,
//! the lazy stream, and `find(N)` must all agree, and every emitted solution
//! must actually be an exact cover.

use std::collections::HashSet;

use exact_cover::{DancingLinks, Solution};
use proptest::collection::{btree_set, vec};
use proptest::prelude::*;

/// A small, randomly generated simple-mode matrix: `num_primary` columns and
/// a handful of rows, each an arbitrary (possibly empty) subset of the
/// columns with no column repeated within a row. Bounded small so exhaustive
/// search over every case stays fast.
fn small_matrix() -> impl Strategy<Value = (usize, Vec<Vec<usize>>)> {
    (1usize..=4).prop_flat_map(|num_primary| {
        let row = btree_set(0..num_primary, 0..=num_primary).prop_map(|set| set.into_iter().collect());
        (Just(num_primary), vec(row, 0..=6))
    })
}

fn build_solver(num_primary: usize, rows: &[Vec<usize>]) -> exact_cover::Solver<exact_cover::Simple, usize> {
    let dlx: DancingLinks<usize> = DancingLinks::new();
    let mut solver = dlx.create_simple_solver(num_primary, true);
    for (i, columns) in rows.iter().enumerate() {
        solver.add_sparse(i, columns.clone()).unwrap();
    }
    solver
}

fn covers_exactly_once(num_primary: usize, rows: &[Vec<usize>], solution: &Solution<usize>) -> bool {
    let mut covered = vec![0usize; num_primary];
    for entry in solution {
        for &c in &rows[entry.row_index] {
            covered[c] += 1;
        }
    }
    covered.iter().all(|&count| count == 1)
}

proptest! {
    // find_all() is exactly the stream drained to exhaustion, as an ordered sequence.
    #[test]
    fn find_all_matches_drained_stream((num_primary, rows) in small_matrix()) {
        if rows.is_empty() {
            return Ok(());
        }
        let solver = build_solver(num_primary, &rows);
        let via_find_all = solver.find_all().unwrap();
        let via_stream: Vec<_> = solver.create_stream().unwrap().collect();
        prop_assert_eq!(via_find_all, via_stream);
    }

    // find(n) is a prefix of find_all, for every n.
    #[test]
    fn find_n_is_a_prefix_of_find_all((num_primary, rows) in small_matrix(), n in 0usize..8) {
        if rows.is_empty() {
            return Ok(());
        }
        let solver = build_solver(num_primary, &rows);
        let all = solver.find_all().unwrap();
        let prefix = solver.find(n).unwrap();
        prop_assert_eq!(prefix.len(), n.min(all.len()));
        prop_assert_eq!(prefix.as_slice(), &all[..prefix.len()]);
    }

    // Every emitted solution is an exact cover: every primary column
    // appears exactly once across the chosen rows.
    #[test]
    fn every_solution_is_an_exact_cover((num_primary, rows) in small_matrix()) {
        if rows.is_empty() {
            return Ok(());
        }
        let solver = build_solver(num_primary, &rows);
        for solution in solver.find_all().unwrap() {
            prop_assert!(covers_exactly_once(num_primary, &rows, &solution));
        }
    }

    // find_all() never reports the same row twice within one solution, and
    // never repeats an identical solution (as a set of row indices).
    #[test]
    fn solutions_have_distinct_rows_and_are_unique((num_primary, rows) in small_matrix()) {
        if rows.is_empty() {
            return Ok(());
        }
        let solver = build_solver(num_primary, &rows);
        let all = solver.find_all().unwrap();
        let mut seen: HashSet<Vec<usize>> = HashSet::new();
        for solution in &all {
            let mut row_indices: Vec<usize> = solution.iter().map(|e| e.row_index).collect();
            let unique_count = {
                let mut sorted = row_indices.clone();
                sorted.sort_unstable();
                sorted.dedup();
                sorted.len()
            };
            prop_assert_eq!(unique_count, row_indices.len());
            row_indices.sort_unstable();
            prop_assert!(seen.insert(row_indices));
        }
    }
}

proptest! {
    // Template isolation: rows added to a template after a solver is
    // spawned from it never appear in that solver's solutions, and rows
    // added to a spawned solver never leak back into sibling solvers.
    #[test]
    fn template_mutations_do_not_cross_solver_boundaries(
        (num_primary, rows) in small_matrix(),
        extra_column in 0usize..4,
    ) {
        if rows.is_empty() || extra_column >= num_primary {
            return Ok(());
        }
        let dlx: DancingLinks<usize> = DancingLinks::new();
        let mut template = dlx.create_simple_template(num_primary, true);
        for (i, columns) in rows.iter().enumerate() {
            template.add_sparse(i, columns.clone()).unwrap();
        }

        let solver_before = template.create_solver();
        template.add_sparse(rows.len(), vec![extra_column]).unwrap();
        let solver_after = template.create_solver();

        let before_len = solver_before.len();
        let after_len = solver_after.len();
        prop_assert_eq!(before_len, rows.len());
        prop_assert_eq!(after_len, rows.len() + 1);
    }
}
