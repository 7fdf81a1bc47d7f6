//! The N-queens puzzle modeled as an exact cover problem, as a small
//! consumer example of the core solver surface. Not part of the library's
//! public contract — see `src/lib.rs` for that.
//!
//! One row per (rank, file) placement. Primary columns: one per rank and one
//! per file, each covered exactly once. Secondary columns: one per
//! rising/falling diagonal, each covered at most once (a diagonal may go
//! unused, but never host two queens).

use exact_cover::{DancingLinks, SparseConstraint};

fn solve(n: usize) -> Option<Vec<(usize, usize)>> {
    let num_diagonals = 2 * n - 1;
    let dlx: DancingLinks<(usize, usize)> = DancingLinks::new();
    let mut solver = dlx.create_complex_solver(2 * n, 2 * num_diagonals, true);

    for rank in 0..n {
        for file in 0..n {
            let rising = rank + file; // 0..2n-1
            let falling = n - 1 + rank - file; // 0..2n-1
            solver
                .add_sparse(
                    (rank, file),
                    SparseConstraint {
                        primary: vec![rank, n + file],
                        secondary: vec![rising, num_diagonals + falling],
                    },
                )
                .unwrap();
        }
    }

    solver.find_one().unwrap().map(|solution| {
        let mut placements: Vec<_> = solution.into_iter().map(|entry| entry.data).collect();
        placements.sort_unstable();
        placements
    })
}

fn print_board(n: usize, placements: &[(usize, usize)]) {
    let queen_file: Vec<usize> = placements.iter().map(|&(_, file)| file).collect();
    for file in &queen_file {
        let mut line = String::new();
        for f in 0..n {
            line.push(if f == *file { 'Q' } else { '.' });
        }
        println!("{line}");
    }
}

fn main() {
    for n in [4, 8] {
        match solve(n) {
            Some(placements) => {
                println!("{n}-queens: found a solution");
                print_board(n, &placements);
            }
            None => println!("{n}-queens: no solution"),
        }
        println!();
    }
}
