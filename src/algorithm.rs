//! The non-recursive Algorithm X state machine: FORWARD/ADVANCE/BACKUP/RECOVER/DONE.
//!
//! The state machine itself is driven by a plain `loop` inside
//! [`SearchContext::next_solution`] — there is no recursion, so the native
//! call stack never grows with search depth. The actual backtracking stack
//! is the explicit `choice: Vec<usize>` on [`SearchContext`], which is what
//! makes the search resumable at solution boundaries: calling
//! `next_solution` again re-enters at `RECOVER` and continues from exactly
//! where the previous call left off.

use crate::context::SearchContext;
use crate::store::ROOT;

/// One chosen row in an emitted solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionEntry<T> {
    /// Position of this row in the input row list the handler was built from.
    pub row_index: usize,
    pub data: T,
}

/// An exact cover solution: an ordered list of the rows chosen to reach it,
/// in the order the algorithm chose them.
pub type Solution<T> = Vec<SolutionEntry<T>>;

enum Transition<T> {
    Forward,
    Advance,
    Backup,
    Recover,
    Solution(Solution<T>),
    Done,
}

impl<T: Clone> SearchContext<T> {
    /// Runs the state machine until one more solution is produced, or
    /// returns `None` once the search space is exhausted.
    ///
    /// The first call enters at `FORWARD`. Every later call resumes the
    /// search for the *next* solution by re-entering at `RECOVER` (trying
    /// the next sibling row of the most recently returned solution), unless
    /// the search already returned to the root with nothing left to try, in
    /// which case it keeps returning `None`.
    pub(crate) fn next_solution(&mut self) -> Option<Solution<T>> {
        let mut transition = if !self.has_started {
            self.has_started = true;
            Transition::Forward
        } else if self.exhausted {
            return None;
        } else {
            // `level == 0` does not by itself mean there is nothing left to
            // try: a single row can cover everything at level 0, in which
            // case sibling rows of that same choice still need visiting.
            // `exhausted` is only set once BACKUP has nowhere left to back
            // up from.
            Transition::Recover
        };

        loop {
            transition = match transition {
                Transition::Forward => self.do_forward(),
                Transition::Advance => self.do_advance(),
                Transition::Backup => self.do_backup(),
                Transition::Recover => self.do_recover(),
                Transition::Solution(solution) => return Some(solution),
                Transition::Done => return None,
            };
        }
    }

    fn do_forward(&mut self) -> Transition<T> {
        if self.is_solved() {
            // Only reachable when there were no primary columns to begin
            // with: every entry chosen so far (none, at level 0) already
            // covers everything there is to cover. Nothing was ever
            // covered, so there is no choice to back out of afterwards.
            self.exhausted = true;
            return Transition::Solution(self.record_solution(self.level));
        }

        let col = self.choose_column();
        self.cover(col);
        self.best_col_index = col;
        let head = self.columns.head[col];
        self.current_node_index = self.nodes.down[head];
        self.set_choice(self.current_node_index);
        Transition::Advance
    }

    fn do_advance(&mut self) -> Transition<T> {
        let head = self.columns.head[self.best_col_index];
        if self.current_node_index == head {
            return Transition::Backup;
        }

        let mut p = self.nodes.right[self.current_node_index];
        while p != self.current_node_index {
            self.cover(self.nodes.col[p]);
            p = self.nodes.right[p];
        }

        if self.is_solved() {
            return Transition::Solution(self.record_solution(self.level + 1));
        }

        self.level += 1;
        Transition::Forward
    }

    fn do_backup(&mut self) -> Transition<T> {
        self.uncover(self.best_col_index);
        if self.level == 0 {
            self.exhausted = true;
            return Transition::Done;
        }
        self.level -= 1;
        self.current_node_index = self.choice[self.level];
        self.best_col_index = self.nodes.col[self.current_node_index];
        Transition::Recover
    }

    fn do_recover(&mut self) -> Transition<T> {
        let mut p = self.nodes.left[self.current_node_index];
        while p != self.current_node_index {
            self.uncover(self.nodes.col[p]);
            p = self.nodes.left[p];
        }
        self.current_node_index = self.nodes.down[self.current_node_index];
        self.choice[self.level] = self.current_node_index;
        Transition::Advance
    }

    /// Records `node` as the choice for the current level. Backtracking
    /// never truncates `choice` (cheaper than reallocating on every
    /// `BACKUP`), so a level revisited after a deeper excursion already has
    /// a slot: overwrite it instead of appending past it.
    fn set_choice(&mut self, node: usize) {
        if self.level == self.choice.len() {
            self.choice.push(node);
        } else {
            self.choice[self.level] = node;
        }
    }

    fn is_solved(&self) -> bool {
        self.columns.next[ROOT] == ROOT
    }

    /// Minimum-remaining-values column choice with the unit-propagation and
    /// dead-column fast paths: the first column with zero or one candidate
    /// rows wins outright; otherwise the smallest `len` seen in the ring
    /// wins, ties going to the earliest-scanned column.
    fn choose_column(&self) -> usize {
        let mut c = self.columns.next[ROOT];
        let mut best = c;
        let mut best_len = self.columns.len[c];
        while c != ROOT {
            let l = self.columns.len[c];
            if l == 0 || l == 1 {
                return c;
            }
            if l < best_len {
                best = c;
                best_len = l;
            }
            c = self.columns.next[c];
        }
        best
    }

    fn record_solution(&self, count: usize) -> Solution<T> {
        self.choice[..count]
            .iter()
            .map(|&node| {
                let row_index = self.nodes.row_index[node];
                SolutionEntry {
                    row_index,
                    data: self.row_data[row_index].clone(),
                }
            })
            .collect()
    }

    /// Removes column `c` from the header ring and hides every row that
    /// passes through it from every other column those rows occupy.
    fn cover(&mut self, c: usize) {
        let (p, n) = (self.columns.prev[c], self.columns.next[c]);
        self.columns.next[p] = n;
        self.columns.prev[n] = p;

        let head = self.columns.head[c];
        let mut r = self.nodes.down[head];
        while r != head {
            let mut j = self.nodes.right[r];
            while j != r {
                let (u, d, col_j) = (self.nodes.up[j], self.nodes.down[j], self.nodes.col[j]);
                self.nodes.down[u] = d;
                self.nodes.up[d] = u;
                self.columns.len[col_j] -= 1;
                j = self.nodes.right[j];
            }
            r = self.nodes.down[r];
        }
    }

    /// Exact reverse of [`Self::cover`]: bottom-to-top, right-to-left.
    fn uncover(&mut self, c: usize) {
        let head = self.columns.head[c];
        let mut r = self.nodes.up[head];
        while r != head {
            let mut j = self.nodes.left[r];
            while j != r {
                let (u, d, col_j) = (self.nodes.up[j], self.nodes.down[j], self.nodes.col[j]);
                self.nodes.down[u] = j;
                self.nodes.up[d] = j;
                self.columns.len[col_j] += 1;
                j = self.nodes.left[j];
            }
            r = self.nodes.up[r];
        }

        let (p, n) = (self.columns.prev[c], self.columns.next[c]);
        self.columns.next[p] = c;
        self.columns.prev[n] = c;
    }
}
