//Besace
//Copyright (C) 2024-2025 Besace contributors
//
//This program is free software: you can redistribute it and/or modify
//it under the terms of the GNU Affero General Public License as published by
//the Free Software Foundation, either version 3 of the License, or
//(at your option) any later version.
//
//This program is distributed in the hope that it will be useful,
//but WITHOUT ANY WARRANTY; without even the implied warranty of
//MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//GNU Affero General Public License for more details.
//
//You should have received a copy of the GNU Affero General Public License
//along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Depth-first branch-and-bound over the items. The search keeps the value of
//! the best complete solution found so far (the incumbent) and prunes every
//! subtree that cannot beat it, using the sum of the undecided values as the
//! upper bound. The bound ignores the remaining capacity, which makes it
//! admissible for free: it assumes every undecided item could still be added.
//! It is weaker than a weight-aware fractional bound and is kept on purpose;
//! strengthening it changes the call counts but never the answers.

use search_trail::{StateManager, SaveAndRestore};

use crate::common::Solution;
use crate::core::problem::{ItemIndex, Problem};
use super::statistics::Statistics;
use super::{Candidate, into_solution, merge};

/// Branch-and-bound solver. The constant parameter tells if statistics must
/// be recorded or not.
pub struct BranchAndBoundSolver<const S: bool> {
    /// The problem to solve
    problem: Problem,
    /// State manager that allows to retrieve previous values when backtracking in the search tree
    state: StateManager,
    /// Statistics collectors
    statistics: Statistics<S>,
}

impl<const S: bool> BranchAndBoundSolver<S> {

    pub fn new(problem: Problem, state: StateManager) -> Self {
        Self {
            problem,
            state,
            statistics: Statistics::default(),
        }
    }

    pub fn solve(&mut self) -> Solution {
        if self.problem.number_items() == 0 {
            return Solution::empty(1);
        }
        let remaining_value = self.problem.total_value(false, &self.state);
        let (candidate, calls) = self.explore(0, 0, 0, 0, remaining_value);
        self.statistics.print();
        into_solution(candidate, calls)
    }

    /// Explores the subtree rooted at item `next`. `best_value` is the value
    /// of the best complete solution found anywhere in the search so far;
    /// `current_value` and `current_weight` sum the items forced in along the
    /// current path; `remaining_value` sums the values of the items not yet
    /// decided. Returns the best assignment of the subtree, if any beats the
    /// incumbent, and the number of calls made.
    fn explore(
        &mut self,
        next: usize,
        mut best_value: u64,
        current_value: u64,
        current_weight: u64,
        remaining_value: u64,
    ) -> (Option<Candidate>, usize) {
        // Base case: a complete assignment, feasible by construction since the
        // weight was checked before every include branch. The pruning rules
        // only let the search reach a leaf that improves on the incumbent; a
        // violation here means the bound or the incumbent propagation is wrong
        // and the answer cannot be trusted.
        if next == self.problem.number_items() {
            if current_value <= best_value {
                panic!("complete assignment of value {} does not beat the incumbent {}", current_value, best_value);
            }
            self.statistics.solution();
            let candidate = Candidate {
                selection: self.problem.selection(&self.state),
                value: current_value,
                weight: current_weight,
            };
            return (Some(candidate), 1);
        }

        // Even taking every undecided item would not beat the incumbent
        if current_value + remaining_value <= best_value {
            self.statistics.bound_prune();
            return (None, 1);
        }
        self.statistics.node();

        let item = ItemIndex(next);
        let item_value = self.problem[item].value();
        let item_weight = self.problem[item].weight();

        // Try including this item, if it fits
        let mut include = None;
        let mut include_calls = 1;
        if current_weight + item_weight <= self.problem.capacity() {
            self.state.save_state();
            self.problem[item].set_selected(true, &mut self.state);
            let (candidate, calls) = self.explore(
                next + 1,
                best_value,
                current_value + item_value,
                current_weight + item_weight,
                remaining_value - item_value,
            );
            self.state.restore_state();
            // A better complete solution raises the incumbent for the exclude
            // branch evaluated right after
            if let Some(candidate) = &candidate {
                if candidate.value > best_value {
                    best_value = candidate.value;
                }
            }
            include = candidate;
            include_calls = calls;
        } else {
            self.statistics.weight_skip();
        }

        // Try excluding this item, only if doing so can still beat the incumbent
        let mut exclude = None;
        let mut exclude_calls = 1;
        if current_value + remaining_value - item_value > best_value {
            self.state.save_state();
            self.problem[item].set_selected(false, &mut self.state);
            let (candidate, calls) = self.explore(
                next + 1,
                best_value,
                current_value,
                current_weight,
                remaining_value - item_value,
            );
            self.state.restore_state();
            exclude = candidate;
            exclude_calls = calls;
        } else {
            self.statistics.exclude_skip();
        }

        (merge(include, exclude), include_calls + exclude_calls + 1)
    }
}
