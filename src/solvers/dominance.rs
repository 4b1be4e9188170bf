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

//! Rod's technique: branch-and-bound augmented with a precomputed domination
//! relation. Once an item is excluded, any item it dominates (less valuable
//! and at least as heavy) can never be part of a better solution than one
//! that includes the dominating item instead, so it is blocked for the whole
//! exclusion subtree. The block marks are reversible state: restoring the
//! trail after the exclude branch clears exactly the marks that branch set.

use search_trail::{StateManager, SaveAndRestore};

use crate::common::Solution;
use crate::core::problem::{ItemIndex, Problem};
use crate::preprocess::Preprocessor;
use super::statistics::Statistics;
use super::{Candidate, into_solution, merge};

/// Branch-and-bound solver with domination-based blocking. The constant
/// parameter tells if statistics must be recorded or not.
pub struct DominanceSolver<const S: bool> {
    /// The problem to solve
    problem: Problem,
    /// State manager that allows to retrieve previous values when backtracking in the search tree
    state: StateManager,
    /// Statistics collectors
    statistics: Statistics<S>,
}

impl<const S: bool> DominanceSolver<S> {

    pub fn new(problem: Problem, state: StateManager) -> Self {
        Self {
            problem,
            state,
            statistics: Statistics::default(),
        }
    }

    /// Runs the search with the block lists built on the input ordering
    pub fn solve(&mut self) -> Solution {
        self.solve_inner(false)
    }

    /// Sorts the items so the most-blocking ones are decided first, then runs
    /// the search. Early decisions on high-blocking items increase the
    /// pruning yield; the items are renumbered 0..n-1 after the sort.
    pub fn solve_sorted(&mut self) -> Solution {
        self.solve_inner(true)
    }

    fn solve_inner(&mut self, sort: bool) -> Solution {
        if self.problem.number_items() == 0 {
            return Solution::empty(1);
        }
        Preprocessor::new(&mut self.problem).preprocess(sort);
        let remaining_value = self.problem.total_value(false, &self.state);
        let (candidate, calls) = self.explore(0, 0, 0, 0, remaining_value);
        self.statistics.print();
        into_solution(candidate, calls)
    }

    /// Explores the subtree rooted at item `next`; same contract as the plain
    /// branch-and-bound exploration, with the domination gates added.
    fn explore(
        &mut self,
        next: usize,
        mut best_value: u64,
        current_value: u64,
        current_weight: u64,
        remaining_value: u64,
    ) -> (Option<Candidate>, usize) {
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

        if current_value + remaining_value <= best_value {
            self.statistics.bound_prune();
            return (None, 1);
        }
        self.statistics.node();

        let item = ItemIndex(next);
        let item_value = self.problem[item].value();
        let item_weight = self.problem[item].weight();

        // Try including this item, if it fits and no excluded item dominates it
        let mut include = None;
        let mut include_calls = 1;
        if self.problem[item].is_blocked(&self.state) {
            self.statistics.blocked_skip();
        } else if current_weight + item_weight > self.problem.capacity() {
            self.statistics.weight_skip();
        } else {
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
            if let Some(candidate) = &candidate {
                if candidate.value > best_value {
                    best_value = candidate.value;
                }
            }
            include = candidate;
            include_calls = calls;
        }

        // Try excluding this item, only if doing so can still beat the
        // incumbent. The items this one dominates are blocked for the whole
        // subtree and released by the restore.
        let mut exclude = None;
        let mut exclude_calls = 1;
        if current_value + remaining_value - item_value > best_value {
            self.state.save_state();
            self.problem.block_dominated(item, &mut self.state);
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
