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

//! Exhaustive enumeration of every subset of the items. Visits all 2^n
//! leaves, so it is only practical for small instances; the other solvers are
//! validated against it.

use search_trail::{StateManager, SaveAndRestore};

use crate::common::Solution;
use crate::core::problem::{ItemIndex, Problem};
use super::statistics::Statistics;
use super::{Candidate, into_solution, merge};

/// Solver trying every assignment of the items. The constant parameter tells
/// if statistics must be recorded or not.
pub struct ExhaustiveSolver<const S: bool> {
    /// The problem to solve
    problem: Problem,
    /// State manager that allows to retrieve previous values when backtracking in the search tree
    state: StateManager,
    /// Statistics collectors
    statistics: Statistics<S>,
}

impl<const S: bool> ExhaustiveSolver<S> {

    pub fn new(problem: Problem, state: StateManager) -> Self {
        Self {
            problem,
            state,
            statistics: Statistics::default(),
        }
    }

    pub fn solve(&mut self) -> Solution {
        let (candidate, calls) = self.explore(0);
        self.statistics.print();
        into_solution(candidate, calls)
    }

    /// Recursively assigns the items in or out of the solution, starting from
    /// `next`. Returns the best assignment of the subtree and the number of
    /// calls made to find it.
    fn explore(&mut self, next: usize) -> (Option<Candidate>, usize) {
        // Base case: every item has been assigned, score the selection
        if next == self.problem.number_items() {
            return match self.problem.solution_value(&self.state) {
                Some(value) => {
                    self.statistics.solution();
                    let candidate = Candidate {
                        selection: self.problem.selection(&self.state),
                        value,
                        weight: self.problem.total_weight(true, &self.state),
                    };
                    (Some(candidate), 1)
                },
                None => {
                    self.statistics.infeasible();
                    (None, 1)
                },
            };
        }
        self.statistics.node();
        let item = ItemIndex(next);

        // Try including this item
        self.state.save_state();
        self.problem[item].set_selected(true, &mut self.state);
        let (include, include_calls) = self.explore(next + 1);
        self.state.restore_state();

        // Try excluding this item
        self.state.save_state();
        self.problem[item].set_selected(false, &mut self.state);
        let (exclude, exclude_calls) = self.explore(next + 1);
        self.state.restore_state();

        (merge(include, exclude), include_calls + exclude_calls + 1)
    }
}
