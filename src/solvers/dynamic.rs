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

//! Bottom-up dynamic programming over (item, capacity). Cell (i, w) holds the
//! best selection among the items 0..=i for a knapsack of capacity w, so the
//! answer sits in the last cell of the last row. Runs in O(n * capacity) time
//! and space, independent of how adversarial the instance is; the price is
//! the table memory.

use search_trail::StateManager;

use crate::common::Solution;
use crate::core::problem::{ItemIndex, Problem};

/// Table-filling solver. There is no search tree, hence no statistics and a
/// call count of 1.
pub struct DynamicProgrammingSolver {
    /// The problem to solve
    problem: Problem,
    /// State manager through which the final selection is marked
    state: StateManager,
}

impl DynamicProgrammingSolver {

    pub fn new(problem: Problem, state: StateManager) -> Self {
        Self {
            problem,
            state,
        }
    }

    pub fn solve(&mut self) -> Solution {
        let number_items = self.problem.number_items();
        if number_items == 0 {
            return Solution::empty(1);
        }
        let width = self.problem.capacity() as usize + 1;

        // value[i][w] is the value of the best selection among items 0..=i
        // under capacity w; weight and chosen follow the same indexing
        let mut value = vec![vec![0u64; width]; number_items];
        let mut weight = vec![vec![0u64; width]; number_items];
        let mut chosen: Vec<Vec<Vec<usize>>> = vec![vec![Vec::new(); width]; number_items];

        // First row: only item 0 is available, take it wherever it fits
        let first = &self.problem[ItemIndex(0)];
        for w in 0..width {
            if first.weight() <= w as u64 {
                value[0][w] = first.value();
                weight[0][w] = first.weight();
                chosen[0][w].push(0);
            }
        }

        for i in 1..number_items {
            let item = ItemIndex(i);
            let item_value = self.problem[item].value();
            let item_weight = self.problem[item].weight();
            for w in 0..width {
                // The item cannot fit at all under capacity w
                if item_weight > w as u64 {
                    value[i][w] = value[i - 1][w];
                    weight[i][w] = weight[i - 1][w];
                    chosen[i][w] = chosen[i - 1][w].clone();
                    continue;
                }
                // Either item i is out and the cell is (i-1, w), or it is in
                // and the rest of the knapsack is the best selection of the
                // previous items under the capacity it leaves free
                let rest = w - item_weight as usize;
                let exclude_value = value[i - 1][w];
                let include_value = item_value + value[i - 1][rest];
                if include_value > exclude_value {
                    value[i][w] = include_value;
                    weight[i][w] = item_weight + weight[i - 1][rest];
                    let mut ids = chosen[i - 1][rest].clone();
                    ids.push(i);
                    chosen[i][w] = ids;
                } else {
                    value[i][w] = exclude_value;
                    weight[i][w] = weight[i - 1][w];
                    chosen[i][w] = chosen[i - 1][w].clone();
                }
            }
        }

        for id in chosen[number_items - 1][width - 1].iter().copied() {
            self.problem[ItemIndex(id)].set_selected(true, &mut self.state);
        }
        let selection = self.problem.selection(&self.state);
        Solution::new(selection, value[number_items - 1][width - 1], weight[number_items - 1][width - 1], 1)
    }
}

#[cfg(test)]
mod test_dynamic {

    use search_trail::StateManager;
    use crate::common::Solution;
    use crate::core::problem::Problem;
    use crate::solvers::DynamicProgrammingSolver;

    fn solve(items: &[(u64, u64)], capacity: u64) -> Solution {
        let mut state = StateManager::default();
        let problem = Problem::new(items, capacity, &mut state);
        DynamicProgrammingSolver::new(problem, state).solve()
    }

    #[test]
    pub fn finds_the_optimum_of_a_small_instance() {
        let solution = solve(&[(10, 5), (6, 3), (4, 2)], 5);
        assert_eq!(10, solution.value());
        assert!(solution.weight() <= 5);
        assert_eq!(1, solution.calls());
    }

    #[test]
    pub fn classic_table() {
        let solution = solve(&[(10, 5), (40, 4), (30, 6), (50, 4)], 10);
        assert_eq!(90, solution.value());
        assert_eq!(8, solution.weight());
    }

    #[test]
    pub fn zero_capacity_yields_the_empty_selection() {
        let solution = solve(&[(3, 4), (5, 2), (7, 6)], 0);
        assert_eq!(0, solution.value());
        assert!(solution.selection().is_empty());
    }

    #[test]
    pub fn weight_zero_items_are_free() {
        let solution = solve(&[(3, 4), (5, 0), (7, 6)], 6);
        assert_eq!(12, solution.value());
        assert_eq!(6, solution.weight());
        assert_eq!(2, solution.selection().len());
    }

    #[test]
    pub fn last_item_can_be_the_whole_solution() {
        let solution = solve(&[(1, 9), (2, 9), (50, 3)], 4);
        assert_eq!(50, solution.value());
        assert_eq!(3, solution.weight());
    }
}
