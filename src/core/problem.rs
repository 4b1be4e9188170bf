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

//! Representation of a knapsack problem: the items and the capacity of the
//! knapsack, together with the aggregate queries every solver scores its
//! candidate solutions with.

use search_trail::StateManager;

use crate::common::Selected;
use crate::core::item::Item;

/// Abstraction used as a typesafe way of retrieving an `Item` in the `Problem` structure
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ItemIndex(pub usize);

/// Data structure representing the problem: a set of items and the maximum
/// weight the knapsack can hold. The capacity is fixed for the duration of a
/// solve call.
#[derive(Debug)]
pub struct Problem {
    /// Vector containing the items of the problem
    items: Vec<Item>,
    /// Maximum total weight of a feasible selection
    capacity: u64,
}

impl Problem {

    /// Creates a new problem from (value, weight) pairs
    pub fn new(items: &[(u64, u64)], capacity: u64, state: &mut StateManager) -> Self {
        let items = items
            .iter()
            .copied()
            .enumerate()
            .map(|(id, (value, weight))| Item::new(id, value, weight, state))
            .collect();
        Self {
            items,
            capacity,
        }
    }

    /// Returns the number of items in the problem
    pub fn number_items(&self) -> usize {
        self.items.len()
    }

    /// Returns the capacity of the knapsack
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Returns the total value of the items. If `only_selected` is true, only
    /// the items of the current partial selection are summed
    pub fn total_value(&self, only_selected: bool, state: &StateManager) -> u64 {
        self.items
            .iter()
            .filter(|item| !only_selected || item.is_selected(state))
            .map(|item| item.value())
            .sum()
    }

    /// Returns the total weight of the items. If `only_selected` is true, only
    /// the items of the current partial selection are summed
    pub fn total_weight(&self, only_selected: bool, state: &StateManager) -> u64 {
        self.items
            .iter()
            .filter(|item| !only_selected || item.is_selected(state))
            .map(|item| item.weight())
            .sum()
    }

    /// Returns the value of the current selection, or None if its weight
    /// exceeds the capacity. An overweight selection has no value at all, so
    /// it can never be preferred over the empty one.
    pub fn solution_value(&self, state: &StateManager) -> Option<u64> {
        if self.total_weight(true, state) > self.capacity {
            None
        } else {
            Some(self.total_value(true, state))
        }
    }

    /// Returns a snapshot of the current selection, detached from the search
    /// state
    pub fn selection(&self, state: &StateManager) -> Vec<Selected> {
        self.items
            .iter()
            .filter(|item| item.is_selected(state))
            .map(|item| Selected::new(item.id(), item.value(), item.weight()))
            .collect()
    }

    /// Marks every yet-unblocked item dominated by `source` as blocked by it.
    /// An item already blocked by an earlier exclusion keeps its first
    /// blocker. The marks go through the state manager, so restoring the
    /// trail to a point saved before this call clears exactly these marks.
    pub fn block_dominated(&self, source: ItemIndex, state: &mut StateManager) {
        let blocker = self[source].id();
        for target in self[source].blocks().iter().copied() {
            if !self[target].is_blocked(state) {
                self[target].set_blocked_by(blocker, state);
            }
        }
    }

    /// Sorts the items by decreasing block-list length and renumbers them
    /// 0..n-1. Deciding the most-blocking items first increases the pruning
    /// yield of the dominance search. The block lists must be rebuilt
    /// afterwards since they refer to positions in the old ordering.
    pub fn sort_by_block_count(&mut self) {
        self.items.sort_unstable_by(|a, b| b.blocks().len().cmp(&a.blocks().len()));
        for (id, item) in self.items.iter_mut().enumerate() {
            item.set_id(id);
        }
    }

    // --- ITERATOR --- //

    /// Returns an iterator over the items of the problem
    pub fn items_iter(&self) -> impl Iterator<Item = ItemIndex> {
        (0..self.items.len()).map(ItemIndex)
    }
}

impl std::ops::Index<ItemIndex> for Problem {
    type Output = Item;

    fn index(&self, index: ItemIndex) -> &Self::Output {
        &self.items[index.0]
    }
}

impl std::ops::IndexMut<ItemIndex> for Problem {
    fn index_mut(&mut self, index: ItemIndex) -> &mut Self::Output {
        &mut self.items[index.0]
    }
}

#[cfg(test)]
mod test_problem {

    use search_trail::{StateManager, SaveAndRestore};
    use crate::core::problem::{ItemIndex, Problem};

    fn example_problem(state: &mut StateManager) -> Problem {
        Problem::new(&[(10, 5), (6, 3), (4, 2)], 5, state)
    }

    #[test]
    pub fn aggregates_over_all_items() {
        let mut state = StateManager::default();
        let problem = example_problem(&mut state);
        assert_eq!(20, problem.total_value(false, &state));
        assert_eq!(10, problem.total_weight(false, &state));
    }

    #[test]
    pub fn aggregates_over_the_selection() {
        let mut state = StateManager::default();
        let problem = example_problem(&mut state);
        assert_eq!(0, problem.total_value(true, &state));
        problem[ItemIndex(1)].set_selected(true, &mut state);
        problem[ItemIndex(2)].set_selected(true, &mut state);
        assert_eq!(10, problem.total_value(true, &state));
        assert_eq!(5, problem.total_weight(true, &state));
    }

    #[test]
    pub fn overweight_selection_has_no_value() {
        let mut state = StateManager::default();
        let problem = example_problem(&mut state);
        problem[ItemIndex(0)].set_selected(true, &mut state);
        assert_eq!(Some(10), problem.solution_value(&state));
        problem[ItemIndex(2)].set_selected(true, &mut state);
        assert_eq!(None, problem.solution_value(&state));
    }

    #[test]
    pub fn empty_selection_is_feasible() {
        let mut state = StateManager::default();
        let problem = Problem::new(&[(3, 7), (5, 9)], 0, &mut state);
        assert_eq!(Some(0), problem.solution_value(&state));
    }

    #[test]
    pub fn selection_snapshot_survives_restore() {
        let mut state = StateManager::default();
        let problem = example_problem(&mut state);
        state.save_state();
        problem[ItemIndex(1)].set_selected(true, &mut state);
        let snapshot = problem.selection(&state);
        state.restore_state();
        assert_eq!(1, snapshot.len());
        assert_eq!(1, snapshot[0].id());
        assert_eq!(6, snapshot[0].value());
        assert!(problem.selection(&state).is_empty());
    }

    #[test]
    pub fn first_blocker_wins() {
        let mut state = StateManager::default();
        // Items 0 and 1 both dominate item 2
        let mut problem = Problem::new(&[(10, 2), (8, 2), (4, 3)], 5, &mut state);
        problem[ItemIndex(0)].set_blocks(vec![ItemIndex(1), ItemIndex(2)]);
        problem[ItemIndex(1)].set_blocks(vec![ItemIndex(2)]);
        problem.block_dominated(ItemIndex(0), &mut state);
        problem.block_dominated(ItemIndex(1), &mut state);
        assert_eq!(Some(0), problem[ItemIndex(2)].blocked_by(&state));
        assert_eq!(Some(0), problem[ItemIndex(1)].blocked_by(&state));
    }

    #[test]
    pub fn block_marks_are_scoped_by_the_trail() {
        let mut state = StateManager::default();
        let mut problem = Problem::new(&[(10, 2), (4, 3)], 5, &mut state);
        problem[ItemIndex(0)].set_blocks(vec![ItemIndex(1)]);
        state.save_state();
        problem.block_dominated(ItemIndex(0), &mut state);
        assert!(problem[ItemIndex(1)].is_blocked(&state));
        state.restore_state();
        assert!(!problem[ItemIndex(1)].is_blocked(&state));
    }
}
