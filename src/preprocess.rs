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

//! Preprocessing for the dominance solver: computes, once per run, which
//! items each item dominates. The relation is static during the search; only
//! the per-item block markers move, and those live on the trail.

use crate::core::problem::{ItemIndex, Problem};

pub struct Preprocessor<'b> {
    /// The problem whose block lists are being built
    problem: &'b mut Problem,
}

impl<'b> Preprocessor<'b> {

    pub fn new(problem: &'b mut Problem) -> Self {
        Self {
            problem,
        }
    }

    /// Builds the block lists of the items. If `sort` is set, the items are
    /// then reordered by decreasing block count, renumbered, and the lists
    /// rebuilt against the new ordering.
    pub fn preprocess(&mut self, sort: bool) {
        self.build_block_lists();
        if sort {
            self.problem.sort_by_block_count();
            self.build_block_lists();
        }
    }

    fn build_block_lists(&mut self) {
        let block_lists: Vec<Vec<ItemIndex>> = self.problem.items_iter()
            .map(|blocker| {
                self.problem.items_iter()
                    .filter(|&other| blocker != other && self.problem[blocker].dominates(&self.problem[other]))
                    .collect()
            })
            .collect();
        for (id, blocks) in block_lists.into_iter().enumerate() {
            self.problem[ItemIndex(id)].set_blocks(blocks);
        }
    }
}

#[cfg(test)]
mod test_preprocessor {

    use search_trail::StateManager;
    use crate::core::problem::{ItemIndex, Problem};
    use crate::preprocess::Preprocessor;

    #[test]
    pub fn block_lists_follow_the_domination_relation() {
        let mut state = StateManager::default();
        // Item 1 dominates 0 and 2; item 0 dominates 2; item 2 dominates nothing
        let mut problem = Problem::new(&[(6, 4), (8, 3), (5, 6)], 10, &mut state);
        Preprocessor::new(&mut problem).preprocess(false);
        assert_eq!(vec![ItemIndex(2)], problem[ItemIndex(0)].blocks());
        assert_eq!(vec![ItemIndex(0), ItemIndex(2)], problem[ItemIndex(1)].blocks());
        assert!(problem[ItemIndex(2)].blocks().is_empty());
    }

    #[test]
    pub fn equal_items_block_each_other() {
        let mut state = StateManager::default();
        let mut problem = Problem::new(&[(5, 3), (5, 3)], 10, &mut state);
        Preprocessor::new(&mut problem).preprocess(false);
        assert_eq!(vec![ItemIndex(1)], problem[ItemIndex(0)].blocks());
        assert_eq!(vec![ItemIndex(0)], problem[ItemIndex(1)].blocks());
    }

    #[test]
    pub fn sorting_renumbers_and_rebuilds() {
        let mut state = StateManager::default();
        // Block counts before sorting: item 0 -> 1, item 1 -> 2, item 2 -> 0
        let mut problem = Problem::new(&[(6, 4), (8, 3), (5, 6)], 10, &mut state);
        Preprocessor::new(&mut problem).preprocess(true);
        // The old item 1 now sits first and still blocks the two others
        assert_eq!(0, problem[ItemIndex(0)].id());
        assert_eq!(8, problem[ItemIndex(0)].value());
        assert_eq!(vec![ItemIndex(1), ItemIndex(2)], problem[ItemIndex(0)].blocks());
        assert_eq!(6, problem[ItemIndex(1)].value());
        assert_eq!(vec![ItemIndex(2)], problem[ItemIndex(1)].blocks());
        assert_eq!(5, problem[ItemIndex(2)].value());
        assert!(problem[ItemIndex(2)].blocks().is_empty());
    }
}
