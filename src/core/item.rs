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

//! An implementation of an item in Besace. An item is the core unit of a
//! knapsack problem: a value/weight pair whose selection is decided by the
//! search. The selection flag and the block marker are reversible resources,
//! so a solver never undoes them by hand; restoring the state trail reverts
//! every write made since the matching save.

use search_trail::{StateManager, BoolManager, UsizeManager, ReversibleBool, ReversibleUsize};

use crate::core::problem::ItemIndex;

/// Marker stored in `blocked_by` when no excluded item dominates this one
const UNBLOCKED: usize = usize::MAX;

/// Data structure that actually holds the data of an item of the input problem
#[derive(Debug)]
pub struct Item {
    /// The id of the item in the input problem
    id: usize,
    /// The value (profit) of the item
    value: u64,
    /// The weight of the item
    weight: u64,
    /// Whether the item is part of the current partial selection
    selected: ReversibleBool,
    /// Id of the excluded item currently dominating this one, UNBLOCKED if none
    blocked_by: ReversibleUsize,
    /// The items that this item dominates
    blocks: Vec<ItemIndex>,
}

impl Item {

    pub fn new(id: usize, value: u64, weight: u64, state: &mut StateManager) -> Self {
        Self {
            id,
            value,
            weight,
            selected: state.manage_bool(false),
            blocked_by: state.manage_usize(UNBLOCKED),
            blocks: vec![],
        }
    }

    /// Returns the id of the item
    pub fn id(&self) -> usize {
        self.id
    }

    /// Sets the id of the item; used when the items are renumbered after the
    /// dominance preprocessing sorted them
    pub fn set_id(&mut self, id: usize) {
        self.id = id;
    }

    /// Returns the value of the item
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Returns the weight of the item
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Selects or deselects the item. This operation is reverted when the
    /// trail is restored
    pub fn set_selected(&self, selected: bool, state: &mut StateManager) {
        state.set_bool(self.selected, selected);
    }

    /// Returns true iff the item is part of the current partial selection
    pub fn is_selected(&self, state: &StateManager) -> bool {
        state.get_bool(self.selected)
    }

    /// Returns the id of the excluded item currently dominating this one
    pub fn blocked_by(&self, state: &StateManager) -> Option<usize> {
        let blocker = state.get_usize(self.blocked_by);
        if blocker == UNBLOCKED {
            None
        } else {
            Some(blocker)
        }
    }

    /// Returns true iff the item is currently blocked by an excluded dominator
    pub fn is_blocked(&self, state: &StateManager) -> bool {
        state.get_usize(self.blocked_by) != UNBLOCKED
    }

    /// Marks the item as blocked by the given dominator. This operation is
    /// reverted when the trail is restored
    pub fn set_blocked_by(&self, blocker: usize, state: &mut StateManager) {
        state.set_usize(self.blocked_by, blocker);
    }

    /// Returns true iff this item is at least as good a choice as the other
    /// one (greater or equal value for smaller or equal weight)
    pub fn dominates(&self, other: &Item) -> bool {
        self.value >= other.value && self.weight <= other.weight
    }

    /// Returns the items dominated by this one
    pub fn blocks(&self) -> &[ItemIndex] {
        &self.blocks
    }

    /// Sets the list of items dominated by this one
    pub fn set_blocks(&mut self, blocks: Vec<ItemIndex>) {
        self.blocks = blocks;
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}, {})", self.id, self.value, self.weight)
    }
}
