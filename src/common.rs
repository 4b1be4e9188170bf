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

use clap::ValueEnum;
use rustc_hash::FxHashSet;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum SolverChoice {
    /// Complete enumeration of all assignments; impractical beyond ~25 items
    Exhaustive,
    /// Depth-first search pruned with a value-only upper bound
    BranchAndBound,
    /// Branch-and-bound with domination-based blocking of inferior items
    RodsTechnique,
    /// Rod's technique with the most-blocking items decided first
    RodsTechniqueSorted,
    /// Bottom-up dynamic programming over (item, capacity)
    DynamicProgramming,
}

impl std::fmt::Display for SolverChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverChoice::Exhaustive => write!(f, "exhaustive search"),
            SolverChoice::BranchAndBound => write!(f, "branch and bound"),
            SolverChoice::RodsTechnique => write!(f, "rod's technique"),
            SolverChoice::RodsTechniqueSorted => write!(f, "rod's technique (sorted)"),
            SolverChoice::DynamicProgramming => write!(f, "dynamic programming"),
        }
    }
}

/// Snapshot of one selected item, detached from the search state. The id is
/// the one the solver worked with; the sorted dominance variant renumbers ids
/// during preprocessing, hence the value and weight are carried along so that
/// reporting never needs to reverse the permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selected {
    id: usize,
    value: u64,
    weight: u64,
}

impl Selected {

    pub fn new(id: usize, value: u64, weight: u64) -> Self {
        Self {
            id,
            value,
            weight,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }
}

impl std::fmt::Display for Selected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}, {})", self.id, self.value, self.weight)
    }
}

/// This structure represents a solution found by one of the solvers: the
/// selected items, their total value and weight, and the number of calls the
/// search made to find it (used to compare the pruning strategies).
#[derive(Debug, Clone)]
pub struct Solution {
    /// The selected items, in the solver's item order
    selection: Vec<Selected>,
    /// Total value of the selection
    value: u64,
    /// Total weight of the selection
    weight: u64,
    /// Number of (recursive) calls made by the search
    calls: usize,
}

impl Solution {

    pub fn new(selection: Vec<Selected>, value: u64, weight: u64, calls: usize) -> Self {
        Self {
            selection,
            value,
            weight,
            calls,
        }
    }

    /// The empty knapsack, worth 0. Also the outcome of a search in which
    /// every branch was pruned.
    pub fn empty(calls: usize) -> Self {
        Self::new(vec![], 0, 0, calls)
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    pub fn calls(&self) -> usize {
        self.calls
    }

    pub fn selection(&self) -> &[Selected] {
        &self.selection
    }

    /// Returns the ids of the selected items as a set, for order-independent
    /// comparison of two selections.
    pub fn selected_ids(&self) -> FxHashSet<usize> {
        self.selection.iter().map(|item| item.id()).collect()
    }

    pub fn print(&self) {
        println!("{}", self);
    }
}

/// Two solutions are equal when they select the same set of items for the
/// same total value; the call count is a property of the search that found
/// them, not of the solution itself.
impl PartialEq for Solution {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.selected_ids() == other.selected_ids()
    }
}

impl Eq for Solution {}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for item in self.selection.iter() {
            write!(f, "{} ", item)?;
        }
        writeln!(f)?;
        write!(f, "Value: {}, Weight: {}, Calls: {}", self.value, self.weight, self.calls)
    }
}
