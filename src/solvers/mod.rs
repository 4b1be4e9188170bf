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

//! The family of exact solvers. The exhaustive search is the correctness
//! oracle; branch-and-bound and Rod's technique prune it without giving up
//! exactness; dynamic programming trades the search tree for a
//! pseudo-polynomial table. All of them agree on the optimal value for the
//! same input, and a divergence is a bug in the bound or invariant logic.

use crate::common::{Selected, Solution};

mod branch_and_bound;
mod dominance;
mod dynamic;
mod exhaustive;
mod statistics;

pub use branch_and_bound::BranchAndBoundSolver;
pub use dominance::DominanceSolver;
pub use dynamic::DynamicProgrammingSolver;
pub use exhaustive::ExhaustiveSolver;

/// A complete, feasible assignment found at the bottom of a search branch.
/// A pruned subtree yields no candidate at all (`None` at the call sites),
/// which is distinct from a legitimate empty selection of value 0.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    selection: Vec<Selected>,
    value: u64,
    weight: u64,
}

/// Keeps the better of the two branch outcomes, the include branch winning
/// ties. Two pruned branches merge into no candidate at all.
pub(crate) fn merge(include: Option<Candidate>, exclude: Option<Candidate>) -> Option<Candidate> {
    match (include, exclude) {
        (Some(incl), Some(excl)) => {
            if incl.value >= excl.value {
                Some(incl)
            } else {
                Some(excl)
            }
        },
        (Some(incl), None) => Some(incl),
        (None, exclude) => exclude,
    }
}

/// Converts the outcome of a top-level exploration into a solution. A search
/// in which everything was pruned yields the empty selection of value 0.
pub(crate) fn into_solution(candidate: Option<Candidate>, calls: usize) -> Solution {
    match candidate {
        Some(candidate) => Solution::new(candidate.selection, candidate.value, candidate.weight, calls),
        None => Solution::empty(calls),
    }
}

pub type StatExhaustiveSolver = ExhaustiveSolver<true>;
pub type QuietExhaustiveSolver = ExhaustiveSolver<false>;
pub type StatBranchAndBoundSolver = BranchAndBoundSolver<true>;
pub type QuietBranchAndBoundSolver = BranchAndBoundSolver<false>;
pub type StatDominanceSolver = DominanceSolver<true>;
pub type QuietDominanceSolver = DominanceSolver<false>;
