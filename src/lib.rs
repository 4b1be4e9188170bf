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

// Re-export the modules
mod preprocess;
pub mod args;
pub mod common;
pub mod core;
pub mod generator;
pub mod solvers;

use search_trail::StateManager;

pub use common::*;

use crate::core::problem::Problem;
use crate::solvers::{BranchAndBoundSolver, DominanceSolver, DynamicProgrammingSolver, ExhaustiveSolver};

use peak_alloc::PeakAlloc;
#[global_allocator]
pub static PEAK_ALLOC: PeakAlloc = PeakAlloc;

/// Builds a problem from (value, weight) pairs and runs the requested solver
/// on it. Each call builds its own problem and state, so two calls on the
/// same input are independent.
pub fn solve(items: &[(u64, u64)], capacity: u64, solver: SolverChoice, statistics: bool) -> Solution {
    let mut state = StateManager::default();
    let problem = Problem::new(items, capacity, &mut state);
    if statistics {
        run_solver::<true>(solver, problem, state)
    } else {
        run_solver::<false>(solver, problem, state)
    }
}

fn run_solver<const S: bool>(choice: SolverChoice, problem: Problem, state: StateManager) -> Solution {
    match choice {
        SolverChoice::Exhaustive => ExhaustiveSolver::<S>::new(problem, state).solve(),
        SolverChoice::BranchAndBound => BranchAndBoundSolver::<S>::new(problem, state).solve(),
        SolverChoice::RodsTechnique => DominanceSolver::<S>::new(problem, state).solve(),
        SolverChoice::RodsTechniqueSorted => DominanceSolver::<S>::new(problem, state).solve_sorted(),
        SolverChoice::DynamicProgramming => DynamicProgrammingSolver::new(problem, state).solve(),
    }
}
