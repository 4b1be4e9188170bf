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

use clap::Parser;

use besace::args::{Args, Command, Instance};
use besace::common::{Solution, SolverChoice};
use besace::generator::ItemGenerator;
use besace::PEAK_ALLOC;

/// Above this size the exhaustive enumeration is hopeless (2^n leaves)
const MAX_EXHAUSTIVE_ITEMS: usize = 25;
/// Above this size even the dominance pruning does not keep the search tractable
const MAX_DOMINANCE_ITEMS: usize = 350;

fn main() {
    let args = Args::parse();
    match args.command {
        Command::Solve { instance, solver, statistics } => run_solve(&instance, solver, statistics),
        Command::Compare { instance, statistics } => run_compare(&instance, statistics),
    }
}

/// Generates the instance and resolves its capacity (half the total weight
/// unless one was given)
fn generate(instance: &Instance) -> (Vec<(u64, u64)>, u64) {
    let mut generator = ItemGenerator::new(
        instance.min_value,
        instance.max_value,
        instance.min_weight,
        instance.max_weight,
        instance.seed,
    );
    let items = generator.generate(instance.items);
    let total_weight: u64 = items.iter().map(|(_, weight)| *weight).sum();
    let capacity = instance.capacity.unwrap_or(total_weight / 2);
    (items, capacity)
}

fn print_parameters(items: &[(u64, u64)], capacity: u64) {
    let total_value: u64 = items.iter().map(|(value, _)| *value).sum();
    let total_weight: u64 = items.iter().map(|(_, weight)| *weight).sum();
    println!("*** Parameters ***");
    println!("# items: {}", items.len());
    println!("Total value: {}", total_value);
    println!("Total weight: {}", total_weight);
    println!("Allowed weight: {}", capacity);
    println!();
}

/// Returns the reason the solver cannot handle an instance of that size, if any
fn too_many_items(solver: SolverChoice, number_items: usize) -> Option<&'static str> {
    match solver {
        SolverChoice::Exhaustive if number_items > MAX_EXHAUSTIVE_ITEMS => {
            Some("Too many items for the exhaustive search.")
        },
        SolverChoice::RodsTechnique | SolverChoice::RodsTechniqueSorted
            if number_items > MAX_DOMINANCE_ITEMS =>
        {
            Some("Too many items for Rod's technique.")
        },
        _ => None,
    }
}

/// Runs one solver on the instance and prints its solution and elapsed time
fn run_timed(solver: SolverChoice, items: &[(u64, u64)], capacity: u64, statistics: bool) -> Solution {
    println!("*** {} ***", solver);
    let start = chrono::Local::now();
    let solution = besace::solve(items, capacity, solver, statistics);
    let elapsed = chrono::Local::now() - start;
    println!("Elapsed: {:.3}", elapsed.num_milliseconds() as f64 / 1000.0);
    solution.print();
    println!();
    solution
}

fn run_solve(instance: &Instance, solver: SolverChoice, statistics: bool) {
    let (items, capacity) = generate(instance);
    print_parameters(&items, capacity);
    if let Some(reason) = too_many_items(solver, items.len()) {
        println!("{}", reason);
        return;
    }
    run_timed(solver, &items, capacity, statistics);
    println!("Peak memory usage: {:.1} MB", PEAK_ALLOC.peak_usage_as_mb());
}

/// Runs every solver on the same instance. All of them are exact, so a
/// disagreement on the optimal value is a bug and aborts the comparison.
fn run_compare(instance: &Instance, statistics: bool) {
    let (items, capacity) = generate(instance);
    print_parameters(&items, capacity);
    let solvers = [
        SolverChoice::Exhaustive,
        SolverChoice::BranchAndBound,
        SolverChoice::RodsTechnique,
        SolverChoice::RodsTechniqueSorted,
        SolverChoice::DynamicProgramming,
    ];
    let mut reference: Option<(SolverChoice, u64)> = None;
    for solver in solvers {
        if let Some(reason) = too_many_items(solver, items.len()) {
            println!("*** {} ***", solver);
            println!("{}", reason);
            println!();
            continue;
        }
        let solution = run_timed(solver, &items, capacity, statistics);
        match reference {
            None => reference = Some((solver, solution.value())),
            Some((other, value)) => {
                if solution.value() != value {
                    panic!(
                        "the {} found value {} but the {} found {}",
                        solver,
                        solution.value(),
                        other,
                        value
                    );
                }
            },
        }
    }
    println!("Peak memory usage: {:.1} MB", PEAK_ALLOC.peak_usage_as_mb());
}
