use besace::common::SolverChoice;
use besace::generator::ItemGenerator;

/// Generates the standard test instance for a given size and seed; the
/// capacity is half the total weight, as in the CLI defaults.
fn instance(number_items: usize, seed: u64) -> (Vec<(u64, u64)>, u64) {
    let items = ItemGenerator::new(1, 10, 4, 10, seed).generate(number_items);
    let total_weight: u64 = items.iter().map(|(_, weight)| *weight).sum();
    (items, total_weight / 2)
}

fn has_domination_pair(items: &[(u64, u64)]) -> bool {
    items.iter().enumerate().any(|(i, a)| {
        items
            .iter()
            .enumerate()
            .any(|(j, b)| i != j && a.0 >= b.0 && a.1 <= b.1)
    })
}

const PRUNED_SOLVERS: [SolverChoice; 4] = [
    SolverChoice::BranchAndBound,
    SolverChoice::RodsTechnique,
    SolverChoice::RodsTechniqueSorted,
    SolverChoice::DynamicProgramming,
];

macro_rules! solver_grid_tests {
    ($($name:ident: $n:expr, $seed:expr,)*) => {
        $(
            paste::paste! {
                /// Every solver must agree with the exhaustive oracle on the
                /// optimal value and return a feasible, self-consistent selection.
                #[test]
                fn [<agreement_ $name>]() {
                    let (items, capacity) = instance($n, $seed);
                    let oracle = besace::solve(&items, capacity, SolverChoice::Exhaustive, false);
                    assert!(oracle.weight() <= capacity);
                    for solver in PRUNED_SOLVERS {
                        let solution = besace::solve(&items, capacity, solver, false);
                        assert_eq!(oracle.value(), solution.value(), "diverging value for {}", solver);
                        assert!(solution.weight() <= capacity, "overweight selection for {}", solver);
                        let value: u64 = solution.selection().iter().map(|s| s.value()).sum();
                        let weight: u64 = solution.selection().iter().map(|s| s.weight()).sum();
                        assert_eq!(solution.value(), value);
                        assert_eq!(solution.weight(), weight);
                    }
                }

                /// Pruning never increases the work: branch-and-bound makes at
                /// most as many calls as the exhaustive search, and the
                /// domination gates only remove subtrees from branch-and-bound.
                #[test]
                fn [<call_counts_ $name>]() {
                    let (items, capacity) = instance($n, $seed);
                    let exhaustive = besace::solve(&items, capacity, SolverChoice::Exhaustive, false);
                    let branch_and_bound = besace::solve(&items, capacity, SolverChoice::BranchAndBound, false);
                    assert!(branch_and_bound.calls() <= exhaustive.calls());
                    if has_domination_pair(&items) {
                        let rods = besace::solve(&items, capacity, SolverChoice::RodsTechnique, false);
                        assert!(rods.calls() <= branch_and_bound.calls());
                    }
                }
            }
        )*
    }
}

solver_grid_tests! {
    n6_seed7: 6, 7,
    n6_seed42: 6, 42,
    n10_seed99: 10, 99,
    n10_seed1337: 10, 1337,
    n10_seed2024: 10, 2024,
    n12_seed7: 12, 7,
    n13_seed1337: 13, 1337,
    n14_seed42: 14, 42,
    n14_seed2024: 14, 2024,
    n18_seed1337: 18, 1337,
}

macro_rules! idempotence_tests {
    ($($name:ident: $n:expr, $seed:expr,)*) => {
        $(
            paste::paste! {
                /// Two solves of independent copies of the same input return the
                /// same (selection set, value): no hidden state leaks between calls.
                #[test]
                fn [<idempotent_ $name>]() {
                    let (items, capacity) = instance($n, $seed);
                    let solvers = [
                        SolverChoice::Exhaustive,
                        SolverChoice::BranchAndBound,
                        SolverChoice::RodsTechnique,
                        SolverChoice::RodsTechniqueSorted,
                        SolverChoice::DynamicProgramming,
                    ];
                    for solver in solvers {
                        let first = besace::solve(&items, capacity, solver, false);
                        let second = besace::solve(&items, capacity, solver, false);
                        assert_eq!(first.value(), second.value());
                        assert_eq!(first.selected_ids(), second.selected_ids());
                        assert_eq!(first.calls(), second.calls());
                    }
                }
            }
        )*
    }
}

idempotence_tests! {
    n8_seed7: 8, 7,
    n11_seed42: 11, 42,
    n13_seed2024: 13, 2024,
}

/// Items 1 and 2 together tie the value of item 0 at the same weight; the
/// optimum is exactly 10 either way and must be reported as such.
#[test]
fn single_heavy_item_ties_the_pair() {
    let items = [(10, 5), (6, 3), (4, 2)];
    for solver in all_solvers() {
        let solution = besace::solve(&items, 5, solver, false);
        assert_eq!(10, solution.value(), "wrong value for {}", solver);
        assert!(solution.weight() <= 5, "overweight selection for {}", solver);
    }
}

#[test]
fn zero_capacity_yields_the_empty_selection() {
    let items = [(3, 4), (5, 2), (7, 6)];
    for solver in all_solvers() {
        let solution = besace::solve(&items, 0, solver, false);
        assert_eq!(0, solution.value(), "wrong value for {}", solver);
        assert!(solution.selection().is_empty(), "non-empty selection for {}", solver);
    }
}

#[test]
fn ample_capacity_takes_everything() {
    let items = [(3, 2), (5, 4), (7, 3), (2, 6)];
    for solver in all_solvers() {
        let solution = besace::solve(&items, 15, solver, false);
        assert_eq!(17, solution.value(), "wrong value for {}", solver);
        assert_eq!(15, solution.weight(), "wrong weight for {}", solver);
        assert_eq!(4, solution.selection().len());
    }
}

#[test]
fn nothing_fits() {
    let items = [(3, 10), (5, 12), (7, 11)];
    for solver in all_solvers() {
        let solution = besace::solve(&items, 9, solver, false);
        assert_eq!(0, solution.value(), "wrong value for {}", solver);
        assert!(solution.selection().is_empty(), "non-empty selection for {}", solver);
    }
}

fn all_solvers() -> [SolverChoice; 5] {
    [
        SolverChoice::Exhaustive,
        SolverChoice::BranchAndBound,
        SolverChoice::RodsTechnique,
        SolverChoice::RodsTechniqueSorted,
        SolverChoice::DynamicProgramming,
    ]
}
