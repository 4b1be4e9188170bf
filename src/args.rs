use clap::{Parser, Subcommand};

use crate::common::SolverChoice;
use crate::generator::DEFAULT_SEED;

#[derive(Parser)]
#[clap(name="besace", version, author, about)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Runs one solver on a generated instance
    Solve {
        #[clap(flatten)]
        instance: Instance,
        /// The solver to run
        #[clap(short, long, value_enum, default_value_t=SolverChoice::BranchAndBound)]
        solver: SolverChoice,
        /// Collect stats during the search
        #[clap(long, action)]
        statistics: bool,
    },
    /// Runs every solver on the same instance and checks that they agree
    Compare {
        #[clap(flatten)]
        instance: Instance,
        /// Collect stats during the searches
        #[clap(long, action)]
        statistics: bool,
    },
}

/// Description of the instance to generate
#[derive(clap::Args)]
pub struct Instance {
    /// Number of items to generate
    #[clap(short = 'n', long, default_value_t = 20)]
    pub items: usize,
    /// Minimum item value
    #[clap(long, default_value_t = 1)]
    pub min_value: u64,
    /// Maximum item value
    #[clap(long, default_value_t = 10)]
    pub max_value: u64,
    /// Minimum item weight
    #[clap(long, default_value_t = 4)]
    pub min_weight: u64,
    /// Maximum item weight
    #[clap(long, default_value_t = 10)]
    pub max_weight: u64,
    /// Seed of the pseudorandom generator
    #[clap(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
    /// Capacity of the knapsack; defaults to half the total weight of the
    /// generated items
    #[clap(short, long)]
    pub capacity: Option<u64>,
}
