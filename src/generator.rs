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

//! Random instance generation: values and weights drawn uniformly from
//! configured inclusive ranges, from a seeded generator so that runs are
//! reproducible by default.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default seed of the generator; a fixed one so that two invocations compare
/// the solvers on the same instance
pub const DEFAULT_SEED: u64 = 1337;

/// Generates (value, weight) pairs within the given inclusive bounds
pub struct ItemGenerator {
    min_value: u64,
    max_value: u64,
    min_weight: u64,
    max_weight: u64,
    rng: StdRng,
}

impl ItemGenerator {

    pub fn new(min_value: u64, max_value: u64, min_weight: u64, max_weight: u64, seed: u64) -> Self {
        Self {
            min_value,
            max_value,
            min_weight,
            max_weight,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws `number_items` items from the configured ranges
    pub fn generate(&mut self, number_items: usize) -> Vec<(u64, u64)> {
        (0..number_items)
            .map(|_| {
                (
                    self.rng.gen_range(self.min_value..=self.max_value),
                    self.rng.gen_range(self.min_weight..=self.max_weight),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod test_generator {

    use crate::generator::{DEFAULT_SEED, ItemGenerator};

    #[test]
    pub fn same_seed_same_items() {
        let first = ItemGenerator::new(1, 10, 4, 10, DEFAULT_SEED).generate(50);
        let second = ItemGenerator::new(1, 10, 4, 10, DEFAULT_SEED).generate(50);
        assert_eq!(first, second);
    }

    #[test]
    pub fn items_stay_within_the_ranges() {
        let items = ItemGenerator::new(1, 10, 4, 10, 42).generate(200);
        assert_eq!(200, items.len());
        for (value, weight) in items {
            assert!((1..=10).contains(&value));
            assert!((4..=10).contains(&weight));
        }
    }

    #[test]
    pub fn degenerate_ranges_are_constant() {
        let items = ItemGenerator::new(5, 5, 3, 3, 7).generate(10);
        assert!(items.iter().all(|&item| item == (5, 3)));
    }
}
