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

use std::fmt;

/// Implements a bunch of statistics that are collected during the search
#[derive(Default)]
pub struct Statistics<const B: bool> {
    /// Number of interior search nodes visited
    number_nodes: usize,
    /// Number of complete feasible assignments reached
    number_solutions: usize,
    /// Number of leaves whose assignment was too heavy
    number_infeasible: usize,
    /// Number of subtrees pruned by the value upper bound
    bound_prunes: usize,
    /// Number of include branches skipped because the item did not fit
    weight_skips: usize,
    /// Number of exclude branches skipped because they could not beat the incumbent
    exclude_skips: usize,
    /// Number of include branches skipped because the item was blocked
    blocked_skips: usize,
}

impl<const B: bool> Statistics<B> {
    pub fn node(&mut self) {
        if B {
            self.number_nodes += 1;
        }
    }

    pub fn solution(&mut self) {
        if B {
            self.number_solutions += 1;
        }
    }

    pub fn infeasible(&mut self) {
        if B {
            self.number_infeasible += 1;
        }
    }

    pub fn bound_prune(&mut self) {
        if B {
            self.bound_prunes += 1;
        }
    }

    pub fn weight_skip(&mut self) {
        if B {
            self.weight_skips += 1;
        }
    }

    pub fn exclude_skip(&mut self) {
        if B {
            self.exclude_skips += 1;
        }
    }

    pub fn blocked_skip(&mut self) {
        if B {
            self.blocked_skips += 1;
        }
    }

    pub fn print(&self) {
        if B {
            println!("{}", self);
        }
    }
}

impl<const B: bool> fmt::Display for Statistics<B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if B {
            writeln!(f,
                "nodes {} | solutions {} | infeasible {} | bound prunes {} | weight skips {} | exclude skips {} | blocked skips {}",
                self.number_nodes,
                self.number_solutions,
                self.number_infeasible,
                self.bound_prunes,
                self.weight_skips,
                self.exclude_skips,
                self.blocked_skips)
        } else {
            write!(f, "")
        }
    }
}
