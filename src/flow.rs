/*
 * Copyright (c) 2017-2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Flow bookkeeping shared between the two directions of an edge.
//!
//! A flow assignment maps each edge to its current flow value. Edge
//! identity is *undirected* here: the value is keyed by the canonical
//! unordered endpoint pair ([`endpoint_key`]), so the forward copy and
//! the backward copy of an edge in a residual graph read and update the
//! same slot.

use std::collections::BTreeMap;

use crate::graph::{endpoint_key, Edge, Graph};
use crate::num::traits::Float;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A flow assignment keyed by the unordered endpoint pair.
///
/// Pairs without an entry carry zero flow.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default)]
pub struct EdgeFlow<F = f64> {
    values: BTreeMap<(u32, u32), F>,
}

impl<F> EdgeFlow<F>
where
    F: Float,
{
    pub fn new() -> Self {
        EdgeFlow { values: BTreeMap::new() }
    }

    /// The flow between `u` and `v`, looked up from either direction.
    pub fn get(&self, u: u32, v: u32) -> F {
        self.values
            .get(&endpoint_key(u, v))
            .copied()
            .unwrap_or_else(F::zero)
    }

    /// The flow over an edge.
    pub fn on(&self, edge: &Edge<F>) -> F {
        self.get(edge.source(), edge.target())
    }

    pub fn set(&mut self, u: u32, v: u32, value: F) {
        self.values.insert(endpoint_key(u, v), value);
    }

    /// Add `delta` (possibly negative) to the flow between `u` and `v`.
    pub fn add(&mut self, u: u32, v: u32, delta: F) {
        let entry = self.values.entry(endpoint_key(u, v)).or_insert_with(F::zero);
        *entry = *entry + delta;
    }

    /// Iterate over all recorded pairs and their flow values.
    pub fn iter(&self) -> impl Iterator<Item = ((u32, u32), F)> + '_ {
        self.values.iter().map(|(&k, &v)| (k, v))
    }
}

/// Total cost of a flow: Σ flow(e)·cost(e) over the edges of `g`.
///
/// Edges of `g` must carry a cost.
pub fn flow_cost<F>(g: &Graph<F>, flow: &EdgeFlow<F>) -> F
where
    F: Float,
{
    g.edges()
        .fold(F::zero(), |acc, (_, e)| acc + flow.on(e) * e.cost())
}

#[cfg(test)]
mod tests {
    use super::{flow_cost, EdgeFlow};
    use crate::graph::Graph;

    #[test]
    fn test_undirected_lookup() {
        let mut flow: EdgeFlow = EdgeFlow::new();
        flow.set(3, 1, 2.5);
        assert_eq!(flow.get(1, 3), 2.5);
        assert_eq!(flow.get(3, 1), 2.5);
        flow.add(1, 3, -1.0);
        assert_eq!(flow.get(3, 1), 1.5);
        assert_eq!(flow.get(0, 1), 0.0);
    }

    #[test]
    fn test_flow_cost() {
        let mut g: Graph = Graph::new();
        g.add_costed_edge(0, 1, 2.0, 5.0);
        g.add_costed_edge(1, 2, -3.0, 5.0);
        let mut flow = EdgeFlow::new();
        flow.set(0, 1, 4.0);
        flow.set(1, 2, 1.0);
        assert_eq!(flow_cost(&g, &flow), 8.0 - 3.0);
    }
}
