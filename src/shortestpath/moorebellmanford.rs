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

//! The shortest-path algorithm by Moore-Bellman-Ford.
//!
//! A bounded relaxation procedure that handles negative edge costs: |V|
//! rounds of relaxing every edge. A vertex whose distance still improves
//! in the final round lies on or is reachable from a negative-cost cycle;
//! [`negative_cycle`] turns that witness into the cycle itself by walking
//! predecessor links.
//!
//! # Example
//!
//! ```
//! use flowgraph::shortestpath::moorebellmanford;
//! use flowgraph::Graph;
//!
//! let mut g: Graph = Graph::new();
//! g.add_costed_edge(0, 1, -5.0, 0.0);
//! g.add_costed_edge(0, 2, -2.0, 0.0);
//! g.add_costed_edge(2, 1, -2.0, 0.0);
//!
//! let paths = moorebellmanford::directed(&g, |e| e.cost(), 0);
//! assert_eq!(paths.distance(0), Some(0.0));
//! assert_eq!(paths.distance(1), Some(-5.0));
//! assert_eq!(paths.distance(2), Some(-2.0));
//! assert_eq!(paths.cycle_node, None);
//! ```

use std::collections::BTreeMap;

use crate::graph::{Edge, EdgeId, Graph};
use crate::num::traits::Float;

/// The result of a relaxation run.
pub struct Paths<F = f64> {
    dist: BTreeMap<u32, F>,
    pred: BTreeMap<u32, EdgeId>,
    /// A vertex whose distance was still improved in the final round,
    /// witnessing a negative cycle. `None` if no such vertex exists.
    pub cycle_node: Option<u32>,
}

impl<F> Paths<F>
where
    F: Float,
{
    /// The shortest distance to `v`, or `None` if `v` was not reached.
    pub fn distance(&self, v: u32) -> Option<F> {
        self.dist.get(&v).copied()
    }

    /// The edge over which `v` was reached.
    pub fn predecessor(&self, v: u32) -> Option<EdgeId> {
        self.pred.get(&v).copied()
    }

    /// Reconstruct the path to `v` by walking predecessor edges backwards.
    ///
    /// Returns the edges in path order, or `None` if `v` was not reached.
    /// Must not be called when [`cycle_node`][Paths::cycle_node] is set,
    /// since predecessor links may then be cyclic.
    pub fn path_to(&self, g: &Graph<F>, v: u32) -> Option<Vec<EdgeId>> {
        self.dist.get(&v)?;
        let mut path = vec![];
        let mut v = v;
        while let Some(&e) = self.pred.get(&v) {
            assert!(path.len() <= g.num_edges(), "predecessor links contain a cycle");
            path.push(e);
            v = g.edge(e).source();
        }
        path.reverse();
        Some(path)
    }
}

/// Run the relaxation from a single source vertex.
///
/// `costs` reads the length of an edge. Panics if `src` is not a vertex
/// of `g`.
pub fn directed<F, C>(g: &Graph<F>, costs: C, src: u32) -> Paths<F>
where
    F: Float,
    C: Fn(&Edge<F>) -> F,
{
    assert!(g.contains_node(src), "unknown source vertex {}", src);
    let mut dist = BTreeMap::new();
    dist.insert(src, F::zero());
    relax(g, costs, dist)
}

/// Run the relaxation with every vertex as a source.
///
/// Equivalent to adding a temporary vertex connected to every vertex by a
/// zero-cost edge and running from there: every distance starts at zero.
/// Used for negative-cycle detection, where reachability from a
/// particular vertex does not matter.
pub fn from_everywhere<F, C>(g: &Graph<F>, costs: C) -> Paths<F>
where
    F: Float,
    C: Fn(&Edge<F>) -> F,
{
    let dist = g.node_ids().map(|v| (v, F::zero())).collect();
    relax(g, costs, dist)
}

fn relax<F, C>(g: &Graph<F>, costs: C, mut dist: BTreeMap<u32, F>) -> Paths<F>
where
    F: Float,
    C: Fn(&Edge<F>) -> F,
{
    let mut pred = BTreeMap::new();
    let mut cycle_node = None;
    let rounds = g.num_nodes();

    for round in 0..rounds {
        let mut changed = false;
        for (eid, edge) in g.edges() {
            let du = match dist.get(&edge.source()) {
                Some(&d) => d,
                None => continue,
            };
            let newdist = du + costs(edge);
            let improved = match dist.get(&edge.target()) {
                Some(&dv) => newdist < dv,
                None => true,
            };
            if improved {
                dist.insert(edge.target(), newdist);
                pred.insert(edge.target(), eid);
                changed = true;
                if round + 1 == rounds {
                    cycle_node = Some(edge.target());
                }
            }
        }
        if !changed {
            break;
        }
    }

    Paths { dist, pred, cycle_node }
}

/// Find a negative-cost cycle in `g`, if one exists.
///
/// Returns the edges of the cycle in traversal order. The relaxation is
/// started from every vertex at once, so cycles anywhere in the graph are
/// found.
pub fn negative_cycle<F, C>(g: &Graph<F>, costs: C) -> Option<Vec<EdgeId>>
where
    F: Float,
    C: Fn(&Edge<F>) -> F,
{
    let paths = from_everywhere(g, &costs);
    let mut v = paths.cycle_node?;

    // The witness may only be reachable from the cycle; walking |V|
    // predecessor links is guaranteed to land inside it.
    for _ in 0..g.num_nodes() {
        let e = paths.predecessor(v).expect("witness vertex has a predecessor");
        v = g.edge(e).source();
    }

    let stop = v;
    let mut cycle = vec![];
    loop {
        let e = paths.predecessor(v).expect("cycle vertex has a predecessor");
        cycle.push(e);
        v = g.edge(e).source();
        if v == stop {
            break;
        }
    }
    cycle.reverse();
    Some(cycle)
}
