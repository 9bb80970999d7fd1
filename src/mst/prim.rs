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

//! Implementation of Prim's algorithm

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use ordered_float::OrderedFloat;

use crate::graph::{EdgeId, Graph};
use crate::num::traits::Float;

/// Run Prim's algorithm to solve the *Minimum Spanning Tree* problem on
/// an undirected graph.
///
/// The tree is grown from the smallest vertex id. If the graph is not
/// connected, the returned vector only spans that vertex's component.
/// This can easily be verified by checking the size of the returned
/// vector.
///
/// Panics if a reached edge is directed.
///
/// # Example
///
/// ```
/// use flowgraph::mst::prim;
/// use flowgraph::Graph;
///
/// let mut g: Graph = Graph::new();
/// g.add_undirected_edge(0, 1, 1.0);
/// g.add_undirected_edge(1, 2, 2.0);
/// g.add_undirected_edge(2, 0, 3.0);
///
/// let tree = prim(&g);
/// let total: f64 = tree.iter().map(|&e| g.edge(e).weight()).sum();
/// assert_eq!(tree.len(), 2);
/// assert_eq!(total, 3.0);
/// ```
pub fn prim<F>(g: &Graph<F>) -> Vec<EdgeId>
where
    F: Float,
{
    let src = match g.node_ids().next() {
        Some(v) => v,
        None => return vec![],
    };

    let mut seen = BTreeSet::new();
    seen.insert(src);
    let mut heap = BinaryHeap::new();
    for e in g.out_edges(src) {
        heap.push(Reverse((OrderedFloat(g.edge(e).weight()), e)));
    }

    let mut tree = Vec::with_capacity(g.num_nodes() - 1);
    while let Some(Reverse((_, e))) = heap.pop() {
        let edge = g.edge(e);
        if !seen.insert(edge.target()) {
            continue;
        }
        let rep = match edge.twin() {
            Some(twin) => e.min(twin),
            None => panic!("edge {} is directed", e),
        };
        tree.push(rep);
        for f in g.out_edges(edge.target()) {
            if !seen.contains(&g.edge(f).target()) {
                heap.push(Reverse((OrderedFloat(g.edge(f).weight()), f)));
            }
        }
    }
    tree
}
