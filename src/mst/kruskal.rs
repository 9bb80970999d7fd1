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

//! Implementation of Kruskal's algorithm

use std::collections::BTreeMap;

use ordered_float::OrderedFloat;

use crate::graph::{EdgeId, Graph};
use crate::mst::is_representative;
use crate::num::traits::Float;

/// Run Kruskal's algorithm to solve the *Minimum Spanning Tree* problem
/// on an undirected graph.
///
/// The algorithm actually solves a minimum spanning *forest* problem if
/// the graph is not connected. This can easily be verified by checking
/// the number of returned edges.
///
/// Panics if the graph contains a directed edge.
///
/// # Example
///
/// ```
/// use flowgraph::mst::kruskal;
/// use flowgraph::Graph;
///
/// let mut g: Graph = Graph::new();
/// g.add_undirected_edge(0, 1, 1.0);
/// g.add_undirected_edge(1, 2, 2.0);
/// g.add_undirected_edge(2, 0, 3.0);
///
/// let tree = kruskal(&g);
/// let total: f64 = tree.iter().map(|&e| g.edge(e).weight()).sum();
/// assert_eq!(tree.len(), 2);
/// assert_eq!(total, 3.0);
/// ```
pub fn kruskal<F>(g: &Graph<F>) -> Vec<EdgeId>
where
    F: Float,
{
    let mut edges: Vec<_> = g
        .edges()
        .filter(|&(eid, edge)| is_representative(eid, edge))
        .collect();
    edges.sort_by_key(|&(eid, edge)| (OrderedFloat(edge.weight()), eid));

    // parent map for finding
    let mut comps: BTreeMap<u32, Component> =
        g.node_ids().map(|v| (v, Component::Root(0))).collect();
    let mut tree = Vec::with_capacity(g.num_nodes().saturating_sub(1));

    for (eid, edge) in edges {
        let (uroot, udepth) = find_root(&comps, edge.source());
        let (vroot, vdepth) = find_root(&comps, edge.target());
        if uroot != vroot {
            tree.push(eid);
            if g.num_nodes() - 1 == tree.len() {
                break;
            }
            if udepth < vdepth {
                comps.insert(uroot, Component::Node(vroot));
            } else {
                comps.insert(vroot, Component::Node(uroot));
                if udepth == vdepth {
                    comps.insert(uroot, Component::Root(udepth + 1));
                }
            }
        }
    }

    tree
}

/// Union-Find data-structure for Kruskal.
#[derive(Clone, Copy)]
enum Component {
    /// The root element with the tree's depth.
    Root(usize),
    /// An inner node with the parent node.
    Node(u32),
}

/// Return the root node and the tree's depth of node `u`.
fn find_root(comps: &BTreeMap<u32, Component>, u: u32) -> (u32, usize) {
    let mut v = u;
    loop {
        match comps[&v] {
            Component::Node(parent) => v = parent,
            Component::Root(depth) => return (v, depth),
        }
    }
}
