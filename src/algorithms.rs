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

//! General algorithms working on graphs.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::graph::Graph;
use crate::num::traits::Float;

/// Compute the connected components of `g`.
///
/// Edge directions are ignored, so this returns the weakly connected
/// components of a directed graph. Each component is a sorted list of
/// vertex ids; the components are ordered by their smallest vertex.
///
/// # Example
///
/// ```
/// use flowgraph::algorithms::connected_components;
/// use flowgraph::Graph;
///
/// let mut g: Graph = Graph::new();
/// g.add_edge(0, 1);
/// g.add_edge(3, 2);
/// g.add_node(4);
///
/// assert_eq!(connected_components(&g), vec![vec![0, 1], vec![2, 3], vec![4]]);
/// ```
pub fn connected_components<F>(g: &Graph<F>) -> Vec<Vec<u32>>
where
    F: Float,
{
    let mut neighbors: BTreeMap<u32, BTreeSet<u32>> = BTreeMap::new();
    for (_, edge) in g.edges() {
        neighbors.entry(edge.source()).or_default().insert(edge.target());
        neighbors.entry(edge.target()).or_default().insert(edge.source());
    }

    let mut components = vec![];
    let mut seen = BTreeSet::new();
    for v in g.node_ids() {
        if !seen.insert(v) {
            continue;
        }
        let mut component = vec![v];
        let mut queue = VecDeque::new();
        queue.push_back(v);
        while let Some(u) = queue.pop_front() {
            if let Some(adj) = neighbors.get(&u) {
                for &w in adj {
                    if seen.insert(w) {
                        component.push(w);
                        queue.push_back(w);
                    }
                }
            }
        }
        component.sort_unstable();
        components.push(component);
    }
    components
}

#[cfg(test)]
mod tests {
    use super::connected_components;
    use crate::graph::Graph;

    #[test]
    fn test_single_component() {
        let mut g: Graph = Graph::new();
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 0);
        assert_eq!(connected_components(&g), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_direction_is_ignored() {
        // 1 has no outgoing edges but still joins the component of 0
        let mut g: Graph = Graph::new();
        g.add_edge(0, 1);
        g.add_edge(2, 1);
        assert_eq!(connected_components(&g), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_isolated_vertices() {
        let mut g: Graph = Graph::new();
        g.add_node(5);
        g.add_node(3);
        g.add_edge(0, 1);
        assert_eq!(connected_components(&g), vec![vec![0, 1], vec![3], vec![5]]);
    }

    #[test]
    fn test_empty_graph() {
        let g: Graph = Graph::new();
        assert!(connected_components(&g).is_empty());
    }
}
