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

//! Breadth-first-search.
//!
//! # Example
//!
//! ```
//! use flowgraph::search::bfs;
//! use flowgraph::Graph;
//!
//! let mut g: Graph = Graph::new();
//! for v in 0..7 {
//!     g.add_edge(v, (v + 1) % 7);
//! }
//!
//! let mut cnt = 0;
//! for (v, _) in bfs::start(&g, 0) {
//!     assert_ne!(v, 0);
//!     cnt += 1;
//! }
//! assert_eq!(cnt, g.num_nodes() - 1);
//! ```

use std::collections::{BTreeMap, VecDeque};

use crate::graph::{EdgeId, Graph};
use crate::num::traits::Float;

/// Start and return a BFS iterator.
///
/// The iterator produces the visited vertices with their incoming edge in
/// breadth-first order, the start vertex excluded. Panics if `src` is not
/// a vertex of `g`.
pub fn start<F>(g: &Graph<F>, src: u32) -> BFS<'_, F>
where
    F: Float,
{
    assert!(g.contains_node(src), "unknown start vertex {}", src);
    let mut queue = VecDeque::new();
    queue.push_back(src);

    BFS {
        g,
        src,
        seen: BTreeMap::new(),
        queue,
    }
}

/// The BFS iterator.
pub struct BFS<'a, F = f64> {
    g: &'a Graph<F>,
    src: u32,
    seen: BTreeMap<u32, EdgeId>,
    queue: VecDeque<u32>,
}

impl<'a, F> Iterator for BFS<'a, F>
where
    F: Float,
{
    type Item = (u32, EdgeId);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&u) = self.queue.front() {
            for e in self.g.out_edges(u) {
                let v = self.g.edge(e).target();
                if v != self.src && !self.seen.contains_key(&v) {
                    self.seen.insert(v, e);
                    self.queue.push_back(v);
                    return Some((v, e));
                }
            }
            self.queue.pop_front();
        }
        None
    }
}

impl<'a, F> BFS<'a, F>
where
    F: Float,
{
    /// Run the bfs completely.
    pub fn run(&mut self) {
        while self.next().is_some() {}
    }

    /// Return the incoming edge of a vertex.
    pub fn incoming_edge(&self, v: u32) -> Option<EdgeId> {
        self.seen.get(&v).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::start;
    use crate::graph::Graph;

    #[test]
    fn test_visits_all_reachable_once() {
        let mut g: Graph = Graph::new();
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        g.add_edge(1, 3);
        g.add_edge(2, 3);
        g.add_edge(3, 0);

        let order: Vec<_> = start(&g, 0).map(|(v, _)| v).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_layers_before_depth() {
        // 3 sits two hops away even though dfs would reach it first
        let mut g: Graph = Graph::new();
        g.add_edge(0, 1);
        g.add_edge(1, 3);
        g.add_edge(0, 2);
        g.add_edge(0, 4);

        let order: Vec<_> = start(&g, 0).map(|(v, _)| v).collect();
        assert_eq!(order, vec![1, 2, 4, 3]);
    }

    #[test]
    fn test_incoming_edges_form_path() {
        let mut g: Graph = Graph::new();
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 3);

        let mut bfs = start(&g, 0);
        bfs.run();

        let mut v = 3;
        let mut hops = 0;
        while let Some(e) = bfs.incoming_edge(v) {
            v = g.edge(e).source();
            hops += 1;
        }
        assert_eq!(v, 0);
        assert_eq!(hops, 3);
    }

    #[test]
    fn test_undirected_edges_walk_both_ways() {
        let mut g: Graph = Graph::new();
        g.add_undirected_edge(0, 1, 1.0);
        g.add_undirected_edge(2, 1, 1.0);

        let order: Vec<_> = start(&g, 0).map(|(v, _)| v).collect();
        assert_eq!(order, vec![1, 2]);
    }
}
