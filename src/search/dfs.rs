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

//! Depth-first-search.
//!
//! # Example
//!
//! ```
//! use flowgraph::search::dfs;
//! use flowgraph::Graph;
//!
//! let mut g: Graph = Graph::new();
//! for v in 0..7 {
//!     g.add_edge(v, (v + 1) % 7);
//! }
//!
//! let mut cnt = 0;
//! for (v, _) in dfs::start(&g, 0) {
//!     assert_ne!(v, 0);
//!     cnt += 1;
//! }
//! assert_eq!(cnt, g.num_nodes() - 1);
//! ```

use std::collections::BTreeMap;

use crate::graph::{EdgeId, Graph};
use crate::num::traits::Float;

/// Start and return a DFS iterator.
///
/// The iterator produces the visited vertices with their incoming edge in
/// depth-first order, the start vertex excluded. Panics if `src` is not a
/// vertex of `g`.
pub fn start<F>(g: &Graph<F>, src: u32) -> DFS<'_, F>
where
    F: Float,
{
    assert!(g.contains_node(src), "unknown start vertex {}", src);
    DFS {
        g,
        src,
        seen: BTreeMap::new(),
        // a stack of cursors into the outgoing lists
        stack: vec![(src, 0)],
    }
}

/// The DFS iterator.
pub struct DFS<'a, F = f64> {
    g: &'a Graph<F>,
    src: u32,
    seen: BTreeMap<u32, EdgeId>,
    stack: Vec<(u32, usize)>,
}

impl<'a, F> Iterator for DFS<'a, F>
where
    F: Float,
{
    type Item = (u32, EdgeId);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((u, next)) = self.stack.pop() {
            if let Some(e) = self.g.out_edges(u).nth(next) {
                self.stack.push((u, next + 1));
                let v = self.g.edge(e).target();
                if v != self.src && !self.seen.contains_key(&v) {
                    self.seen.insert(v, e);
                    self.stack.push((v, 0));
                    return Some((v, e));
                }
            }
        }
        None
    }
}

impl<'a, F> DFS<'a, F>
where
    F: Float,
{
    /// Run the dfs completely.
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
    fn test_depth_before_layers() {
        let mut g: Graph = Graph::new();
        g.add_edge(0, 1);
        g.add_edge(1, 3);
        g.add_edge(0, 2);
        g.add_edge(0, 4);

        let order: Vec<_> = start(&g, 0).map(|(v, _)| v).collect();
        assert_eq!(order, vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_visits_all_reachable_once() {
        let mut g: Graph = Graph::new();
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        g.add_edge(1, 3);
        g.add_edge(2, 3);
        g.add_edge(3, 0);

        let mut order: Vec<_> = start(&g, 0).map(|(v, _)| v).collect();
        order.sort();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_unreachable_is_skipped() {
        let mut g: Graph = Graph::new();
        g.add_edge(0, 1);
        g.add_edge(2, 3);

        let order: Vec<_> = start(&g, 0).map(|(v, _)| v).collect();
        assert_eq!(order, vec![1]);
    }
}
