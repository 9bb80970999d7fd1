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

//! This module implements the max flow algorithm of Edmonds-Karp.
//!
//! In every iteration the residual graph of the current flow is built and
//! searched breadth-first from the source, so the augmenting path always
//! has the fewest possible edges, which bounds the number of iterations
//! polynomially. The search stops early once the sink is reached; when
//! the sink is unreachable the current flow is maximum.
//!
//! # Example
//!
//! ```
//! use flowgraph::maxflow::edmondskarp;
//! use flowgraph::Graph;
//!
//! // diamond: two disjoint paths of capacity 4 each
//! let mut g: Graph = Graph::new();
//! g.add_weighted_edge(0, 1, 4.0);
//! g.add_weighted_edge(1, 3, 4.0);
//! g.add_weighted_edge(0, 2, 4.0);
//! g.add_weighted_edge(2, 3, 4.0);
//!
//! let (value, flow) = edmondskarp(&g, 0, 3, |e| e.weight());
//! assert_eq!(value, 8.0);
//! assert_eq!(flow.get(0, 1), 4.0);
//! assert_eq!(flow.get(2, 3), 4.0);
//! ```

use std::collections::{BTreeMap, VecDeque};

use either::Either;

use crate::flow::EdgeFlow;
use crate::graph::{Edge, EdgeId, Graph};
use crate::num::traits::Float;
use crate::residual;

/// Max-flow algorithm of Edmonds and Karp.
pub struct EdmondsKarp<'a, F = f64> {
    g: &'a Graph<F>,
    flow: EdgeFlow<F>,
    value: F,
}

impl<'a, F> EdmondsKarp<'a, F>
where
    F: Float,
{
    /// Create a new Edmonds-Karp algorithm instance for a graph.
    pub fn new(g: &'a Graph<F>) -> Self {
        EdmondsKarp {
            g,
            flow: EdgeFlow::new(),
            value: F::zero(),
        }
    }

    /// Return the underlying graph.
    pub fn as_graph(&self) -> &'a Graph<F> {
        self.g
    }

    /// Return the value of the latest computed maximum flow.
    pub fn value(&self) -> F {
        self.value
    }

    /// Return the latest computed flow assignment.
    pub fn flow(&self) -> &EdgeFlow<F> {
        &self.flow
    }

    /// Consume the solver and return the flow assignment.
    pub fn into_flow(self) -> EdgeFlow<F> {
        self.flow
    }

    /// Compute a maximum flow from `src` to `snk`.
    ///
    /// `upper` reads the capacity of an edge; by convention this is the
    /// edge weight for plain max-flow problems and the capacity attribute
    /// when called from the min-cost-flow solvers.
    pub fn solve<Us>(&mut self, src: u32, snk: u32, upper: Us)
    where
        Us: Fn(&Edge<F>) -> F,
    {
        assert_ne!(src, snk, "Source and sink vertex must not be equal");
        assert!(self.g.contains_node(src), "unknown vertex {}", src);
        assert!(self.g.contains_node(snk), "unknown vertex {}", snk);

        self.flow = EdgeFlow::new();
        self.value = F::zero();

        loop {
            let res = residual::build(self.g, &self.flow, &upper);
            let rg = res.graph();

            // bfs from source to sink, recording the incoming edge of
            // every newly reached vertex
            let mut pred: BTreeMap<u32, EdgeId> = BTreeMap::new();
            let mut queue = VecDeque::new();
            queue.push_back(src);
            'bfs: while let Some(u) = queue.pop_front() {
                for e in rg.out_edges(u) {
                    let v = rg.edge(e).target();
                    if v != src && !pred.contains_key(&v) {
                        pred.insert(v, e);
                        queue.push_back(v);
                        if v == snk {
                            break 'bfs;
                        }
                    }
                }
            }

            // sink cannot be reached -> current flow is maximum
            if !pred.contains_key(&snk) {
                break;
            }

            // walk the path backwards and compute the bottleneck
            let mut gamma = F::infinity();
            let mut path = vec![];
            let mut v = snk;
            while v != src {
                let e = pred[&v];
                gamma = gamma.min(rg.edge(e).capacity());
                path.push(e);
                v = rg.edge(e).source();
            }

            // augment: forward copies gain, backward copies cancel flow
            for e in path {
                let (orig, delta) = match res.origin(e) {
                    Either::Left(orig) => (orig, gamma),
                    Either::Right(orig) => (orig, -gamma),
                };
                let edge = self.g.edge(orig);
                self.flow.add(edge.source(), edge.target(), delta);
            }
            self.value = self.value + gamma;
        }
    }
}

/// Solve the maxflow problem using the algorithm of Edmonds-Karp.
///
/// The function solves the max flow problem from the source vertex `src`
/// to the sink vertex `snk` with the given `upper` bounds on the edges.
///
/// The function returns the flow value and the flow on each edge, keyed
/// by unordered endpoint pair.
pub fn edmondskarp<F, Us>(g: &Graph<F>, src: u32, snk: u32, upper: Us) -> (F, EdgeFlow<F>)
where
    F: Float,
    Us: Fn(&Edge<F>) -> F,
{
    let mut maxflow = EdmondsKarp::new(g);
    maxflow.solve(src, snk, upper);
    let value = maxflow.value();
    (value, maxflow.into_flow())
}
