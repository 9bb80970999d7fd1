// Copyright (c) 2017-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! A library for directed multigraphs and network-flow algorithms.
//!
//! The central type is [`Graph`], a directed multigraph with 32-bit
//! vertex ids, optional vertex balances and optional edge weights,
//! costs and capacities. An undirected edge is modelled as a pair of
//! antiparallel *twin* edges sharing their attributes.
//!
//! On top of it:
//!
//! - [`maxflow`]: the Edmonds-Karp algorithm,
//! - [`mcf`]: minimum-cost b-flows by cycle cancelling and by
//!   successive shortest paths,
//! - [`shortestpath`]: Moore-Bellman-Ford with negative-cycle
//!   detection,
//! - [`residual`]: the residual-graph construction shared by the flow
//!   algorithms,
//! - [`search`], [`algorithms`], [`mst`]: breadth- and depth-first
//!   search, connected components and minimum spanning trees,
//! - [`loader`]: reading graphs from whitespace-separated text.
//!
//! ```
//! use flowgraph::maxflow::edmondskarp;
//! use flowgraph::Graph;
//!
//! let mut g: Graph = Graph::new();
//! g.add_weighted_edge(0, 1, 4.0);
//! g.add_weighted_edge(0, 2, 2.0);
//! g.add_weighted_edge(1, 3, 3.0);
//! g.add_weighted_edge(2, 3, 5.0);
//!
//! let (value, _flow) = edmondskarp(&g, 0, 3, |e| e.weight());
//! assert_eq!(value, 5.0);
//! ```

mod num {
    pub use num_traits as traits;
}

// # Data structures

pub mod graph;
pub use self::graph::{endpoint_key, Direction, Edge, EdgeId, Graph, Node};

pub mod flow;
pub use self::flow::{flow_cost, EdgeFlow};

pub mod residual;
pub use self::residual::Residual;

// # Algorithms

pub mod algorithms;
pub mod maxflow;
pub mod mcf;
pub mod mst;
pub mod search;
pub mod shortestpath;

// # Input

pub mod loader;
