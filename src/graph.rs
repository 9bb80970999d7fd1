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

//! The directed multigraph data model.
//!
//! A [`Graph`] owns its vertices and edges. Vertices are identified by a
//! 32-bit id chosen by the caller, edges by an [`EdgeId`] handle issued by
//! the graph. Parallel edges between the same pair of vertices are allowed
//! and distinguished only by their handle.
//!
//! Edges carry up to three optional numeric attributes (`weight`, `cost`,
//! `capacity`), vertices an optional `balance`. Reading an attribute that
//! was never set is a caller bug and panics.
//!
//! An undirected edge is represented as two opposite directed edges that
//! reference each other as *twins*; an edge without a twin is directed.
//! For flow bookkeeping two edges connecting the same unordered pair of
//! endpoints are considered the same edge regardless of direction, see
//! [`endpoint_key`] and [`EdgeFlow`][crate::flow::EdgeFlow].
//!
//! # Example
//!
//! ```
//! use flowgraph::{Direction, Graph};
//!
//! let mut g: Graph = Graph::new();
//! let e01 = g.add_weighted_edge(0, 1, 2.0);
//! let e12 = g.add_weighted_edge(1, 2, 3.0);
//!
//! assert_eq!(g.num_nodes(), 3);
//! assert_eq!(g.num_edges(), 2);
//! assert_eq!(g.edge(e01).weight(), 2.0);
//! assert!(g.edge(e12).is_directed());
//!
//! // the reversed direction is found only with `Direction::Any`
//! assert_eq!(g.edge_between(1, 0, Direction::Forward), None);
//! assert_eq!(g.edge_between(1, 0, Direction::Any), Some(e01));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::num::traits::Float;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Handle of an edge in a [`Graph`].
///
/// Handles are issued in insertion order and never reused, so they stay
/// valid across removals of other edges.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub struct EdgeId(u32);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "#{}", self.0)
    }
}

/// Direction mode for by-endpoint edge lookups.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Direction {
    /// Only edges running from the first to the second vertex.
    Forward,
    /// Edges running in either direction.
    Any,
}

/// Return the canonical unordered key of a pair of vertex ids.
///
/// This is the single key function used wherever the two directions of an
/// edge must map to the same entry: the graph's by-endpoint edge store and
/// the flow bookkeeping of [`EdgeFlow`][crate::flow::EdgeFlow].
pub fn endpoint_key(u: u32, v: u32) -> (u32, u32) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

/// A vertex of a [`Graph`].
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct Node<F = f64> {
    id: u32,
    balance: Option<F>,
    outgoing: Vec<EdgeId>,
}

impl<F> Node<F>
where
    F: Float,
{
    /// The vertex id.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Whether a balance has been assigned to this vertex.
    pub fn has_balance(&self) -> bool {
        self.balance.is_some()
    }

    /// The required net supply (positive) or demand (negative).
    ///
    /// Panics if no balance has been set.
    pub fn balance(&self) -> F {
        match self.balance {
            Some(b) => b,
            None => panic!("vertex {} has no balance", self.id),
        }
    }

    /// The outgoing edges of this vertex in insertion order.
    pub fn out_edges(&self) -> &[EdgeId] {
        &self.outgoing
    }
}

/// An edge of a [`Graph`].
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct Edge<F = f64> {
    source: u32,
    target: u32,
    weight: Option<F>,
    cost: Option<F>,
    capacity: Option<F>,
    twin: Option<EdgeId>,
}

impl<F> Edge<F>
where
    F: Float,
{
    /// The id of the source vertex.
    pub fn source(&self) -> u32 {
        self.source
    }

    /// The id of the target vertex.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// The canonical unordered key of this edge's endpoints.
    pub fn endpoint_key(&self) -> (u32, u32) {
        endpoint_key(self.source, self.target)
    }

    pub fn has_weight(&self) -> bool {
        self.weight.is_some()
    }

    /// The weight of this edge. Panics if no weight has been set.
    pub fn weight(&self) -> F {
        match self.weight {
            Some(w) => w,
            None => panic!("edge ({},{}) has no weight", self.source, self.target),
        }
    }

    pub fn has_cost(&self) -> bool {
        self.cost.is_some()
    }

    /// The cost per unit of flow. Panics if no cost has been set.
    pub fn cost(&self) -> F {
        match self.cost {
            Some(c) => c,
            None => panic!("edge ({},{}) has no cost", self.source, self.target),
        }
    }

    pub fn has_capacity(&self) -> bool {
        self.capacity.is_some()
    }

    /// The maximum flow over this edge. Panics if no capacity has been set.
    pub fn capacity(&self) -> F {
        match self.capacity {
            Some(u) => u,
            None => panic!("edge ({},{}) has no capacity", self.source, self.target),
        }
    }

    /// The opposite directed edge if this edge is one half of an
    /// undirected pair.
    pub fn twin(&self) -> Option<EdgeId> {
        self.twin
    }

    /// An edge is directed iff it has no twin.
    pub fn is_directed(&self) -> bool {
        self.twin.is_none()
    }
}

/// A directed multigraph with optional edge and vertex attributes.
///
/// Vertices are stored keyed by id, edges in an arena addressed by
/// [`EdgeId`] with an additional multimap keyed by the canonical unordered
/// endpoint pair. All iteration orders are deterministic (ascending ids).
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct Graph<F = f64> {
    nodes: BTreeMap<u32, Node<F>>,
    edges: BTreeMap<EdgeId, Edge<F>>,
    by_endpoints: BTreeMap<(u32, u32), Vec<EdgeId>>,
    next_edge: u32,
}

impl<F> Graph<F>
where
    F: Float,
{
    pub fn new() -> Self {
        Graph {
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
            by_endpoints: BTreeMap::new(),
            next_edge: 0,
        }
    }

    /// Insert a vertex with the given id. A no-op if the id is present.
    pub fn add_node(&mut self, id: u32) {
        self.nodes.entry(id).or_insert(Node {
            id,
            balance: None,
            outgoing: vec![],
        });
    }

    pub fn contains_node(&self, id: u32) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Return the vertex with the given id.
    pub fn node(&self, id: u32) -> Option<&Node<F>> {
        self.nodes.get(&id)
    }

    /// Assign a balance to a vertex. Panics if the vertex does not exist.
    pub fn set_balance(&mut self, id: u32, balance: F) {
        match self.nodes.get_mut(&id) {
            Some(node) => node.balance = Some(balance),
            None => panic!("unknown vertex {}", id),
        }
    }

    /// The balance of a vertex.
    ///
    /// Panics if the vertex does not exist or carries no balance.
    pub fn balance(&self, id: u32) -> F {
        match self.nodes.get(&id) {
            Some(node) => node.balance(),
            None => panic!("unknown vertex {}", id),
        }
    }

    /// Add a directed edge without attributes.
    ///
    /// Missing endpoints are created.
    pub fn add_edge(&mut self, source: u32, target: u32) -> EdgeId {
        self.insert(Edge {
            source,
            target,
            weight: None,
            cost: None,
            capacity: None,
            twin: None,
        })
    }

    /// Add a directed edge with a weight.
    pub fn add_weighted_edge(&mut self, source: u32, target: u32, weight: F) -> EdgeId {
        self.insert(Edge {
            source,
            target,
            weight: Some(weight),
            cost: None,
            capacity: None,
            twin: None,
        })
    }

    /// Add a directed edge with a cost and a capacity.
    pub fn add_costed_edge(&mut self, source: u32, target: u32, cost: F, capacity: F) -> EdgeId {
        self.insert(Edge {
            source,
            target,
            weight: None,
            cost: Some(cost),
            capacity: Some(capacity),
            twin: None,
        })
    }

    /// Add a directed edge with a capacity but no cost.
    pub fn add_capacitated_edge(&mut self, source: u32, target: u32, capacity: F) -> EdgeId {
        self.insert(Edge {
            source,
            target,
            weight: None,
            cost: None,
            capacity: Some(capacity),
            twin: None,
        })
    }

    /// Add an undirected edge with a weight.
    ///
    /// The edge is stored as two opposite directed edges referencing each
    /// other as twins. Both handles are returned, source-to-target first.
    pub fn add_undirected_edge(&mut self, source: u32, target: u32, weight: F) -> (EdgeId, EdgeId) {
        let fwd = self.add_weighted_edge(source, target, weight);
        let bwd = self.add_weighted_edge(target, source, weight);
        if let Some(e) = self.edges.get_mut(&fwd) {
            e.twin = Some(bwd);
        }
        if let Some(e) = self.edges.get_mut(&bwd) {
            e.twin = Some(fwd);
        }
        (fwd, bwd)
    }

    fn insert(&mut self, edge: Edge<F>) -> EdgeId {
        let id = EdgeId(self.next_edge);
        self.next_edge += 1;

        self.add_node(edge.source);
        self.add_node(edge.target);

        if let Some(node) = self.nodes.get_mut(&edge.source) {
            node.outgoing.push(id);
        }
        self.by_endpoints.entry(edge.endpoint_key()).or_default().push(id);
        self.edges.insert(id, edge);
        id
    }

    /// Remove an edge and return it. Panics if the handle is stale.
    ///
    /// If the edge was one half of an undirected pair, the surviving twin
    /// becomes a plain directed edge.
    pub fn remove_edge(&mut self, e: EdgeId) -> Edge<F> {
        let edge = match self.edges.remove(&e) {
            Some(edge) => edge,
            None => panic!("unknown edge {}", e),
        };

        if let Some(node) = self.nodes.get_mut(&edge.source) {
            node.outgoing.retain(|&eid| eid != e);
        }
        let key = edge.endpoint_key();
        if let Some(bucket) = self.by_endpoints.get_mut(&key) {
            bucket.retain(|&eid| eid != e);
            if bucket.is_empty() {
                self.by_endpoints.remove(&key);
            }
        }
        if let Some(twin) = edge.twin {
            if let Some(t) = self.edges.get_mut(&twin) {
                t.twin = None;
            }
        }
        edge
    }

    /// Return the edge with the given handle. Panics if the handle is stale.
    pub fn edge(&self, e: EdgeId) -> &Edge<F> {
        match self.edges.get(&e) {
            Some(edge) => edge,
            None => panic!("unknown edge {}", e),
        }
    }

    /// Return the edge with the given handle, if it exists.
    pub fn get_edge(&self, e: EdgeId) -> Option<&Edge<F>> {
        self.edges.get(&e)
    }

    /// All edges connecting `u` and `v`, in the requested direction mode.
    pub fn edges_between(&self, u: u32, v: u32, dir: Direction) -> impl Iterator<Item = EdgeId> + '_ {
        self.by_endpoints
            .get(&endpoint_key(u, v))
            .into_iter()
            .flatten()
            .copied()
            .filter(move |&e| dir == Direction::Any || self.edge(e).source == u)
    }

    /// The first edge connecting `u` and `v`, if any.
    pub fn edge_between(&self, u: u32, v: u32, dir: Direction) -> Option<EdgeId> {
        self.edges_between(u, v, dir).next()
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// All vertices in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<F>> {
        self.nodes.values()
    }

    /// All vertex ids in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.nodes.keys().copied()
    }

    /// All edges with their handles, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge<F>)> {
        self.edges.iter().map(|(&e, edge)| (e, edge))
    }

    /// The outgoing edges of a vertex. Panics if the vertex is unknown.
    pub fn out_edges(&self, id: u32) -> impl Iterator<Item = EdgeId> + '_ {
        match self.nodes.get(&id) {
            Some(node) => node.outgoing.iter().copied(),
            None => panic!("unknown vertex {}", id),
        }
    }

    /// The largest vertex id in the graph.
    pub fn max_node_id(&self) -> Option<u32> {
        self.nodes.keys().next_back().copied()
    }
}

impl<F> Default for Graph<F>
where
    F: Float,
{
    fn default() -> Self {
        Graph::new()
    }
}
