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

//! Residual-graph construction.
//!
//! For a graph with capacities u(e) and a flow assignment f, the residual
//! graph contains for every edge e=(u,v):
//!
//! - a *forward* edge (u,v) with capacity u(e) − f(e), if that is positive,
//!   carrying the cost of e (if e is costed), and
//! - a *backward* edge (v,u) with capacity f(e), if f(e) is positive,
//!   carrying the negated cost of e (if e is costed).
//!
//! Copies with zero residual capacity are omitted. The vertex set (and the
//! balances) of the original graph are copied, its edges are never aliased.
//!
//! Every residual edge remembers which original edge it was derived from
//! and on which side: [`Either::Left`] for the forward, [`Either::Right`]
//! for the backward copy. Augmenting algorithms match on this to apply the
//! same-direction/opposite-direction sign rule.
//!
//! # Example
//!
//! ```
//! use either::Either;
//! use flowgraph::{residual, EdgeFlow, Graph};
//!
//! let mut g: Graph = Graph::new();
//! let e = g.add_costed_edge(0, 1, 2.0, 5.0);
//!
//! let mut flow = EdgeFlow::new();
//! flow.set(0, 1, 3.0);
//!
//! let res = residual::build(&g, &flow, |e| e.capacity());
//! assert_eq!(res.graph().num_edges(), 2);
//!
//! let fwd = res.graph().edge_between(0, 1, flowgraph::Direction::Forward).unwrap();
//! assert_eq!(res.graph().edge(fwd).capacity(), 2.0);
//! assert_eq!(res.graph().edge(fwd).cost(), 2.0);
//! assert_eq!(res.origin(fwd), Either::Left(e));
//! ```

use std::collections::BTreeMap;

use either::Either;

use crate::flow::EdgeFlow;
use crate::graph::{Edge, EdgeId, Graph};
use crate::num::traits::Float;

/// A residual graph together with the provenance of its edges.
pub struct Residual<F = f64> {
    graph: Graph<F>,
    origin: BTreeMap<EdgeId, Either<EdgeId, EdgeId>>,
    derived: BTreeMap<EdgeId, (Option<EdgeId>, Option<EdgeId>)>,
}

/// Build the residual graph of `g` under the flow assignment `flow`.
///
/// `capacity` reads the capacity of an original edge; max-flow uses the
/// edge weight here, the min-cost-flow solvers the capacity attribute.
///
/// The construction is a pure function of its inputs: building twice from
/// the same flow yields structurally identical graphs.
pub fn build<F, C>(g: &Graph<F>, flow: &EdgeFlow<F>, capacity: C) -> Residual<F>
where
    F: Float,
    C: Fn(&Edge<F>) -> F,
{
    let mut res = Residual {
        graph: Graph::new(),
        origin: BTreeMap::new(),
        derived: BTreeMap::new(),
    };

    for node in g.nodes() {
        res.graph.add_node(node.id());
        if node.has_balance() {
            res.graph.set_balance(node.id(), node.balance());
        }
    }
    for (eid, edge) in g.edges() {
        res.derive(eid, edge, flow, &capacity);
    }
    res
}

impl<F> Residual<F>
where
    F: Float,
{
    /// The derived graph.
    pub fn graph(&self) -> &Graph<F> {
        &self.graph
    }

    /// The original edge a residual edge was derived from:
    /// `Left` for a forward copy, `Right` for a backward copy.
    ///
    /// Panics if `e` is not an edge of this residual graph.
    pub fn origin(&self, e: EdgeId) -> Either<EdgeId, EdgeId> {
        match self.origin.get(&e) {
            Some(&o) => o,
            None => panic!("edge {} is not a residual edge", e),
        }
    }

    /// Re-derive the copies of a single original edge after its flow has
    /// changed.
    ///
    /// This is the incremental variant of [`build`]: the stale forward and
    /// backward copies of `orig` are removed and fresh ones added per the
    /// residual rule. Updating every edge of the original graph is
    /// equivalent to a full rebuild.
    pub fn update<C>(&mut self, g: &Graph<F>, flow: &EdgeFlow<F>, orig: EdgeId, capacity: C)
    where
        C: Fn(&Edge<F>) -> F,
    {
        if let Some((fwd, bwd)) = self.derived.remove(&orig) {
            for stale in fwd.into_iter().chain(bwd) {
                self.graph.remove_edge(stale);
                self.origin.remove(&stale);
            }
        }
        self.derive(orig, g.edge(orig), flow, &capacity);
    }

    fn derive<C>(&mut self, eid: EdgeId, edge: &Edge<F>, flow: &EdgeFlow<F>, capacity: &C)
    where
        C: Fn(&Edge<F>) -> F,
    {
        let cap = capacity(edge);
        let f = flow.on(edge);
        let (u, v) = (edge.source(), edge.target());

        let mut fwd = None;
        if cap - f > F::zero() {
            let r = if edge.has_cost() {
                self.graph.add_costed_edge(u, v, edge.cost(), cap - f)
            } else {
                self.graph.add_capacitated_edge(u, v, cap - f)
            };
            self.origin.insert(r, Either::Left(eid));
            fwd = Some(r);
        }

        let mut bwd = None;
        if f > F::zero() {
            let r = if edge.has_cost() {
                self.graph.add_costed_edge(v, u, -edge.cost(), f)
            } else {
                self.graph.add_capacitated_edge(v, u, f)
            };
            self.origin.insert(r, Either::Right(eid));
            bwd = Some(r);
        }

        self.derived.insert(eid, (fwd, bwd));
    }
}
