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

//! Minimum Cost Flow algorithms.
//!
//! A minimum-cost-flow instance is a graph whose vertices all carry a
//! balance (supply positive, demand negative, transit zero) and whose
//! edges all carry a cost and a capacity. A *b-flow* satisfies every
//! balance exactly; the solvers determine whether one exists and, if so,
//! the minimum total cost Σ flow(e)·cost(e).
//!
//! Two strategies are implemented: [`CycleCancelling`] starts from any
//! feasible b-flow and removes negative-cost residual cycles,
//! [`SuccessiveShortestPath`] keeps the flow cost-optimal for its value
//! and closes the balance gaps along shortest residual paths.
//!
//! Because flow values are shared between the two directions of an edge
//! (see [`EdgeFlow`][crate::flow::EdgeFlow]), instances must not contain
//! parallel or antiparallel edges between the same pair of vertices.

pub mod cyclecancelling;
pub use self::cyclecancelling::{cycle_cancelling, CycleCancelling};

pub mod ssp;
pub use self::ssp::{successive_shortest_path, SuccessiveShortestPath};

use std::collections::BTreeMap;

use crate::flow::EdgeFlow;
use crate::graph::{Direction, Graph};
use crate::num::traits::Float;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SolutionState {
    /// Unknown state, the problem has not been solved, yet
    Unknown,
    /// The problem has been solved to optimality
    Optimal,
    /// The problem is infeasible
    Infeasible,
}

/// Compute the flow-induced pseudo-balance b′ of every vertex.
///
/// b′(v) = Σ(flow on edges leaving v) − Σ(flow on edges entering v).
pub fn pseudo_balances<F>(g: &Graph<F>, flow: &EdgeFlow<F>) -> BTreeMap<u32, F>
where
    F: Float,
{
    let mut bprime: BTreeMap<u32, F> = g.node_ids().map(|v| (v, F::zero())).collect();
    for (_, edge) in g.edges() {
        let f = flow.on(edge);
        let out = bprime
            .get_mut(&edge.source())
            .expect("edge source is a vertex of the graph");
        *out = *out + f;
        let into = bprime
            .get_mut(&edge.target())
            .expect("edge target is a vertex of the graph");
        *into = *into - f;
    }
    bprime
}

/// Check the preconditions shared by both min-cost-flow solvers: every
/// vertex balanced, every edge costed and capacitated, no two edges
/// sharing an unordered endpoint pair.
pub(crate) fn check_instance<F>(g: &Graph<F>)
where
    F: Float,
{
    for node in g.nodes() {
        assert!(node.has_balance(), "vertex {} has no balance", node.id());
    }
    for (_, edge) in g.edges() {
        assert!(
            edge.has_cost() && edge.has_capacity(),
            "edge ({},{}) has no cost or no capacity",
            edge.source(),
            edge.target()
        );
        debug_assert!(
            g.edges_between(edge.source(), edge.target(), Direction::Any).count() == 1,
            "parallel or antiparallel edges between {} and {}",
            edge.source(),
            edge.target()
        );
    }
}
