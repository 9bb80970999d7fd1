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

//! Minimum-cost flow by cycle cancelling.
//!
//! A feasible b-flow is obtained by connecting a super-source to every
//! supply vertex and every demand vertex to a super-target and running
//! [Edmonds-Karp][crate::maxflow::edmondskarp] over the capacities; the
//! instance is feasible iff the max-flow value equals the total supply.
//! The feasible flow is then improved by repeatedly cancelling
//! negative-cost cycles in its residual graph until none remain, at
//! which point the flow is cost-minimal. Every cancellation strictly
//! decreases the total cost.
//!
//! # Example
//!
//! ```
//! use flowgraph::mcf::cycle_cancelling;
//! use flowgraph::Graph;
//!
//! let mut g: Graph = Graph::new();
//! g.add_costed_edge(0, 1, 1.0, 2.0);
//! g.add_costed_edge(1, 2, 1.0, 2.0);
//! g.add_costed_edge(0, 2, 4.0, 2.0);
//! g.set_balance(0, 2.0);
//! g.set_balance(1, 0.0);
//! g.set_balance(2, -2.0);
//!
//! assert_eq!(cycle_cancelling(&g), Some(4.0));
//! ```

use either::Either;

use crate::flow::{flow_cost, EdgeFlow};
use crate::graph::Graph;
use crate::maxflow::edmondskarp;
use crate::mcf::{check_instance, SolutionState};
use crate::num::traits::Float;
use crate::residual;
use crate::shortestpath::moorebellmanford;

/// Minimum-cost-flow algorithm by cycle cancelling.
pub struct CycleCancelling<'a, F = f64> {
    g: &'a Graph<F>,
    flow: EdgeFlow<F>,
    state: SolutionState,
    value: F,
}

impl<'a, F> CycleCancelling<'a, F>
where
    F: Float,
{
    /// Create a new cycle-cancelling instance for a graph.
    pub fn new(g: &'a Graph<F>) -> Self {
        CycleCancelling {
            g,
            flow: EdgeFlow::new(),
            state: SolutionState::Unknown,
            value: F::zero(),
        }
    }

    /// The minimum total cost of the latest solved instance.
    pub fn value(&self) -> F {
        self.value
    }

    /// The flow assignment of the latest solved instance.
    pub fn flow(&self) -> &EdgeFlow<F> {
        &self.flow
    }

    pub fn solve(&mut self) -> SolutionState {
        check_instance(self.g);

        // feasibility: max-flow between a super-source feeding every
        // supply vertex and a super-target draining every demand vertex
        let mut aux = self.g.clone();
        let base = self.g.max_node_id().map(|m| m + 1).unwrap_or(0);
        let (ss, st) = (base, base + 1);
        aux.add_node(ss);
        aux.add_node(st);

        let mut supply = F::zero();
        for node in self.g.nodes() {
            let b = node.balance();
            if b > F::zero() {
                aux.add_capacitated_edge(ss, node.id(), b);
                supply = supply + b;
            } else if b < F::zero() {
                aux.add_capacitated_edge(node.id(), st, -b);
            }
        }

        let (value, mut flow) = edmondskarp(&aux, ss, st, |e| e.capacity());
        if value < supply {
            self.state = SolutionState::Infeasible;
            return self.state;
        }

        // cancel negative cycles until the flow is cost-minimal
        loop {
            let res = residual::build(self.g, &flow, |e| e.capacity());
            let cycle = match moorebellmanford::negative_cycle(res.graph(), |e| e.cost()) {
                Some(cycle) => cycle,
                None => break,
            };

            let gamma = cycle
                .iter()
                .map(|&e| res.graph().edge(e).capacity())
                .fold(F::infinity(), F::min);

            for e in cycle {
                let (orig, delta) = match res.origin(e) {
                    Either::Left(orig) => (orig, gamma),
                    Either::Right(orig) => (orig, -gamma),
                };
                let edge = self.g.edge(orig);
                flow.add(edge.source(), edge.target(), delta);
            }
        }

        self.value = flow_cost(self.g, &flow);
        self.flow = flow;
        self.state = SolutionState::Optimal;
        self.state
    }
}

/// Solve a minimum-cost-flow instance by cycle cancelling.
///
/// Returns the minimum total cost, or `None` if no feasible b-flow
/// exists.
pub fn cycle_cancelling<F>(g: &Graph<F>) -> Option<F>
where
    F: Float,
{
    let mut solver = CycleCancelling::new(g);
    match solver.solve() {
        SolutionState::Optimal => Some(solver.value()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{cycle_cancelling, CycleCancelling};
    use crate::graph::Graph;
    use crate::mcf::SolutionState;

    #[test]
    fn test_chain_with_expensive_shortcut() {
        let mut g: Graph = Graph::new();
        g.add_costed_edge(0, 1, 1.0, 2.0);
        g.add_costed_edge(1, 2, 1.0, 2.0);
        g.add_costed_edge(0, 2, 4.0, 2.0);
        g.set_balance(0, 2.0);
        g.set_balance(1, 0.0);
        g.set_balance(2, -2.0);
        assert_eq!(cycle_cancelling(&g), Some(4.0));
    }

    #[test]
    fn test_cancelling_improves_feasible_flow() {
        // the fewest-edge feasible flow runs over the expensive edge
        // 0->1; a single cancellation of the cycle 1->0->2->1 (residual
        // costs -5+1+1) reroutes it
        let mut g: Graph = Graph::new();
        g.add_costed_edge(0, 1, 5.0, 2.0);
        g.add_costed_edge(0, 2, 1.0, 2.0);
        g.add_costed_edge(2, 1, 1.0, 2.0);
        g.add_costed_edge(1, 3, 1.0, 2.0);
        g.set_balance(0, 2.0);
        g.set_balance(1, 0.0);
        g.set_balance(2, 0.0);
        g.set_balance(3, -2.0);
        assert_eq!(cycle_cancelling(&g), Some(6.0));
    }

    #[test]
    fn test_negative_cost_edge() {
        let mut g: Graph = Graph::new();
        g.add_costed_edge(0, 1, -2.0, 3.0);
        g.set_balance(0, 1.0);
        g.set_balance(1, -1.0);
        assert_eq!(cycle_cancelling(&g), Some(-2.0));
    }

    #[test]
    fn test_infeasible_capacity() {
        let mut g: Graph = Graph::new();
        g.add_costed_edge(0, 1, 1.0, 1.0);
        g.set_balance(0, 2.0);
        g.set_balance(1, -2.0);
        let mut solver = CycleCancelling::new(&g);
        assert_eq!(solver.solve(), SolutionState::Infeasible);
    }

    #[test]
    fn test_infeasible_unreachable() {
        let mut g: Graph = Graph::new();
        g.add_costed_edge(0, 1, 1.0, 5.0);
        g.add_costed_edge(2, 3, 1.0, 5.0);
        g.set_balance(0, 2.0);
        g.set_balance(1, 0.0);
        g.set_balance(2, 0.0);
        g.set_balance(3, -2.0);
        assert_eq!(cycle_cancelling(&g), None);
    }
}
