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

use flowgraph::loader::read_balanced;
use flowgraph::maxflow::edmondskarp;
use flowgraph::mcf::{cycle_cancelling, successive_shortest_path, CycleCancelling, SuccessiveShortestPath};
use flowgraph::residual;
use flowgraph::shortestpath::moorebellmanford;
use flowgraph::{EdgeFlow, Graph};

/// The capacity of the cut (S, V∖S) for source-side set `S`.
fn cut_capacity(g: &Graph, s: &[u32]) -> f64 {
    g.edges()
        .filter(|(_, e)| s.contains(&e.source()) && !s.contains(&e.target()))
        .map(|(_, e)| e.weight())
        .sum()
}

/// Assert that the residual graph of `flow` contains no negative cycle,
/// the optimality condition for a min-cost b-flow.
fn assert_no_negative_cycle(g: &Graph, flow: &EdgeFlow) {
    let res = residual::build(g, flow, |e| e.capacity());
    assert_eq!(moorebellmanford::negative_cycle(res.graph(), |e| e.cost()), None);
}

/// A feasible instance with a tempting expensive path: supply 2 at
/// vertex 0, demand 2 at vertex 3, a direct edge of cost 5 and a detour
/// of total cost 2.
fn detour_instance() -> Graph {
    let mut g: Graph = Graph::new();
    g.add_costed_edge(0, 1, 5.0, 2.0);
    g.add_costed_edge(0, 2, 1.0, 2.0);
    g.add_costed_edge(2, 1, 1.0, 2.0);
    g.add_costed_edge(1, 3, 1.0, 2.0);
    g.set_balance(0, 2.0);
    g.set_balance(1, 0.0);
    g.set_balance(2, 0.0);
    g.set_balance(3, -2.0);
    g
}

#[test]
fn test_maxflow_equals_min_cut() {
    let mut g: Graph = Graph::new();
    g.add_weighted_edge(0, 1, 4.0);
    g.add_weighted_edge(0, 2, 2.0);
    g.add_weighted_edge(1, 3, 3.0);
    g.add_weighted_edge(2, 3, 5.0);

    let (value, _) = edmondskarp(&g, 0, 3, |e| e.weight());

    // brute-force min cut over all source-side sets containing 0 only
    let min_cut = [vec![0], vec![0, 1], vec![0, 2], vec![0, 1, 2]]
        .iter()
        .map(|s| cut_capacity(&g, s))
        .fold(f64::INFINITY, f64::min);

    assert_eq!(value, 5.0);
    assert_eq!(value, min_cut);
}

#[test]
fn test_flow_conservation() {
    let mut g: Graph = Graph::new();
    g.add_weighted_edge(0, 1, 4.0);
    g.add_weighted_edge(0, 2, 2.0);
    g.add_weighted_edge(1, 2, 1.0);
    g.add_weighted_edge(1, 3, 3.0);
    g.add_weighted_edge(2, 3, 5.0);

    let (value, flow) = edmondskarp(&g, 0, 3, |e| e.weight());

    for v in g.node_ids() {
        let out: f64 = g
            .edges()
            .filter(|(_, e)| e.source() == v)
            .map(|(_, e)| flow.on(e))
            .sum();
        let inc: f64 = g
            .edges()
            .filter(|(_, e)| e.target() == v)
            .map(|(_, e)| flow.on(e))
            .sum();
        let expected = match v {
            0 => value,
            3 => -value,
            _ => 0.0,
        };
        assert_eq!(out - inc, expected, "conservation violated at vertex {}", v);
    }
}

#[test]
fn test_solvers_agree() {
    let g = detour_instance();
    let cc = cycle_cancelling(&g).unwrap();
    let ssp = successive_shortest_path(&g).unwrap();
    assert_eq!(cc, 6.0);
    assert_eq!(cc, ssp);
}

#[test]
fn test_solvers_agree_on_single_path() {
    let mut g: Graph = Graph::new();
    g.add_costed_edge(0, 1, 3.0, 9.0);
    g.set_balance(0, 7.0);
    g.set_balance(1, -7.0);

    assert_eq!(cycle_cancelling(&g), Some(21.0));
    assert_eq!(successive_shortest_path(&g), Some(21.0));
}

#[test]
fn test_solvers_agree_with_negative_costs() {
    let mut g: Graph = Graph::new();
    g.add_costed_edge(0, 1, 2.0, 4.0);
    g.add_costed_edge(1, 2, -3.0, 3.0);
    g.add_costed_edge(0, 2, 1.0, 2.0);
    g.set_balance(0, 3.0);
    g.set_balance(1, 0.0);
    g.set_balance(2, -3.0);

    let cc = cycle_cancelling(&g).unwrap();
    let ssp = successive_shortest_path(&g).unwrap();
    assert_eq!(cc, ssp);
}

#[test]
fn test_final_flows_are_optimal() {
    let g = detour_instance();

    let mut cc = CycleCancelling::new(&g);
    cc.solve();
    assert_no_negative_cycle(&g, cc.flow());

    let mut ssp = SuccessiveShortestPath::new(&g);
    ssp.solve();
    assert_no_negative_cycle(&g, ssp.flow());
}

#[test]
fn test_solvers_agree_on_infeasibility() {
    // total capacity towards the demand vertex is too small
    let mut g: Graph = Graph::new();
    g.add_costed_edge(0, 1, 1.0, 1.0);
    g.add_costed_edge(1, 2, 1.0, 1.0);
    g.set_balance(0, 3.0);
    g.set_balance(1, 0.0);
    g.set_balance(2, -3.0);

    assert_eq!(cycle_cancelling(&g), None);
    assert_eq!(successive_shortest_path(&g), None);
}

#[test]
fn test_loaded_instance_end_to_end() {
    let input = "4
2  0  0 -2
0 1 5 2
0 2 1 2
2 1 1 2
1 3 1 2
";
    let g = read_balanced::<f64, _>(input.as_bytes()).unwrap();
    assert_eq!(g.num_nodes(), 4);
    assert_eq!(g.num_edges(), 4);

    assert_eq!(cycle_cancelling(&g), Some(6.0));
    assert_eq!(successive_shortest_path(&g), Some(6.0));
}

#[test]
fn test_loaded_maxflow_instance() {
    let input = "6
0 1
0 4
1 2
1 5
2 3
4 2
5 3
";
    // unit capacities via the weight attribute
    let list = flowgraph::loader::read_edge_list::<f64, _>(input.as_bytes()).unwrap();
    let mut g: Graph = Graph::new();
    for (_, e) in list.edges() {
        g.add_weighted_edge(e.source(), e.target(), 1.0);
    }

    let (value, _) = edmondskarp(&g, 0, 3, |e| e.weight());
    assert_eq!(value, 2.0);
}
