/*
 * Copyright (c) 2022, 2023 Frank Fischer <frank-fischer@shadow-soft.de>
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

use rs_flow::maxflow::{edmondskarp, fordfulkerson, EdmondsKarp, FordFulkerson};
use rs_flow::{Net, Vertex, SINK, SOURCE};

/// Test networks with their maximum flow values.
fn instances() -> Vec<(Net, i64)> {
    let mut list = Vec::new();

    // a direct arc and a path over an inner vertex, plus a dead zero arc
    let mut g = Net::with_vertices(4).unwrap();
    g.add_edge(SOURCE, 2, 3).unwrap();
    g.add_edge(2, SINK, 2).unwrap();
    g.add_edge(SOURCE, SINK, 1).unwrap();
    g.add_edge(2, 3, 0).unwrap();
    list.push((g, 3));

    // the sink is not connected at all
    list.push((Net::with_vertices(2).unwrap(), 0));

    // a single direct arc
    let mut g = Net::with_vertices(2).unwrap();
    g.add_edge(SOURCE, SINK, 5).unwrap();
    list.push((g, 5));

    // two vertex-disjoint paths, both saturated
    let mut g = Net::with_vertices(4).unwrap();
    g.add_edge(SOURCE, 2, 2).unwrap();
    g.add_edge(2, SINK, 2).unwrap();
    g.add_edge(SOURCE, 3, 2).unwrap();
    g.add_edge(3, SINK, 2).unwrap();
    list.push((g, 4));

    // a cycle disconnected from source and sink
    let mut g = Net::with_vertices(4).unwrap();
    g.add_edge(SOURCE, SINK, 1).unwrap();
    g.add_edge(2, 3, 5).unwrap();
    g.add_edge(3, 2, 5).unwrap();
    list.push((g, 1));

    // all source arcs have capacity zero
    let mut g = Net::with_vertices(3).unwrap();
    g.add_edge(SOURCE, 2, 0).unwrap();
    g.add_edge(2, SINK, 3).unwrap();
    list.push((g, 0));

    // a 6-vertex network with inner branching and a backward arc
    list.push((network6(), 19));

    list
}

/// A 6-vertex network with maximum flow 19 and minimal cut {0, 3}.
fn network6() -> Net {
    let mut g = Net::with_vertices(6).unwrap();
    g.add_edge(0, 2, 10).unwrap();
    g.add_edge(0, 3, 10).unwrap();
    g.add_edge(2, 3, 2).unwrap();
    g.add_edge(2, 4, 4).unwrap();
    g.add_edge(2, 5, 8).unwrap();
    g.add_edge(3, 5, 9).unwrap();
    g.add_edge(4, 1, 10).unwrap();
    g.add_edge(5, 4, 6).unwrap();
    g.add_edge(5, 1, 10).unwrap();
    g
}

/// Verify a flow assignment against the original network.
fn check_flow(orig: &Net, value: i64, flow: &[(Vertex, Vertex, i64)], mincut: &[(Vertex, Vertex, i64)]) {
    // capacity respect
    for &(u, v, f) in flow {
        let upper = orig.residual(u, v).unwrap();
        assert!(f >= 0 && f <= upper, "arc ({},{}) carries {} of {}", u, v, f, upper);
    }

    // flow conservation in every inner vertex
    for v in 2..orig.num_vertices() {
        let fin: i64 = flow.iter().filter(|&&(_, w, _)| w == v).map(|&(_, _, f)| f).sum();
        let fout: i64 = flow.iter().filter(|&&(u, _, _)| u == v).map(|&(_, _, f)| f).sum();
        assert_eq!(fin, fout, "conservation violated in vertex {}", v);
    }

    // the value leaves the source and arrives at the sink
    let out = |v| flow.iter().filter(|&&(u, _, _)| u == v).map(|&(_, _, f)| f).sum::<i64>();
    let into = |v| flow.iter().filter(|&&(_, w, _)| w == v).map(|&(_, _, f)| f).sum::<i64>();
    assert_eq!(out(SOURCE) - into(SOURCE), value);
    assert_eq!(into(SINK) - out(SINK), value);

    // max-flow equals min-cut
    assert_eq!(mincut.iter().map(|&(_, _, c)| c).sum::<i64>(), value);
}

#[test]
fn test_fordfulkerson() {
    for (g, expected) in instances() {
        let orig = g.clone();
        let (value, flow, mincut) = fordfulkerson(g);
        assert_eq!(value, expected);
        check_flow(&orig, value, &flow, &mincut);
    }
}

#[test]
fn test_edmondskarp() {
    for (g, expected) in instances() {
        let orig = g.clone();
        let (value, flow, mincut) = edmondskarp(g);
        assert_eq!(value, expected);
        check_flow(&orig, value, &flow, &mincut);
    }
}

#[test]
fn test_search_order_does_not_change_value() {
    for (g, _) in instances() {
        let (depth_first, _, _) = fordfulkerson(g.clone());
        let (breadth_first, _, _) = edmondskarp(g);
        assert_eq!(depth_first, breadth_first);
    }
}

#[test]
fn test_saturated_arc_is_removed() {
    let mut g = Net::with_vertices(2).unwrap();
    g.add_edge(SOURCE, SINK, 5).unwrap();

    let mut maxflow = FordFulkerson::new(g);
    maxflow.solve();

    assert_eq!(maxflow.value(), 5);
    assert_eq!(maxflow.flow(SOURCE, SINK), 5);

    let residual = maxflow.into_residual();
    assert_eq!(residual.residual(SOURCE, SINK), None);
    assert_eq!(residual.num_edges(), 0);
}

#[test]
fn test_unrelated_cycle_is_left_alone() {
    let mut g = Net::with_vertices(4).unwrap();
    g.add_edge(SOURCE, SINK, 1).unwrap();
    g.add_edge(2, 3, 5).unwrap();
    g.add_edge(3, 2, 5).unwrap();

    let mut maxflow = FordFulkerson::new(g);
    maxflow.solve();

    assert_eq!(maxflow.value(), 1);
    assert_eq!(maxflow.mincut(), vec![SOURCE]);
    assert_eq!(maxflow.mincut_edges(), vec![(SOURCE, SINK, 1)]);

    let residual = maxflow.into_residual();
    assert_eq!(residual.residual(2, 3), Some(5));
    assert_eq!(residual.residual(3, 2), Some(5));
}

#[test]
fn test_noop_solve_leaves_network_unchanged() {
    let mut g = Net::with_vertices(3).unwrap();
    g.add_edge(SOURCE, 2, 0).unwrap();
    g.add_edge(2, SINK, 3).unwrap();
    let arcs: Vec<_> = g.arcs().collect();

    let mut maxflow = EdmondsKarp::new(g);
    maxflow.solve();

    assert_eq!(maxflow.value(), 0);
    assert_eq!(maxflow.residual_graph().arcs().collect::<Vec<_>>(), arcs);
}

#[test]
fn test_mincut() {
    let mut maxflow = FordFulkerson::new(network6());
    maxflow.solve();
    assert_eq!(maxflow.value(), 19);
    assert_eq!(maxflow.mincut(), vec![0, 3]);
    assert_eq!(maxflow.mincut_edges(), vec![(0, 2, 10), (3, 5, 9)]);

    let mut maxflow = EdmondsKarp::new(network6());
    maxflow.solve();
    assert_eq!(maxflow.value(), 19);
    assert_eq!(maxflow.mincut(), vec![0, 3]);
    assert_eq!(maxflow.mincut_edges(), vec![(0, 2, 10), (3, 5, 9)]);
}

#[test]
fn test_solve_is_terminal() {
    let mut maxflow = FordFulkerson::new(network6());
    maxflow.solve();
    assert_eq!(maxflow.value(), 19);

    // the network is consumed, a second solve finds no further path
    maxflow.solve();
    assert_eq!(maxflow.value(), 19);
}

#[test]
fn test_flows_on_inner_arcs() {
    let mut maxflow = FordFulkerson::new(network6());
    maxflow.solve();

    // the arcs out of the source are determined by the cut {0, 3}
    assert_eq!(maxflow.flow(0, 2), 10);
    assert_eq!(maxflow.flow(0, 3), 9);
    // the backward arc 2 -> 3 stays empty, vertex 3 can only forward 9
    assert_eq!(maxflow.flow(2, 3), 0);
    assert_eq!(maxflow.flow(3, 5), 9);
    // arcs that never existed carry no flow
    assert_eq!(maxflow.flow(4, 5), 0);
}
