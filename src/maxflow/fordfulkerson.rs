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

//! This module implements the augmenting-path algorithm of Ford-Fulkerson
//! with depth-first path discovery.
//!
//! # Example
//!
//! ```
//! use rs_flow::maxflow::fordfulkerson;
//! use rs_flow::{FlowGraph, SINK, SOURCE};
//!
//! // two vertex-disjoint paths of capacity 2 each
//! let mut g = FlowGraph::<i64>::with_vertices(4)?;
//! g.add_edge(SOURCE, 2, 2)?;
//! g.add_edge(2, SINK, 2)?;
//! g.add_edge(SOURCE, 3, 2)?;
//! g.add_edge(3, SINK, 2)?;
//!
//! let (value, flow, mincut) = fordfulkerson(g);
//!
//! assert_eq!(value, 4);
//! assert!(flow.iter().all(|&(_, _, f)| f >= 0));
//! // flow conservation in the inner vertices
//! for v in 2..4 {
//!     let fin: i64 = flow.iter().filter(|&&(_, w, _)| w == v).map(|&(_, _, f)| f).sum();
//!     let fout: i64 = flow.iter().filter(|&&(u, _, _)| u == v).map(|&(_, _, f)| f).sum();
//!     assert_eq!(fin, fout);
//! }
//! // max-flow equals min-cut
//! assert_eq!(mincut.iter().map(|&(_, _, c)| c).sum::<i64>(), value);
//! # Ok::<_, rs_flow::Error>(())
//! ```

use crate::flowgraph::{FlowGraph, Vertex, SINK, SOURCE};
use crate::search::dfs;
use crate::search::{path_from_preds, PredMap};

use std::cmp::min;
use std::mem;

use crate::num::traits::NumAssign;

/// The Ford-Fulkerson max-flow algorithm with depth-first search.
///
/// The solver owns the network it was created with and consumes the arc
/// capacities while solving. The network must be fully constructed before
/// the solver is created; `clone` the network beforehand to keep the
/// original capacities.
pub struct FordFulkerson<F> {
    /// The network, after `solve` in its final residual state.
    graph: FlowGraph<F>,
    /// The arcs of the original network with their initial capacities.
    upper: Vec<(Vertex, Vertex, F)>,
    /// Predecessor map of the most recent search.
    preds: PredMap,
    /// Reusable frontier stack.
    stack: Vec<Vertex>,
    value: F,
}

impl<F> FordFulkerson<F>
where
    F: NumAssign + Ord + Copy,
{
    /// Create a new solver consuming the given network.
    pub fn new(graph: FlowGraph<F>) -> Self {
        let upper = graph.arcs().collect();
        FordFulkerson {
            graph,
            upper,
            preds: PredMap::new(),
            stack: Vec::new(),
            value: F::zero(),
        }
    }

    /// Return the value of the latest computed maximum flow.
    pub fn value(&self) -> F {
        self.value
    }

    /// Return the network in its current residual state.
    pub fn residual_graph(&self) -> &FlowGraph<F> {
        &self.graph
    }

    /// Consume the solver and return the network in its final residual state.
    pub fn into_residual(self) -> FlowGraph<F> {
        self.graph
    }

    /// Solve the max-flow problem from [`SOURCE`] to [`SINK`].
    ///
    /// The loop has two states only: searching for an augmenting path and,
    /// once a search fails, terminal. It runs to completion synchronously.
    /// Calling `solve` on a solved network finds no further path and leaves
    /// the flow value unchanged.
    pub fn solve(&mut self) {
        loop {
            if !self.search() {
                break;
            }
            let path = path_from_preds(&self.preds, SOURCE, SINK);
            let df = self.bottleneck(&path);
            debug_assert!(!df.is_zero());
            self.graph.augment(&path, df);
            self.value += df;
        }
    }

    /// Run one depth-first search for an augmenting path.
    ///
    /// Returns whether the sink was reached. The predecessor map is kept; on
    /// failure it covers exactly the source-reachable residual component.
    fn search(&mut self) -> bool {
        let data = (mem::take(&mut self.preds), mem::take(&mut self.stack));
        let mut search = dfs::start_with_data(&self.graph, SOURCE, data);
        let found = search.by_ref().any(|(v, _)| v == SINK);
        let (preds, stack) = search.into_data();
        self.preds = preds;
        self.stack = stack;
        found
    }

    /// Return the minimum residual capacity along `path`.
    fn bottleneck(&self, path: &[Vertex]) -> F {
        let mut df = None;
        for w in path.windows(2) {
            let upper = self
                .graph
                .residual(w[0], w[1])
                .unwrap_or_else(|| panic!("no arc ({},{}) in the network", w[0], w[1]));
            df = Some(df.map_or(upper, |d| min(d, upper)));
        }
        df.expect("augmenting path without arcs")
    }

    /// Return the flow over the arc from `u` to `v`.
    ///
    /// The flow is the difference between the arc's original and its
    /// residual capacity; it is zero for pairs not connected by an arc.
    pub fn flow(&self, u: Vertex, v: Vertex) -> F {
        self.upper
            .iter()
            .find(|&&(a, b, _)| a == u && b == v)
            .map_or(F::zero(), |&(_, _, c)| c - self.graph.residual(u, v).unwrap_or_else(F::zero))
    }

    /// Return all arcs of the original network with their flow values.
    pub fn flows(&self) -> Vec<(Vertex, Vertex, F)> {
        self.upper
            .iter()
            .map(|&(u, v, c)| (u, v, c - self.graph.residual(u, v).unwrap_or_else(F::zero)))
            .collect()
    }

    /// Return the vertices on the source side of the minimal cut associated
    /// with the last computed maximum flow.
    ///
    /// The terminal search of `solve` visits exactly the vertices still
    /// reachable from the source in the residual network, so its
    /// predecessor map is the reachability scan.
    pub fn mincut(&self) -> Vec<Vertex> {
        (0..self.graph.num_vertices()).filter(|&v| self.reachable(v)).collect()
    }

    /// Return the arcs crossing the minimal cut, with their original
    /// capacities.
    ///
    /// These are the original arcs whose tail is source-reachable in the
    /// final residual network and whose head is not. Their capacities sum
    /// to [`value`][FordFulkerson::value].
    pub fn mincut_edges(&self) -> Vec<(Vertex, Vertex, F)> {
        self.upper
            .iter()
            .copied()
            .filter(|&(u, v, _)| self.reachable(u) && !self.reachable(v))
            .collect()
    }

    fn reachable(&self, v: Vertex) -> bool {
        v == SOURCE || self.preds.get(v).map_or(false, |p| p.is_some())
    }
}

/// Solve the max-flow problem using the algorithm of Ford-Fulkerson.
///
/// The function computes the maximum flow from [`SOURCE`] to [`SINK`] of
/// the given network, consuming it.
///
/// It returns the flow value, the flow on each arc and the arcs of a
/// minimal cut with their capacities.
pub fn fordfulkerson<F>(graph: FlowGraph<F>) -> (F, Vec<(Vertex, Vertex, F)>, Vec<(Vertex, Vertex, F)>)
where
    F: NumAssign + Ord + Copy,
{
    let mut maxflow = FordFulkerson::new(graph);
    maxflow.solve();
    (maxflow.value(), maxflow.flows(), maxflow.mincut_edges())
}
