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

//! This module implements the max-flow algorithm of Edmonds-Karp.
//!
//! The driver loop is the same as in
//! [`fordfulkerson`][crate::maxflow::fordfulkerson], but augmenting paths
//! are discovered breadth-first and are therefore shortest-hop paths. This
//! bounds the number of augmentation rounds polynomially in the size of the
//! network; the resulting flow value is the same.
//!
//! # Example
//!
//! ```
//! use rs_flow::maxflow::edmondskarp;
//! use rs_flow::{FlowGraph, SINK, SOURCE};
//!
//! let mut g = FlowGraph::<i64>::with_vertices(4)?;
//! g.add_edge(SOURCE, 2, 3)?;
//! g.add_edge(2, SINK, 2)?;
//! g.add_edge(SOURCE, SINK, 1)?;
//! g.add_edge(2, 3, 0)?;
//!
//! let (value, flow, mincut) = edmondskarp(g);
//!
//! // one unit over the direct arc, two over the inner vertex
//! assert_eq!(value, 3);
//! assert!(flow.contains(&(SOURCE, SINK, 1)));
//! assert!(flow.contains(&(2, SINK, 2)));
//! assert_eq!(mincut.iter().map(|&(_, _, c)| c).sum::<i64>(), value);
//! # Ok::<_, rs_flow::Error>(())
//! ```

use crate::flowgraph::{FlowGraph, Vertex, SINK, SOURCE};
use crate::search::bfs;
use crate::search::{path_from_preds, PredMap};

use std::cmp::min;
use std::collections::VecDeque;
use std::mem;

use crate::num::traits::NumAssign;

/// The Edmonds-Karp max-flow algorithm.
///
/// Identical to [`FordFulkerson`][crate::maxflow::FordFulkerson] except
/// that augmenting paths are found by breadth-first search. The solver owns
/// the network it was created with and consumes the arc capacities while
/// solving.
pub struct EdmondsKarp<F> {
    /// The network, after `solve` in its final residual state.
    graph: FlowGraph<F>,
    /// The arcs of the original network with their initial capacities.
    upper: Vec<(Vertex, Vertex, F)>,
    /// Predecessor map of the most recent search.
    preds: PredMap,
    /// Reusable frontier queue.
    queue: VecDeque<Vertex>,
    value: F,
}

impl<F> EdmondsKarp<F>
where
    F: NumAssign + Ord + Copy,
{
    /// Create a new solver consuming the given network.
    pub fn new(graph: FlowGraph<F>) -> Self {
        let upper = graph.arcs().collect();
        EdmondsKarp {
            graph,
            upper,
            preds: PredMap::new(),
            queue: VecDeque::new(),
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
    /// Augments along shortest residual paths until the terminal state is
    /// reached. Calling `solve` on a solved network finds no further path
    /// and leaves the flow value unchanged.
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

    /// Run one breadth-first search for an augmenting path.
    ///
    /// Returns whether the sink was reached. The predecessor map is kept; on
    /// failure it covers exactly the source-reachable residual component.
    fn search(&mut self) -> bool {
        let data = (mem::take(&mut self.preds), mem::take(&mut self.queue));
        let mut search = bfs::start_with_data(&self.graph, SOURCE, data);
        let found = search.by_ref().any(|(v, _)| v == SINK);
        let (preds, queue) = search.into_data();
        self.preds = preds;
        self.queue = queue;
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
    pub fn mincut(&self) -> Vec<Vertex> {
        (0..self.graph.num_vertices()).filter(|&v| self.reachable(v)).collect()
    }

    /// Return the arcs crossing the minimal cut, with their original
    /// capacities.
    ///
    /// These are the original arcs whose tail is source-reachable in the
    /// final residual network and whose head is not. Their capacities sum
    /// to [`value`][EdmondsKarp::value].
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

/// Solve the max-flow problem using the algorithm of Edmonds-Karp.
///
/// The function computes the maximum flow from [`SOURCE`] to [`SINK`] of
/// the given network, consuming it.
///
/// It returns the flow value, the flow on each arc and the arcs of a
/// minimal cut with their capacities.
pub fn edmondskarp<F>(graph: FlowGraph<F>) -> (F, Vec<(Vertex, Vertex, F)>, Vec<(Vertex, Vertex, F)>)
where
    F: NumAssign + Ord + Copy,
{
    let mut maxflow = EdmondsKarp::new(graph);
    maxflow.solve();
    (maxflow.value(), maxflow.flows(), maxflow.mincut_edges())
}
