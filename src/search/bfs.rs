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

//! Breadth-first traversal of the residual network.
//!
//! The frontier is a queue, so vertices are discovered in order of their
//! hop distance from the start vertex. Used by the
//! [`edmondskarp`][crate::maxflow::edmondskarp] driver, whose augmenting
//! paths are therefore shortest-hop paths.
//!
//! # Example
//!
//! ```
//! use rs_flow::search::bfs;
//! use rs_flow::{FlowGraph, SINK, SOURCE};
//!
//! let mut g = FlowGraph::<i64>::with_vertices(4)?;
//! g.add_edge(SOURCE, 2, 1)?;
//! g.add_edge(2, 3, 1)?;
//! g.add_edge(3, SINK, 1)?;
//! g.add_edge(SOURCE, SINK, 1)?;
//!
//! // the sink is discovered over the direct arc first
//! let mut search = bfs::start(&g, SOURCE);
//! assert!(search.by_ref().any(|(v, _)| v == SINK));
//! assert_eq!(search.predecessor(SINK), Some(SOURCE));
//! # Ok::<_, rs_flow::Error>(())
//! ```

use super::PredMap;
use crate::flowgraph::{FlowGraph, OutIter, Vertex};
use crate::num::traits::NumAssign;

use std::collections::VecDeque;

/// Start a breadth-first traversal at `src` using fresh data structures.
pub fn start<F>(g: &FlowGraph<F>, src: Vertex) -> Bfs<'_, F>
where
    F: NumAssign + Ord + Copy,
{
    start_with_data(g, src, (PredMap::new(), VecDeque::new()))
}

/// Start a breadth-first traversal at `src` reusing the given data structures.
///
/// `data` is a pair of a predecessor map and a frontier queue, usually taken
/// from an earlier traversal via [`Bfs::into_data`]. Both are reset before
/// use.
pub fn start_with_data<F>(g: &FlowGraph<F>, src: Vertex, data: (PredMap, VecDeque<Vertex>)) -> Bfs<'_, F>
where
    F: NumAssign + Ord + Copy,
{
    let (mut preds, mut queue) = data;
    preds.clear();
    preds.resize(g.num_vertices(), None);
    queue.clear();
    queue.push_back(src);

    Bfs {
        g,
        src,
        preds,
        queue,
        cur: None,
    }
}

/// The breadth-first traversal iterator.
///
/// Produces `(vertex, predecessor)` pairs in discovery order. The start
/// vertex is *not* produced.
pub struct Bfs<'a, F> {
    g: &'a FlowGraph<F>,
    src: Vertex,
    preds: PredMap,
    queue: VecDeque<Vertex>,
    /// The vertex currently being expanded and its remaining arcs.
    cur: Option<(Vertex, OutIter<'a, F>)>,
}

impl<'a, F> Iterator for Bfs<'a, F>
where
    F: NumAssign + Ord + Copy,
{
    type Item = (Vertex, Vertex);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((u, it)) = &mut self.cur {
                let u = *u;
                for (v, upper) in it {
                    if upper > F::zero() && v != self.src && self.preds[v].is_none() {
                        self.preds[v] = Some(u);
                        self.queue.push_back(v);
                        return Some((v, u));
                    }
                }
                self.cur = None;
            }
            match self.queue.pop_front() {
                Some(u) => self.cur = Some((u, self.g.outedges(u))),
                None => return None,
            }
        }
    }
}

impl<'a, F> Bfs<'a, F>
where
    F: NumAssign + Ord + Copy,
{
    /// Run the traversal to completion.
    ///
    /// Afterwards the predecessor map covers every vertex reachable from the
    /// start vertex through arcs of positive residual capacity.
    pub fn run(&mut self) {
        while self.next().is_some() {}
    }

    /// Return the predecessor of a vertex.
    pub fn predecessor(&self, v: Vertex) -> Option<Vertex> {
        self.preds[v]
    }

    /// Return the predecessor map.
    pub fn preds(&self) -> &PredMap {
        &self.preds
    }

    /// Return the data structures used by the traversal.
    pub fn into_data(self) -> (PredMap, VecDeque<Vertex>) {
        (self.preds, self.queue)
    }
}
