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

//! Depth-first traversal of the residual network.
//!
//! The frontier is an explicit stack. Each popped vertex is scanned for
//! outgoing arcs with positive residual capacity; every head vertex that has
//! no predecessor yet is assigned one and pushed. This is the traversal the
//! [`fordfulkerson`][crate::maxflow::fordfulkerson] driver uses for
//! augmenting-path discovery. Paths found this way are not shortest-hop
//! paths, which affects the number of augmentation rounds, not the flow
//! value.
//!
//! # Example
//!
//! ```
//! use rs_flow::search::dfs;
//! use rs_flow::{FlowGraph, SOURCE};
//!
//! let mut g = FlowGraph::<i64>::with_vertices(5)?;
//! g.add_edge(SOURCE, 2, 1)?;
//! g.add_edge(2, 3, 1)?;
//! g.add_edge(3, 2, 1)?;
//! g.add_edge(2, 4, 0)?;
//!
//! // the cycle 2 -> 3 -> 2 is harmless, the zero arc to 4 is not traversed
//! let visited: Vec<_> = dfs::start(&g, SOURCE).map(|(v, _)| v).collect();
//! assert_eq!(visited, vec![2, 3]);
//! # Ok::<_, rs_flow::Error>(())
//! ```

use super::PredMap;
use crate::flowgraph::{FlowGraph, OutIter, Vertex};
use crate::num::traits::NumAssign;

/// Start a depth-first traversal at `src` using fresh data structures.
pub fn start<F>(g: &FlowGraph<F>, src: Vertex) -> Dfs<'_, F>
where
    F: NumAssign + Ord + Copy,
{
    start_with_data(g, src, (PredMap::new(), Vec::new()))
}

/// Start a depth-first traversal at `src` reusing the given data structures.
///
/// `data` is a pair of a predecessor map and a frontier stack, usually taken
/// from an earlier traversal via [`Dfs::into_data`]. Both are reset before
/// use.
pub fn start_with_data<F>(g: &FlowGraph<F>, src: Vertex, data: (PredMap, Vec<Vertex>)) -> Dfs<'_, F>
where
    F: NumAssign + Ord + Copy,
{
    let (mut preds, mut stack) = data;
    preds.clear();
    preds.resize(g.num_vertices(), None);
    stack.clear();
    stack.push(src);

    Dfs {
        g,
        src,
        preds,
        stack,
        cur: None,
    }
}

/// The depth-first traversal iterator.
///
/// Produces `(vertex, predecessor)` pairs in discovery order. The start
/// vertex is *not* produced.
pub struct Dfs<'a, F> {
    g: &'a FlowGraph<F>,
    src: Vertex,
    preds: PredMap,
    stack: Vec<Vertex>,
    /// The vertex currently being expanded and its remaining arcs.
    cur: Option<(Vertex, OutIter<'a, F>)>,
}

impl<'a, F> Iterator for Dfs<'a, F>
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
                        self.stack.push(v);
                        return Some((v, u));
                    }
                }
                self.cur = None;
            }
            match self.stack.pop() {
                Some(u) => self.cur = Some((u, self.g.outedges(u))),
                None => return None,
            }
        }
    }
}

impl<'a, F> Dfs<'a, F>
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
    pub fn into_data(self) -> (PredMap, Vec<Vertex>) {
        (self.preds, self.stack)
    }
}
