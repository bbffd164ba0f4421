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

//! # Traversals of the residual network.
//!
//! This module contains the searches used for augmenting-path discovery.
//! Both traversals visit only arcs of *positive* residual capacity and are
//! implemented as iterators producing `(vertex, predecessor)` pairs in the
//! order the vertices are discovered. A vertex is assigned at most one
//! predecessor and is never expanded a second time, hence a traversal
//! terminates on every finite network, cyclic or not.
//!
//! The caller decides when to stop: an augmenting-path search breaks off as
//! soon as the sink is produced, a reachability scan simply exhausts the
//! iterator. The predecessor map of a finished or interrupted traversal can
//! be turned into a path with [`path_from_preds`].

pub mod bfs;
pub mod dfs;

use crate::flowgraph::Vertex;

/// The predecessor map filled by a traversal.
///
/// `preds[v]` is the vertex from which `v` was discovered, or `None` if `v`
/// has not been discovered. The start vertex never receives a predecessor.
pub type PredMap = Vec<Option<Vertex>>;

/// Reconstruct the path from `src` to `snk` from a predecessor map.
///
/// The predecessors are walked backward from `snk` and the traversed
/// vertices are returned in path order `[src, .., snk]`.
///
/// # Panics
///
/// The function panics if the backward walk hits a vertex without a
/// predecessor before reaching `src`, i.e. if the search that filled
/// `preds` has not discovered `snk`.
///
/// # Example
///
/// ```
/// use rs_flow::search::{dfs, path_from_preds};
/// use rs_flow::{FlowGraph, SINK, SOURCE};
///
/// let mut g = FlowGraph::<i64>::with_vertices(4)?;
/// g.add_edge(SOURCE, 2, 3)?;
/// g.add_edge(2, 3, 2)?;
/// g.add_edge(3, SINK, 2)?;
///
/// let mut search = dfs::start(&g, SOURCE);
/// assert!(search.by_ref().any(|(v, _)| v == SINK));
/// assert_eq!(path_from_preds(search.preds(), SOURCE, SINK), vec![SOURCE, 2, 3, SINK]);
/// # Ok::<_, rs_flow::Error>(())
/// ```
pub fn path_from_preds(preds: &PredMap, src: Vertex, snk: Vertex) -> Vec<Vertex> {
    let mut path = vec![snk];
    let mut v = snk;
    while v != src {
        v = preds[v].unwrap_or_else(|| panic!("vertex {} has no predecessor on a path from {}", v, src));
        path.push(v);
    }
    path.reverse();
    path
}
