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

//! The residual network data structure.
//!
//! A [`FlowGraph`] is a directed graph over vertices `0..n` with one arc
//! capacity per ordered vertex pair. Vertex [`SOURCE`] is the designated
//! source, vertex [`SINK`] the designated sink. The capacities are *residual*
//! capacities: the solvers in [`maxflow`][crate::maxflow] subtract pushed
//! flow from the arcs in place and drop arcs that become saturated, so after
//! solving the network is left in its final residual state. Callers that
//! need the original capacities afterwards should `clone` the network before
//! handing it to a solver.
//!
//! # Example
//!
//! ```
//! use rs_flow::{FlowGraph, SINK, SOURCE};
//!
//! let mut g = FlowGraph::<i64>::with_vertices(4)?;
//! g.add_edge(SOURCE, 2, 3)?;
//! g.add_edge(2, SINK, 2)?;
//! g.add_edge(SOURCE, SINK, 1)?;
//!
//! assert_eq!(g.num_vertices(), 4);
//! assert_eq!(g.num_edges(), 3);
//! assert_eq!(g.residual(SOURCE, 2), Some(3));
//!
//! // push two units along SOURCE -> 2 -> SINK
//! g.augment(&[SOURCE, 2, SINK], 2);
//! assert_eq!(g.residual(SOURCE, 2), Some(1));
//! // the saturated arc has been removed
//! assert_eq!(g.residual(2, SINK), None);
//! assert_eq!(g.num_edges(), 2);
//! # Ok::<_, rs_flow::Error>(())
//! ```

use crate::num::traits::NumAssign;

use std::error;
use std::fmt;
use std::slice::Iter as SliceIter;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A vertex of a flow network.
///
/// This is a plain index in `0..n`.
pub type Vertex = usize;

/// The designated source vertex of every flow network.
pub const SOURCE: Vertex = 0;

/// The designated sink vertex of every flow network.
pub const SINK: Vertex = 1;

/// Error constructing a flow network.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The network would contain fewer than two vertices.
    InvalidVertexCount(usize),
    /// A vertex index is not in `0..n`.
    VertexOutOfRange { vertex: Vertex, nvertices: usize },
    /// An arc capacity is negative.
    NegativeCapacity { src: Vertex, snk: Vertex },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::Error::*;
        match self {
            InvalidVertexCount(n) => write!(
                fmt,
                "invalid vertex count {}, a network contains at least a source and a sink",
                n
            ),
            VertexOutOfRange { vertex, nvertices } => {
                write!(fmt, "vertex {} out of range (must be in 0..{})", vertex, nvertices)
            }
            NegativeCapacity { src, snk } => write!(fmt, "negative capacity on arc ({},{})", src, snk),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

/// An arc of a flow network.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Arc<F> {
    snk: Vertex,
    upper: F,
}

impl<F> Arc<F>
where
    F: Copy,
{
    /// Return the head vertex of the arc.
    pub fn snk(&self) -> Vertex {
        self.snk
    }

    /// Return the residual capacity of the arc.
    pub fn upper(&self) -> F {
        self.upper
    }
}

/// A directed network with residual arc capacities.
///
/// The outgoing arcs of each vertex are kept in insertion order. At most one
/// arc connects an ordered pair of vertices, because [`add_edge`][FlowGraph::add_edge]
/// merges parallel arcs by adding their capacities. All capacities are
/// non-negative; an arc whose residual capacity reaches exactly zero during
/// [`augment`][FlowGraph::augment] is removed from the network, so
/// zero-capacity arcs are never traversable.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct FlowGraph<F> {
    /// The outgoing arcs of each vertex.
    outarcs: Vec<Vec<Arc<F>>>,
    /// The number of arcs in the network.
    nedges: usize,
}

impl<F> FlowGraph<F>
where
    F: NumAssign + Ord + Copy,
{
    /// Create a network with `n` vertices and no arcs.
    ///
    /// Fails with [`Error::InvalidVertexCount`] unless `n >= 2` (the network
    /// contains at least the source and the sink).
    pub fn with_vertices(n: usize) -> Result<Self> {
        if n < 2 {
            return Err(Error::InvalidVertexCount(n));
        }
        Ok(FlowGraph {
            outarcs: vec![vec![]; n],
            nedges: 0,
        })
    }

    /// Return the number of vertices in the network.
    pub fn num_vertices(&self) -> usize {
        self.outarcs.len()
    }

    /// Return the number of arcs in the network.
    pub fn num_edges(&self) -> usize {
        self.nedges
    }

    /// Add an arc from `u` to `v` with capacity `upper`.
    ///
    /// If an arc from `u` to `v` already exists, the capacities are merged
    /// by addition. An arc with capacity zero is legal but useless: it can
    /// never be traversed. No reverse arc is created; callers that want
    /// flow cancellation through reverse arcs must add them explicitly.
    ///
    /// The vertex indices and the sign of the capacity are validated before
    /// the network is touched.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex, upper: F) -> Result<()> {
        let n = self.num_vertices();
        if u >= n {
            return Err(Error::VertexOutOfRange { vertex: u, nvertices: n });
        }
        if v >= n {
            return Err(Error::VertexOutOfRange { vertex: v, nvertices: n });
        }
        if upper < F::zero() {
            return Err(Error::NegativeCapacity { src: u, snk: v });
        }
        if let Some(arc) = self.outarcs[u].iter_mut().find(|a| a.snk == v) {
            arc.upper += upper;
        } else {
            self.outarcs[u].push(Arc { snk: v, upper });
            self.nedges += 1;
        }
        Ok(())
    }

    /// Return the residual capacity of the arc from `u` to `v` or `None` if
    /// the network contains no such arc.
    ///
    /// # Panics
    ///
    /// The method panics if `u` is not a vertex.
    pub fn residual(&self, u: Vertex, v: Vertex) -> Option<F> {
        self.outarcs[u].iter().find(|a| a.snk == v).map(|a| a.upper)
    }

    /// Return an iterator over the outgoing arcs of `u` as `(head, capacity)`
    /// pairs in insertion order.
    ///
    /// # Panics
    ///
    /// The method panics if `u` is not a vertex.
    pub fn outedges(&self, u: Vertex) -> OutIter<'_, F> {
        OutIter(self.outarcs[u].iter())
    }

    /// Return an iterator over all arcs as `(tail, head, capacity)` triples.
    pub fn arcs(&self) -> impl Iterator<Item = (Vertex, Vertex, F)> + '_ {
        self.outarcs
            .iter()
            .enumerate()
            .flat_map(|(u, arcs)| arcs.iter().map(move |a| (u, a.snk, a.upper)))
    }

    /// Subtract `df` from every arc along `path`.
    ///
    /// `path` is a sequence of vertices; each consecutive pair must be
    /// connected by an arc with residual capacity at least `df`. Arcs whose
    /// residual capacity reaches exactly zero are removed from the network.
    ///
    /// # Panics
    ///
    /// The whole path is verified before any arc is changed. A missing arc
    /// or a residual capacity below `df` means the caller's bookkeeping
    /// disagrees with the network. That is a bug, not bad input, and the
    /// method panics rather than leaving the network half-updated.
    pub fn augment(&mut self, path: &[Vertex], df: F) {
        assert!(df > F::zero(), "augmentation by a non-positive amount");

        for w in path.windows(2) {
            let upper = self
                .residual(w[0], w[1])
                .unwrap_or_else(|| panic!("no arc ({},{}) in the network", w[0], w[1]));
            assert!(
                upper >= df,
                "augmentation exceeds the residual capacity of arc ({},{})",
                w[0],
                w[1]
            );
        }

        for w in path.windows(2) {
            let arcs = &mut self.outarcs[w[0]];
            // the position exists, it was checked above
            let i = arcs.iter().position(|a| a.snk == w[1]).unwrap();
            arcs[i].upper -= df;
            if arcs[i].upper.is_zero() {
                arcs.remove(i);
                self.nedges -= 1;
            }
        }
    }
}

/// An iterator over the outgoing arcs of a vertex.
#[derive(Clone)]
pub struct OutIter<'a, F>(SliceIter<'a, Arc<F>>);

impl<'a, F> Iterator for OutIter<'a, F>
where
    F: Copy,
{
    type Item = (Vertex, F);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|a| (a.snk, a.upper))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, FlowGraph, SINK, SOURCE};

    #[test]
    fn test_too_few_vertices() {
        assert_eq!(
            FlowGraph::<i32>::with_vertices(0).unwrap_err(),
            Error::InvalidVertexCount(0)
        );
        assert_eq!(
            FlowGraph::<i32>::with_vertices(1).unwrap_err(),
            Error::InvalidVertexCount(1)
        );
        assert!(FlowGraph::<i32>::with_vertices(2).is_ok());
    }

    #[test]
    fn test_add_edge_preconditions() {
        let mut g = FlowGraph::with_vertices(3).unwrap();
        assert_eq!(
            g.add_edge(0, 3, 1),
            Err(Error::VertexOutOfRange { vertex: 3, nvertices: 3 })
        );
        assert_eq!(
            g.add_edge(7, 1, 1),
            Err(Error::VertexOutOfRange { vertex: 7, nvertices: 3 })
        );
        assert_eq!(g.add_edge(0, 2, -4), Err(Error::NegativeCapacity { src: 0, snk: 2 }));
        // nothing was added
        assert_eq!(g.num_edges(), 0);
        assert!(g.add_edge(0, 2, 4).is_ok());
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn test_parallel_arcs_are_merged() {
        let mut g = FlowGraph::with_vertices(2).unwrap();
        g.add_edge(SOURCE, SINK, 2).unwrap();
        g.add_edge(SOURCE, SINK, 3).unwrap();
        assert_eq!(g.num_edges(), 1);
        assert_eq!(g.residual(SOURCE, SINK), Some(5));
    }

    #[test]
    fn test_outedges_order() {
        let mut g = FlowGraph::with_vertices(4).unwrap();
        g.add_edge(0, 2, 5).unwrap();
        g.add_edge(0, 3, 1).unwrap();
        g.add_edge(0, 1, 2).unwrap();
        assert_eq!(g.outedges(0).collect::<Vec<_>>(), vec![(2, 5), (3, 1), (1, 2)]);
        assert_eq!(g.outedges(1).count(), 0);
        assert_eq!(
            g.arcs().collect::<Vec<_>>(),
            vec![(0, 2, 5), (0, 3, 1), (0, 1, 2)]
        );
    }

    #[test]
    fn test_augment_removes_saturated_arcs() {
        let mut g = FlowGraph::with_vertices(4).unwrap();
        g.add_edge(0, 2, 3).unwrap();
        g.add_edge(2, 3, 2).unwrap();
        g.add_edge(3, 1, 2).unwrap();
        g.augment(&[0, 2, 3, 1], 2);
        assert_eq!(g.residual(0, 2), Some(1));
        assert_eq!(g.residual(2, 3), None);
        assert_eq!(g.residual(3, 1), None);
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    #[should_panic(expected = "no arc (2,1) in the network")]
    fn test_augment_missing_arc() {
        let mut g = FlowGraph::with_vertices(3).unwrap();
        g.add_edge(0, 2, 3).unwrap();
        g.augment(&[0, 2, 1], 1);
    }

    #[test]
    #[should_panic(expected = "exceeds the residual capacity")]
    fn test_augment_exceeds_capacity() {
        let mut g = FlowGraph::with_vertices(2).unwrap();
        g.add_edge(SOURCE, SINK, 3).unwrap();
        g.augment(&[SOURCE, SINK], 4);
    }

    #[test]
    fn test_augment_checks_before_acting() {
        let mut g = FlowGraph::with_vertices(4).unwrap();
        g.add_edge(0, 2, 5).unwrap();
        g.add_edge(2, 3, 1).unwrap();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            g.augment(&[0, 2, 3, 1], 1);
        }));
        assert!(result.is_err());
        // the first arc of the path was not touched
        assert_eq!(g.residual(0, 2), Some(5));
        assert_eq!(g.residual(2, 3), Some(1));
    }

    #[cfg(feature = "serialize")]
    mod serialize {
        use super::FlowGraph;

        #[test]
        fn test_serde() {
            let mut g = FlowGraph::<i64>::with_vertices(4).unwrap();
            g.add_edge(0, 2, 3).unwrap();
            g.add_edge(2, 1, 2).unwrap();
            g.add_edge(0, 1, 1).unwrap();

            let serialized = serde_json::to_string(&g).unwrap();
            let h: FlowGraph<i64> = serde_json::from_str(&serialized).unwrap();

            assert_eq!(g.num_vertices(), h.num_vertices());
            assert_eq!(g.num_edges(), h.num_edges());
            assert_eq!(g.arcs().collect::<Vec<_>>(), h.arcs().collect::<Vec<_>>());
        }
    }
}
