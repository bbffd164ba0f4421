// Copyright (c) 2022, 2023 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! A library for maximum-flow and minimum-cut computations on directed
//! networks.
//!
//! A network is a [`FlowGraph`]: vertices are plain indices, vertex
//! [`SOURCE`] (0) is the source and vertex [`SINK`] (1) the sink, and each
//! ordered vertex pair carries at most one arc with a non-negative residual
//! capacity. The solvers in [`maxflow`] push flow along augmenting paths by
//! subtracting it from the arcs in place until source and sink are
//! separated; the network is consumed in the process.
//!
//! ```
//! use rs_flow::maxflow::fordfulkerson;
//! use rs_flow::{FlowGraph, SINK, SOURCE};
//!
//! let mut g = FlowGraph::<i64>::with_vertices(4)?;
//! g.add_edge(SOURCE, 2, 3)?;
//! g.add_edge(2, SINK, 2)?;
//! g.add_edge(SOURCE, SINK, 1)?;
//!
//! let (value, _, mincut) = fordfulkerson(g);
//! assert_eq!(value, 3);
//! assert_eq!(mincut.iter().map(|&(_, _, c)| c).sum::<i64>(), value);
//! # Ok::<_, rs_flow::Error>(())
//! ```

mod num {
    pub use num_traits as traits;
}

// # Data structures

pub mod flowgraph;
pub use self::flowgraph::{Arc, Error, FlowGraph, Result, Vertex};
pub use self::flowgraph::{SINK, SOURCE};

/// The default network type.
///
/// A flow network with signed 64-bit capacities.
pub type Net = self::FlowGraph<i64>;

// # Algorithms

pub mod maxflow;
pub mod search;

#[cfg(any(feature = "dimacs"))]
pub mod dimacs;
