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

//! # Maximum-flow algorithms.
//!
//! Both solvers repeat the same loop until no augmenting path remains:
//! search for a path from [`SOURCE`][crate::SOURCE] to
//! [`SINK`][crate::SINK] over arcs of positive residual capacity, determine
//! the bottleneck capacity of the path, subtract it from every arc on the
//! path and add it to the total flow. They differ only in the traversal
//! used for path discovery:
//!
//! - [`fordfulkerson`] augments along depth-first paths,
//! - [`edmondskarp`] augments along shortest (breadth-first) paths.
//!
//! The flow values produced by the two are equal, the search order affects
//! the number of augmentation rounds only.
//!
//! Solving is destructive: a solver takes ownership of the network and
//! consumes its arc capacities, leaving the final residual network behind.
//! After the terminal search both solvers also know the minimal cut, the
//! arcs from the source-reachable part of the residual network into the
//! rest; their original capacities sum to the flow value.

pub mod edmondskarp;
pub mod fordfulkerson;

pub use self::edmondskarp::{edmondskarp, EdmondsKarp};
pub use self::fordfulkerson::{fordfulkerson, FordFulkerson};
