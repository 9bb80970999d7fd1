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

//! Graph search algorithms.
//!
//! The searches are implemented as iterators producing the visited
//! vertices, each together with the edge over which it was reached, in
//! the order of the particular strategy. The start vertex itself is not
//! produced. Traversal follows outgoing edges only; an undirected edge
//! is traversable in both directions through its twin.

pub mod bfs;
pub mod dfs;
