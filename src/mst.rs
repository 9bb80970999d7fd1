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

//! Minimum-spanning-tree algorithms.
//!
//! Both algorithms operate on undirected graphs, represented as twin
//! pairs of weighted edges. A tree edge is reported once, by the handle
//! of the pair member with the smaller id.

pub mod kruskal;
pub mod prim;

pub use self::kruskal::kruskal;
pub use self::prim::prim;

use crate::graph::{Edge, EdgeId};
use crate::num::traits::Float;

/// Whether `eid` is the representative of its twin pair.
///
/// Panics if the edge is directed.
pub(crate) fn is_representative<F>(eid: EdgeId, edge: &Edge<F>) -> bool
where
    F: Float,
{
    match edge.twin() {
        Some(twin) => eid < twin,
        None => panic!("edge {} is directed", eid),
    }
}
