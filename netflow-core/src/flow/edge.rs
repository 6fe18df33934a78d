// Licensed under the Apache License, Version 2.0 (the "License"); you may
// not use this file except in compliance with the License. You may obtain
// a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations
// under the License.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a vertex. Vertices of a network with `n` vertices are
/// numbered `0..n`.
pub type Vertex = u32;

/// Capacity of an input edge, or the flow carried by an edge of a result.
pub type Capacity = u32;

/// A directed, weighted arc `from -> to`.
///
/// In an input network `weight` is the capacity of the arc. In a flow
/// returned by [`solve_network_flow`](crate::flow::solve_network_flow) it is
/// the net flow pushed along the arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    pub from: Vertex,
    pub to: Vertex,
    pub weight: Capacity,
}

impl Edge {
    pub fn new(from: Vertex, to: Vertex, weight: Capacity) -> Self {
        Edge { from, to, weight }
    }

    /// The `(from, to)` pair identifying this arc.
    #[inline]
    pub fn endpoints(&self) -> (Vertex, Vertex) {
        (self.from, self.to)
    }
}

impl From<(Vertex, Vertex, Capacity)> for Edge {
    fn from((from, to, weight): (Vertex, Vertex, Capacity)) -> Self {
        Edge::new(from, to, weight)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.weight)
    }
}

/// Total flow leaving `source` in a flow returned by the solver.
pub fn flow_value(flow: &[Edge], source: Vertex) -> u64 {
    flow.iter()
        .filter(|e| e.from == source)
        .map(|e| u64::from(e.weight))
        .sum()
}

/// One past the largest vertex touching an edge of `network`.
pub(crate) fn vertex_bound(network: &[Edge]) -> usize {
    network
        .iter()
        .map(|e| e.from.max(e.to) as usize + 1)
        .max()
        .unwrap_or(0)
}
