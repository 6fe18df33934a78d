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

use fixedbitset::FixedBitSet;
use hashbrown::HashSet;
use indexmap::IndexSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::edge::{vertex_bound, Edge, Vertex};
use super::error::FlowError;

/// The unique source and sink of a validated network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Terminals {
    pub source: Vertex,
    pub sink: Vertex,
}

/// Check that `network` is a well-formed flow network on `num_vertices`
/// vertices and identify its source and sink.
///
/// The first violated condition is reported, in this order:
///
/// 1. `num_vertices < 2` ([`FlowError::TooFewVertices`])
/// 2. no edges ([`FlowError::TooFewEdges`])
/// 3. an edge of weight 0 ([`FlowError::ZeroWeightEdge`])
/// 4. an endpoint `>= num_vertices` ([`FlowError::InvalidEndpoint`])
/// 5. a self-loop ([`FlowError::SelfLoop`])
/// 6. two edges with the same `(from, to)` ([`FlowError::MultiEdge`])
/// 7. not exactly one vertex with outgoing but no incoming edges
///    ([`FlowError::InvalidSourceCount`])
/// 8. not exactly one vertex with incoming but no outgoing edges
///    ([`FlowError::InvalidSinkCount`])
///
/// Vertices that touch no edge are neither sources nor sinks.
pub fn validate_network(network: &[Edge], num_vertices: u32) -> Result<Terminals, FlowError> {
    if num_vertices < 2 {
        return Err(FlowError::TooFewVertices);
    }
    if network.is_empty() {
        return Err(FlowError::TooFewEdges);
    }
    if network.iter().any(|e| e.weight == 0) {
        return Err(FlowError::ZeroWeightEdge);
    }
    if network
        .iter()
        .any(|e| e.from >= num_vertices || e.to >= num_vertices)
    {
        return Err(FlowError::InvalidEndpoint);
    }
    if network.iter().any(|e| e.from == e.to) {
        return Err(FlowError::SelfLoop);
    }

    let mut seen: HashSet<(Vertex, Vertex)> = HashSet::with_capacity(network.len());
    if !network.iter().all(|e| seen.insert(e.endpoints())) {
        return Err(FlowError::MultiEdge);
    }

    // Endpoints are in range from here on; vertices above the largest one
    // touch nothing and need no slot.
    let n = vertex_bound(network);
    let mut has_incoming = FixedBitSet::with_capacity(n);
    let mut has_outgoing = FixedBitSet::with_capacity(n);
    for edge in network {
        has_outgoing.insert(edge.from as usize);
        has_incoming.insert(edge.to as usize);
    }

    let sources: IndexSet<Vertex> = network
        .iter()
        .map(|e| e.from)
        .filter(|v| !has_incoming.contains(*v as usize))
        .collect();
    let source = match sources.first() {
        Some(&source) if sources.len() == 1 => source,
        _ => return Err(FlowError::InvalidSourceCount),
    };

    let sinks: IndexSet<Vertex> = network
        .iter()
        .map(|e| e.to)
        .filter(|v| !has_outgoing.contains(*v as usize))
        .collect();
    let sink = match sinks.first() {
        Some(&sink) if sinks.len() == 1 => sink,
        _ => return Err(FlowError::InvalidSinkCount),
    };

    Ok(Terminals { source, sink })
}
