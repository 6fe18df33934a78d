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

/// Reasons a flow network is rejected before any flow is computed.
///
/// Validation stops at the first violated condition, checked in the order
/// the variants are declared here. The `Display` text of each kind is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum FlowError {
    /// Fewer than two vertices were declared.
    #[error("Too few vertices.")]
    TooFewVertices,

    /// The network has no edges.
    #[error("Too few edges.")]
    TooFewEdges,

    /// Some edge has capacity 0.
    #[error("Detected edge weight of 0.")]
    ZeroWeightEdge,

    /// Some edge touches a vertex outside `0..num_vertices`.
    #[error("Edge interacts with nonexistent vertex.")]
    InvalidEndpoint,

    /// Some edge starts and ends at the same vertex.
    #[error("At least one self-loop.")]
    SelfLoop,

    /// Two edges share the same `(from, to)` pair.
    #[error("Detected multi-edges.")]
    MultiEdge,

    /// Not exactly one vertex lacks incoming edges.
    #[error("Zero or more than one source.")]
    InvalidSourceCount,

    /// Not exactly one vertex lacks outgoing edges.
    #[error("Zero or more than one sink.")]
    InvalidSinkCount,
}
