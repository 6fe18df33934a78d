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

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use hashbrown::HashSet;
use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::edge::{Edge, Vertex};
use super::error::FlowError;
use super::residual::{augment, FlowAssignment, ResidualGraph};
use super::validate::{validate_network, Terminals};

/// Settings for [`max_flow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlowOptions {
    /// Leave edges that carry no flow out of the result.
    pub omit_zero_flow: bool,
    /// Report the source side of a minimum cut.
    pub compute_min_cut: bool,
}

impl Default for FlowOptions {
    fn default() -> Self {
        FlowOptions {
            omit_zero_flow: false,
            compute_min_cut: true,
        }
    }
}

impl FlowOptions {
    pub fn with_omit_zero_flow(mut self, omit_zero_flow: bool) -> Self {
        self.omit_zero_flow = omit_zero_flow;
        self
    }

    pub fn with_min_cut(mut self, compute_min_cut: bool) -> Self {
        self.compute_min_cut = compute_min_cut;
        self
    }
}

/// The return type for [`max_flow`].
///
/// * `value` - the total flow leaving the source
/// * `source`, `sink` - the terminals found while validating the network
/// * `flow_edges` - one edge per input edge, in input order, whose weight is
///     the flow it carries (zero-flow edges are dropped when
///     [`FlowOptions::omit_zero_flow`] is set)
/// * `min_cut` - the vertices on the source side of a minimum cut, ascending
///     (empty unless [`FlowOptions::compute_min_cut`] is set)
/// * `augmentations` - how many augmenting paths were used
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaxFlowReturn {
    pub value: u64,
    pub source: Vertex,
    pub sink: Vertex,
    pub flow_edges: Vec<Edge>,
    pub min_cut: Vec<Vertex>,
    pub augmentations: usize,
}

impl MaxFlowReturn {
    /// Total capacity of the edges of `network` leaving the `min_cut` side.
    ///
    /// For a maximum flow this equals `value`.
    pub fn cut_capacity(&self, network: &[Edge]) -> u64 {
        let side: HashSet<Vertex> = self.min_cut.iter().copied().collect();
        network
            .iter()
            .filter(|e| side.contains(&e.from) && !side.contains(&e.to))
            .map(|e| u64::from(e.weight))
            .sum()
    }
}

/// Breadth-first search tree of a residual graph rooted at the source.
///
/// Only vertices discovered before the search reached the sink have a
/// predecessor.
#[derive(Debug, Clone)]
pub struct Predecessors {
    pred: Vec<Option<Vertex>>,
    source: Vertex,
    sink: Vertex,
}

impl Predecessors {
    /// The vertex `vertex` was discovered from.
    pub fn predecessor(&self, vertex: Vertex) -> Option<Vertex> {
        self.pred.get(vertex as usize).copied().flatten()
    }

    /// Arcs of the source-sink path, walking back from the sink.
    pub fn arcs(&self) -> PathArcs<'_> {
        PathArcs {
            pred: &self.pred,
            current: self.sink,
            source: self.source,
        }
    }

    /// Vertices of the path from source to sink.
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut path: Vec<Vertex> = self.arcs().map(|(from, _)| from).collect();
        path.reverse();
        path.push(self.sink);
        path
    }
}

/// Iterator over the arcs `(from, to)` of an augmenting path, from the sink
/// back to the source.
pub struct PathArcs<'a> {
    pred: &'a [Option<Vertex>],
    current: Vertex,
    source: Vertex,
}

impl Iterator for PathArcs<'_> {
    type Item = (Vertex, Vertex);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == self.source {
            return None;
        }
        let to = self.current;
        let from = (*self.pred.get(to as usize)?)?;
        self.current = from;
        Some((from, to))
    }
}

/// Find a shortest path (by edge count) from `source` to `sink` over arcs
/// with residual capacity left.
///
/// Vertices are expanded first in, first out, and the arcs of a vertex are
/// scanned in the order they were added to `residual`, so ties go to the
/// arc added first. The search stops as soon as the sink is discovered.
/// Returns `None` if the sink cannot be reached.
pub fn find_augmenting_path(
    residual: &ResidualGraph,
    source: Vertex,
    sink: Vertex,
) -> Option<Predecessors> {
    let num_nodes = residual.node_count();
    if source as usize >= num_nodes || sink as usize >= num_nodes {
        return None;
    }

    let mut pred = vec![None; num_nodes];
    let mut discovered = FixedBitSet::with_capacity(num_nodes);
    discovered.insert(source as usize);
    let mut queue = VecDeque::from([source]);

    while let Some(vertex) = queue.pop_front() {
        for (succ, capacity) in residual.outgoing(vertex) {
            if capacity == 0 || discovered.put(succ as usize) {
                continue;
            }
            pred[succ as usize] = Some(vertex);
            if succ == sink {
                return Some(Predecessors { pred, source, sink });
            }
            queue.push_back(succ);
        }
    }

    None
}

/// Compute a maximum flow of `network` with the Edmonds-Karp algorithm.
///
/// The network is validated first (see
/// [`validate_network`](crate::flow::validate_network)) and any violation is
/// returned unchanged. Otherwise shortest augmenting paths are pushed until
/// the sink is unreachable in the residual graph.
///
/// # Example
/// ```rust
/// use netflow_core::flow::{max_flow, Edge, FlowOptions};
///
/// let network = vec![
///     Edge::new(0, 1, 10),
///     Edge::new(0, 2, 10),
///     Edge::new(1, 3, 4),
///     Edge::new(2, 3, 10),
/// ];
/// let res = max_flow(&network, 4, &FlowOptions::default()).unwrap();
/// assert_eq!(res.value, 14);
/// assert_eq!(res.min_cut, vec![0, 1]);
/// ```
pub fn max_flow(
    network: &[Edge],
    num_vertices: u32,
    options: &FlowOptions,
) -> Result<MaxFlowReturn, FlowError> {
    let Terminals { source, sink } = validate_network(network, num_vertices)?;
    debug!(
        "solving {} vertices, {} edges, source {}, sink {}",
        num_vertices,
        network.len(),
        source,
        sink
    );

    let mut residual = ResidualGraph::new(network);
    let mut flow = FlowAssignment::new(network);
    let mut value: u64 = 0;
    let mut augmentations = 0;

    while let Some(path) = find_augmenting_path(&residual, source, sink) {
        let pushed = augment(&mut residual, &mut flow, &path);
        trace!(
            "augmenting path of {} edges, bottleneck {}",
            path.arcs().count(),
            pushed
        );
        value += pushed;
        augmentations += 1;
    }

    let min_cut = if options.compute_min_cut {
        residual.reachable_from(source)
    } else {
        Vec::new()
    };
    debug!("max flow {} after {} augmentations", value, augmentations);

    Ok(MaxFlowReturn {
        value,
        source,
        sink,
        flow_edges: flow.into_edges(options.omit_zero_flow),
        min_cut,
        augmentations,
    })
}

/// Compute a maximum flow of `network` on `num_vertices` vertices.
///
/// Returns one edge per input edge, in input order, carrying the flow
/// assigned to it (possibly 0). Fails with the first [`FlowError`] the
/// network triggers; no flow is computed in that case.
pub fn solve_network_flow(network: &[Edge], num_vertices: u32) -> Result<Vec<Edge>, FlowError> {
    let options = FlowOptions::default().with_min_cut(false);
    max_flow(network, num_vertices, &options).map(|res| res.flow_edges)
}
