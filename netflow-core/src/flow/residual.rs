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
use hashbrown::HashMap;
use log::trace;

use super::edge::{vertex_bound, Capacity, Edge, Vertex};
use super::edmonds_karp::Predecessors;

#[derive(Debug, Clone, Copy)]
struct ResidualArc {
    from: Vertex,
    to: Vertex,
    capacity: u64,
}

/// Remaining capacity of a network while flow is pushed through it.
///
/// Arcs live in an append-only arena. Every vertex keeps the indices of its
/// outgoing arcs in insertion order, so a scan of `outgoing(v)` visits arcs
/// in the same order they were added. Reverse arcs are appended the first
/// time flow is pushed over their forward twin and are never removed, even
/// once their capacity drops back to 0.
#[derive(Debug, Clone)]
pub struct ResidualGraph {
    arcs: Vec<ResidualArc>,
    outgoing: Vec<Vec<usize>>,
    arc_map: HashMap<(Vertex, Vertex), usize>,
}

impl ResidualGraph {
    /// Build the initial residual graph: a copy of `network`.
    ///
    /// `network` must have passed
    /// [`validate_network`](crate::flow::validate_network). Only vertices up
    /// to the largest endpoint get an adjacency list.
    pub fn new(network: &[Edge]) -> Self {
        let mut residual = ResidualGraph {
            arcs: Vec::with_capacity(network.len() * 2),
            outgoing: vec![Vec::new(); vertex_bound(network)],
            arc_map: HashMap::with_capacity(network.len() * 2),
        };
        for edge in network {
            residual.add_arc(edge.from, edge.to, u64::from(edge.weight));
        }
        residual
    }

    fn add_arc(&mut self, from: Vertex, to: Vertex, capacity: u64) -> usize {
        let index = self.arcs.len();
        self.arcs.push(ResidualArc { from, to, capacity });
        self.outgoing[from as usize].push(index);
        self.arc_map.insert((from, to), index);
        index
    }

    pub fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    /// Number of arcs, including reverse arcs created so far.
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Residual capacity of the arc `from -> to`, if the arc exists.
    pub fn residual_capacity(&self, from: Vertex, to: Vertex) -> Option<u64> {
        self.arc_map
            .get(&(from, to))
            .map(|&index| self.arcs[index].capacity)
    }

    /// Arcs leaving `vertex` as `(target, residual capacity)`, in the order
    /// they were added. Arcs with no capacity left are included.
    pub fn outgoing(&self, vertex: Vertex) -> impl Iterator<Item = (Vertex, u64)> + '_ {
        self.outgoing
            .get(vertex as usize)
            .into_iter()
            .flatten()
            .map(move |&index| {
                let arc = &self.arcs[index];
                (arc.to, arc.capacity)
            })
    }

    /// Every arc of the arena as `(from, to, residual capacity)`.
    pub fn arcs(&self) -> impl Iterator<Item = (Vertex, Vertex, u64)> + '_ {
        self.arcs.iter().map(|arc| (arc.from, arc.to, arc.capacity))
    }

    /// Smallest residual capacity along the path stored in `path`.
    pub fn bottleneck(&self, path: &Predecessors) -> u64 {
        path.arcs()
            .filter_map(|(from, to)| self.residual_capacity(from, to))
            .min()
            .unwrap_or(0)
    }

    /// Move `amount` units of capacity from `from -> to` onto its reverse
    /// arc, creating the reverse arc if it does not exist yet.
    fn push(&mut self, from: Vertex, to: Vertex, amount: u64) {
        if let Some(&index) = self.arc_map.get(&(from, to)) {
            let arc = &mut self.arcs[index];
            arc.capacity = arc.capacity.saturating_sub(amount);
        }
        match self.arc_map.get(&(to, from)) {
            Some(&index) => self.arcs[index].capacity += amount,
            None => {
                trace!("creating reverse arc {} -> {} ({})", to, from, amount);
                self.add_arc(to, from, amount);
            }
        }
    }

    /// Vertices reachable from `source` over arcs with capacity left, in
    /// ascending order.
    ///
    /// Once no augmenting path exists this is the source side of a minimum
    /// cut.
    pub fn reachable_from(&self, source: Vertex) -> Vec<Vertex> {
        let mut seen = FixedBitSet::with_capacity(self.node_count());
        if (source as usize) >= self.node_count() {
            return Vec::new();
        }
        seen.insert(source as usize);
        let mut queue = VecDeque::from([source]);
        while let Some(vertex) = queue.pop_front() {
            for (succ, capacity) in self.outgoing(vertex) {
                if capacity > 0 && !seen.put(succ as usize) {
                    queue.push_back(succ);
                }
            }
        }
        seen.ones().map(|v| v as Vertex).collect()
    }
}

/// Net flow on each input edge, kept parallel to the input network.
#[derive(Debug, Clone)]
pub struct FlowAssignment {
    edges: Vec<(Vertex, Vertex)>,
    flow: Vec<u64>,
    edge_map: HashMap<(Vertex, Vertex), usize>,
}

impl FlowAssignment {
    /// Zero flow on every edge of `network`.
    pub fn new(network: &[Edge]) -> Self {
        let edges: Vec<(Vertex, Vertex)> = network.iter().map(Edge::endpoints).collect();
        let edge_map = edges
            .iter()
            .enumerate()
            .map(|(index, &arc)| (arc, index))
            .collect();
        FlowAssignment {
            flow: vec![0; edges.len()],
            edges,
            edge_map,
        }
    }

    /// Flow currently recorded on the input edge `from -> to`.
    pub fn flow(&self, from: Vertex, to: Vertex) -> Option<u64> {
        self.edge_map.get(&(from, to)).map(|&index| self.flow[index])
    }

    /// Record `amount` units travelling from `from` to `to`.
    ///
    /// Flow already sent the opposite way on the input edge `to -> from` is
    /// cancelled first; whatever is left is added to `from -> to`. Unless the
    /// input holds both `from -> to` and `to -> from`, only one of the two
    /// updates applies and this is the same as raising `from -> to` and
    /// lowering `to -> from` independently.
    fn record(&mut self, from: Vertex, to: Vertex, amount: u64) {
        let mut remaining = amount;
        if let Some(&index) = self.edge_map.get(&(to, from)) {
            let cancelled = remaining.min(self.flow[index]);
            self.flow[index] -= cancelled;
            remaining -= cancelled;
        }
        if remaining > 0 {
            if let Some(&index) = self.edge_map.get(&(from, to)) {
                self.flow[index] += remaining;
            }
        }
    }

    /// The flow as edges in input order. With `omit_zero_flow` edges that
    /// carry nothing are left out.
    pub fn into_edges(self, omit_zero_flow: bool) -> Vec<Edge> {
        self.edges
            .into_iter()
            .zip(self.flow)
            .filter(|&(_, flow)| !omit_zero_flow || flow > 0)
            .map(|((from, to), flow)| {
                Edge::new(from, to, Capacity::try_from(flow).unwrap_or(Capacity::MAX))
            })
            .collect()
    }
}

/// Push the bottleneck amount along `path`, updating both the residual
/// graph and the flow assignment. Returns the amount pushed.
pub fn augment(residual: &mut ResidualGraph, flow: &mut FlowAssignment, path: &Predecessors) -> u64 {
    let bottleneck = residual.bottleneck(path);
    if bottleneck == 0 {
        return 0;
    }
    for (from, to) in path.arcs() {
        flow.record(from, to, bottleneck);
        residual.push(from, to, bottleneck);
    }
    bottleneck
}
