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

//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use hashbrown::HashSet;
use netflow_core::flow::{Edge, MaxFlowReturn};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn edges(raw: &[(u32, u32, u32)]) -> Vec<Edge> {
    raw.iter().copied().map(Edge::from).collect()
}

/// Turn arbitrary arcs into a valid network on `num_vertices` vertices with
/// source `0` and sink `num_vertices - 1`.
///
/// Arcs into the source, out of the sink, self-loops and repeated pairs are
/// dropped. Every other vertex is then given an arc from the source if it
/// has no incoming arc and an arc to the sink if it has no outgoing arc, and
/// the terminals are connected if they still touch nothing.
pub fn build_network(num_vertices: u32, arcs: &[(u32, u32, u32)]) -> Vec<Edge> {
    assert!(num_vertices >= 2);
    let sink = num_vertices - 1;
    let mut seen = HashSet::new();
    let mut network = Vec::new();
    let mut push = |network: &mut Vec<Edge>, from: u32, to: u32, weight: u32| {
        if from != to && to != 0 && from != sink && seen.insert((from, to)) {
            network.push(Edge::new(from, to, weight.max(1)));
        }
    };

    for &(from, to, weight) in arcs {
        push(&mut network, from % num_vertices, to % num_vertices, weight);
    }
    for v in 1..sink {
        if !network.iter().any(|e| e.to == v) {
            push(&mut network, 0, v, 1);
        }
        if !network.iter().any(|e| e.from == v) {
            push(&mut network, v, sink, 1);
        }
    }
    let first = if sink > 1 { 1 } else { sink };
    if !network.iter().any(|e| e.from == 0) {
        push(&mut network, 0, first, 1);
    }
    let last = if sink > 1 { 1 } else { 0 };
    if !network.iter().any(|e| e.to == sink) {
        push(&mut network, last, sink, 1);
    }
    network
}

/// Capacity of the smallest cut separating `source` from `sink`, found by
/// trying every vertex subset. Only usable for small networks.
pub fn brute_force_min_cut(network: &[Edge], num_vertices: u32, source: u32, sink: u32) -> u64 {
    let others: Vec<u32> = (0..num_vertices)
        .filter(|&v| v != source && v != sink)
        .collect();
    let mut best = u64::MAX;
    for mask in 0u64..(1 << others.len()) {
        let mut side = vec![false; num_vertices as usize];
        side[source as usize] = true;
        for (bit, &v) in others.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                side[v as usize] = true;
            }
        }
        let capacity: u64 = network
            .iter()
            .filter(|e| side[e.from as usize] && !side[e.to as usize])
            .map(|e| u64::from(e.weight))
            .sum();
        best = best.min(capacity);
    }
    best
}

/// Assert that `flow` is a feasible flow of `network` with the given value:
/// parallel to the input, within capacity, and conserved at every vertex
/// other than the terminals.
pub fn assert_feasible(network: &[Edge], num_vertices: u32, flow: &[Edge], res: &MaxFlowReturn) {
    assert_eq!(flow.len(), network.len());
    let mut inflow = vec![0u64; num_vertices as usize];
    let mut outflow = vec![0u64; num_vertices as usize];
    for (edge, carried) in network.iter().zip(flow) {
        assert_eq!(edge.endpoints(), carried.endpoints());
        assert!(
            carried.weight <= edge.weight,
            "{} exceeds capacity {}",
            carried,
            edge.weight
        );
        outflow[carried.from as usize] += u64::from(carried.weight);
        inflow[carried.to as usize] += u64::from(carried.weight);
    }
    for v in 0..num_vertices {
        if v != res.source && v != res.sink {
            assert_eq!(inflow[v as usize], outflow[v as usize], "flow not conserved at {}", v);
        }
    }
    assert_eq!(outflow[res.source as usize], res.value);
    assert_eq!(inflow[res.sink as usize], res.value);
}
