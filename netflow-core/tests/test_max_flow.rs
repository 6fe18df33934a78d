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

mod helpers;

use helpers::{assert_feasible, brute_force_min_cut, edges, init_logging};
use netflow_core::flow::{flow_value, max_flow, solve_network_flow, Edge, FlowOptions};

fn solve_checked(network: &[Edge], num_vertices: u32) -> u64 {
    let res = max_flow(network, num_vertices, &FlowOptions::default()).unwrap();
    assert_feasible(network, num_vertices, &res.flow_edges, &res);
    assert_eq!(res.cut_capacity(network), res.value);
    assert_eq!(
        brute_force_min_cut(network, num_vertices, res.source, res.sink),
        res.value
    );
    res.value
}

#[test]
fn test_single_path() {
    init_logging();
    let network = edges(&[(0, 1, 5), (1, 2, 3)]);
    let flow = solve_network_flow(&network, 3).unwrap();
    assert_eq!(flow, edges(&[(0, 1, 3), (1, 2, 3)]));
    assert_eq!(flow_value(&flow, 0), 3);
}

#[test]
fn test_diamond() {
    init_logging();
    let network = edges(&[(0, 1, 10), (0, 2, 10), (1, 3, 4), (2, 3, 10)]);
    let flow = solve_network_flow(&network, 4).unwrap();
    assert_eq!(flow[0], Edge::new(0, 1, 4));
    assert_eq!(flow[1], Edge::new(0, 2, 10));
    assert_eq!(flow[2], Edge::new(1, 3, 4));
    assert_eq!(flow[3], Edge::new(2, 3, 10));
    assert_eq!(flow_value(&flow, 0), 14);
}

#[test]
fn test_textbook_network() {
    init_logging();
    let network = edges(&[
        (0, 1, 16),
        (0, 2, 13),
        (2, 1, 4),
        (1, 3, 12),
        (3, 2, 9),
        (2, 4, 14),
        (4, 3, 7),
        (3, 5, 20),
        (4, 5, 4),
    ]);
    assert_eq!(solve_checked(&network, 6), 23);
}

#[test]
fn test_textbook_network_with_antiparallel_edges() {
    init_logging();
    let network = edges(&[
        (0, 1, 16),
        (0, 2, 13),
        (1, 2, 10),
        (2, 1, 4),
        (1, 3, 12),
        (3, 2, 9),
        (2, 4, 14),
        (4, 3, 7),
        (3, 5, 20),
        (4, 5, 4),
    ]);
    assert_eq!(solve_checked(&network, 6), 23);
}

#[test]
fn test_antiparallel_pair_stays_within_capacity() {
    init_logging();
    let network = edges(&[(0, 1, 5), (0, 2, 5), (1, 2, 3), (2, 1, 3), (1, 3, 2), (2, 3, 8)]);
    assert_eq!(solve_checked(&network, 4), 10);
}

#[test]
fn test_rerouting_through_reverse_arcs() {
    init_logging();
    // The first shortest path takes 1-3, which 2 needs; the second
    // augmentation pushes back over 3-1 to free it.
    let network = edges(&[
        (0, 1, 1),
        (0, 2, 1),
        (1, 3, 1),
        (1, 4, 1),
        (2, 3, 1),
        (3, 5, 1),
        (4, 5, 1),
    ]);
    let res = max_flow(&network, 6, &FlowOptions::default()).unwrap();
    assert_eq!(res.value, 2);
    assert_eq!(res.augmentations, 2);
    assert_eq!(
        res.flow_edges,
        edges(&[
            (0, 1, 1),
            (0, 2, 1),
            (1, 3, 0),
            (1, 4, 1),
            (2, 3, 1),
            (3, 5, 1),
            (4, 5, 1),
        ])
    );
    assert_eq!(res.min_cut, vec![0]);
}

#[test]
fn test_unused_edges_carry_zero() {
    init_logging();
    // the detour through 2 ends at the saturated 1-3
    let network = edges(&[(0, 1, 3), (1, 3, 3), (0, 2, 4), (2, 1, 4)]);
    let res = max_flow(&network, 4, &FlowOptions::default()).unwrap();
    assert_eq!(res.value, 3);
    assert_eq!(res.flow_edges.len(), 4);
    assert_eq!(res.flow_edges[2].weight, 0);
    assert_eq!(res.flow_edges[3].weight, 0);

    let strict = FlowOptions::default().with_omit_zero_flow(true);
    let res = max_flow(&network, 4, &strict).unwrap();
    assert_eq!(res.flow_edges, edges(&[(0, 1, 3), (1, 3, 3)]));
}

#[test]
fn test_source_and_sink_need_not_be_extremes() {
    init_logging();
    let network = edges(&[(3, 0, 2), (3, 2, 2), (0, 1, 5), (2, 1, 1)]);
    let res = max_flow(&network, 4, &FlowOptions::default()).unwrap();
    assert_eq!((res.source, res.sink), (3, 1));
    assert_eq!(res.value, 3);
    assert_eq!(res.min_cut, vec![2, 3]);
}

#[test]
fn test_solving_twice_gives_same_value() {
    init_logging();
    let network = edges(&[
        (0, 1, 3),
        (0, 2, 2),
        (1, 2, 1),
        (1, 3, 2),
        (2, 3, 3),
        (3, 4, 4),
        (2, 4, 1),
    ]);
    let first = solve_network_flow(&network, 5).unwrap();
    let second = solve_network_flow(&network, 5).unwrap();
    assert_eq!(flow_value(&first, 0), flow_value(&second, 0));
    assert_eq!(first, second);
    assert_eq!(solve_checked(&network, 5), 5);
}
