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

//! Maximum flow on single-source, single-sink networks.

mod edge;
mod edmonds_karp;
mod error;
mod graph;
mod residual;
mod validate;

pub use edge::{flow_value, Capacity, Edge, Vertex};
pub use edmonds_karp::{
    find_augmenting_path, max_flow, solve_network_flow, FlowOptions, MaxFlowReturn, PathArcs,
    Predecessors,
};
pub use error::FlowError;
pub use graph::edmonds_karp;
pub use residual::{augment, FlowAssignment, ResidualGraph};
pub use validate::{validate_network, Terminals};
