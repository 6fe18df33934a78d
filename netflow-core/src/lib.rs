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

//! # netflow-core
//!
//! Maximum flow on directed networks with integer capacities, one source
//! and one sink, computed with shortest augmenting paths (Edmonds-Karp).
//!
//! Networks are plain edge lists over vertices `0..n`. They are validated
//! before anything is computed, and the unique source and sink are inferred
//! from the edges: the source is the only vertex without incoming edges and
//! the sink the only vertex without outgoing ones.
//!
//! ```rust
//! use netflow_core::flow::{solve_network_flow, Edge};
//!
//! let network = vec![Edge::new(0, 1, 5), Edge::new(1, 2, 3)];
//! let flow = solve_network_flow(&network, 3).unwrap();
//! assert_eq!(flow, vec![Edge::new(0, 1, 3), Edge::new(1, 2, 3)]);
//! ```
//!
//! The [`flow`] module also runs on any petgraph graph through
//! [`flow::edmonds_karp()`], and [`assignment`] uses it to staff courses.

pub mod assignment;
pub mod flow;
