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

use petgraph::visit::{EdgeRef, IntoEdgeReferences, NodeIndexable};

use super::edge::{Capacity, Edge, Vertex};
use super::edmonds_karp::{max_flow, FlowOptions, MaxFlowReturn};
use super::error::FlowError;

fn vertex_of<G>(graph: G, node: G::NodeId) -> Result<Vertex, FlowError>
where
    G: NodeIndexable,
{
    Vertex::try_from(graph.to_index(node)).map_err(|_| FlowError::InvalidEndpoint)
}

/// Compute a maximum flow of a petgraph graph.
///
/// Every edge of `graph` becomes an arc whose capacity is given by
/// `capacity`; errors returned by the callback are passed straight through.
/// The network is then validated and solved exactly like [`max_flow`], so the
/// source and sink are the unique nodes without incoming and outgoing edges.
/// Vertex ids in the result are node indices as given by
/// [`NodeIndexable::to_index`], and `flow_edges` follows the order of
/// `graph.edge_references()`.
///
/// Arguments:
///
/// * `graph` - the flow network
/// * `capacity` - a callable receiving an edge reference and returning its
///     capacity, or an error
/// * `options` - see [`FlowOptions`]
///
/// # Example
/// ```rust
/// use netflow_core::flow::{edmonds_karp, FlowError, FlowOptions};
/// use petgraph::graph::DiGraph;
/// use petgraph::visit::EdgeRef;
///
/// let mut graph: DiGraph<(), u32> = DiGraph::new();
/// let s = graph.add_node(());
/// let a = graph.add_node(());
/// let t = graph.add_node(());
/// graph.add_edge(s, a, 5);
/// graph.add_edge(a, t, 3);
///
/// let res = edmonds_karp(&graph, |e| Ok::<_, FlowError>(*e.weight()), &FlowOptions::default())
///     .unwrap();
/// assert_eq!(res.value, 3);
/// assert_eq!(res.source as usize, s.index());
/// ```
pub fn edmonds_karp<G, F, E>(
    graph: G,
    mut capacity: F,
    options: &FlowOptions,
) -> Result<MaxFlowReturn, E>
where
    G: IntoEdgeReferences + NodeIndexable,
    F: FnMut(G::EdgeRef) -> Result<Capacity, E>,
    E: From<FlowError>,
{
    let num_vertices =
        Vertex::try_from(graph.node_bound()).map_err(|_| FlowError::InvalidEndpoint)?;

    let mut network = Vec::new();
    for edge in graph.edge_references() {
        let weight = capacity(edge)?;
        let from = vertex_of(graph, edge.source())?;
        let to = vertex_of(graph, edge.target())?;
        network.push(Edge::new(from, to, weight));
    }

    Ok(max_flow(&network, num_vertices, options)?)
}
