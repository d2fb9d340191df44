//! The transition reconciler: keeps each node's cached transition list and
//! the set of edges originating at that node in lockstep, in both edit
//! directions, without feedback loops. Edges are authoritative when the
//! edge list changes; the panel's transition list is authoritative when a
//! node is edited wholesale in a form.

mod editor;

pub use editor::{Selection, WorkflowEditor};

use crate::condition::{encode, ConditionKind};
use crate::config::Transition;
use crate::graph::{GraphEdge, WorkflowGraph};

/// Projects a node's transition list from the edge list, in edge order.
pub fn transitions_for(edges: &[GraphEdge], node_id: &str) -> Vec<Transition> {
    edges
        .iter()
        .filter(|e| e.source == node_id)
        .map(GraphEdge::to_transition)
        .collect()
}

/// Recomputes every node's cached transitions from the edge list.
///
/// The freshly computed projection is diffed element-by-element against the
/// node's current cached copy and the write is skipped when they are equal.
/// That equality gate is load-bearing: without it, a write triggers a change
/// notification that triggers another recompute, and the cycle never
/// settles. Returns the ids of the nodes that were actually rewritten, so a
/// second run against an unchanged edge list returns nothing.
pub fn sync_from_edges(graph: &mut WorkflowGraph) -> Vec<String> {
    let projections: Vec<Vec<Transition>> = graph
        .nodes
        .iter()
        .map(|node| transitions_for(&graph.edges, &node.id))
        .collect();

    let mut rewritten = Vec::new();
    for (node, projection) in graph.nodes.iter_mut().zip(projections) {
        if node.transitions == projection {
            tracing::trace!(node = %node.id, "transitions unchanged, skipping write");
            continue;
        }
        node.transitions = projection;
        rewritten.push(node.id.clone());
    }

    if !rewritten.is_empty() {
        tracing::debug!(nodes = rewritten.len(), "reconciled transitions from edges");
    }
    rewritten
}

/// Replaces a node's transitions wholesale, as edited in the properties
/// panel. All existing edges originating at the node are removed and fresh
/// ordinal-qualified edges are synthesized from the new list; no equality
/// gate is needed because this is a one-shot replace, not a derivation.
pub fn replace_transitions(graph: &mut WorkflowGraph, node_id: &str, transitions: Vec<Transition>) {
    graph.edges.retain(|e| e.source != node_id);
    for (ordinal, transition) in transitions.iter().enumerate() {
        graph
            .edges
            .push(GraphEdge::from_transition(node_id, transition, ordinal));
    }
    if let Some(node) = graph.node_mut(node_id) {
        node.transitions = transitions;
    }
}

/// Draws a new connection with the default label: condition `always`,
/// priority `0`. Returns the id of the created edge.
pub fn connect(graph: &mut WorkflowGraph, source: &str, target: &str) -> String {
    let transition = Transition::new(encode(ConditionKind::Always, ""), target, 0);
    let ordinal = next_ordinal(&graph.edges, source, target);
    let edge = GraphEdge::from_transition(source, &transition, ordinal);
    let id = edge.id.clone();
    graph.edges.push(edge);
    sync_from_edges(graph);
    id
}

/// Deletes an edge and re-derives the affected node's transitions.
pub fn disconnect(graph: &mut WorkflowGraph, edge_id: &str) {
    graph.edges.retain(|e| e.id != edge_id);
    sync_from_edges(graph);
}

/// Relabels an edge with a new condition string and re-derives.
pub fn relabel(graph: &mut WorkflowGraph, edge_id: &str, condition: &str) {
    if let Some(edge) = graph.edges.iter_mut().find(|e| e.id == edge_id) {
        edge.label = condition.to_string();
        edge.data.condition = condition.to_string();
    }
    sync_from_edges(graph);
}

/// Deletes a node and cascade-deletes every edge touching it, as source or
/// target, then re-derives the surviving sources' transitions so nothing
/// keeps referencing the removed id.
pub fn remove_node(graph: &mut WorkflowGraph, node_id: &str) {
    graph.nodes.retain(|n| n.id != node_id);
    graph
        .edges
        .retain(|e| e.source != node_id && e.target != node_id);
    sync_from_edges(graph);
}

/// Picks the smallest ordinal that keeps the synthesized id unique among
/// the existing edges between `source` and `target`.
fn next_ordinal(edges: &[GraphEdge], source: &str, target: &str) -> usize {
    let mut ordinal = 0;
    while edges
        .iter()
        .any(|e| e.id == GraphEdge::edge_id(source, target, ordinal))
    {
        ordinal += 1;
    }
    ordinal
}
