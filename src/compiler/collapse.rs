use crate::config::{ConfigNode, NodeMetadata, WorkflowConfig};
use crate::graph::WorkflowGraph;
use crate::reconcile::transitions_for;

use super::settings::{resolve_initial_node, resolve_settings};

/// Collapses the editable graph back into a canonical workflow document.
///
/// Transitions are re-derived from the edge list, the authoritative source
/// in this direction; each node's cached transition list is ignored here.
/// Terminal nodes emit no transition or action fields, so editor scratch
/// state cannot leak into the persisted contract. Workflow-level settings
/// pass through from `previous` unchanged: absence stays absence.
pub fn to_config(graph: &WorkflowGraph, previous: Option<&WorkflowConfig>) -> WorkflowConfig {
    let mut nodes = Vec::with_capacity(graph.nodes.len());

    for node in &graph.nodes {
        let transitions = transitions_for(&graph.edges, &node.id);
        let is_terminal = node.behavior.is_end_call();

        nodes.push(ConfigNode {
            id: node.id.clone(),
            name: node.name.clone(),
            transitions: if is_terminal || transitions.is_empty() {
                None
            } else {
                Some(transitions)
            },
            actions: if is_terminal {
                None
            } else {
                node.actions.clone()
            },
            metadata: Some(NodeMetadata {
                position: Some(node.position),
            }),
            behavior: node.behavior.clone(),
        });
    }

    tracing::debug!(nodes = nodes.len(), "collapsed graph into workflow config");

    WorkflowConfig {
        initial_node: resolve_initial_node(graph, previous),
        nodes,
        settings: resolve_settings(previous),
    }
}
