use crate::config::WorkflowConfig;
use crate::graph::{layout::grid_position, GraphEdge, GraphNode, WorkflowGraph};

/// Expands a canonical workflow document into the editable graph view.
///
/// Every type-specific field is copied verbatim, with no coercion and no
/// defaulting beyond what the document already encodes. Positions come from
/// `_metadata.position` when present; otherwise nodes fall onto the
/// deterministic grid so repeated loads without saved positions are stable.
/// Each transition becomes one edge, in order, with an ordinal-qualified id
/// unique within the graph.
pub fn to_graph(config: &WorkflowConfig) -> WorkflowGraph {
    let node_count = config.nodes.len();
    let mut nodes = Vec::with_capacity(node_count);
    let mut edges = Vec::new();

    for (index, node) in config.nodes.iter().enumerate() {
        let position = node
            .metadata
            .as_ref()
            .and_then(|m| m.position)
            .unwrap_or_else(|| grid_position(index, node_count));

        let transitions = node.transitions.clone().unwrap_or_default();
        for (ordinal, transition) in transitions.iter().enumerate() {
            edges.push(GraphEdge::from_transition(&node.id, transition, ordinal));
        }

        nodes.push(GraphNode {
            id: node.id.clone(),
            name: node.name.clone(),
            position,
            transitions,
            actions: node.actions.clone(),
            behavior: node.behavior.clone(),
        });
    }

    tracing::debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        "expanded workflow config into graph"
    );

    WorkflowGraph { nodes, edges }
}
