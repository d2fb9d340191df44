use crate::config::{WorkflowConfig, WorkflowSettings, DEFAULT_INITIAL_NODE};
use crate::graph::WorkflowGraph;

/// Resolves the workflow-level settings for an emitted document.
///
/// This is the single home of the pass-through-merge contract: the graph
/// owns none of these values, so they are copied from the previous persisted
/// config unchanged when one exists. A missing previous config yields the
/// empty settings block, never filled-in defaults.
pub fn resolve_settings(previous: Option<&WorkflowConfig>) -> WorkflowSettings {
    previous
        .map(|config| config.settings.clone())
        .unwrap_or_default()
}

/// Resolves the `initial_node` of an emitted document.
///
/// Precedence: the previous config's value, then the id of the first node in
/// the graph, then the fixed fallback literal for an empty graph. The field
/// is never dropped; whether it references an existing node is the
/// validator's concern.
pub fn resolve_initial_node(graph: &WorkflowGraph, previous: Option<&WorkflowConfig>) -> String {
    if let Some(prev) = previous {
        if !prev.initial_node.is_empty() {
            return prev.initial_node.clone();
        }
    }
    graph
        .nodes
        .first()
        .map(|node| node.id.clone())
        .unwrap_or_else(|| DEFAULT_INITIAL_NODE.to_string())
}
