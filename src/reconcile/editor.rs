use crate::compiler::{to_config, to_graph};
use crate::config::{Transition, WorkflowConfig};
use crate::graph::WorkflowGraph;

/// The operator's current selection on the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Node(String),
    Edge(String),
}

/// A stateful wrapper around the graph for interactive editing sessions.
///
/// Owns the working graph and the pending selection, and routes every
/// mutation through the reconciler so the cached transition lists never
/// drift from the edge list between events.
#[derive(Debug, Clone, Default)]
pub struct WorkflowEditor {
    graph: WorkflowGraph,
    selection: Option<Selection>,
}

impl WorkflowEditor {
    pub fn new(graph: WorkflowGraph) -> Self {
        Self {
            graph,
            selection: None,
        }
    }

    /// Opens an editing session on a canonical document.
    pub fn from_config(config: &WorkflowConfig) -> Self {
        Self::new(to_graph(config))
    }

    pub fn graph(&self) -> &WorkflowGraph {
        &self.graph
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn select_node(&mut self, id: impl Into<String>) {
        self.selection = Some(Selection::Node(id.into()));
    }

    pub fn select_edge(&mut self, id: impl Into<String>) {
        self.selection = Some(Selection::Edge(id.into()));
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Draws a connection with the default `always` label; returns its id.
    pub fn connect(&mut self, source: &str, target: &str) -> String {
        super::connect(&mut self.graph, source, target)
    }

    pub fn disconnect(&mut self, edge_id: &str) {
        if self.selection == Some(Selection::Edge(edge_id.to_string())) {
            self.selection = None;
        }
        super::disconnect(&mut self.graph, edge_id);
    }

    pub fn relabel(&mut self, edge_id: &str, condition: &str) {
        super::relabel(&mut self.graph, edge_id, condition);
    }

    /// Replaces a node's transitions wholesale from the properties panel.
    pub fn replace_transitions(&mut self, node_id: &str, transitions: Vec<Transition>) {
        super::replace_transitions(&mut self.graph, node_id, transitions);
    }

    /// Deletes a node, cascade-deleting its edges and clearing any pending
    /// selection that references the node or one of those edges.
    pub fn remove_node(&mut self, node_id: &str) {
        let selection_gone = match &self.selection {
            Some(Selection::Node(id)) => id == node_id,
            Some(Selection::Edge(id)) => self
                .graph
                .edge(id)
                .is_some_and(|e| e.source == node_id || e.target == node_id),
            None => false,
        };
        if selection_gone {
            self.selection = None;
        }
        super::remove_node(&mut self.graph, node_id);
    }

    /// Collapses the working graph into a deployable document.
    pub fn to_config(&self, previous: Option<&WorkflowConfig>) -> WorkflowConfig {
        to_config(&self.graph, previous)
    }
}
