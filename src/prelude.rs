//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions of the kaiwa
//! crate. Import this module to get the whole load-edit-validate-save
//! pipeline without importing each item individually.

// Graph/config compilation
pub use crate::compiler::{resolve_initial_node, resolve_settings, to_config, to_graph};

// Canonical document model
pub use crate::config::{
    AgentTransferNode, ApiCallNode, ConfigNode, EndCallNode, NodeActions, NodeBehavior, NodeKind,
    NodeMetadata, Position, RetrieveVariableNode, StandardNode, Transition, VariableSpec,
    WorkflowConfig, WorkflowSettings, DEFAULT_INITIAL_NODE,
};

// Editable graph model
pub use crate::graph::{
    grid_position, EdgeData, GraphEdge, GraphNode, GridLayout, LayoutDirection, LayoutEngine,
    LayoutOptions, NodeVisual, WorkflowGraph,
};

// Condition DSL codec
pub use crate::condition::{decode, encode, ConditionKind, ParsedCondition};

// Reconciliation
pub use crate::reconcile::{
    connect, disconnect, relabel, remove_node, replace_transitions, sync_from_edges,
    transitions_for, Selection, WorkflowEditor,
};

// Validation
pub use crate::validate::{validate, ValidationIssue, ValidationReport};

// Error types
pub use crate::error::WorkflowParseError;
