//! The structural validator: reports every violation of the domain's
//! structural rules for a workflow graph. All checks always run; nothing
//! short-circuits, and nothing here blocks further editing. Condition
//! strings are not checked (the codec's leniency already guarantees a safe
//! decode), and cross-node reachability of a terminal state is deliberately
//! out of scope for now; it is a possible future strengthening, not an
//! oversight.

use ahash::AHashSet;
use itertools::Itertools;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::config::{NodeBehavior, NodeKind};
use crate::graph::WorkflowGraph;

/// A single structural violation found in a workflow graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("Duplicate node id '{0}'")]
    DuplicateNodeId(String),

    #[error("Edge '{edge_id}' references missing node '{missing_node_id}'")]
    DanglingEdge {
        edge_id: String,
        missing_node_id: String,
    },

    #[error("Workflow has no end_call node; at least one terminal state is required")]
    MissingTerminal,

    #[error("Standard node '{0}' sets both static_text and system_prompt; exactly one is allowed")]
    StandardBothContents(String),

    #[error("Standard node '{0}' sets neither static_text nor system_prompt; exactly one is required")]
    StandardNoContent(String),

    #[error(
        "Retrieve-variable node '{0}' needs a non-empty variables list or the legacy variable_name/extraction_prompt pair"
    )]
    RetrieveVariableIncomplete(String),

    #[error(
        "Retrieve-variable node '{0}' sets both the variables list and the legacy variable_name/extraction_prompt pair; exactly one is allowed"
    )]
    RetrieveVariableAmbiguous(String),

    #[error("Agent-transfer node '{0}' is missing a target_agent_id")]
    AgentTransferMissingTarget(String),
}

/// The outcome of one validation request. Created fresh per call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// The structural findings, in check order.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// The findings rendered as operator-facing error strings.
    pub fn errors(&self) -> Vec<String> {
        self.issues.iter().map(|i| i.to_string()).collect()
    }
}

// The surfaced shape is `{valid, errors}`, matching what the console and
// the deploy gate consume.
impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationReport", 2)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors())?;
        state.end()
    }
}

/// Validates the global structural rules of a workflow graph.
pub fn validate(graph: &WorkflowGraph) -> ValidationReport {
    let mut issues = Vec::new();

    // 1. Node ids must be unique.
    for id in graph.nodes.iter().map(|n| n.id.as_str()).duplicates() {
        issues.push(ValidationIssue::DuplicateNodeId(id.to_string()));
    }

    // 2. Every edge endpoint must resolve to an existing node.
    let known_ids: AHashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    for edge in &graph.edges {
        for endpoint in [&edge.source, &edge.target] {
            if !known_ids.contains(endpoint.as_str()) {
                issues.push(ValidationIssue::DanglingEdge {
                    edge_id: edge.id.clone(),
                    missing_node_id: endpoint.clone(),
                });
            }
        }
    }

    // 3. A workflow without a terminal state is not deployable.
    if !graph.nodes.iter().any(|n| n.behavior.is_end_call()) {
        issues.push(ValidationIssue::MissingTerminal);
    }

    // 4.-6. Per-node completeness rules.
    for node in &graph.nodes {
        match &node.behavior {
            NodeBehavior::Known(NodeKind::Standard(standard)) => {
                let has_text = standard.static_text.is_some();
                let has_prompt = standard.system_prompt.is_some();
                if has_text && has_prompt {
                    issues.push(ValidationIssue::StandardBothContents(node.id.clone()));
                } else if !has_text && !has_prompt {
                    issues.push(ValidationIssue::StandardNoContent(node.id.clone()));
                }
            }
            NodeBehavior::Known(NodeKind::RetrieveVariable(retrieve)) => {
                let has_list = retrieve
                    .variables
                    .as_ref()
                    .is_some_and(|v| !v.is_empty());
                let has_legacy = retrieve
                    .variable_name
                    .as_deref()
                    .is_some_and(|s| !s.is_empty())
                    && retrieve
                        .extraction_prompt
                        .as_deref()
                        .is_some_and(|s| !s.is_empty());
                if has_list && has_legacy {
                    issues.push(ValidationIssue::RetrieveVariableAmbiguous(node.id.clone()));
                } else if !has_list && !has_legacy {
                    issues.push(ValidationIssue::RetrieveVariableIncomplete(node.id.clone()));
                }
            }
            NodeBehavior::Known(NodeKind::AgentTransfer(transfer)) => {
                if transfer
                    .target_agent_id
                    .as_deref()
                    .is_none_or(|s| s.is_empty())
                {
                    issues.push(ValidationIssue::AgentTransferMissingTarget(node.id.clone()));
                }
            }
            _ => {}
        }
    }

    tracing::debug!(issues = issues.len(), "validated workflow graph");
    ValidationReport { issues }
}
