use crate::error::WorkflowParseError;
use serde::{Deserialize, Serialize};
use std::fs;

use super::settings::WorkflowSettings;

/// Fallback id used for `initial_node` when a graph has no nodes at all.
pub const DEFAULT_INITIAL_NODE: &str = "start";

/// The canonical persisted workflow document.
///
/// This is the interchange format between the editor and the call-handling
/// runtime. Field names and the condition-string grammar are part of that
/// contract. Workflow-level settings are carried opaquely: the compiler
/// preserves them byte-for-byte across a round trip without interpreting
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowConfig {
    pub initial_node: String,
    #[serde(default)]
    pub nodes: Vec<ConfigNode>,
    #[serde(flatten)]
    pub settings: WorkflowSettings,
}

impl WorkflowConfig {
    /// Parses a workflow document from its JSON encoding.
    pub fn from_json(json: &str) -> Result<Self, WorkflowParseError> {
        serde_json::from_str(json).map_err(|e| WorkflowParseError::Json(e.to_string()))
    }

    /// Loads a workflow document from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, WorkflowParseError> {
        let content = fs::read_to_string(path)
            .map_err(|e| WorkflowParseError::Io(path.to_string(), e.to_string()))?;
        Self::from_json(&content)
    }

    /// Serializes the document to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, WorkflowParseError> {
        serde_json::to_string_pretty(self).map_err(|e| WorkflowParseError::Json(e.to_string()))
    }

    /// Finds a node by id.
    pub fn node(&self, id: &str) -> Option<&ConfigNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// A single node of the persisted workflow document.
///
/// The behavioral fields form a discriminated union on the `type` field;
/// common fields (`id`, `name`, `transitions`, `actions`, `_metadata`) sit
/// alongside it. Ids are stable: assigned at creation and never regenerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigNode {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transitions: Option<Vec<Transition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<NodeActions>,
    #[serde(
        default,
        rename = "_metadata",
        skip_serializing_if = "Option::is_none"
    )]
    pub metadata: Option<NodeMetadata>,
    #[serde(flatten)]
    pub behavior: NodeBehavior,
}

/// A directed, conditioned, prioritized transition to another node.
///
/// Owned by its source node in the config view; represented as a labeled
/// edge in the graph view. `condition` is a Condition DSL encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub condition: String,
    pub target: String,
    #[serde(default)]
    pub priority: i64,
}

impl Transition {
    pub fn new(condition: impl Into<String>, target: impl Into<String>, priority: i64) -> Self {
        Self {
            condition: condition.into(),
            target: target.into(),
            priority,
        }
    }
}

/// Entry/exit actions attached to a node, carried opaquely.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeActions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_entry: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_exit: Option<serde_json::Value>,
}

/// Editor-only metadata carried for round-tripping; no semantic meaning.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// A 2D canvas position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The type-discriminated behavioral payload of a node.
///
/// Known types are modeled as a tagged union so each variant's field set is
/// enforced at compile time. A node whose `type` is not one of the five
/// known variants is never reclassified: the `Unknown` arm preserves the
/// raw object (including its `type` field) verbatim for the way back out,
/// and only the visual dispatch treats it as `standard`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeBehavior {
    Known(NodeKind),
    Unknown(serde_json::Map<String, serde_json::Value>),
}

impl NodeBehavior {
    pub fn standard(node: StandardNode) -> Self {
        NodeBehavior::Known(NodeKind::Standard(node))
    }

    pub fn end_call() -> Self {
        NodeBehavior::Known(NodeKind::EndCall(EndCallNode {}))
    }

    /// Returns the known kind, if the `type` was recognized.
    pub fn known(&self) -> Option<&NodeKind> {
        match self {
            NodeBehavior::Known(kind) => Some(kind),
            NodeBehavior::Unknown(_) => None,
        }
    }

    /// Whether this node is a terminal (`end_call`) state.
    pub fn is_end_call(&self) -> bool {
        matches!(self, NodeBehavior::Known(NodeKind::EndCall(_)))
    }

    /// The persisted `type` string, including unrecognized ones.
    pub fn type_name(&self) -> &str {
        match self {
            NodeBehavior::Known(NodeKind::Standard(_)) => "standard",
            NodeBehavior::Known(NodeKind::RetrieveVariable(_)) => "retrieve_variable",
            NodeBehavior::Known(NodeKind::EndCall(_)) => "end_call",
            NodeBehavior::Known(NodeKind::AgentTransfer(_)) => "agent_transfer",
            NodeBehavior::Known(NodeKind::ApiCall(_)) => "api_call",
            NodeBehavior::Unknown(raw) => raw
                .get("type")
                .and_then(|v| v.as_str())
                .unwrap_or("standard"),
        }
    }
}

/// The five known node types of the workflow document contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    Standard(StandardNode),
    RetrieveVariable(RetrieveVariableNode),
    EndCall(EndCallNode),
    AgentTransfer(AgentTransferNode),
    ApiCall(ApiCallNode),
}

/// A `standard` conversational node: exactly one of `static_text` or
/// `system_prompt` must be set for the node to be valid.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StandardNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
}

/// A `retrieve_variable` node: extracts variables from the caller's speech.
///
/// Either the `variables` list or the legacy single-variable pair
/// (`variable_name` + `extraction_prompt`) must be present, never both.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RetrieveVariableNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<VariableSpec>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extraction_prompt: Option<String>,
}

/// One variable to extract, with its prompt and optional default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableSpec {
    pub variable_name: String,
    pub extraction_prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// An `end_call` terminal node. Carries no behavioral fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EndCallNode {}

/// An `agent_transfer` node: hands the call to a human or another agent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AgentTransferNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_agent_id: Option<String>,
}

/// An `api_call` node: invokes an external HTTP endpoint mid-call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiCallNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_variable: Option<String>,
}
