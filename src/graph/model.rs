use crate::config::{NodeActions, NodeBehavior, NodeKind, Position, Transition};
use serde::{Deserialize, Serialize};

/// The editable, position-aware view of a workflow.
///
/// Invariant maintained by the reconciler: for every node, the ordered
/// `(target, condition, priority)` triples of the edges originating at that
/// node equal the node's cached `transitions` list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl WorkflowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds a node by id.
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Finds a node by id, mutably.
    pub fn node_mut(&mut self, id: &str) -> Option<&mut GraphNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Finds an edge by its synthesized id.
    pub fn edge(&self, id: &str) -> Option<&GraphEdge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Iterates the edges originating at the given node, in list order.
    pub fn edges_from<'a>(&'a self, source: &'a str) -> impl Iterator<Item = &'a GraphEdge> {
        self.edges.iter().filter(move |e| e.source == source)
    }

    /// Iterates the edges arriving at the given node.
    pub fn edges_to<'a>(&'a self, target: &'a str) -> impl Iterator<Item = &'a GraphEdge> {
        self.edges.iter().filter(move |e| e.target == target)
    }
}

/// A node of the editable graph: the config node's fields plus a mandatory
/// canvas position and a cached projection of its outgoing transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub name: String,
    pub position: Position,
    /// Cached, display-oriented copy of the transitions derivable from the
    /// edge list. Edges are authoritative when converting out of the graph.
    #[serde(default)]
    pub transitions: Vec<Transition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<NodeActions>,
    #[serde(flatten)]
    pub behavior: NodeBehavior,
}

impl GraphNode {
    /// The canvas component kind used to render this node.
    pub fn visual(&self) -> NodeVisual {
        NodeVisual::for_behavior(&self.behavior)
    }
}

/// A directed, labeled edge of the editable graph.
///
/// Identity is `(source, target, ordinal)`; the id is synthesized as
/// `source-target-ordinal` and unique within the graph, the ordinal
/// disambiguating parallel edges between the same pair of nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    /// Display label; equals the condition string.
    pub label: String,
    pub data: EdgeData,
}

/// The behavioral payload of an edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeData {
    pub condition: String,
    #[serde(default)]
    pub priority: i64,
}

impl GraphEdge {
    /// Synthesizes the ordinal-qualified edge id.
    pub fn edge_id(source: &str, target: &str, ordinal: usize) -> String {
        format!("{}-{}-{}", source, target, ordinal)
    }

    /// Builds an edge from a transition owned by `source`.
    pub fn from_transition(source: &str, transition: &Transition, ordinal: usize) -> Self {
        Self {
            id: Self::edge_id(source, &transition.target, ordinal),
            source: source.to_string(),
            target: transition.target.clone(),
            label: transition.condition.clone(),
            data: EdgeData {
                condition: transition.condition.clone(),
                priority: transition.priority,
            },
        }
    }

    /// Renders a human-readable summary of this edge for transition lists,
    /// e.g. `timeout 10 -> Greeting`. The caller supplies the node-id to
    /// display-name lookup; an unresolvable target falls back to the raw id.
    pub fn summary(&self, resolve_name: impl Fn(&str) -> Option<String>) -> String {
        let parsed = crate::condition::decode(&self.data.condition);
        let target = resolve_name(&self.target).unwrap_or_else(|| self.target.clone());
        if parsed.parameter.is_empty() {
            format!("{} -> {}", parsed.kind, target)
        } else {
            format!("{} {} -> {}", parsed.kind, parsed.parameter, target)
        }
    }

    /// Projects this edge back into the transition it represents.
    pub fn to_transition(&self) -> Transition {
        Transition {
            condition: self.data.condition.clone(),
            target: self.target.clone(),
            priority: self.data.priority,
        }
    }
}

/// The visual component kind the canvas dispatches on.
///
/// A pure, total mapping over node behavior: the five known types map to
/// themselves, anything unrecognized renders as `standard` (the persisted
/// `type` field is untouched by this mapping).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeVisual {
    Standard,
    RetrieveVariable,
    EndCall,
    AgentTransfer,
    ApiCall,
}

impl NodeVisual {
    pub fn for_behavior(behavior: &NodeBehavior) -> Self {
        match behavior {
            NodeBehavior::Known(NodeKind::Standard(_)) => NodeVisual::Standard,
            NodeBehavior::Known(NodeKind::RetrieveVariable(_)) => NodeVisual::RetrieveVariable,
            NodeBehavior::Known(NodeKind::EndCall(_)) => NodeVisual::EndCall,
            NodeBehavior::Known(NodeKind::AgentTransfer(_)) => NodeVisual::AgentTransfer,
            NodeBehavior::Known(NodeKind::ApiCall(_)) => NodeVisual::ApiCall,
            NodeBehavior::Unknown(_) => NodeVisual::Standard,
        }
    }
}
