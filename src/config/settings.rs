use serde::{Deserialize, Serialize};

/// Workflow-level settings the compiler carries but never interprets.
///
/// These live alongside `initial_node` and `nodes` at the top level of the
/// document. The compiler's only obligation is to pass them through a
/// graph round trip unchanged: absence stays absence, no default filling.
/// Fields the runtime may add later flow through the `extra` map verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_window: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interruption_policy: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tts: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_intents: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_call_analysis: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
