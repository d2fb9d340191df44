use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of transition condition kinds understood by the call-handling runtime.
///
/// The serialized names are part of the on-the-wire contract with the runtime
/// and must not change: `timeout:10s`, `variable_equals:name=value`,
/// `intent:no_match` are literal wire tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionKind {
    Always,
    UserResponded,
    Timeout,
    MaxTurns,
    Contains,
    VariablesExtracted,
    ExtractionFailed,
    VariableEquals,
    Intent,
    ApiSuccess,
    ApiFailed,
    ApiStatus,
    ApiResponseContains,
}

impl ConditionKind {
    /// Returns the wire name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ConditionKind::Always => "always",
            ConditionKind::UserResponded => "user_responded",
            ConditionKind::Timeout => "timeout",
            ConditionKind::MaxTurns => "max_turns",
            ConditionKind::Contains => "contains",
            ConditionKind::VariablesExtracted => "variables_extracted",
            ConditionKind::ExtractionFailed => "extraction_failed",
            ConditionKind::VariableEquals => "variable_equals",
            ConditionKind::Intent => "intent",
            ConditionKind::ApiSuccess => "api_success",
            ConditionKind::ApiFailed => "api_failed",
            ConditionKind::ApiStatus => "api_status",
            ConditionKind::ApiResponseContains => "api_response_contains",
        }
    }

    /// Looks up a kind by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "always" => Some(ConditionKind::Always),
            "user_responded" => Some(ConditionKind::UserResponded),
            "timeout" => Some(ConditionKind::Timeout),
            "max_turns" => Some(ConditionKind::MaxTurns),
            "contains" => Some(ConditionKind::Contains),
            "variables_extracted" => Some(ConditionKind::VariablesExtracted),
            "extraction_failed" => Some(ConditionKind::ExtractionFailed),
            "variable_equals" => Some(ConditionKind::VariableEquals),
            "intent" => Some(ConditionKind::Intent),
            "api_success" => Some(ConditionKind::ApiSuccess),
            "api_failed" => Some(ConditionKind::ApiFailed),
            "api_status" => Some(ConditionKind::ApiStatus),
            "api_response_contains" => Some(ConditionKind::ApiResponseContains),
            _ => None,
        }
    }

    /// Whether this kind carries a parameter after the colon.
    pub fn has_parameter(&self) -> bool {
        !matches!(
            self,
            ConditionKind::Always
                | ConditionKind::UserResponded
                | ConditionKind::ApiSuccess
                | ConditionKind::ApiFailed
        )
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
