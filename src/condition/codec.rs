use super::kind::ConditionKind;
use serde::Serialize;
use std::fmt;

/// The decoded form of a transition's condition string.
///
/// Always derived on demand from the string of record; never stored, so the
/// string stays the single source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ParsedCondition {
    pub kind: ConditionKind,
    pub parameter: String,
}

impl ParsedCondition {
    pub fn new(kind: ConditionKind, parameter: impl Into<String>) -> Self {
        Self {
            kind,
            parameter: parameter.into(),
        }
    }

    /// The safe default every malformed or empty condition degrades to.
    pub fn always() -> Self {
        Self::new(ConditionKind::Always, "")
    }
}

impl fmt::Display for ParsedCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self.kind, &self.parameter))
    }
}

/// Decodes a condition string into its `(kind, parameter)` pair.
///
/// This function is total: empty input decodes to `always` (the documented
/// default), and any unrecognized or malformed string also degrades to
/// `always` with an empty parameter rather than failing. That leniency is a
/// deliberate policy so legacy condition strings never crash the editor; it
/// is lossy for unknown inputs, which is accepted and documented.
///
/// A bare known kind name decodes to that kind with an empty parameter even
/// when the kind normally carries one, because `encode` emits the bare name
/// for an empty parameter and the pair must survive a round trip.
///
/// The `timeout` parameter is stored without its `s` unit suffix; exactly one
/// trailing `s` is stripped on decode.
pub fn decode(text: &str) -> ParsedCondition {
    if text.is_empty() {
        return ParsedCondition::always();
    }
    if let Some(kind) = ConditionKind::from_name(text) {
        return ParsedCondition::new(kind, "");
    }
    let Some((head, raw)) = text.split_once(':') else {
        return ParsedCondition::always();
    };
    match ConditionKind::from_name(head) {
        Some(kind) if kind.has_parameter() => {
            let parameter = if kind == ConditionKind::Timeout {
                raw.strip_suffix('s').unwrap_or(raw)
            } else {
                raw
            };
            ParsedCondition::new(kind, parameter)
        }
        _ => ParsedCondition::always(),
    }
}

/// Encodes a `(kind, parameter)` pair back into its condition string.
///
/// No-parameter kinds serialize to their bare name. Parameterized kinds
/// serialize as `kind:parameter`, except `timeout` which re-appends the `s`
/// unit suffix to a non-empty parameter. A parameterized kind with an empty
/// parameter yields the bare kind name, never a trailing colon.
pub fn encode(kind: ConditionKind, parameter: &str) -> String {
    if !kind.has_parameter() || parameter.is_empty() {
        return kind.name().to_string();
    }
    if kind == ConditionKind::Timeout {
        format!("{}:{}s", kind.name(), parameter)
    } else {
        format!("{}:{}", kind.name(), parameter)
    }
}
