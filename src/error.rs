use thiserror::Error;

/// Errors that can occur when loading or saving a workflow document.
///
/// Nothing in the conversion, reconciliation, or validation core is fatal:
/// those functions are total over their documented input domain. Errors
/// only arise at the document boundary, when JSON enters or leaves the
/// system.
#[derive(Error, Debug, Clone)]
pub enum WorkflowParseError {
    #[error("Failed to parse workflow JSON: {0}")]
    Json(String),

    #[error("Failed to read workflow file '{0}': {1}")]
    Io(String, String),
}
