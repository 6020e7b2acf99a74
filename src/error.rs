//! Error types for tool dispatch.

use pmcp::ErrorCode;

/// Errors produced by the tool dispatcher.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// The caller asked for a tool outside the static catalog.
    #[error("unknown tool: {0}")]
    UnknownTool(String),
}

impl From<ToolError> for pmcp::Error {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::UnknownTool(name) => pmcp::Error::protocol(
                ErrorCode::METHOD_NOT_FOUND,
                format!("Tool '{name}' not found"),
            ),
        }
    }
}
