//! Error types for the MCP server

use thiserror::Error;

/// Result type for MCP operations
pub type McpResult<T> = Result<T, McpError>;

/// Errors that can occur in the MCP server
#[derive(Error, Debug)]
pub enum McpError {
    /// Remote list API failure
    #[error("API error: {0}")]
    Api(#[from] alexa_core::ApiError),

    /// Tool was called with arguments that do not match its schema
    #[error("Invalid tool parameters: {0}")]
    InvalidParams(String),

    /// No tool with the requested name
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// I/O error on the stdio transport
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl McpError {
    /// Get the JSON-RPC error code for this error
    pub fn error_code(&self) -> i32 {
        match self {
            McpError::InvalidParams(_) => -32602,
            McpError::UnknownTool(_) => -32601,
            McpError::Serialization(_) => -32700,
            _ => -32603,
        }
    }
}
