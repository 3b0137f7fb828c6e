//! MCP Tool implementations
//!
//! These are the tools exposed to agents through the MCP protocol. Tool
//! failures (fetch errors, bad arguments) are reported as tool content
//! with `isError`, never as protocol-level errors.

pub mod mutate;
pub mod query;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use alexa_core::ShoppingListApi;

use crate::clear::clear_completed;
use crate::error::McpError;
use crate::reconcile::{add_items, delete_items, mark_items_complete, mark_items_incomplete};
use crate::server::McpServer;

pub use mutate::ItemNames;

/// Tool definition for MCP protocol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name
    pub name: String,

    /// Description shown to the agent
    pub description: String,

    /// JSON Schema for input parameters
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Tool call request
#[derive(Debug, Deserialize)]
pub struct ToolCall {
    pub name: String,
    pub arguments: Value,
}

/// Tool call response
#[derive(Debug, Serialize)]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ToolContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

impl ToolResult {
    /// Plain text result.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent {
                content_type: "text".to_string(),
                text: text.into(),
            }],
            is_error: None,
        }
    }

    /// Text result flagged as a tool error.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent {
                content_type: "text".to_string(),
                text: text.into(),
            }],
            is_error: Some(true),
        }
    }
}

/// Get all shopping-list tool definitions.
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    vec![
        query::get_list_tool(),
        query::get_completed_list_tool(),
        mutate::add_item_tool(),
        mutate::delete_item_tool(),
        mutate::mark_complete_tool(),
        mutate::mark_incomplete_tool(),
        mutate::clear_completed_tool(),
    ]
}

/// Pull `item_values` (a string or an array of strings) out of the tool
/// arguments.
fn parse_item_values(args: &Value) -> Result<Vec<String>, McpError> {
    let raw = args.get("item_values").cloned().ok_or_else(|| {
        McpError::InvalidParams("Missing required parameter 'item_values'".to_string())
    })?;

    serde_json::from_value::<ItemNames>(raw)
        .map(ItemNames::into_vec)
        .map_err(|_| {
            McpError::InvalidParams(
                "'item_values' must be a string or an array of strings".to_string(),
            )
        })
}

impl<A: ShoppingListApi> McpServer<A> {
    /// Handle a tool call.
    pub fn handle_tool_call(&self, call: ToolCall) -> ToolResult {
        match call.name.as_str() {
            "get_list" => self.handle_get_list(),
            "get_completed_list" => self.handle_get_completed_list(),
            "add_item" => self.handle_add_item(call.arguments),
            "delete_item" => self.handle_delete_item(call.arguments),
            "mark_complete" => self.handle_mark_complete(call.arguments),
            "mark_incomplete" => self.handle_mark_incomplete(call.arguments),
            "clear_completed_items" => self.handle_clear_completed(),
            _ => ToolResult::error(McpError::UnknownTool(call.name).to_string()),
        }
    }

    /// Render a name list as the JSON array the list tools return.
    fn render_names(names: &[String]) -> ToolResult {
        ToolResult::text(serde_json::to_string(names).unwrap_or_default())
    }

    fn handle_get_list(&self) -> ToolResult {
        info!("Tool 'get_list' called");
        match self.api.fetch_items() {
            Err(e) => {
                tracing::error!(error = %e, "get_list failed");
                Self::render_names(&["Error: Could not retrieve shopping list items.".to_string()])
            }
            Ok(items) => {
                let names: Vec<String> = items
                    .into_iter()
                    .filter(|i| !i.completed)
                    .map(|i| i.value)
                    .collect();
                if names.is_empty() {
                    Self::render_names(&[
                        "Shopping list is empty or has no incomplete items.".to_string()
                    ])
                } else {
                    Self::render_names(&names)
                }
            }
        }
    }

    fn handle_get_completed_list(&self) -> ToolResult {
        info!("Tool 'get_completed_list' called");
        match self.api.fetch_items() {
            Err(e) => {
                tracing::error!(error = %e, "get_completed_list failed");
                Self::render_names(&["Error: Could not retrieve shopping list items.".to_string()])
            }
            Ok(items) => {
                let names: Vec<String> = items
                    .into_iter()
                    .filter(|i| i.completed)
                    .map(|i| i.value)
                    .collect();
                if names.is_empty() {
                    Self::render_names(&["No completed items found on the list.".to_string()])
                } else {
                    Self::render_names(&names)
                }
            }
        }
    }

    fn handle_add_item(&self, args: Value) -> ToolResult {
        info!("Tool 'add_item' called");
        let names = match parse_item_values(&args) {
            Ok(names) => names,
            Err(e) => return ToolResult::error(e.to_string()),
        };
        match add_items(&self.api, &names) {
            Ok(report) => ToolResult::text(report.render()),
            Err(e) => ToolResult::text(e.to_string()),
        }
    }

    fn handle_delete_item(&self, args: Value) -> ToolResult {
        info!("Tool 'delete_item' called");
        let names = match parse_item_values(&args) {
            Ok(names) => names,
            Err(e) => return ToolResult::error(e.to_string()),
        };
        match delete_items(&self.api, &names) {
            Ok(report) => ToolResult::text(report.render()),
            Err(e) => ToolResult::text(e.to_string()),
        }
    }

    fn handle_mark_complete(&self, args: Value) -> ToolResult {
        info!("Tool 'mark_complete' called");
        let names = match parse_item_values(&args) {
            Ok(names) => names,
            Err(e) => return ToolResult::error(e.to_string()),
        };
        match mark_items_complete(&self.api, &names) {
            Ok(report) => ToolResult::text(report.render()),
            Err(e) => ToolResult::text(e.to_string()),
        }
    }

    fn handle_mark_incomplete(&self, args: Value) -> ToolResult {
        info!("Tool 'mark_incomplete' called");
        let names = match parse_item_values(&args) {
            Ok(names) => names,
            Err(e) => return ToolResult::error(e.to_string()),
        };
        match mark_items_incomplete(&self.api, &names) {
            Ok(report) => ToolResult::text(report.render()),
            Err(e) => ToolResult::text(e.to_string()),
        }
    }

    fn handle_clear_completed(&self) -> ToolResult {
        info!("Tool 'clear_completed_items' called");
        match clear_completed(&self.api) {
            Ok(report) => ToolResult::text(report.render()),
            Err(aborted) => ToolResult::error(aborted.render()),
        }
    }
}
