//! Read-only list tools

use serde_json::json;

use super::ToolDefinition;

/// get_list tool definition
pub fn get_list_tool() -> ToolDefinition {
    ToolDefinition {
        name: "get_list".to_string(),
        description: "Retrieve the current incomplete items from the Alexa shopping list. \
             Returns a JSON array of item names, or a single sentinel string if the list \
             is empty or could not be fetched.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
    }
}

/// get_completed_list tool definition
pub fn get_completed_list_tool() -> ToolDefinition {
    ToolDefinition {
        name: "get_completed_list".to_string(),
        description: "Retrieve the items currently marked as completed on the Alexa \
             shopping list. Returns a JSON array of item names.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
    }
}
