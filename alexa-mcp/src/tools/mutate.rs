//! Mutation tools: add, delete, mark complete/incomplete, clear

use serde::Deserialize;
use serde_json::json;

use super::ToolDefinition;

/// `item_values` accepts either a single name or a list of names.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ItemNames {
    One(String),
    Many(Vec<String>),
}

impl ItemNames {
    /// Normalize to a list, preserving order and duplicates.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            ItemNames::One(name) => vec![name],
            ItemNames::Many(names) => names,
        }
    }
}

/// Shared schema fragment for the name-taking tools.
fn item_values_schema(description: &str) -> serde_json::Value {
    json!({
        "type": "object",
        "required": ["item_values"],
        "properties": {
            "item_values": {
                "description": description,
                "oneOf": [
                    { "type": "string" },
                    { "type": "array", "items": { "type": "string" } }
                ]
            }
        }
    })
}

/// add_item tool definition
pub fn add_item_tool() -> ToolDefinition {
    ToolDefinition {
        name: "add_item".to_string(),
        description: "Add one or more items to the Alexa shopping list. Duplicates are \
             allowed; nothing is checked against the existing list. Returns a summary of \
             what was added and what failed.".to_string(),
        input_schema: item_values_schema("Item name, or list of item names, to add"),
    }
}

/// delete_item tool definition
pub fn delete_item_tool() -> ToolDefinition {
    ToolDefinition {
        name: "delete_item".to_string(),
        description: "Delete one or more incomplete items from the Alexa shopping list by \
             name (case-insensitive, whitespace-trimmed). Each name deletes at most one \
             item; with duplicate names the first remaining match wins. Returns a summary \
             of deletions, names not found, and failures.".to_string(),
        input_schema: item_values_schema("Item name, or list of item names, to delete"),
    }
}

/// mark_complete tool definition
pub fn mark_complete_tool() -> ToolDefinition {
    ToolDefinition {
        name: "mark_complete".to_string(),
        description: "Mark one or more items on the Alexa shopping list as completed by \
             name (case-insensitive). Items already completed are reported as such without \
             any remote call.".to_string(),
        input_schema: item_values_schema("Item name, or list of item names, to mark complete"),
    }
}

/// mark_incomplete tool definition
pub fn mark_incomplete_tool() -> ToolDefinition {
    ToolDefinition {
        name: "mark_incomplete".to_string(),
        description: "Mark one or more completed items on the Alexa shopping list as \
             incomplete (active) again by name (case-insensitive). Use this if an item \
             was checked off by mistake.".to_string(),
        input_schema: item_values_schema("Item name, or list of item names, to mark incomplete"),
    }
}

/// clear_completed_items tool definition
pub fn clear_completed_tool() -> ToolDefinition {
    ToolDefinition {
        name: "clear_completed_items".to_string(),
        description: "Delete every item marked as completed from the Alexa shopping list. \
             Re-fetches and deletes repeatedly until none remain, bounded by a safety cap \
             of 10 passes. Returns the total deleted, the number of passes, and any items \
             that could not be deleted.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
    }
}
