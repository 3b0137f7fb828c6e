//! Shopping list item model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Normalize an item value for matching: trim whitespace, lowercase.
///
/// All name matching in the system goes through this. Names that are empty
/// after trimming are not valid matching keys.
pub fn normalize_value(s: &str) -> String {
    s.trim().to_lowercase()
}

/// A single item on the Alexa shopping list.
///
/// `id` is assigned by the remote service; items without one cannot be
/// deleted or updated. The update and delete endpoints expect the *full*
/// item object echoed back, so any fields this client does not model are
/// preserved in `extra` and round-tripped untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    /// Server-assigned item id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name of the item
    #[serde(default)]
    pub value: String,

    /// Whether the item has been checked off
    #[serde(default)]
    pub completed: bool,

    /// Unrecognized API fields, preserved for echo-back payloads
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ShoppingItem {
    /// Create a local item with just a display name.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            id: None,
            value: value.into(),
            completed: false,
            extra: Map::new(),
        }
    }

    /// Set the server-assigned id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the completion state.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// The normalized matching key for this item's display name.
    pub fn normalized_value(&self) -> String {
        normalize_value(&self.value)
    }
}
