//! Client configuration
//!
//! Everything the client needs is carried in an explicit [`ApiConfig`]
//! passed in at construction; there is no global state. Defaults match the
//! production Alexa endpoints.

use std::path::PathBuf;

/// Default Amazon base URL
pub const DEFAULT_BASE_URL: &str = "https://www.amazon.com";

/// Default location of the browser-exported cookie file
pub const DEFAULT_COOKIE_PATH: &str = "data/cookies.json";

/// Opaque id of the shopping list, used as a path segment on the add
/// endpoint. The value is the base64 list handle Amazon assigns per account.
pub const DEFAULT_LIST_ID: &str =
    "YW16bjEuYWNjb3VudC5BSERXNEkyVE00U1I0UVQ2VUpINzNWUVpaQU5BLVNIT1BQSU5HX0lURU0=";

/// Configuration for [`AlexaClient`](crate::AlexaClient)
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the Amazon site the cookies were issued for
    pub base_url: String,

    /// Path to the JSON cookie export
    pub cookie_path: PathBuf,

    /// Opaque list id for the add endpoint
    pub list_id: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cookie_path: PathBuf::from(DEFAULT_COOKIE_PATH),
            list_id: DEFAULT_LIST_ID.to_string(),
        }
    }
}

impl ApiConfig {
    /// Create a config from explicit parts.
    pub fn new(base_url: impl Into<String>, cookie_path: impl Into<PathBuf>, list_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            cookie_path: cookie_path.into(),
            list_id: list_id.into(),
        }
    }

    fn join(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// URL of the fetch-all endpoint.
    pub fn list_items_url(&self) -> String {
        self.join("/alexashoppinglists/api/getlistitems")
    }

    /// URL of the add endpoint (includes the list id as a path segment).
    pub fn add_item_url(&self) -> String {
        self.join(&format!("/alexashoppinglists/api/addlistitem/{}", self.list_id))
    }

    /// URL of the delete endpoint.
    pub fn delete_item_url(&self) -> String {
        self.join("/alexashoppinglists/api/deletelistitem")
    }

    /// URL of the update endpoint.
    pub fn update_item_url(&self) -> String {
        self.join("/alexashoppinglists/api/updatelistitem")
    }
}
