//! # Alexa Core - Shopping List API Client
//!
//! This crate wraps the undocumented Amazon Alexa shopping-list API behind
//! two narrow surfaces:
//!
//! - [`ShoppingListApi`]: the trait consumed by the MCP server. Fetch all
//!   items, add one, delete one, set completion on one. No retries, no
//!   caching.
//! - [`AlexaClient`]: the HTTP implementation, authenticated with
//!   browser-derived session cookies loaded from a JSON export file.
//!
//! Browser login and cookie acquisition are out of scope; the cookie file
//! is assumed to exist and be valid before the client is constructed.
//!
//! ## Example
//!
//! ```rust,no_run
//! use alexa_core::{AlexaClient, ApiConfig, ShoppingListApi};
//!
//! let config = ApiConfig::default();
//! let client = AlexaClient::from_config(config).unwrap();
//! for item in client.fetch_items().unwrap() {
//!     println!("{} (completed: {})", item.value, item.completed);
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod cookies;
pub mod error;
pub mod item;

pub use api::ShoppingListApi;
pub use client::AlexaClient;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use item::ShoppingItem;
