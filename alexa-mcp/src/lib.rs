//! Alexa Shopping List MCP Server Library
//!
//! This crate exposes the Alexa shopping list to AI agents through the
//! Model Context Protocol (JSON-RPC over stdio).
//!
//! ## Architecture
//!
//! ```text
//! Agent (Claude, GPT, etc.)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │    MCP Server    │ ◄── this crate
//! │                  │
//! │  ┌────────────┐  │  get_list / get_completed_list
//! │  │   Tools    │  │  add_item / delete_item
//! │  │            │  │  mark_complete / mark_incomplete
//! │  │            │  │  clear_completed_items
//! │  └────────────┘  │
//! │  ┌────────────┐  │
//! │  │ Reconciler │  │  name → remote item matching,
//! │  └────────────┘  │  per-item outcome buckets
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │    alexa-core    │  cookie auth │ list API
//! └──────────────────┘
//! ```
//!
//! Batch tools take one or more item names, match them case-insensitively
//! against a snapshot of the remote list, apply one mutation per name, and
//! report a per-name outcome. `clear_completed_items` loops snapshot+delete
//! until the list converges or a safety cap is hit.

pub mod clear;
pub mod error;
pub mod reconcile;
pub mod server;
pub mod tools;

pub use error::{McpError, McpResult};
pub use server::McpServer;

/// Server metadata for the MCP protocol
pub const SERVER_NAME: &str = "alexa-shopping-list";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SERVER_INSTRUCTIONS: &str = "Manage the Amazon Alexa shopping list. Use get_list to see what is still \
     needed, add_item / delete_item / mark_complete / mark_incomplete with a \
     single name or a list of names, and clear_completed_items to purge \
     everything already checked off.";
