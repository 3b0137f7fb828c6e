//! The collaborator seam consumed by the MCP server
//!
//! The reconciliation logic never talks HTTP directly; it sees the remote
//! list only through this trait. Tests substitute an in-memory fake.

use crate::error::ApiResult;
use crate::item::ShoppingItem;

/// Access to the remote shopping list.
///
/// One snapshot or mutation per call; no retries, no caching. Every
/// mutation is terminal for its item: a failure is reported to the caller
/// and never retried here.
pub trait ShoppingListApi {
    /// Fetch a snapshot of every item on the list, completed or not, in
    /// the order the service returns them.
    fn fetch_items(&self) -> ApiResult<Vec<ShoppingItem>>;

    /// Add a new item with the given display name. Duplicates are allowed
    /// by the remote service and not checked here.
    fn add_item(&self, value: &str) -> ApiResult<()>;

    /// Delete one item. Requires a server-assigned id.
    fn delete_item(&self, item: &ShoppingItem) -> ApiResult<()>;

    /// Set the completion state of one item.
    fn set_completed(&self, item: &ShoppingItem, completed: bool) -> ApiResult<()>;
}
