//! In-memory stand-in for the remote shopping list.
#![allow(dead_code)]

use std::cell::RefCell;

use alexa_core::{ApiError, ApiResult, ShoppingItem, ShoppingListApi};

/// Fake accessor backed by a `RefCell` list. Mutations are logged so tests
/// can assert which remote calls were (or were not) made, and failures can
/// be injected per item value or per fetch.
pub struct FakeApi {
    items: RefCell<Vec<ShoppingItem>>,
    calls: RefCell<Vec<String>>,
    fetch_count: RefCell<usize>,
    fail_fetch_at: Option<usize>,
    fail_values: Vec<String>,
    sticky_deletes: bool,
    next_id: RefCell<usize>,
}

impl FakeApi {
    pub fn new(items: Vec<ShoppingItem>) -> Self {
        Self {
            items: RefCell::new(items),
            calls: RefCell::new(Vec::new()),
            fetch_count: RefCell::new(0),
            fail_fetch_at: None,
            fail_values: Vec::new(),
            sticky_deletes: false,
            next_id: RefCell::new(1000),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Make the n-th fetch (1-based) and all later fetches fail.
    pub fn fail_fetch_at(mut self, n: usize) -> Self {
        self.fail_fetch_at = Some(n);
        self
    }

    /// Make every mutation touching one of these values fail.
    pub fn with_failing_values(mut self, values: &[&str]) -> Self {
        self.fail_values = values.iter().map(|v| v.to_string()).collect();
        self
    }

    /// Deletes report success but leave the item in place, simulating a
    /// list that regenerates faster than it is cleared.
    pub fn with_sticky_deletes(mut self) -> Self {
        self.sticky_deletes = true;
        self
    }

    /// Mutation log, e.g. `["delete:Milk", "add:Eggs", "set:Jam:true"]`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn items(&self) -> Vec<ShoppingItem> {
        self.items.borrow().clone()
    }

    fn injected_failure(&self, value: &str) -> ApiResult<()> {
        if self.fail_values.iter().any(|v| v == value) {
            Err(ApiError::UnexpectedResponse {
                reason: format!("injected failure for '{}'", value),
            })
        } else {
            Ok(())
        }
    }

    /// Mirror of the real accessor's id guard on delete/update.
    fn require_id(item: &ShoppingItem) -> ApiResult<String> {
        item.id.clone().ok_or_else(|| ApiError::MissingItemId {
            value: item.value.clone(),
        })
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        self.items
            .borrow()
            .iter()
            .position(|i| i.id.as_deref() == Some(id))
    }
}

impl ShoppingListApi for FakeApi {
    fn fetch_items(&self) -> ApiResult<Vec<ShoppingItem>> {
        let mut count = self.fetch_count.borrow_mut();
        *count += 1;
        if let Some(n) = self.fail_fetch_at {
            if *count >= n {
                return Err(ApiError::UnexpectedResponse {
                    reason: "injected fetch failure".to_string(),
                });
            }
        }
        Ok(self.items.borrow().clone())
    }

    fn add_item(&self, value: &str) -> ApiResult<()> {
        self.calls.borrow_mut().push(format!("add:{}", value));
        self.injected_failure(value)?;

        let mut next_id = self.next_id.borrow_mut();
        *next_id += 1;
        self.items
            .borrow_mut()
            .push(ShoppingItem::new(value).with_id(next_id.to_string()));
        Ok(())
    }

    fn delete_item(&self, item: &ShoppingItem) -> ApiResult<()> {
        let id = Self::require_id(item)?;
        self.calls.borrow_mut().push(format!("delete:{}", item.value));
        self.injected_failure(&item.value)?;

        if !self.sticky_deletes {
            if let Some(idx) = self.position_of(&id) {
                self.items.borrow_mut().remove(idx);
            }
        }
        Ok(())
    }

    fn set_completed(&self, item: &ShoppingItem, completed: bool) -> ApiResult<()> {
        let id = Self::require_id(item)?;
        self.calls
            .borrow_mut()
            .push(format!("set:{}:{}", item.value, completed));
        self.injected_failure(&item.value)?;

        if let Some(idx) = self.position_of(&id) {
            self.items.borrow_mut()[idx].completed = completed;
        }
        Ok(())
    }
}

/// Convenience constructor for snapshot fixtures.
pub fn item(id: &str, value: &str, completed: bool) -> ShoppingItem {
    ShoppingItem::new(value).with_id(id).with_completed(completed)
}
