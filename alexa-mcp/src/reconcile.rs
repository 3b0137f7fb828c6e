//! Name-based reconciliation for the batch tools
//!
//! Human-supplied item names have no ids; the remote list's only identity
//! key is a server-assigned id. Each batch tool therefore snapshots the
//! remote list once, matches names against it (trimmed, case-insensitive,
//! first match wins), applies one mutation per name, and buckets every
//! name into exactly one [`ItemOutcome`]. A successfully mutated item is
//! removed from the local candidate pool so a duplicate name later in the
//! same batch cannot re-match the same remote record.

use thiserror::Error;
use tracing::{debug, warn};

use alexa_core::item::normalize_value;
use alexa_core::{ApiError, ShoppingItem, ShoppingListApi};

/// Summary line when every bucket is empty.
pub const NO_ACTIONS: &str = "No actions performed or items provided.";

/// Per-item outcome of a batch operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    Added,
    Deleted,
    MarkedComplete,
    MarkedIncomplete,
    /// No matching item in the snapshot
    NotFound,
    /// Matched an item the service never assigned an id to
    MissingId,
    /// Already in the requested state; no remote call made
    AlreadyComplete,
    AlreadyIncomplete,
    /// The remote mutation failed
    Failed,
}

/// Which batch operation a report belongs to. Determines the summary
/// labels and the bucket priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchKind {
    Add,
    Delete,
    MarkComplete,
    MarkIncomplete,
}

impl BatchKind {
    /// Buckets in render priority order, with their summary labels.
    fn labels(&self) -> &'static [(ItemOutcome, &'static str)] {
        use ItemOutcome::*;
        match self {
            BatchKind::Add => &[(Added, "Added"), (Failed, "Failed to add")],
            BatchKind::Delete => &[
                (Deleted, "Deleted"),
                (NotFound, "Not found (incomplete)"),
                (MissingId, "Found but missing ID"),
                (Failed, "Failed to delete"),
            ],
            BatchKind::MarkComplete => &[
                (MarkedComplete, "Marked complete"),
                (NotFound, "Not found (incomplete)"),
                (MissingId, "Found but missing ID"),
                (AlreadyComplete, "Already complete"),
                (Failed, "Failed to mark complete"),
            ],
            BatchKind::MarkIncomplete => &[
                (MarkedIncomplete, "Marked incomplete"),
                (NotFound, "Not found"),
                (AlreadyIncomplete, "Already incomplete"),
                (Failed, "Failed to mark incomplete"),
            ],
        }
    }

    /// Phrase used in the "no valid names" error message.
    fn action_phrase(&self) -> &'static str {
        match self {
            BatchKind::Add => "to add",
            BatchKind::Delete => "for deletion",
            BatchKind::MarkComplete => "to mark complete",
            BatchKind::MarkIncomplete => "to mark incomplete",
        }
    }
}

/// One name and where it ended up.
#[derive(Debug, Clone)]
pub struct BatchEntry {
    pub name: String,
    pub outcome: ItemOutcome,
}

/// Structured result of one batch operation, in encounter order.
#[derive(Debug, Clone)]
pub struct BatchReport {
    kind: BatchKind,
    entries: Vec<BatchEntry>,
}

impl BatchReport {
    fn new(kind: BatchKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    fn record(&mut self, name: &str, outcome: ItemOutcome) {
        self.entries.push(BatchEntry {
            name: name.to_string(),
            outcome,
        });
    }

    /// All entries in encounter order.
    pub fn entries(&self) -> &[BatchEntry] {
        &self.entries
    }

    /// Names that landed in the given bucket, in encounter order.
    pub fn names_with(&self, outcome: ItemOutcome) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.outcome == outcome)
            .map(|e| e.name.as_str())
            .collect()
    }

    /// One-line human summary: non-empty buckets in priority order, each
    /// as `Label: a, b.`; all-empty collapses to [`NO_ACTIONS`].
    pub fn render(&self) -> String {
        let mut parts = Vec::new();
        for (outcome, label) in self.kind.labels() {
            let names = self.names_with(*outcome);
            if !names.is_empty() {
                parts.push(format!("{}: {}.", label, names.join(", ")));
            }
        }
        if parts.is_empty() {
            NO_ACTIONS.to_string()
        } else {
            parts.join(" ")
        }
    }
}

/// A batch that never got as far as per-item outcomes.
#[derive(Debug, Error)]
pub enum BatchError {
    /// Every supplied name normalized to the empty string
    #[error("Error: No valid item values provided {}.", .0.action_phrase())]
    NoValidNames(BatchKind),

    /// The snapshot fetch failed; nothing was attempted
    #[error("Error: Could not retrieve shopping list items to process request.")]
    Fetch(#[source] ApiError),
}

/// Trim the batch input, dropping names that normalize to empty.
fn trimmed_names(names: &[String]) -> Vec<&str> {
    names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .collect()
}

/// First candidate (in accessor order) whose normalized value matches.
/// First-match-wins is the deliberate tie-break for duplicate display
/// names.
fn find_first_unconsumed(pool: &[ShoppingItem], normalized: &str) -> Option<usize> {
    pool.iter().position(|i| i.normalized_value() == normalized)
}

/// Add every name to the list. No pre-check against existing items;
/// duplicates are allowed by the remote service and by this tool.
pub fn add_items<A: ShoppingListApi>(api: &A, names: &[String]) -> Result<BatchReport, BatchError> {
    let targets = trimmed_names(names);
    if targets.is_empty() {
        return Err(BatchError::NoValidNames(BatchKind::Add));
    }

    let mut report = BatchReport::new(BatchKind::Add);
    for name in targets {
        debug!(item = %name, "Attempting to add item");
        match api.add_item(name) {
            Ok(()) => report.record(name, ItemOutcome::Added),
            Err(e) => {
                warn!(item = %name, error = %e, "Failed to add item");
                report.record(name, ItemOutcome::Failed);
            }
        }
    }
    Ok(report)
}

/// Delete the first incomplete item matching each name.
pub fn delete_items<A: ShoppingListApi>(
    api: &A,
    names: &[String],
) -> Result<BatchReport, BatchError> {
    let targets = trimmed_names(names);
    if targets.is_empty() {
        return Err(BatchError::NoValidNames(BatchKind::Delete));
    }

    let snapshot = api.fetch_items().map_err(BatchError::Fetch)?;
    let mut pool: Vec<ShoppingItem> = snapshot.into_iter().filter(|i| !i.completed).collect();

    let mut report = BatchReport::new(BatchKind::Delete);
    for name in targets {
        let key = normalize_value(name);
        let Some(idx) = find_first_unconsumed(&pool, &key) else {
            report.record(name, ItemOutcome::NotFound);
            continue;
        };

        if pool[idx].id.is_none() {
            report.record(name, ItemOutcome::MissingId);
            continue;
        }

        debug!(item = %name, id = ?pool[idx].id, "Attempting to delete item");
        match api.delete_item(&pool[idx]) {
            Ok(()) => {
                // Consume the matched record so a duplicate name later in
                // this batch cannot re-match it.
                pool.remove(idx);
                report.record(name, ItemOutcome::Deleted);
            }
            Err(e) => {
                warn!(item = %name, error = %e, "Failed to delete item");
                report.record(name, ItemOutcome::Failed);
            }
        }
    }
    Ok(report)
}

/// Mark the first incomplete item matching each name as completed. A name
/// that only matches an already-completed item buckets as
/// `AlreadyComplete` with no remote call.
pub fn mark_items_complete<A: ShoppingListApi>(
    api: &A,
    names: &[String],
) -> Result<BatchReport, BatchError> {
    let targets = trimmed_names(names);
    if targets.is_empty() {
        return Err(BatchError::NoValidNames(BatchKind::MarkComplete));
    }

    let snapshot = api.fetch_items().map_err(BatchError::Fetch)?;
    let completed_keys: Vec<String> = snapshot
        .iter()
        .filter(|i| i.completed)
        .map(|i| i.normalized_value())
        .collect();
    let mut pool: Vec<ShoppingItem> = snapshot.into_iter().filter(|i| !i.completed).collect();

    let mut report = BatchReport::new(BatchKind::MarkComplete);
    for name in targets {
        let key = normalize_value(name);
        let Some(idx) = find_first_unconsumed(&pool, &key) else {
            // Not among the incomplete candidates; if a completed item
            // carries this name the request is already satisfied.
            if completed_keys.iter().any(|k| k == &key) {
                report.record(name, ItemOutcome::AlreadyComplete);
            } else {
                report.record(name, ItemOutcome::NotFound);
            }
            continue;
        };

        if pool[idx].id.is_none() {
            report.record(name, ItemOutcome::MissingId);
            continue;
        }

        debug!(item = %name, "Attempting to mark item complete");
        match api.set_completed(&pool[idx], true) {
            Ok(()) => {
                pool.remove(idx);
                report.record(name, ItemOutcome::MarkedComplete);
            }
            Err(e) => {
                warn!(item = %name, error = %e, "Failed to mark item complete");
                report.record(name, ItemOutcome::Failed);
            }
        }
    }
    Ok(report)
}

/// Mark the first item matching each name as incomplete. Searches the
/// whole snapshot; a match that is already incomplete buckets as
/// `AlreadyIncomplete` with no remote call.
pub fn mark_items_incomplete<A: ShoppingListApi>(
    api: &A,
    names: &[String],
) -> Result<BatchReport, BatchError> {
    let targets = trimmed_names(names);
    if targets.is_empty() {
        return Err(BatchError::NoValidNames(BatchKind::MarkIncomplete));
    }

    let mut pool = api.fetch_items().map_err(BatchError::Fetch)?;

    let mut report = BatchReport::new(BatchKind::MarkIncomplete);
    for name in targets {
        let key = normalize_value(name);
        let Some(idx) = find_first_unconsumed(&pool, &key) else {
            report.record(name, ItemOutcome::NotFound);
            continue;
        };

        if !pool[idx].completed {
            report.record(name, ItemOutcome::AlreadyIncomplete);
            continue;
        }

        debug!(item = %name, "Attempting to mark item incomplete");
        match api.set_completed(&pool[idx], false) {
            Ok(()) => {
                pool.remove(idx);
                report.record(name, ItemOutcome::MarkedIncomplete);
            }
            Err(e) => {
                warn!(item = %name, error = %e, "Failed to mark item incomplete");
                report.record(name, ItemOutcome::Failed);
            }
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with(kind: BatchKind, entries: &[(&str, ItemOutcome)]) -> BatchReport {
        let mut report = BatchReport::new(kind);
        for (name, outcome) in entries {
            report.record(name, *outcome);
        }
        report
    }

    #[test]
    fn test_render_joins_buckets_in_priority_order() {
        let report = report_with(
            BatchKind::Delete,
            &[
                ("bread", ItemOutcome::NotFound),
                ("milk", ItemOutcome::Deleted),
                ("jam", ItemOutcome::Failed),
                ("eggs", ItemOutcome::Deleted),
            ],
        );
        assert_eq!(
            report.render(),
            "Deleted: milk, eggs. Not found (incomplete): bread. Failed to delete: jam."
        );
    }

    #[test]
    fn test_render_omits_empty_buckets() {
        let report = report_with(BatchKind::Add, &[("milk", ItemOutcome::Added)]);
        assert_eq!(report.render(), "Added: milk.");
    }

    #[test]
    fn test_render_empty_report_is_sentinel() {
        let report = BatchReport::new(BatchKind::MarkComplete);
        assert_eq!(report.render(), NO_ACTIONS);
    }

    #[test]
    fn test_no_valid_names_messages() {
        assert_eq!(
            BatchError::NoValidNames(BatchKind::Add).to_string(),
            "Error: No valid item values provided to add."
        );
        assert_eq!(
            BatchError::NoValidNames(BatchKind::Delete).to_string(),
            "Error: No valid item values provided for deletion."
        );
        assert_eq!(
            BatchError::NoValidNames(BatchKind::MarkIncomplete).to_string(),
            "Error: No valid item values provided to mark incomplete."
        );
    }

    #[test]
    fn test_trimmed_names_drops_empty() {
        let names = vec!["  Milk ".to_string(), "".to_string(), "  ".to_string()];
        assert_eq!(trimmed_names(&names), vec!["Milk"]);
    }

    #[test]
    fn test_find_first_unconsumed_prefers_accessor_order() {
        let pool = vec![
            ShoppingItem::new("Milk").with_id("1"),
            ShoppingItem::new("milk").with_id("2"),
        ];
        assert_eq!(find_first_unconsumed(&pool, "milk"), Some(0));
        assert_eq!(find_first_unconsumed(&pool, "eggs"), None);
    }
}
