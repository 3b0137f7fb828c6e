//! Convergence loop for `clear_completed_items`
//!
//! Deleting completed items can race the service (lists that regenerate,
//! partial deletes, same-named items). Instead of trusting one snapshot,
//! the loop re-fetches and deletes until a snapshot contains no completed
//! items, bounded by a fixed iteration cap.

use tracing::{debug, info, warn};

use alexa_core::ShoppingListApi;

/// Safety cap on snapshot+delete passes for one invocation.
pub const MAX_CLEAR_ITERATIONS: usize = 10;

/// State of the convergence loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearState {
    /// Fetching a snapshot and looking for completed items
    Scanning,

    /// Deleting the completed items of the current snapshot
    Deleting,

    /// A snapshot contained no completed items
    Done,

    /// Iteration cap reached with completed items possibly remaining
    Capped,
}

/// Final accounting for a run that reached `Done` or `Capped`.
#[derive(Debug, Clone)]
pub struct ClearReport {
    pub state: ClearState,
    pub iterations: usize,
    pub deleted: usize,
    /// Item values that could not be deleted, de-duplicated across all
    /// iterations. Id-less items are recorded as `<value> (Missing ID)`.
    pub failures: Vec<String>,
}

impl ClearReport {
    /// Human summary: iteration count, total deleted, failure list.
    pub fn render(&self) -> String {
        let mut summary = format!(
            "Clear completed process finished after {} iteration(s). Total Deleted: {}.",
            self.iterations, self.deleted
        );
        if !self.failures.is_empty() {
            summary.push_str(&format!(
                " Failures encountered for: {}.",
                self.failures.join(", ")
            ));
        }
        summary
    }
}

/// A run aborted by a snapshot fetch failure. Progress made before the
/// abort is preserved for the report.
#[derive(Debug, Clone)]
pub struct ClearAborted {
    pub iterations: usize,
    pub deleted: usize,
    pub failures: Vec<String>,
}

impl ClearAborted {
    pub fn render(&self) -> String {
        let mut msg =
            "Error: Could not retrieve shopping list items during clearing process.".to_string();
        if self.deleted > 0 || !self.failures.is_empty() {
            msg.push_str(&format!(
                " So far: Deleted {}, Failures: {}.",
                self.deleted,
                self.failures.len()
            ));
        }
        msg
    }
}

fn record_failure(failures: &mut Vec<String>, value: String) {
    if !failures.contains(&value) {
        failures.push(value);
    }
}

/// Repeatedly snapshot the list and delete every completed item until a
/// snapshot shows none left or [`MAX_CLEAR_ITERATIONS`] passes have run.
pub fn clear_completed<A: ShoppingListApi>(api: &A) -> Result<ClearReport, ClearAborted> {
    let mut state = ClearState::Scanning;
    let mut iterations = 0;
    let mut deleted = 0;
    let mut failures: Vec<String> = Vec::new();

    loop {
        if iterations == MAX_CLEAR_ITERATIONS {
            warn!(
                max = MAX_CLEAR_ITERATIONS,
                "Clear completed stopped at iteration cap; completed items may remain"
            );
            state = ClearState::Capped;
            break;
        }
        iterations += 1;
        debug!(iteration = iterations, ?state, "Clear completed pass");

        let snapshot = match api.fetch_items() {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, iteration = iterations, "Snapshot fetch failed during clearing");
                return Err(ClearAborted {
                    iterations,
                    deleted,
                    failures,
                });
            }
        };

        let completed: Vec<_> = snapshot.into_iter().filter(|i| i.completed).collect();
        if completed.is_empty() {
            info!(iterations, deleted, "No completed items remain");
            state = ClearState::Done;
            break;
        }

        state = ClearState::Deleting;
        debug!(?state, count = completed.len(), "Deleting completed items in this snapshot");
        for item in &completed {
            if item.id.is_none() {
                warn!(item = %item.value, "Skipping completed item with no id");
                record_failure(&mut failures, format!("{} (Missing ID)", item.value));
                continue;
            }

            match api.delete_item(item) {
                Ok(()) => deleted += 1,
                Err(e) => {
                    warn!(item = %item.value, error = %e, "Failed to delete completed item");
                    record_failure(&mut failures, item.value.clone());
                }
            }
        }

        state = ClearState::Scanning;
    }

    Ok(ClearReport {
        state,
        iterations,
        deleted,
        failures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_done_without_failures() {
        let report = ClearReport {
            state: ClearState::Done,
            iterations: 2,
            deleted: 3,
            failures: vec![],
        };
        assert_eq!(
            report.render(),
            "Clear completed process finished after 2 iteration(s). Total Deleted: 3."
        );
    }

    #[test]
    fn test_render_with_failures() {
        let report = ClearReport {
            state: ClearState::Capped,
            iterations: 10,
            deleted: 1,
            failures: vec!["Jam".to_string(), "Tea (Missing ID)".to_string()],
        };
        assert_eq!(
            report.render(),
            "Clear completed process finished after 10 iteration(s). Total Deleted: 1. \
             Failures encountered for: Jam, Tea (Missing ID)."
        );
    }

    #[test]
    fn test_render_aborted_with_and_without_progress() {
        let fresh = ClearAborted {
            iterations: 1,
            deleted: 0,
            failures: vec![],
        };
        assert_eq!(
            fresh.render(),
            "Error: Could not retrieve shopping list items during clearing process."
        );

        let partial = ClearAborted {
            iterations: 2,
            deleted: 4,
            failures: vec!["Jam".to_string()],
        };
        assert_eq!(
            partial.render(),
            "Error: Could not retrieve shopping list items during clearing process. \
             So far: Deleted 4, Failures: 1."
        );
    }

    #[test]
    fn test_record_failure_dedups() {
        let mut failures = vec!["Jam".to_string()];
        record_failure(&mut failures, "Jam".to_string());
        record_failure(&mut failures, "Tea".to_string());
        assert_eq!(failures, vec!["Jam".to_string(), "Tea".to_string()]);
    }
}
