//! Delete confirmation flow.

use std::cell::Cell;
use std::future::Future;

use leptos::prelude::*;

use crate::shared::error::ApiError;

/// Pending flag of a delete modal
pub trait PendingCell {
    /// Returns `false` if a delete is already running
    fn try_begin(&self) -> bool;
    fn finish(&self);
}

impl PendingCell for RwSignal<bool> {
    fn try_begin(&self) -> bool {
        if self.get_untracked() {
            return false;
        }
        self.set(true);
        true
    }

    fn finish(&self) {
        self.try_set(false);
    }
}

impl PendingCell for Cell<bool> {
    fn try_begin(&self) -> bool {
        !self.replace(true)
    }

    fn finish(&self) {
        self.set(false);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Deleted,
    Busy,
    /// The modal stays open so the user can retry or cancel
    Failed(ApiError),
}

/// Runs `action` once unless a delete is already pending.
pub async fn confirm_delete<P, F, Fut>(pending: &P, action: F) -> DeleteOutcome
where
    P: PendingCell,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    if !pending.try_begin() {
        return DeleteOutcome::Busy;
    }
    let result = action().await;
    pending.finish();
    match result {
        Ok(()) => DeleteOutcome::Deleted,
        Err(err) => DeleteOutcome::Failed(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[tokio::test]
    async fn test_delete_runs_action_once() {
        let pending = Cell::new(false);
        let deleted = RefCell::new(Vec::new());

        let outcome = confirm_delete(&pending, || {
            deleted.borrow_mut().push("d1".to_string());
            async { Ok(()) }
        })
        .await;

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(*deleted.borrow(), vec!["d1".to_string()]);
        assert!(!pending.get());
    }

    #[tokio::test]
    async fn test_rejected_delete_reports_failure() {
        let pending = Cell::new(false);
        let outcome = confirm_delete(&pending, || async {
            Err(ApiError::Network("offline".into()))
        })
        .await;
        assert_eq!(outcome, DeleteOutcome::Failed(ApiError::Network("offline".into())));
        assert!(!pending.get());
    }

    #[tokio::test]
    async fn test_second_click_while_pending_is_ignored() {
        let pending = Cell::new(true);
        let calls = Cell::new(0);
        let outcome = confirm_delete(&pending, || {
            calls.set(calls.get() + 1);
            async { Ok(()) }
        })
        .await;
        assert_eq!(outcome, DeleteOutcome::Busy);
        assert_eq!(calls.get(), 0);
    }
}
