//! Submit flow shared by every create/edit modal.

use std::cell::RefCell;
use std::future::Future;

use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

use super::draft::{DraftForm, FormDraft, FormMode, SubmitRejected};
use crate::shared::error::ApiError;

/// Somewhere a `DraftForm` lives: a signal in the UI, a `RefCell` in tests.
pub trait DraftCell<D: FormDraft> {
    /// `None` when the owner is gone (component unmounted)
    fn with_form<R>(&self, f: impl FnOnce(&mut DraftForm<D>) -> R) -> Option<R>;
}

impl<D: FormDraft> DraftCell<D> for RwSignal<DraftForm<D>> {
    fn with_form<R>(&self, f: impl FnOnce(&mut DraftForm<D>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<D: FormDraft> DraftCell<D> for RefCell<DraftForm<D>> {
    fn with_form<R>(&self, f: impl FnOnce(&mut DraftForm<D>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Saved,
    /// Validation failed, the mutation was not called
    Invalid(FieldErrors),
    /// A submit is already in flight
    Busy,
    Closed,
    /// Saved, but the form was closed and reopened meanwhile; the new
    /// draft is left alone
    Superseded,
    /// The mutation rejected; the draft is kept for a retry
    Failed(ApiError),
}

/// Validates the draft, runs `mutation` once with the parsed payload and
/// settles the form. `loading` is true exactly while the mutation runs.
pub async fn submit_draft<D, C, F, Fut>(cell: &C, mutation: F) -> SubmitOutcome
where
    D: FormDraft,
    C: DraftCell<D>,
    F: FnOnce(FormMode, D::Payload) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let started = match cell.with_form(|form| form.begin_submit()) {
        Some(started) => started,
        None => return SubmitOutcome::Closed,
    };
    let submission = match started {
        Ok(submission) => submission,
        Err(SubmitRejected::Closed) => return SubmitOutcome::Closed,
        Err(SubmitRejected::Busy) => return SubmitOutcome::Busy,
        Err(SubmitRejected::Invalid(errors)) => return SubmitOutcome::Invalid(errors),
    };

    let session = submission.session;
    let result = mutation(submission.mode, submission.payload).await;
    let current = cell
        .with_form(|form| form.finish_submit(session, &result))
        .unwrap_or(false);

    match result {
        Ok(()) if current => SubmitOutcome::Saved,
        Ok(()) => SubmitOutcome::Superseded,
        Err(err) => SubmitOutcome::Failed(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_developer::DeveloperDraft;
    use crate::domain::a007_product::ProductDraft;
    use crate::shared::form::FieldValue;
    use contracts::domain::a007_product::aggregate::ProductDto;
    use contracts::shared::validation::messages;
    use std::cell::Cell;

    fn open_create<D: FormDraft>() -> RefCell<DraftForm<D>> {
        let mut form = DraftForm::<D>::closed();
        form.open_create();
        RefCell::new(form)
    }

    #[tokio::test]
    async fn empty_required_field_never_reaches_the_mutation() {
        let cell = open_create::<ProductDraft>();
        let calls = Cell::new(0);

        let outcome = submit_draft(&cell, |_, _: ProductDto| {
            calls.set(calls.get() + 1);
            async { Ok(()) }
        })
        .await;

        assert_eq!(calls.get(), 0);
        match outcome {
            SubmitOutcome::Invalid(errors) => {
                assert_eq!(errors.get("name"), Some(messages::FIELD_REQUIRED));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        let form = cell.borrow();
        assert!(form.is_open());
        assert!(!form.loading);
    }

    #[tokio::test]
    async fn success_calls_mutation_once_then_closes_and_clears() {
        let cell = open_create::<ProductDraft>();
        {
            let mut form = cell.borrow_mut();
            form.set_field("name", FieldValue::from("Chair"));
            form.set_field("price", FieldValue::from("120"));
            form.set_field("category", FieldValue::from("Furniture"));
        }
        let calls = Cell::new(0);
        let seen = RefCell::new(None);

        let outcome = submit_draft(&cell, |mode, payload: ProductDto| {
            calls.set(calls.get() + 1);
            assert_eq!(mode, FormMode::Create);
            *seen.borrow_mut() = Some(payload);
            async { Ok(()) }
        })
        .await;

        assert_eq!(outcome, SubmitOutcome::Saved);
        assert_eq!(calls.get(), 1);
        let payload = seen.borrow().clone().unwrap();
        assert_eq!(payload.name, "Chair");
        assert_eq!(payload.price, 120.0);

        let form = cell.borrow();
        assert!(!form.is_open());
        assert!(!form.loading);
        assert_eq!(form.draft, ProductDraft::default());
    }

    #[tokio::test]
    async fn loading_is_set_while_the_mutation_runs() {
        let cell = open_create::<DeveloperDraft>();
        cell.borrow_mut().set_field("name", FieldValue::from("Emaar"));

        let outcome = submit_draft(&cell, |_, _| {
            assert!(cell.borrow().loading);
            async { Ok(()) }
        })
        .await;

        assert_eq!(outcome, SubmitOutcome::Saved);
        assert!(!cell.borrow().loading);
    }

    #[tokio::test]
    async fn failure_clears_loading_and_keeps_the_draft() {
        let cell = open_create::<DeveloperDraft>();
        cell.borrow_mut().set_field("name", FieldValue::from("Emaar"));

        let outcome = submit_draft(&cell, |_, _| async {
            Err(ApiError::Status {
                status: 500,
                message: "boom".into(),
            })
        })
        .await;

        assert!(matches!(outcome, SubmitOutcome::Failed(ApiError::Status { status: 500, .. })));
        let form = cell.borrow();
        assert!(form.is_open());
        assert!(!form.loading);
        assert_eq!(form.draft.name, "Emaar");
    }

    #[tokio::test]
    async fn submit_while_loading_is_rejected() {
        let cell = open_create::<DeveloperDraft>();
        {
            let mut form = cell.borrow_mut();
            form.set_field("name", FieldValue::from("Emaar"));
            form.loading = true;
        }
        let calls = Cell::new(0);

        let outcome = submit_draft(&cell, |_, _| {
            calls.set(calls.get() + 1);
            async { Ok(()) }
        })
        .await;

        assert_eq!(outcome, SubmitOutcome::Busy);
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn reopening_during_a_save_keeps_the_new_draft() {
        let cell = open_create::<DeveloperDraft>();
        cell.borrow_mut().set_field("name", FieldValue::from("Emaar"));

        let outcome = submit_draft(&cell, |_, _| {
            {
                let mut form = cell.borrow_mut();
                form.close();
                form.open_create();
                assert!(!form.loading);
                form.set_field("name", FieldValue::from("Second draft"));
            }
            async { Ok(()) }
        })
        .await;

        assert_eq!(outcome, SubmitOutcome::Superseded);
        let form = cell.borrow();
        assert!(form.is_open());
        assert_eq!(form.draft.name, "Second draft");
    }

    #[tokio::test]
    async fn busy_form_cannot_be_dismissed() {
        let cell = open_create::<DeveloperDraft>();
        cell.borrow_mut().set_field("name", FieldValue::from("Emaar"));

        let outcome = submit_draft(&cell, |_, _| {
            assert!(!cell.borrow().can_close());
            async { Ok(()) }
        })
        .await;

        assert_eq!(outcome, SubmitOutcome::Saved);
        assert!(cell.borrow().can_close());
    }

    #[tokio::test]
    async fn closed_form_does_nothing() {
        let cell = RefCell::new(DraftForm::<DeveloperDraft>::closed());
        let outcome = submit_draft(&cell, |_, _| async { Ok(()) }).await;
        assert_eq!(outcome, SubmitOutcome::Closed);
    }
}
