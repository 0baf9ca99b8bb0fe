//! Draft lifecycle of a modal form.
//!
//! A `DraftForm` is closed, open for create, or open for edit. Opening seeds
//! the draft (defaults or the entity), field edits mutate it, submit
//! validates it into a payload and flips `loading` until the mutation
//! settles. Closing discards everything.

use contracts::domain::common::CrmEntity;
use contracts::shared::validation::{messages, FieldErrors};

use super::field::{FieldKind, FieldSpec, FieldValue};
use crate::shared::error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit { .. })
    }
}

/// Editable, text-friendly mirror of a payload
pub trait FormDraft: Clone + Default + PartialEq + Send + Sync + 'static {
    type Payload: Clone + Send + Sync + 'static;

    /// Render errors under each input instead of a blocking alert
    const INLINE_ERRORS: bool = false;

    fn fields(mode: &FormMode) -> Vec<FieldSpec>;

    fn value(&self, key: &str) -> FieldValue;

    fn set_value(&mut self, key: &str, value: FieldValue);

    /// Parses the draft; required-presence is already checked by `validate`
    fn to_payload(&self, mode: &FormMode) -> Result<Self::Payload, FieldErrors>;

    fn validate(&self, mode: &FormMode) -> Result<Self::Payload, FieldErrors> {
        let mut errors = FieldErrors::new();
        for spec in Self::fields(mode).iter().filter(|s| s.required) {
            let value = self.value(spec.key);
            match spec.kind {
                FieldKind::MultiSelect(_) => errors.require_list(spec.key, &value.into_list()),
                FieldKind::Email if value.is_blank() => errors.insert(spec.key, messages::EMAIL_REQUIRED),
                _ if value.is_blank() => errors.insert(spec.key, messages::FIELD_REQUIRED),
                _ => {}
            }
        }
        match self.to_payload(mode) {
            Ok(payload) => errors.into_result(payload),
            Err(parse_errors) => {
                errors.merge(parse_errors);
                Err(errors)
            }
        }
    }
}

/// Draft of a stored entity: can be seeded from it
pub trait EntityDraft: FormDraft<Payload = <Self::Entity as CrmEntity>::Payload> {
    type Entity: CrmEntity;

    fn from_entity(entity: &Self::Entity) -> Self;
}

/// Why a submit did not reach the mutation
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitRejected {
    Closed,
    Busy,
    Invalid(FieldErrors),
}

/// A validated draft on its way to the mutation
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<P> {
    pub mode: FormMode,
    pub payload: P,
    /// Open the submit started in; see `DraftForm::finish_submit`
    pub session: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DraftForm<D> {
    /// `None` while the modal is closed
    pub mode: Option<FormMode>,
    pub draft: D,
    pub loading: bool,
    pub errors: FieldErrors,
    /// Bumped on every open and close
    session: u64,
}

impl<D: FormDraft> Default for DraftForm<D> {
    fn default() -> Self {
        Self::closed()
    }
}

impl<D: FormDraft> DraftForm<D> {
    pub fn closed() -> Self {
        Self {
            mode: None,
            draft: D::default(),
            loading: false,
            errors: FieldErrors::new(),
            session: 0,
        }
    }

    fn next_session(&self, mode: Option<FormMode>, draft: D) -> Self {
        Self {
            mode,
            draft,
            session: self.session.wrapping_add(1),
            ..Self::closed()
        }
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn is_open(&self) -> bool {
        self.mode.is_some()
    }

    pub fn open_create(&mut self) {
        *self = self.next_session(Some(FormMode::Create), D::default());
    }

    pub fn close(&mut self) {
        *self = self.next_session(None, D::default());
    }

    /// The user may dismiss the form only while no submit is in flight
    pub fn can_close(&self) -> bool {
        !self.loading
    }

    /// Back to defaults, keeping the form open
    pub fn reset_draft(&mut self) {
        self.draft = D::default();
        self.errors = FieldErrors::new();
    }

    pub fn set_field(&mut self, key: &str, value: FieldValue) {
        self.draft.set_value(key, value);
        self.errors.remove(key);
    }

    /// Validates and marks the form busy. The returned payload is what the
    /// mutation must be called with.
    pub fn begin_submit(&mut self) -> Result<Submission<D::Payload>, SubmitRejected> {
        let mode = self.mode.clone().ok_or(SubmitRejected::Closed)?;
        if self.loading {
            return Err(SubmitRejected::Busy);
        }
        match self.draft.validate(&mode) {
            Ok(payload) => {
                self.errors = FieldErrors::new();
                self.loading = true;
                Ok(Submission {
                    mode,
                    payload,
                    session: self.session,
                })
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(SubmitRejected::Invalid(errors))
            }
        }
    }

    /// Settles a submit. Success closes and resets; failure keeps the draft.
    /// A submit from an earlier open leaves the current one untouched and
    /// returns `false`.
    pub fn finish_submit(&mut self, session: u64, result: &Result<(), ApiError>) -> bool {
        if session != self.session {
            return false;
        }
        self.loading = false;
        if result.is_ok() {
            self.close();
        }
        true
    }
}

impl<D: EntityDraft> DraftForm<D> {
    pub fn open_edit(&mut self, entity: &D::Entity) {
        let mode = FormMode::Edit {
            id: entity.id().to_string(),
        };
        *self = self.next_session(Some(mode), D::from_entity(entity));
    }

    /// Follows the store's modal flags: an editing entity wins over the
    /// create flag; both cleared closes the form. Re-applying the same state
    /// keeps the current draft.
    pub fn sync(&mut self, add_open: bool, editing: Option<&D::Entity>) {
        match editing {
            Some(entity) => {
                let same = matches!(&self.mode, Some(FormMode::Edit { id }) if id == entity.id());
                if !same {
                    self.open_edit(entity);
                }
            }
            None if add_open => {
                if self.mode != Some(FormMode::Create) {
                    self.open_create();
                }
            }
            None => {
                if self.is_open() {
                    self.close();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_developer::DeveloperDraft;
    use contracts::domain::a005_developer::aggregate::Developer;

    fn developer(id: &str, name: &str) -> Developer {
        Developer {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_open_edit_seeds_draft() {
        let mut form = DraftForm::<DeveloperDraft>::closed();
        form.open_edit(&developer("d1", "Emaar"));
        assert_eq!(form.mode, Some(FormMode::Edit { id: "d1".into() }));
        assert_eq!(form.draft.name, "Emaar");
        assert!(!form.loading);
    }

    #[test]
    fn test_sync_keeps_draft_for_same_entity() {
        let entity = developer("d1", "Emaar");
        let mut form = DraftForm::<DeveloperDraft>::closed();
        form.sync(false, Some(&entity));
        form.set_field("name", FieldValue::from("Emaar Properties"));
        form.sync(false, Some(&entity));
        assert_eq!(form.draft.name, "Emaar Properties");

        form.sync(false, Some(&developer("d2", "Nakheel")));
        assert_eq!(form.draft.name, "Nakheel");

        form.sync(false, None);
        assert!(!form.is_open());
        assert_eq!(form.draft, DeveloperDraft::default());
    }

    #[test]
    fn test_reopen_after_close_starts_from_defaults() {
        let mut form = DraftForm::<DeveloperDraft>::closed();
        form.sync(true, None);
        form.set_field("name", FieldValue::from("Half typed"));
        form.close();
        form.sync(true, None);
        assert_eq!(form.mode, Some(FormMode::Create));
        assert_eq!(form.draft.name, "");
    }

    #[test]
    fn test_settle_from_an_earlier_open_is_ignored() {
        let mut form = DraftForm::<DeveloperDraft>::closed();
        form.open_create();
        form.set_field("name", FieldValue::from("Emaar"));
        let first = form.begin_submit().unwrap();
        assert!(form.loading);

        form.close();
        form.open_create();
        form.set_field("name", FieldValue::from("Nakheel"));
        assert_ne!(form.session(), first.session);

        assert!(!form.finish_submit(first.session, &Ok(())));
        assert!(form.is_open());
        assert!(!form.loading);
        assert_eq!(form.draft.name, "Nakheel");
    }

    #[test]
    fn test_editing_a_field_clears_its_error() {
        let mut form = DraftForm::<DeveloperDraft>::closed();
        form.open_create();
        assert!(matches!(form.begin_submit(), Err(SubmitRejected::Invalid(_))));
        assert!(form.errors.contains("name"));
        form.set_field("name", FieldValue::from("Emaar"));
        assert!(!form.errors.contains("name"));
    }
}
