//! Draft-based forms: field definitions, the draft lifecycle and the
//! submit/delete flows shared by every modal.

mod accessors;
pub mod delete;
pub mod draft;
pub mod field;
pub mod filter;
pub mod submit;

pub(crate) use accessors::draft_accessors;
pub use delete::{confirm_delete, DeleteOutcome, PendingCell};
pub use draft::{DraftForm, EntityDraft, FormDraft, FormMode, SubmitRejected};
pub use field::{non_empty, FieldKind, FieldSpec, FieldValue, OptionsSource};
pub use filter::{section_fields, FilterDraft, FilterSection};
pub use submit::{submit_draft, DraftCell, SubmitOutcome};
