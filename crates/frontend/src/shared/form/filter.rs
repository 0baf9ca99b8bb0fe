//! Filter drafts: the editable side of a filter drawer.

use super::draft::{FormDraft, FormMode};
use super::field::FieldSpec;

/// A titled group of controls in a drawer
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSection {
    /// i18n key of the heading
    pub title: &'static str,
    pub fields: Vec<FieldSpec>,
}

/// Text draft of a filter; its payload is the typed criteria
pub trait FilterDraft: FormDraft {
    fn sections() -> Vec<FilterSection>;

    /// Seeds the drawer from the criteria currently applied
    fn from_criteria(criteria: &Self::Payload) -> Self;

    fn criteria(&self) -> Result<Self::Payload, contracts::shared::validation::FieldErrors> {
        self.validate(&FormMode::Create)
    }
}

/// `FormDraft::fields` of a filter draft
pub fn section_fields(sections: Vec<FilterSection>) -> Vec<FieldSpec> {
    sections.into_iter().flat_map(|s| s.fields).collect()
}
