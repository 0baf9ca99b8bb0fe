use contracts::domain::a006_owner::aggregate::{Owner, OwnerDto};
use contracts::shared::validation::FieldErrors;

use crate::shared::form::{draft_accessors, EntityDraft, FieldKind, FieldSpec, FormDraft, FormMode};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OwnerDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub national_id: String,
    pub address: String,
    pub notes: String,
}

impl FormDraft for OwnerDraft {
    type Payload = OwnerDto;

    fn fields(_mode: &FormMode) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("name", "name").required(),
            FieldSpec::new("phone", "phone", FieldKind::Phone).required(),
            FieldSpec::new("email", "email", FieldKind::Email),
            FieldSpec::text("national_id", "nationalId"),
            FieldSpec::text("address", "address"),
            FieldSpec::new("notes", "notes", FieldKind::TextArea),
        ]
    }

    draft_accessors! {
        text: [name, phone, email, national_id, address, notes],
    }

    fn to_payload(&self, _mode: &FormMode) -> Result<OwnerDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.optional_email("email", &self.email);
        errors.into_result(OwnerDto {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            national_id: self.national_id.trim().to_string(),
            address: self.address.trim().to_string(),
            notes: self.notes.clone(),
        })
    }
}

impl EntityDraft for OwnerDraft {
    type Entity = Owner;

    fn from_entity(owner: &Owner) -> Self {
        Self {
            name: owner.name.clone(),
            phone: owner.phone.clone(),
            email: owner.email.clone(),
            national_id: owner.national_id.clone(),
            address: owner.address.clone(),
            notes: owner.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::validation::messages;

    #[test]
    fn test_phone_required() {
        let draft = OwnerDraft {
            name: "Khalid".into(),
            phone: "   ".into(),
            ..Default::default()
        };
        let errors = draft.validate(&FormMode::Create).unwrap_err();
        assert_eq!(errors.get("phone"), Some(messages::FIELD_REQUIRED));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_edit_seeds_exact_values() {
        let owner = Owner {
            id: "o1".into(),
            name: "Khalid".into(),
            phone: "+971500000000".into(),
            national_id: "784-1985-1234567-1".into(),
            notes: "Prefers WhatsApp".into(),
            ..Default::default()
        };
        let draft = OwnerDraft::from_entity(&owner);
        let payload = draft.validate(&FormMode::Edit { id: "o1".into() }).unwrap();
        assert_eq!(payload.national_id, owner.national_id);
        assert_eq!(payload.notes, owner.notes);
    }
}
