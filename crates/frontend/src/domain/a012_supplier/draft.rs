use contracts::domain::a012_supplier::aggregate::{Supplier, SupplierDto};
use contracts::shared::validation::FieldErrors;

use crate::shared::form::{draft_accessors, EntityDraft, FieldKind, FieldSpec, FormDraft, FormMode};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierDraft {
    pub name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl FormDraft for SupplierDraft {
    type Payload = SupplierDto;

    fn fields(_mode: &FormMode) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("name", "name").required(),
            FieldSpec::text("contact_person", "contactPerson"),
            FieldSpec::new("phone", "phone", FieldKind::Phone),
            FieldSpec::new("email", "email", FieldKind::Email),
            FieldSpec::new("address", "address", FieldKind::TextArea),
        ]
    }

    draft_accessors! {
        text: [name, contact_person, phone, email, address],
    }

    fn to_payload(&self, _mode: &FormMode) -> Result<SupplierDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.optional_email("email", &self.email);
        errors.into_result(SupplierDto {
            name: self.name.trim().to_string(),
            contact_person: self.contact_person.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            address: self.address.clone(),
        })
    }
}

impl EntityDraft for SupplierDraft {
    type Entity = Supplier;

    fn from_entity(supplier: &Supplier) -> Self {
        Self {
            name: supplier.name.clone(),
            contact_person: supplier.contact_person.clone(),
            phone: supplier.phone.clone(),
            email: supplier.email.clone(),
            address: supplier.address.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::validation::messages;

    #[test]
    fn test_name_required_email_checked() {
        let draft = SupplierDraft {
            email: "nope".into(),
            ..Default::default()
        };
        let errors = draft.validate(&FormMode::Create).unwrap_err();
        assert_eq!(errors.get("name"), Some(messages::FIELD_REQUIRED));
        assert_eq!(errors.get("email"), Some(messages::INVALID_EMAIL));
    }

    #[test]
    fn test_edit_seeds_every_field() {
        let supplier = Supplier {
            id: "sp1".into(),
            name: "Nordic Wood".into(),
            contact_person: "Lena".into(),
            phone: "+971500000001".into(),
            email: "sales@nordicwood.example".into(),
            address: "Jebel Ali".into(),
        };
        let payload = SupplierDraft::from_entity(&supplier)
            .validate(&FormMode::Edit { id: "sp1".into() })
            .unwrap();
        assert_eq!(
            payload,
            SupplierDto {
                name: "Nordic Wood".into(),
                contact_person: "Lena".into(),
                phone: "+971500000001".into(),
                email: "sales@nordicwood.example".into(),
                address: "Jebel Ali".into(),
            }
        );
    }
}
