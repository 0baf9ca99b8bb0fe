use contracts::domain::a011_service_provider::aggregate::{ServiceProvider, ServiceProviderDto};
use contracts::shared::validation::FieldErrors;

use crate::shared::form::{draft_accessors, EntityDraft, FieldKind, FieldSpec, FormDraft, FormMode};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceProviderDraft {
    pub name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub specialty: String,
}

impl FormDraft for ServiceProviderDraft {
    type Payload = ServiceProviderDto;

    fn fields(_mode: &FormMode) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("name", "name").required(),
            FieldSpec::text("contact_person", "contactPerson"),
            FieldSpec::new("phone", "phone", FieldKind::Phone),
            FieldSpec::new("email", "email", FieldKind::Email),
            FieldSpec::text("specialty", "specialty"),
        ]
    }

    draft_accessors! {
        text: [name, contact_person, phone, email, specialty],
    }

    fn to_payload(&self, _mode: &FormMode) -> Result<ServiceProviderDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.optional_email("email", &self.email);
        errors.into_result(ServiceProviderDto {
            name: self.name.trim().to_string(),
            contact_person: self.contact_person.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            specialty: self.specialty.trim().to_string(),
        })
    }
}

impl EntityDraft for ServiceProviderDraft {
    type Entity = ServiceProvider;

    fn from_entity(provider: &ServiceProvider) -> Self {
        Self {
            name: provider.name.clone(),
            contact_person: provider.contact_person.clone(),
            phone: provider.phone.clone(),
            email: provider.email.clone(),
            specialty: provider.specialty.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_roundtrip() {
        let provider = ServiceProvider {
            id: "sp1".into(),
            name: "CleanCo".into(),
            email: "ops@cleanco.ae".into(),
            specialty: "Cleaning".into(),
            ..Default::default()
        };
        let payload = ServiceProviderDraft::from_entity(&provider)
            .validate(&FormMode::Edit { id: "sp1".into() })
            .unwrap();
        assert_eq!(payload.name, "CleanCo");
        assert_eq!(payload.email, "ops@cleanco.ae");
        assert_eq!(payload.specialty, "Cleaning");
    }
}
