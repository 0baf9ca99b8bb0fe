use contracts::domain::a005_developer::aggregate::{Developer, DeveloperDto};
use contracts::shared::validation::FieldErrors;

use crate::shared::form::{draft_accessors, EntityDraft, FieldKind, FieldSpec, FormDraft, FormMode};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeveloperDraft {
    pub name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub established_year: String,
}

impl FormDraft for DeveloperDraft {
    type Payload = DeveloperDto;

    fn fields(_mode: &FormMode) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("name", "name").required(),
            FieldSpec::text("contact_person", "contactPerson"),
            FieldSpec::new("phone", "phone", FieldKind::Phone),
            FieldSpec::new("email", "email", FieldKind::Email),
            FieldSpec::text("website", "website"),
            FieldSpec::number("established_year", "establishedYear"),
        ]
    }

    draft_accessors! {
        text: [name, contact_person, phone, email, website, established_year],
    }

    fn to_payload(&self, _mode: &FormMode) -> Result<DeveloperDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.optional_email("email", &self.email);
        let established_year = errors.integer("established_year", &self.established_year);
        errors.into_result(DeveloperDto {
            name: self.name.trim().to_string(),
            contact_person: self.contact_person.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            website: self.website.trim().to_string(),
            established_year,
        })
    }
}

impl EntityDraft for DeveloperDraft {
    type Entity = Developer;

    fn from_entity(developer: &Developer) -> Self {
        Self {
            name: developer.name.clone(),
            contact_person: developer.contact_person.clone(),
            phone: developer.phone.clone(),
            email: developer.email.clone(),
            website: developer.website.clone(),
            established_year: developer
                .established_year
                .map(|y| y.to_string())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::validation::messages;

    #[test]
    fn test_only_name_is_required() {
        let draft = DeveloperDraft {
            name: "Emaar".into(),
            ..Default::default()
        };
        let payload = draft.validate(&FormMode::Create).unwrap();
        assert_eq!(payload.name, "Emaar");
        assert_eq!(payload.established_year, None);
    }

    #[test]
    fn test_bad_email_when_given() {
        let draft = DeveloperDraft {
            name: "Emaar".into(),
            email: "sales@".into(),
            ..Default::default()
        };
        let errors = draft.validate(&FormMode::Create).unwrap_err();
        assert_eq!(errors.get("email"), Some(messages::INVALID_EMAIL));
    }

    #[test]
    fn test_edit_seeds_year() {
        let developer = Developer {
            id: "d1".into(),
            name: "Emaar".into(),
            website: "emaar.com".into(),
            established_year: Some(1997),
            ..Default::default()
        };
        let draft = DeveloperDraft::from_entity(&developer);
        assert_eq!(draft.established_year, "1997");
        assert_eq!(draft.website, "emaar.com");
    }
}
