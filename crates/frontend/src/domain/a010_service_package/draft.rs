use contracts::domain::a010_service_package::aggregate::{ServicePackage, ServicePackageDto};
use contracts::shared::validation::{format_decimal, FieldErrors};

use crate::shared::form::{
    draft_accessors, EntityDraft, FieldKind, FieldSpec, FormDraft, FormMode, OptionsSource,
};

/// `services` holds service names, not ids
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServicePackageDraft {
    pub name: String,
    pub services: Vec<String>,
    pub price: String,
    pub description: String,
}

impl FormDraft for ServicePackageDraft {
    type Payload = ServicePackageDto;

    fn fields(_mode: &FormMode) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("name", "name").required(),
            FieldSpec::new(
                "services",
                "services",
                FieldKind::MultiSelect(OptionsSource::ServiceNames),
            )
            .required(),
            FieldSpec::number("price", "price").required(),
            FieldSpec::new("description", "description", FieldKind::TextArea),
        ]
    }

    draft_accessors! {
        text: [name, price, description],
        list: [services],
    }

    fn to_payload(&self, _mode: &FormMode) -> Result<ServicePackageDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        let price = errors.required_decimal("price", &self.price);
        let services = self
            .services
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        errors.into_result(ServicePackageDto {
            name: self.name.trim().to_string(),
            services,
            price,
            description: self.description.clone(),
        })
    }
}

impl EntityDraft for ServicePackageDraft {
    type Entity = ServicePackage;

    fn from_entity(package: &ServicePackage) -> Self {
        Self {
            name: package.name.clone(),
            services: package.services.clone(),
            price: format_decimal(package.price),
            description: package.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FieldValue;
    use contracts::shared::validation::messages;

    #[test]
    fn test_needs_at_least_one_service() {
        let draft = ServicePackageDraft {
            name: "Move-in bundle".into(),
            price: "999".into(),
            ..Default::default()
        };
        let errors = draft.validate(&FormMode::Create).unwrap_err();
        assert_eq!(errors.get("services"), Some(messages::SELECT_AT_LEAST_ONE));
    }

    #[test]
    fn test_services_submitted_by_name() {
        let mut draft = ServicePackageDraft {
            name: "Move-in bundle".into(),
            price: "999".into(),
            ..Default::default()
        };
        draft.set_value(
            "services",
            FieldValue::List(vec!["Deep cleaning".into(), "Pest control".into()]),
        );
        let payload = draft.validate(&FormMode::Create).unwrap();
        assert_eq!(payload.services, vec!["Deep cleaning", "Pest control"]);
    }

    #[test]
    fn test_edit_seeds_every_field() {
        let package = ServicePackage {
            id: "sp1".into(),
            name: "Move-in bundle".into(),
            services: vec!["Deep cleaning".into(), "Pest control".into()],
            price: 999.0,
            description: "Before handover".into(),
        };
        let draft = ServicePackageDraft::from_entity(&package);
        assert_eq!(draft.price, "999");
        assert_eq!(
            draft.validate(&FormMode::Edit { id: "sp1".into() }).unwrap(),
            ServicePackageDto {
                name: "Move-in bundle".into(),
                services: vec!["Deep cleaning".into(), "Pest control".into()],
                price: 999.0,
                description: "Before handover".into(),
            }
        );
    }
}
