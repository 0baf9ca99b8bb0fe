use contracts::domain::a008_product_category::aggregate::{ProductCategory, ProductCategoryDto};
use contracts::shared::validation::FieldErrors;

use crate::shared::form::{draft_accessors, EntityDraft, FieldKind, FieldSpec, FormDraft, FormMode};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCategoryDraft {
    pub name: String,
    pub description: String,
}

impl FormDraft for ProductCategoryDraft {
    type Payload = ProductCategoryDto;

    fn fields(_mode: &FormMode) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("name", "name").required(),
            FieldSpec::new("description", "description", FieldKind::TextArea),
        ]
    }

    draft_accessors! {
        text: [name, description],
    }

    fn to_payload(&self, _mode: &FormMode) -> Result<ProductCategoryDto, FieldErrors> {
        Ok(ProductCategoryDto {
            name: self.name.trim().to_string(),
            description: self.description.clone(),
        })
    }
}

impl EntityDraft for ProductCategoryDraft {
    type Entity = ProductCategory;

    fn from_entity(category: &ProductCategory) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_trimmed() {
        let draft = ProductCategoryDraft {
            name: "  Electronics ".into(),
            description: "Gadgets".into(),
        };
        let payload = draft.validate(&FormMode::Create).unwrap();
        assert_eq!(payload.name, "Electronics");
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(ProductCategoryDraft::default()
            .validate(&FormMode::Create)
            .is_err());
    }

    #[test]
    fn test_edit_seeds_every_field() {
        let category = ProductCategory {
            id: "c1".into(),
            name: "Furniture".into(),
            description: "Chairs and tables".into(),
        };
        let draft = ProductCategoryDraft::from_entity(&category);
        assert_eq!(draft.name, "Furniture");
        assert_eq!(
            draft.validate(&FormMode::Edit { id: "c1".into() }).unwrap(),
            ProductCategoryDto {
                name: "Furniture".into(),
                description: "Chairs and tables".into(),
            }
        );
    }
}
