use contracts::domain::a007_product::aggregate::{Product, ProductDto};
use contracts::shared::validation::{format_decimal, FieldErrors};

use crate::shared::form::{
    draft_accessors, non_empty, EntityDraft, FieldKind, FieldSpec, FormDraft, FormMode,
    OptionsSource,
};

/// Category and supplier are referenced by name
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub supplier: String,
    pub price: String,
    pub stock: String,
    pub description: String,
    pub is_active: bool,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            sku: String::new(),
            category: String::new(),
            supplier: String::new(),
            price: String::new(),
            stock: String::new(),
            description: String::new(),
            is_active: true,
        }
    }
}

impl FormDraft for ProductDraft {
    type Payload = ProductDto;

    fn fields(_mode: &FormMode) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("name", "name").required(),
            FieldSpec::text("sku", "sku"),
            FieldSpec::select("category", "category", OptionsSource::ProductCategoryNames)
                .required(),
            FieldSpec::select("supplier", "supplier", OptionsSource::SupplierNames),
            FieldSpec::number("price", "price").required(),
            FieldSpec::number("stock", "stock"),
            FieldSpec::new("description", "description", FieldKind::TextArea),
            FieldSpec::new("is_active", "isActive", FieldKind::Checkbox),
        ]
    }

    draft_accessors! {
        text: [name, sku, category, supplier, price, stock, description],
        flag: [is_active],
    }

    fn to_payload(&self, _mode: &FormMode) -> Result<ProductDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        let price = errors.required_decimal("price", &self.price);
        let stock = errors.integer("stock", &self.stock);
        errors.into_result(ProductDto {
            name: self.name.trim().to_string(),
            sku: self.sku.trim().to_string(),
            category: self.category.trim().to_string(),
            supplier: non_empty(&self.supplier),
            price,
            stock,
            description: self.description.clone(),
            is_active: self.is_active,
        })
    }
}

impl EntityDraft for ProductDraft {
    type Entity = Product;

    fn from_entity(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            sku: product.sku.clone(),
            category: product.category.clone(),
            supplier: product.supplier.clone().unwrap_or_default(),
            price: format_decimal(product.price),
            stock: product.stock.map(|s| s.to_string()).unwrap_or_default(),
            description: product.description.clone(),
            is_active: product.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::{DraftForm, FieldValue};
    use contracts::shared::validation::messages;

    #[test]
    fn test_new_products_start_active() {
        assert!(ProductDraft::default().is_active);
    }

    #[test]
    fn test_edit_shows_price_and_category_before_any_edit() {
        let product = Product {
            id: "p1".into(),
            name: "Chair".into(),
            category: "Electronics".into(),
            price: 120.0,
            is_active: false,
            ..Default::default()
        };
        let mut form = DraftForm::<ProductDraft>::closed();
        form.open_edit(&product);
        assert_eq!(form.draft.value("price"), FieldValue::from("120"));
        assert_eq!(form.draft.value("category"), FieldValue::from("Electronics"));
        assert_eq!(form.draft.value("is_active"), FieldValue::Flag(false));
    }

    #[test]
    fn test_category_required() {
        let draft = ProductDraft {
            name: "Chair".into(),
            price: "120".into(),
            ..Default::default()
        };
        let errors = draft.validate(&FormMode::Create).unwrap_err();
        assert_eq!(errors.get("category"), Some(messages::FIELD_REQUIRED));
    }

    #[test]
    fn test_checkbox_toggles_flag() {
        let mut draft = ProductDraft::default();
        draft.set_value("is_active", FieldValue::Flag(false));
        assert!(!draft.is_active);
    }
}
