use crate::domain::common::CrmEntity;
use serde::{Deserialize, Serialize};

/// Товар каталога
///
/// Категория и поставщик хранятся по имени, а не по id: переименование
/// категории или поставщика рвёт ссылку.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sku: String,
    pub category: String,
    #[serde(default)]
    pub supplier: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub stock: Option<u32>,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub supplier: Option<String>,
    pub price: f64,
    pub stock: Option<u32>,
    pub description: String,
    pub is_active: bool,
}

impl CrmEntity for Product {
    type Payload = ProductDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "products"
    }

    fn element_name() -> &'static str {
        "product"
    }

    fn list_name() -> &'static str {
        "products"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active_defaults_to_true() {
        let p: Product = serde_json::from_str(
            r#"{"id":"p1","name":"Smart lock","category":"Electronics","price":120}"#,
        )
        .unwrap();
        assert!(p.is_active);
        assert_eq!(p.price, 120.0);
        assert_eq!(p.supplier, None);
    }
}
