use crate::domain::common::CrmEntity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategoryDto {
    pub name: String,
    pub description: String,
}

impl CrmEntity for ProductCategory {
    type Payload = ProductCategoryDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "product_categories"
    }

    fn element_name() -> &'static str {
        "productCategory"
    }

    fn list_name() -> &'static str {
        "productCategories"
    }
}
