use crate::domain::common::CrmEntity;
use serde::{Deserialize, Serialize};

/// Пакет услуг
///
/// Услуги перечислены по имени. При переименовании услуги пакет продолжает
/// ссылаться на старое имя.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServicePackage {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub services: Vec<String>,
    pub price: f64,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServicePackageDto {
    pub name: String,
    pub services: Vec<String>,
    pub price: f64,
    pub description: String,
}

impl ServicePackage {
    /// Имена услуг, которых больше нет в каталоге
    pub fn dangling_services<'a>(&'a self, known: &[&str]) -> Vec<&'a str> {
        self.services
            .iter()
            .map(String::as_str)
            .filter(|name| !known.contains(name))
            .collect()
    }
}

impl CrmEntity for ServicePackage {
    type Payload = ServicePackageDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "service_packages"
    }

    fn element_name() -> &'static str {
        "servicePackage"
    }

    fn list_name() -> &'static str {
        "servicePackages"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dangling_services() {
        let package = ServicePackage {
            id: "sp1".into(),
            name: "Move-in".into(),
            services: vec!["Cleaning".into(), "Painting".into()],
            price: 500.0,
            description: String::new(),
        };
        assert_eq!(package.dangling_services(&["Cleaning"]), vec!["Painting"]);
        assert!(package.dangling_services(&["Cleaning", "Painting"]).is_empty());
    }
}
