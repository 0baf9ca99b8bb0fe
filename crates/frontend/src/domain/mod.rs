pub mod a001_lead;
pub mod a002_deal;
pub mod a003_unit;
pub mod a004_project;
pub mod a005_developer;
pub mod a006_owner;
pub mod a007_product;
pub mod a008_product_category;
pub mod a009_service;
pub mod a010_service_package;
pub mod a011_service_provider;
pub mod a012_supplier;
pub mod a013_campaign;
pub mod a014_integration_account;
