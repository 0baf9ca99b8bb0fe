//! Common types and traits for all CRM entities

pub mod crm_entity;

pub use crm_entity::CrmEntity;
