//! Справочные перечисления CRM.
//!
//! Каждое перечисление сериализуется своим `code()` (snake_case) и умеет
//! возвращать полный список значений для выпадающих списков.

#[macro_use]
mod code_enum;

pub mod campaign;
pub mod deal_stage;
pub mod integration_platform;
pub mod lead;
pub mod project_status;
pub mod unit;
pub mod user_role;

pub use campaign::{CampaignChannel, CampaignStatus};
pub use deal_stage::DealStage;
pub use integration_platform::IntegrationPlatform;
pub use lead::{LeadSource, LeadStatus};
pub use project_status::ProjectStatus;
pub use unit::{UnitStatus, UnitType};
pub use user_role::UserRole;
