pub mod list;

pub use list::IntegrationAccountList;
