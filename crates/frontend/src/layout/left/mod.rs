pub mod nav_config;
pub mod sidebar;

pub use sidebar::Sidebar;
