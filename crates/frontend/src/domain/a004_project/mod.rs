pub mod draft;
pub mod filter;
pub mod ui;

pub use draft::ProjectDraft;
pub use filter::{ProjectFilter, ProjectFilterDraft};
