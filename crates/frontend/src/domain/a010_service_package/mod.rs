pub mod draft;
pub mod ui;

pub use draft::ServicePackageDraft;
