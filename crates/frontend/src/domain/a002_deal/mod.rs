pub mod draft;
pub mod filter;
pub mod ui;

pub use draft::DealDraft;
pub use filter::{DealFilter, DealFilterDraft};
