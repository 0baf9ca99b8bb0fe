pub mod draft;
pub mod filter;
pub mod ui;

pub use draft::LeadDraft;
pub use filter::{LeadFilter, LeadFilterDraft};
