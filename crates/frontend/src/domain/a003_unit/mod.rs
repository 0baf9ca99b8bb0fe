pub mod draft;
pub mod filter;
pub mod ui;

pub use draft::UnitDraft;
pub use filter::{UnitFilter, UnitFilterDraft};
