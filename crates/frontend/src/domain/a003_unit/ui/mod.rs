pub mod list;

pub use list::UnitList;
