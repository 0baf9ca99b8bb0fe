pub mod list;

pub use list::DealList;
