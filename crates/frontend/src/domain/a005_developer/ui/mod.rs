pub mod list;

pub use list::DeveloperList;
