pub mod list;

pub use list::ServicePackageList;
