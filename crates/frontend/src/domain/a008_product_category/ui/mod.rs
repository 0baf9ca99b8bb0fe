pub mod list;

pub use list::ProductCategoryList;
