pub mod list;

pub use list::UsersList;
