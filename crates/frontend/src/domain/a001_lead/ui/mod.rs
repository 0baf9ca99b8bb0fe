pub mod assign;
pub mod list;
pub mod task;

pub use assign::AssignLeadsModal;
pub use list::LeadList;
pub use task::AddClientTaskModal;
