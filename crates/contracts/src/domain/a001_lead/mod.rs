pub mod aggregate;
pub mod task;
