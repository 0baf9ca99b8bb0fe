pub mod checkbox;
pub mod input;
pub mod multi_select;
pub mod select;
pub mod textarea;

pub use checkbox::Checkbox;
pub use input::Input;
pub use multi_select::MultiSelect;
pub use select::Select;
pub use textarea::Textarea;
