pub mod delete_modal;
pub mod entity_form_modal;
pub mod filter_drawer;
pub mod form_fields;
pub mod list_page;
pub mod ui;
