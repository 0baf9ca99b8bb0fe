pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod error;
pub mod form;
pub mod i18n;
mod i18n_dict;
pub mod icons;
pub mod modal;
pub mod notify;
pub mod page_frame;
pub mod storage;
