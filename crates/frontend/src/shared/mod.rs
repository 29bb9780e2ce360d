pub mod components;
pub mod config;
pub mod date_utils;
pub mod dom;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod number_format;
pub mod page_data;
pub mod page_frame;
pub mod page_standard;
pub mod pagination;
pub mod picker;
pub mod storage;
