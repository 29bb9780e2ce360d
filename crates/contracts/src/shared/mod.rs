pub mod form_actions;
pub mod page_payload;
pub mod sale_draft;
pub mod shop_settings;
