pub mod name_form;
pub mod pagination_controls;
