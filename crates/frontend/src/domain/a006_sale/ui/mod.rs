pub mod entry;
pub mod recent;
pub mod returns;
