pub mod history;
pub mod restock;
