//! Compile-time settings of the manager panel.

/// Rows per page in the customers table.
pub const CUSTOMER_PAGE_SIZE: usize = 10;

/// Cards per page in the product grid.
pub const PRODUCT_PAGE_SIZE: usize = 12;

/// Session storage key of the in-progress sale.
pub const SALE_DRAFT_KEY: &str = "ezzystore.saleDraft";

/// Id of the `<script type="application/json">` element carrying the page payload.
pub const PAGE_DATA_ELEMENT_ID: &str = "manager-page-data";

/// Reorder level pre-filled in the edit product form when the product has none.
pub use contracts::domain::a004_product::DEFAULT_REORDER_LEVEL;
