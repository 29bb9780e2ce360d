//! Page category constants.
//!
//! Every section page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a004_product--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity name searchable: copy the id from
//! the DOM inspector and you land in `domain/a004_product/`.

/// Card grid or table with search/filters/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Multi-step entry flow (restock, sale).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Read-only report cards.
pub const PAGE_CAT_REPORT: &str = "report";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_USECASE, PAGE_CAT_REPORT];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a004_product--list"));
        assert!(!is_valid_page_id("a004_product"));
        assert!(!is_valid_page_id("--list"));
        assert!(is_known_category(PAGE_CAT_USECASE));
        assert!(!is_known_category("dashboard"));
    }
}
