//! Bootstrap payload embedded by the page renderer.
//!
//! The renderer serializes one JSON document into
//! `<script type="application/json" id="manager-page-data">`; the panel
//! reads it once on start and renders everything from it.

use super::form_actions::FormActions;
use super::shop_settings::ShopSettings;
use crate::domain::a001_category::CategoryCard;
use crate::domain::a002_brand::BrandCard;
use crate::domain::a003_customer::CustomerRow;
use crate::domain::a004_product::ProductCard;
use crate::domain::a005_stock_batch::StockBatchSummary;
use crate::domain::a006_sale::SaleSummary;
use crate::domain::common::deserialize_opt_id;
use crate::projections::p900_sales_report::SalesReportCard;
use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopInfo {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerPagePayload {
    pub shop: ShopInfo,
    pub settings: ShopSettings,
    pub forms: FormActions,

    pub categories: Vec<CategoryCard>,
    pub brands: Vec<BrandCard>,
    pub customers: Vec<CustomerRow>,
    pub products: Vec<ProductCard>,
    pub stock_batches: Vec<StockBatchSummary>,
    pub recent_sales: Vec<SaleSummary>,
    pub sales_report: Vec<SalesReportCard>,

    /// Покупатель, уже выбранный для продажи (например, только что созданный)
    #[serde(deserialize_with = "deserialize_opt_id")]
    pub selected_customer_id: Option<String>,
    /// Сегодняшняя дата сервера, "YYYY-MM-DD"
    pub today: Option<String>,
}

impl ManagerPagePayload {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("manager page payload is not valid JSON")
    }

    pub fn product(&self, id: &str) -> Option<&ProductCard> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn customer(&self, id: &str) -> Option<&CustomerRow> {
        self.customers.iter().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_payload_uses_defaults() {
        let payload = ManagerPagePayload::from_json(r#"{"shop": {"name": "Ezzy Store"}}"#).unwrap();
        assert_eq!(payload.shop.name, "Ezzy Store");
        assert!(payload.products.is_empty());
        assert_eq!(payload.settings.currency, "PKR");
        assert_eq!(payload.forms.return_url("5"), "/manager/sales/5/return");
        assert_eq!(payload.selected_customer_id, None);
    }

    #[test]
    fn test_lookups() {
        let payload = ManagerPagePayload::from_json(
            r#"{
                "customers": [{"id": 4, "name": "Bilal", "phone": null}],
                "products": [{"id": "9", "name": "Sugar 1kg", "quantity": 10}],
                "selected_customer_id": 4
            }"#,
        )
        .unwrap();
        assert_eq!(payload.customer("4").map(|c| c.name.as_str()), Some("Bilal"));
        assert_eq!(payload.product("9").map(|p| p.quantity), Some(10));
        assert!(payload.product("10").is_none());
        assert_eq!(payload.selected_customer_id.as_deref(), Some("4"));
    }

    #[test]
    fn test_invalid_payload_is_an_error() {
        let err = ManagerPagePayload::from_json("<html>").unwrap_err();
        assert!(err.to_string().contains("manager page payload"));
    }
}
