use serde::{Deserialize, Serialize};

/// Итоги продаж за один день (P900)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReportCard {
    /// ISO date, "YYYY-MM-DD"
    pub report_date: String,
    #[serde(default)]
    pub sale_count: u32,
    #[serde(default)]
    pub return_count: u32,
    #[serde(default)]
    pub total_amount: f64,
}

/// Период отчёта из строки запроса (`?sales_report_start=…&sales_report_end=…`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesReportQuery {
    #[serde(default)]
    pub sales_report_start: Option<String>,
    #[serde(default)]
    pub sales_report_end: Option<String>,
}

impl SalesReportQuery {
    pub fn is_requested(&self) -> bool {
        self.sales_report_start.is_some() || self.sales_report_end.is_some()
    }
}
