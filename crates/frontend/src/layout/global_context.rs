use crate::shared::dom::scroll_to_id;
use contracts::projections::p900_sales_report::SalesReportQuery;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Top-level section of the manager panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Categories,
    Brands,
    Customers,
    #[default]
    Products,
    Restock,
    Sales,
    Reports,
}

impl Section {
    pub fn all() -> [Section; 7] {
        [
            Section::Categories,
            Section::Brands,
            Section::Customers,
            Section::Products,
            Section::Restock,
            Section::Sales,
            Section::Reports,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Categories => "Categories",
            Section::Brands => "Brands",
            Section::Customers => "Customers",
            Section::Products => "Products",
            Section::Restock => "Restock",
            Section::Sales => "Sales",
            Section::Reports => "Sales reports",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Categories => "categories",
            Section::Brands => "brands",
            Section::Customers => "customers",
            Section::Products => "products",
            Section::Restock => "restock",
            Section::Sales => "sales",
            Section::Reports => "reports",
        }
    }
}

/// Query parameters the panel understands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_report_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_report_end: Option<String>,
}

impl PanelQuery {
    /// Unknown or malformed parameters are ignored.
    pub fn parse(search: &str) -> Self {
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
    }

    /// Query of the current page URL.
    pub fn current() -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::parse(&search)
    }

    pub fn report(&self) -> SalesReportQuery {
        SalesReportQuery {
            sales_report_start: self.sales_report_start.clone(),
            sales_report_end: self.sales_report_end.clone(),
        }
    }

    /// Section to show on load. A report period in the URL wins over `section`.
    pub fn initial_section(&self) -> Section {
        if self.report().is_requested() {
            Section::Reports
        } else {
            self.section.unwrap_or_default()
        }
    }

    pub fn to_search(&self) -> String {
        let query = serde_qs::to_string(self).unwrap_or_default();
        if query.is_empty() {
            String::new()
        } else {
            format!("?{query}")
        }
    }
}

/// Panel-wide state provided at the root.
#[derive(Clone, Copy)]
pub struct ManagerContext {
    pub active: RwSignal<Section>,
    pub sidebar_open: RwSignal<bool>,
}

impl ManagerContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Section::default()),
            sidebar_open: RwSignal::new(true),
        }
    }

    pub fn activate(&self, section: Section) {
        if self.active.get_untracked() != section {
            log::debug!("section: {}", section.label());
            self.active.set(section);
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    /// Tracked.
    pub fn is_active(&self, section: Section) -> bool {
        self.active.get() == section
    }

    /// Applies `?section=` / report period from the URL and keeps `section` in sync afterwards.
    pub fn init_router_integration(&self) {
        let query = PanelQuery::current();

        self.active.set(query.initial_section());
        if query.report().is_requested() {
            scroll_to_id(crate::projections::p900_sales_report::ui::list::REPORTS_ANCHOR_ID);
        }

        let this = *self;
        Effect::new(move |_| {
            let section = this.active.get();

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            let mut query = PanelQuery::parse(&current_search);
            query.section = Some(section);
            let new_url = query.to_search();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for ManagerContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_manager() -> ManagerContext {
    use_context::<ManagerContext>().expect("ManagerContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_section() {
        let q = PanelQuery::parse("?section=sales");
        assert_eq!(q.section, Some(Section::Sales));
        assert_eq!(q.initial_section(), Section::Sales);
    }

    #[test]
    fn test_report_period_opens_reports() {
        let q = PanelQuery::parse("?section=products&sales_report_start=2024-03-01");
        assert!(q.report().is_requested());
        assert_eq!(q.initial_section(), Section::Reports);

        let q = PanelQuery::parse("sales_report_end=2024-03-31");
        assert_eq!(q.initial_section(), Section::Reports);
    }

    #[test]
    fn test_bad_query_falls_back_to_default() {
        assert_eq!(PanelQuery::parse("?section=warehouse"), PanelQuery::default());
        assert_eq!(PanelQuery::parse("").initial_section(), Section::Products);
    }

    #[test]
    fn test_to_search_keeps_report_period() {
        let q = PanelQuery {
            section: Some(Section::Reports),
            sales_report_start: Some("2024-03-01".into()),
            sales_report_end: None,
        };
        assert_eq!(q.to_search(), "?section=reports&sales_report_start=2024-03-01");
        assert_eq!(PanelQuery::default().to_search(), "");
    }
}
