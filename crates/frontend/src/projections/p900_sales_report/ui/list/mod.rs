use crate::layout::global_context::{use_manager, PanelQuery, Section};
use crate::shared::date_utils::format_date;
use crate::shared::list_utils::{search_all, EmptyState, SearchInput};
use crate::shared::number_format::format_money;
use crate::shared::page_data::use_page_data;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_REPORT;
use contracts::projections::p900_sales_report::SalesReportQuery;
use leptos::prelude::*;

/// Scroll target when the URL asks for a report period.
pub const REPORTS_ANCHOR_ID: &str = "salesReportSection";

fn period_label(query: &SalesReportQuery) -> Option<String> {
    let start = query.sales_report_start.as_deref().map(format_date);
    let end = query.sales_report_end.as_deref().map(format_date);
    match (start, end) {
        (Some(s), Some(e)) => Some(format!("Period: {s} to {e}")),
        (Some(s), None) => Some(format!("Period: from {s}")),
        (None, Some(e)) => Some(format!("Period: until {e}")),
        (None, None) => None,
    }
}

/// Daily sales totals with a search by report date.
#[component]
pub fn SalesReportList() -> impl IntoView {
    let manager = use_manager();
    let page_data = use_page_data();
    let (reports, currency) =
        page_data.with(|p| (p.sales_report.clone(), p.settings.currency.clone()));
    let reports = StoredValue::new(reports);
    let period = period_label(&PanelQuery::current().report());

    let query = RwSignal::new(String::new());
    let outcome = Memo::new(move |_| {
        let q = query.get();
        reports.with_value(|r| search_all(r, &q))
    });

    let rows = reports.with_value(|list| {
        list.iter()
            .enumerate()
            .map(|(idx, report)| {
                view! {
                    <tr
                        data-report-date=report.report_date.clone()
                        hidden=move || !outcome.with(|o| o.is_visible(idx))
                    >
                        <td>{format_date(&report.report_date)}</td>
                        <td>{report.sale_count}</td>
                        <td>{report.return_count}</td>
                        <td class="num">{format_money(report.total_amount, &currency)}</td>
                    </tr>
                }
            })
            .collect_view()
    });

    view! {
        <PageFrame
            page_id="p900_sales_report--report"
            category=PAGE_CAT_REPORT
            title="Sales reports"
            hidden=Signal::derive(move || !manager.is_active(Section::Reports))
        >
            <div id=REPORTS_ANCHOR_ID>
                {period.map(|p| view! { <p class="muted">{p}</p> })}
                <SearchInput value=query placeholder="Search by date (YYYY-MM-DD)" id="salesReportSearch" />
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Sales"</th>
                            <th>"Returns"</th>
                            <th class="num">"Total"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
                <EmptyState
                    show=Signal::derive(move || outcome.with(|o| o.show_empty))
                    message="No reports match this date."
                />
            </div>
        </PageFrame>
    }
}
