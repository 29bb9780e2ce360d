use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_brand::ui::list::BrandList;
use crate::domain::a003_customer::ui::list::CustomerList;
use crate::domain::a004_product::ui::list::ProductList;
use crate::domain::a005_stock_batch::ui::restock::RestockView;
use crate::domain::a006_sale::ui::entry::{
    select_customer_for_sale, SaleEntryContext, SaleEntryView,
};
use crate::layout::global_context::ManagerContext;
use crate::layout::Shell;
use crate::projections::p900_sales_report::ui::list::SalesReportList;
use crate::shared::modal::{ModalHost, ModalRegistry};
use crate::shared::page_data::{load_page_payload, PageData};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let payload = load_page_payload();
    let sale = SaleEntryContext::new(payload.selected_customer_id.clone());
    provide_context(PageData::new(payload));

    let manager = ManagerContext::new();
    provide_context(manager);

    // One registry for every dialog; Escape closes them all
    let modals = ModalRegistry::new();
    provide_context(modals);

    provide_context(sale);

    manager.init_router_integration();

    let on_select_customer = Callback::new(move |customer_id: String| {
        select_customer_for_sale(sale, modals, manager, &customer_id)
    });

    view! {
        <ModalHost />
        <Shell>
            <CategoryList />
            <BrandList />
            <CustomerList on_select=on_select_customer />
            <ProductList />
            <RestockView />
            <SaleEntryView />
            <SalesReportList />
        </Shell>
    }
}
