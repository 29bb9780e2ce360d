pub mod global_context;
pub mod left;
pub mod top_header;

use global_context::use_manager;
use leptos::prelude::*;
use top_header::TopHeader;

/// Panel shell.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +---------+--------------------+
/// | Sidebar |  sections (all     |
/// |         |  mounted, hidden)  |
/// +---------+--------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let manager = use_manager();

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <div
                    data-zone="left"
                    class="left"
                    class:hidden=move || !manager.sidebar_open.get()
                >
                    <left::Sidebar />
                </div>
                <main class="app-main">{children()}</main>
            </div>
        </div>
    }
}
