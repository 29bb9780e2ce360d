use super::flow::PickerFlow;
use super::traits::{PickerItem, RowBuilder};
use crate::shared::dom::{focus_input, scroll_to_id};
use crate::shared::list_utils::SearchInput;
use crate::shared::modal::{use_modals, ModalFrame, ModalId, ModalRegistry};
use leptos::html::Input;
use leptos::prelude::*;
use thaw::*;

/// Shows the picker modal and focuses its search box.
pub fn open_picker<B>(
    flow: RwSignal<PickerFlow<B>>,
    modals: ModalRegistry,
    modal: ModalId,
    search_ref: NodeRef<Input>,
)
where
    B: RowBuilder + Send + Sync + 'static,
    B::Row: Send + Sync,
{
    flow.update(PickerFlow::open);
    modals.open(modal);
    focus_input(search_ref);
}

/// Builds the entry rows; on success closes the picker and scrolls the entry panel into view.
pub fn prepare_and_reveal<B>(
    flow: RwSignal<PickerFlow<B>>,
    items: StoredValue<Vec<B::Item>>,
    modals: ModalRegistry,
    modal: ModalId,
    panel_id: &'static str,
) where
    B: RowBuilder + Send + Sync + 'static,
    B::Item: Send + Sync,
    B::Row: Send + Sync,
{
    let result = items.with_value(|items| flow.try_update(|f| f.prepare(items)));
    match result {
        Some(Ok(count)) => {
            log::debug!("{count} entry row(s) prepared for {}", panel_id);
            modals.close(modal);
            scroll_to_id(panel_id);
        }
        Some(Err(e)) => log::debug!("prepare refused: {e}"),
        None => {}
    }
}

/// Drops the rows and shows the picker again.
pub fn reset_and_reopen<B>(
    flow: RwSignal<PickerFlow<B>>,
    modals: ModalRegistry,
    modal: ModalId,
    search_ref: NodeRef<Input>,
)
where
    B: RowBuilder + Send + Sync + 'static,
    B::Row: Send + Sync,
{
    flow.update(PickerFlow::reset);
    open_picker(flow, modals, modal, search_ref);
}

/// Checklist modal of a picker flow: search box, ticks, hint and "Continue".
#[component]
pub fn PickerModal<B>(
    modal: ModalId,
    #[prop(into)]
    title: String,
    flow: RwSignal<PickerFlow<B>>,
    items: StoredValue<Vec<B::Item>>,
    search_ref: NodeRef<Input>,
    /// Secondary line under the product name
    describe: fn(&B::Item) -> String,
    on_prepare: Callback<()>,
) -> impl IntoView
where
    B: RowBuilder + Send + Sync + 'static,
    B::Item: Send + Sync + 'static,
    B::Row: Send + Sync + 'static,
{
    let modals = use_modals();
    let query = RwSignal::new(String::new());

    Effect::watch(
        move || query.get(),
        move |q, _, _| {
            items.with_value(|items| {
                flow.update(|f| {
                    f.search(items, q);
                })
            });
        },
        false,
    );

    let visibility = Signal::derive(move || {
        flow.with(|f| items.with_value(|items| f.visibility(items)))
    });

    let rows = items.with_value(|list| {
        list.iter()
            .enumerate()
            .map(|(idx, item)| {
                let id = item.id();
                let id_value = id.clone();
                let id_for_change = id.clone();
                let name = item.display_name();
                let details = describe(item);
                view! {
                    <label
                        class="checkbox-card"
                        class=("hidden", move || !visibility.with(|v| v.is_visible(idx)))
                    >
                        <input
                            type="checkbox"
                            value=id_value
                            prop:checked=move || flow.with(|f| f.is_checked(&id))
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                flow.update(|f| f.set_checked(&id_for_change, checked));
                            }
                        />
                        <span class="checkbox-card__body">
                            <strong>{name}</strong>
                            <small>{details}</small>
                        </span>
                    </label>
                }
            })
            .collect_view()
    });

    view! {
        <ModalFrame id=modal title=title modal_class="modal--picker">
            <SearchInput value=query placeholder="Search products" input_ref=search_ref />
            <div class="picker-checklist">{rows}</div>
            <p
                class="selection-hint"
                class=("error", move || flow.with(|f| f.hint_is_error()))
            >
                {move || flow.with(|f| f.hint().text())}
            </p>
            <div class="modal-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| modals.close(modal)>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_prepare.run(())>
                    "Continue"
                </Button>
            </div>
        </ModalFrame>
    }
}
