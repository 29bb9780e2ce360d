//! Bootstrap payload embedded by the server into the host page.

use super::config::PAGE_DATA_ELEMENT_ID;
use anyhow::{anyhow, Context};
use contracts::shared::page_payload::ManagerPagePayload;
use leptos::prelude::*;

fn read_payload_text() -> anyhow::Result<String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| anyhow!("document is not available"))?;
    let element = document
        .get_element_by_id(PAGE_DATA_ELEMENT_ID)
        .with_context(|| format!("element #{PAGE_DATA_ELEMENT_ID} not found"))?;
    Ok(element.text_content().unwrap_or_default())
}

/// Reads and parses the payload. Any failure degrades to an empty page.
pub fn load_page_payload() -> ManagerPagePayload {
    match read_payload_text().and_then(|text| ManagerPagePayload::from_json(&text)) {
        Ok(payload) => {
            log::debug!(
                "page payload: {} products, {} customers, {} recent sales",
                payload.products.len(),
                payload.customers.len(),
                payload.recent_sales.len()
            );
            payload
        }
        Err(e) => {
            log::warn!("page payload unavailable, rendering empty panel: {e:#}");
            ManagerPagePayload::default()
        }
    }
}

/// Payload shared through context. Immutable for the life of the page.
#[derive(Clone, Copy)]
pub struct PageData(pub StoredValue<ManagerPagePayload>);

impl PageData {
    pub fn new(payload: ManagerPagePayload) -> Self {
        Self(StoredValue::new(payload))
    }

    pub fn with<R>(&self, f: impl FnOnce(&ManagerPagePayload) -> R) -> R {
        self.0.with_value(f)
    }
}

pub fn use_page_data() -> PageData {
    use_context::<PageData>().expect("PageData not provided in context (provide it in app root)")
}
