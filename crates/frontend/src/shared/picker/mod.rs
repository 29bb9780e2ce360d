//! Multi-select picker: checklist modal → entry rows.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::shared::picker::{PickerFlow, PickerModal, RowBuilder};
//!
//! // 1. Implement RowBuilder for your entry row
//! impl RowBuilder for MyRowBuilder { ... }
//!
//! // 2. Keep the flow in a signal and render the modal
//! let flow = RwSignal::new(PickerFlow::new(MyRowBuilder));
//! view! {
//!     <PickerModal modal=ModalId::StockPicker title="Pick products" flow=flow ... />
//! }
//! ```

pub mod component;
pub mod flow;
pub mod traits;

pub use component::{open_picker, prepare_and_reveal, reset_and_reopen, PickerModal};
pub use flow::{PickerError, PickerFlow, PickerStage, SelectionHint};
pub use traits::{EntryRow, PickerItem, RowBuilder};
