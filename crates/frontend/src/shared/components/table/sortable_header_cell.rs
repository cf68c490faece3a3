//! Sortable table header cell
//!
//! # Example
//!
//! ```ignore
//! <SortableHeaderCell label="Kapasitas" state=state field=RoomField::Capacity />
//! ```

use crate::shared::list_state::ListState;
use crate::shared::list_utils::{get_sort_indicator, ListRecord};
use leptos::prelude::*;
use thaw::*;

/// Header cell that toggles the list sort on click
///
/// Same column flips the direction, another column starts ascending.
/// Shows ↑/↓ next to the label of the active column.
#[component]
pub fn SortableHeaderCell<T>(
    /// Header text
    label: &'static str,

    /// List state the column belongs to
    state: RwSignal<ListState<T>>,

    /// Column to sort by
    field: T::Field,

    /// Minimal column width
    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView
where
    T: ListRecord + Send + Sync,
{
    let indicator = move || state.with(|s| get_sort_indicator(s.sort(), field));

    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer; padding-right: 12px;"
                on:click=move |_| state.update(|s| s.toggle_sort(field))
            >
                {label}
                <span class="table__sort-indicator">{indicator}</span>
            </div>
        </TableHeaderCell>
    }
}
