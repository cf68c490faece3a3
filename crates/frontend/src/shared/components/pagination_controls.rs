use crate::shared::icons::icon;
use crate::shared::pagination::{PageIndex, PageToken};
use leptos::prelude::*;

/// PaginationControls component - numbered pager under every list table
///
/// Renders "Sebelumnya", the compressed page-number sequence and
/// "Selanjutnya". Hidden while everything fits on one page.
#[component]
pub fn PaginationControls(
    /// Page count, current page (1-based) and page tokens
    #[prop(into)]
    index: Signal<PageIndex>,

    /// Total count of filtered items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Callback with the requested 1-based page
    on_page_change: Callback<usize>,
) -> impl IntoView {
    move || {
        let index = index.get();
        if index.total_pages <= 1 {
            return None;
        }
        let current = index.current_page;
        let total_pages = index.total_pages;
        let has_prev = index.has_prev();
        let has_next = index.has_next();

        Some(view! {
            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(current.saturating_sub(1))
                    disabled=!has_prev
                >
                    {icon("chevron-left")}
                    "Sebelumnya"
                </button>
                {index.pages.into_iter().map(|token| match token {
                    PageToken::Page(page) => view! {
                        <button
                            class="pagination-btn"
                            class:pagination-btn--active=page == current
                            on:click=move |_| on_page_change.run(page)
                        >
                            {page.to_string()}
                        </button>
                    }.into_any(),
                    PageToken::Ellipsis => view! {
                        <span class="pagination-ellipsis">"..."</span>
                    }.into_any(),
                }).collect_view()}
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(current + 1)
                    disabled=!has_next
                >
                    "Selanjutnya"
                    {icon("chevron-right")}
                </button>
                <span class="pagination-info">
                    {move || format!("{} / {} ({})", current, total_pages, total_count.get())}
                </span>
            </div>
        })
    }
}
