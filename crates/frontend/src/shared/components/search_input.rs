use crate::shared::icons::icon;
use leptos::prelude::*;

/// Free-text filter box above a list table. Every keystroke is applied.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || (!value.get().is_empty()).then(|| view! {
                <button
                    class="search-input__clear"
                    title="Hapus pencarian"
                    on:click=move |_| on_change.run(String::new())
                >
                    {icon("x")}
                </button>
            })}
        </div>
    }
}
