use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::ListRecord;
use crate::shared::notification::{NotificationKind, NOTIFICATION_TTL_MS};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Success/error banner of a list page.
///
/// Transient notifications are expired by ticket after the TTL, so a timer
/// started for an older message never hides a newer one. Sticky errors stay
/// until dismissed or replaced.
#[component]
pub fn NotificationBanner<T>(state: RwSignal<ListState<T>>) -> impl IntoView
where
    T: ListRecord + Send + Sync,
{
    let current = Memo::new(move |_| state.with(|s| s.notices.current().cloned()));

    Effect::new(move |_| {
        current.track();
        let Some(ticket) = state.with_untracked(|s| s.notices.timer_ticket()) else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(NOTIFICATION_TTL_MS).await;
            // the page may be gone by now
            let _ = state.try_update(|s| s.notices.expire(ticket));
        });
    });

    move || {
        current.get().map(|n| {
            let (class, mark) = match n.kind {
                NotificationKind::Success => ("warning-box warning-box--success", "✓"),
                NotificationKind::Error => ("warning-box warning-box--error", "⚠"),
            };
            view! {
                <div class=class role="alert">
                    <span class="warning-box__icon">{mark}</span>
                    <span class="warning-box__text">{n.message}</span>
                    <button
                        class="warning-box__close"
                        title="Tutup"
                        on:click=move |_| state.update(|s| s.notices.dismiss())
                    >
                        {icon("x")}
                    </button>
                </div>
            }
        })
    }
}
