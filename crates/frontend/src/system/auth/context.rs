use leptos::prelude::*;

use super::session::Session;
use super::storage;

/// Session context provider component
///
/// Reads the stored token once and shares the session with every page.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(Session::from_storage());
    if !session.get_untracked().is_authenticated() {
        log::warn!("No access token in storage");
    }
    provide_context(session);

    children()
}

/// Hook to access the session signal
pub fn use_session() -> RwSignal<Session> {
    use_context::<RwSignal<Session>>().expect("SessionProvider not found")
}

/// Store a new token (or forget it) and update the shared session
pub fn set_token(session: RwSignal<Session>, token: Option<String>) {
    match token.as_deref().map(str::trim) {
        Some(token) if !token.is_empty() => storage::save_access_token(token),
        _ => storage::clear_access_token(),
    }
    session.set(Session::new(token));
}
