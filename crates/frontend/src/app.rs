use crate::domain::a001_room::ui::list::RoomList;
use crate::domain::a002_booking::ui::list::BookingList;
use crate::domain::a003_facility::ui::list::FacilityList;
use crate::domain::a004_user::ui::list::UserList;
use crate::shared::api_utils::ApiConfig;
use crate::shared::icons::icon;
use crate::system::auth::{set_token, use_session, SessionProvider};
use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Rooms,
    Bookings,
    Facilities,
    Users,
}

impl Page {
    const ALL: [Page; 4] = [Page::Rooms, Page::Bookings, Page::Facilities, Page::Users];

    fn title(self) -> &'static str {
        match self {
            Page::Rooms => "Room",
            Page::Bookings => "Booking",
            Page::Facilities => "Fasilitas",
            Page::Users => "User",
        }
    }

    fn icon_name(self) -> &'static str {
        match self {
            Page::Rooms => "rooms",
            Page::Bookings => "bookings",
            Page::Facilities => "facilities",
            Page::Users => "users",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(ApiConfig::from_location());

    view! {
        <ConfigProvider>
            <SessionProvider>
                <Shell />
            </SessionProvider>
        </ConfigProvider>
    }
}

#[component]
fn Shell() -> impl IntoView {
    let page = RwSignal::new(Page::Bookings);

    view! {
        <div class="app">
            <header class="app__header">
                <nav class="app__nav">
                    {Page::ALL.into_iter().map(|p| view! {
                        <button
                            class="app__nav-item"
                            class:app__nav-item--active=move || page.get() == p
                            on:click=move |_| page.set(p)
                        >
                            {icon(p.icon_name())}
                            <span>{p.title()}</span>
                        </button>
                    }).collect_view()}
                </nav>
                <TokenBar />
            </header>
            <main class="app__main">
                {move || match page.get() {
                    Page::Rooms => view! { <RoomList /> }.into_any(),
                    Page::Bookings => view! { <BookingList /> }.into_any(),
                    Page::Facilities => view! { <FacilityList /> }.into_any(),
                    Page::Users => view! { <UserList /> }.into_any(),
                }}
            </main>
        </div>
    }
}

/// Paste or forget the bearer token used by the collection pages
#[component]
fn TokenBar() -> impl IntoView {
    let session = use_session();
    let draft = RwSignal::new(String::new());

    view! {
        <div class="token-bar">
            {move || if session.get().is_authenticated() {
                view! {
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Token tersimpan"</Badge>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| set_token(session, None)
                    >
                        "Hapus token"
                    </Button>
                }.into_any()
            } else {
                view! {
                    <Input value=draft input_type=InputType::Password placeholder="Token akses" />
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            set_token(session, Some(draft.get_untracked()));
                            draft.set(String::new());
                        }
                    >
                        "Simpan token"
                    </Button>
                }.into_any()
            }}
        </div>
    }
}
