pub mod state;

use self::state::{create_state, status_color, BookingField};
use crate::domain::a001_room::api as room_api;
use crate::domain::a002_booking::api;
use crate::shared::api_utils::ApiConfig;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::{NotificationBanner, PaginationControls, SearchInput};
use crate::shared::date_utils::{format_date_long, to_input_date};
use crate::shared::icons::icon;
use crate::shared::mutation::BrowserConfirm;
use crate::system::auth::{use_session, Session};
use contracts::domain::a001_room::aggregate::Room;
use contracts::domain::a002_booking::aggregate::{Booking, BookingDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn BookingList() -> impl IntoView {
    let config = StoredValue::new(use_context::<ApiConfig>().expect("ApiConfig not found in context"));
    let session = use_session();
    let state = create_state();
    let coordinator = move || api::coordinator(&config.get_value(), &session.get_untracked());

    // Rooms for the form select
    let rooms = RwSignal::new(Vec::<Room>::new());

    let show_form = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<i64>);
    let booking_date = RwSignal::new(String::new());
    let room_id = RwSignal::new(String::new());

    let fetch = move || {
        spawn_local(async move {
            coordinator().load(&state).await;
        });
    };

    let fetch_rooms = move || {
        spawn_local(async move {
            let client = room_api::client(&config.get_value(), &session.get_untracked());
            match client.list().await {
                Ok(list) => rooms.set(list),
                Err(e) => log::warn!("Failed to load rooms for booking form: {}", e),
            }
        });
    };

    let open_create = move || {
        editing_id.set(None);
        booking_date.set(String::new());
        room_id.set(String::new());
        show_form.set(true);
    };

    let open_edit = move |booking: Booking| {
        editing_id.set(Some(booking.id));
        booking_date.set(to_input_date(&booking.booking_date));
        room_id.set(booking.room_id.to_string());
        show_form.set(true);
    };

    let submit = move || {
        let payload = BookingDto {
            booking_date: booking_date.get_untracked(),
            room_id: room_id.get_untracked().parse().unwrap_or(0),
        };
        let id = editing_id.get_untracked();
        spawn_local(async move {
            let coordinator = coordinator();
            let result = match id {
                Some(id) => coordinator.update(&state, id, &payload).await,
                None => coordinator.create(&state, &payload).await,
            };
            if result.is_ok() {
                show_form.set(false);
            }
        });
    };

    let delete = move |id: i64| {
        spawn_local(async move {
            let _ = coordinator().delete(&state, id, &BrowserConfirm).await;
        });
    };

    fetch();
    fetch_rooms();

    // Another token means another user: start over with a fresh view
    Effect::new(move |prev: Option<Session>| {
        let current = session.get();
        if prev.is_some_and(|p| p != current) {
            state.update(|s| s.reset_view());
            fetch();
            fetch_rooms();
        }
        current
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{"Manajemen Booking"}</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                        {icon("plus")}
                        " Tambah Booking"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                        {icon("refresh")}
                        " Muat Ulang"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <NotificationBanner state=state />

                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.filter().to_string()))
                    on_change=Callback::new(move |value: String| state.update(|s| s.set_filter(value)))
                    placeholder="Cari booking..."
                />

                {move || show_form.get().then(|| view! {
                    <div class="form-panel">
                        <h2 class="form-panel__title">
                            {move || if editing_id.get().is_some() { "Edit Booking" } else { "Tambah Booking Baru" }}
                        </h2>
                        <div class="form-group">
                            <label>"Tanggal Booking"</label>
                            <input
                                type="date"
                                class="form-control"
                                prop:value=move || booking_date.get()
                                on:input=move |ev| booking_date.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Ruangan"</label>
                            <select
                                class="form-control"
                                prop:value=move || room_id.get()
                                on:change=move |ev| room_id.set(event_target_value(&ev))
                            >
                                <option value="">"Pilih Ruangan"</option>
                                {move || rooms.get().into_iter().map(|room| {
                                    let value = room.id.to_string();
                                    let selected = room_id.get_untracked() == value;
                                    view! {
                                        <option value=value selected=selected>{room.name}</option>
                                    }
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form-panel__actions">
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| show_form.set(false)>
                                "Batal"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::derive(move || state.with(|s| s.is_mutation_pending()))
                                on_click=move |_| submit()
                            >
                                "Simpan"
                            </Button>
                        </div>
                    </div>
                })}

                {move || state.with(|s| s.is_loading() && !s.is_loaded()).then(|| view! {
                    <div class="page__loading">"Memuat data..."</div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="ID" state=state field=BookingField::Id min_width=60.0 />
                                <SortableHeaderCell label="Tanggal Booking" state=state field=BookingField::BookingDate min_width=220.0 />
                                <SortableHeaderCell label="Ruangan" state=state field=BookingField::RoomName min_width=160.0 />
                                <SortableHeaderCell label="Status" state=state field=BookingField::Status />
                                <TableHeaderCell>"Aksi"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let rows = state.with(|s| s.visible_items());
                                if rows.is_empty() {
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan="5">"Tidak ada data booking"</TableCell>
                                        </TableRow>
                                    }.into_any();
                                }
                                rows.into_iter().map(|booking| {
                                    let id = booking.id;
                                    let date = format_date_long(&booking.booking_date);
                                    let color = status_color(&booking.status);
                                    let status = booking.status.label().to_string();
                                    let room_name = booking.room_name.clone();
                                    let for_edit = booking.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{id.to_string()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{date}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{room_name}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge appearance=BadgeAppearance::Tint color=color>{status}</Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| open_edit(for_edit.clone())
                                                    >
                                                        {icon("edit")}
                                                        " Edit"
                                                    </Button>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| delete(id)
                                                    >
                                                        {icon("delete")}
                                                        " Hapus"
                                                    </Button>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view().into_any()
                            }}
                        </TableBody>
                    </Table>
                </div>

                <PaginationControls
                    index=Signal::derive(move || state.with(|s| s.page_index()))
                    total_count=Signal::derive(move || state.with(|s| s.total_count()))
                    on_page_change=Callback::new(move |page: usize| state.update(|s| s.go_to_page(page)))
                />
            </div>
        </div>
    }
}
