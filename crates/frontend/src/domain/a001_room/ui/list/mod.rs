pub mod state;

use self::state::{create_state, split_amenities, RoomField};
use crate::domain::a001_room::api;
use crate::shared::api_utils::ApiConfig;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::{NotificationBanner, PaginationControls, SearchInput};
use crate::shared::icons::icon;
use crate::shared::mutation::BrowserConfirm;
use crate::system::auth::{use_session, Session};
use contracts::domain::a001_room::aggregate::{Room, RoomDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn RoomList() -> impl IntoView {
    let config = StoredValue::new(use_context::<ApiConfig>().expect("ApiConfig not found in context"));
    let session = use_session();
    let state = create_state();
    let coordinator = move || api::coordinator(&config.get_value(), &session.get_untracked());

    let show_form = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<i64>);
    let name = RwSignal::new(String::new());
    let capacity = RwSignal::new(String::new());
    let amenities = RwSignal::new(String::new());

    let fetch = move || {
        spawn_local(async move {
            coordinator().load(&state).await;
        });
    };

    let open_create = move || {
        editing_id.set(None);
        name.set(String::new());
        capacity.set(String::new());
        amenities.set(String::new());
        show_form.set(true);
    };

    let open_edit = move |room: Room| {
        editing_id.set(Some(room.id));
        name.set(room.name);
        capacity.set(room.capacity.to_string());
        amenities.set(room.amenities.join(", "));
        show_form.set(true);
    };

    let submit = move || {
        let payload = RoomDto {
            name: name.get_untracked().trim().to_string(),
            capacity: capacity.get_untracked().trim().parse().unwrap_or(0),
            amenities: split_amenities(&amenities.get_untracked()),
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

    // Another token means another user: start over with a fresh view
    Effect::new(move |prev: Option<Session>| {
        let current = session.get();
        if prev.is_some_and(|p| p != current) {
            state.update(|s| s.reset_view());
            fetch();
        }
        current
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{"Manajemen Room"}</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                        {icon("plus")}
                        " Tambah Room"
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
                    placeholder="Cari room..."
                />

                {move || show_form.get().then(|| view! {
                    <div class="form-panel">
                        <h2 class="form-panel__title">
                            {move || if editing_id.get().is_some() { "Edit Room" } else { "Tambah Room Baru" }}
                        </h2>
                        <div class="form-group">
                            <label>"Nama"</label>
                            <Input value=name placeholder="Nama room" />
                        </div>
                        <div class="form-group">
                            <label>"Kapasitas"</label>
                            <Input input_type=InputType::Number value=capacity />
                        </div>
                        <div class="form-group">
                            <label>"Fasilitas"</label>
                            <Input value=amenities placeholder="AC, Projector, WiFi" />
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
                                <SortableHeaderCell label="ID" state=state field=RoomField::Id min_width=60.0 />
                                <SortableHeaderCell label="Nama" state=state field=RoomField::Name min_width=200.0 />
                                <SortableHeaderCell label="Kapasitas" state=state field=RoomField::Capacity />
                                <TableHeaderCell>"Fasilitas"</TableHeaderCell>
                                <TableHeaderCell>"Aksi"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let rows = state.with(|s| s.visible_items());
                                if rows.is_empty() {
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan="5">"Tidak ada data room"</TableCell>
                                        </TableRow>
                                    }.into_any();
                                }
                                rows.into_iter().map(|room| {
                                    let id = room.id;
                                    let amenities = room.amenities.join(", ");
                                    let for_edit = room.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{room.id.to_string()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{room.name}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{room.capacity.to_string()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{amenities}</TableCellLayout></TableCell>
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
