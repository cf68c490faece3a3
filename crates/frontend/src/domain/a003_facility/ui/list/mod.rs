pub mod state;

use self::state::{create_state, FacilityField};
use crate::domain::a003_facility::api;
use crate::shared::api_utils::ApiConfig;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::{NotificationBanner, PaginationControls, SearchInput};
use crate::shared::icons::icon;
use crate::shared::mutation::load_into;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Read-only facilities list loaded from the static fixture
#[component]
#[allow(non_snake_case)]
pub fn FacilityList() -> impl IntoView {
    let config = StoredValue::new(use_context::<ApiConfig>().expect("ApiConfig not found in context"));
    let state = create_state();

    let fetch = move || {
        spawn_local(async move {
            let source = api::source(&config.get_value());
            load_into(&source, &state).await;
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{"Manajemen Fasilitas"}</h1>
                </div>
                <div class="page__header-right">
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
                    placeholder="Cari fasilitas..."
                />

                {move || state.with(|s| s.is_loading() && !s.is_loaded()).then(|| view! {
                    <div class="page__loading">"Memuat data..."</div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="ID" state=state field=FacilityField::Id min_width=60.0 />
                                <SortableHeaderCell label="Nama" state=state field=FacilityField::Name min_width=220.0 />
                                <SortableHeaderCell label="Jenis" state=state field=FacilityField::Type />
                                <SortableHeaderCell label="Ketersediaan" state=state field=FacilityField::Available />
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let rows = state.with(|s| s.visible_items());
                                if rows.is_empty() {
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan="4">"Tidak ada data fasilitas"</TableCell>
                                        </TableRow>
                                    }.into_any();
                                }
                                rows.into_iter().map(|facility| {
                                    let (color, text) = if facility.available {
                                        (BadgeColor::Success, "Tersedia")
                                    } else {
                                        (BadgeColor::Danger, "Tidak tersedia")
                                    };
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{facility.id.to_string()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{facility.name}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{facility.facility_type}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge appearance=BadgeAppearance::Tint color=color>{text}</Badge>
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
