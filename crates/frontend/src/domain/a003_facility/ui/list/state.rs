use crate::shared::list_state::ListState;
use crate::shared::list_utils::{ListRecord, Searchable, SortValue, Sortable};
use contracts::domain::a003_facility::aggregate::Facility;
use leptos::prelude::*;

pub const PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacilityField {
    Id,
    Name,
    Type,
    Available,
}

impl Searchable for Facility {
    fn search_fields(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone(), self.facility_type.clone()]
    }
}

impl Sortable for Facility {
    type Field = FacilityField;

    fn sort_value(&self, field: FacilityField) -> SortValue<'_> {
        match field {
            FacilityField::Id => SortValue::Number(self.id),
            FacilityField::Name => SortValue::Text(&self.name),
            FacilityField::Type => SortValue::Text(&self.facility_type),
            FacilityField::Available => SortValue::Flag(self.available),
        }
    }
}

impl ListRecord for Facility {
    fn id(&self) -> i64 {
        self.id
    }
}

pub fn create_state() -> RwSignal<ListState<Facility>> {
    RwSignal::new(ListState::new(PAGE_SIZE))
}
