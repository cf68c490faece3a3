use crate::shared::list_state::ListState;
use crate::shared::list_utils::{ListRecord, Searchable, SortValue, Sortable};
use contracts::domain::a002_booking::aggregate::{Booking, BookingStatus};
use contracts::shared::date::parse_date;
use leptos::prelude::*;
use thaw::BadgeColor;

pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingField {
    Id,
    BookingDate,
    RoomName,
    Status,
}

impl Searchable for Booking {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.booking_date.clone(),
            self.room_name.clone(),
            self.status.as_str().to_string(),
            self.status.label().to_string(),
        ]
    }
}

impl Sortable for Booking {
    type Field = BookingField;

    fn sort_value(&self, field: BookingField) -> SortValue<'_> {
        match field {
            BookingField::Id => SortValue::Number(self.id),
            BookingField::BookingDate => SortValue::Date(parse_date(&self.booking_date)),
            BookingField::RoomName => SortValue::Text(&self.room_name),
            BookingField::Status => SortValue::Text(self.status.as_str()),
        }
    }
}

impl ListRecord for Booking {
    fn id(&self) -> i64 {
        self.id
    }
}

pub fn create_state() -> RwSignal<ListState<Booking>> {
    RwSignal::new(ListState::new(PAGE_SIZE))
}

pub fn status_color(status: &BookingStatus) -> BadgeColor {
    match status {
        BookingStatus::Approved => BadgeColor::Success,
        BookingStatus::Pending => BadgeColor::Warning,
        BookingStatus::Rejected => BadgeColor::Danger,
        BookingStatus::Other(_) => BadgeColor::Informative,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(id: i64, date: &str, status: &str) -> Booking {
        Booking {
            id,
            booking_date: date.into(),
            room_id: 1,
            user_id: 1,
            status: BookingStatus::from(status.to_string()),
            room_name: "Aula".into(),
            user_name: "Budi".into(),
        }
    }

    #[test]
    fn test_dates_sort_chronologically() {
        let mut state = ListState::new(PAGE_SIZE);
        state.replace_items(vec![
            booking(1, "2024-10-01T08:00:00.000Z", "approved"),
            booking(2, "2024-09-15", "pending"),
            booking(3, "2024-02-28T00:00:00Z", "rejected"),
        ]);
        state.toggle_sort(BookingField::BookingDate);
        let ids: Vec<i64> = state.visible_items().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_search_by_status_label() {
        let b = booking(1, "2024-03-15", "pending");
        assert!(b.matches_filter("menunggu"));
        assert!(b.matches_filter("PENDING"));
        assert!(b.matches_filter("aula"));
        assert!(!b.matches_filter("ditolak"));
    }

    #[test]
    fn test_twenty_five_bookings_page_three() {
        let mut state = ListState::new(PAGE_SIZE);
        state.replace_items((1..=25).map(|id| booking(id, "2024-03-15", "approved")).collect());
        state.go_to_page(3);
        let ids: Vec<i64> = state.visible_items().iter().map(|b| b.id).collect();
        assert_eq!(ids, (21..=25).collect::<Vec<_>>());
        assert_eq!(state.total_pages(), 3);
    }
}
