use crate::shared::list_state::ListState;
use crate::shared::list_utils::{ListRecord, Searchable, SortValue, Sortable};
use contracts::domain::a001_room::aggregate::Room;
use leptos::prelude::*;

pub const PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomField {
    Id,
    Name,
    Capacity,
}

impl Searchable for Room {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![self.id.to_string(), self.name.clone(), self.capacity.to_string()];
        fields.extend(self.amenities.iter().cloned());
        fields
    }
}

impl Sortable for Room {
    type Field = RoomField;

    fn sort_value(&self, field: RoomField) -> SortValue<'_> {
        match field {
            RoomField::Id => SortValue::Number(self.id),
            RoomField::Name => SortValue::Text(&self.name),
            RoomField::Capacity => SortValue::Number(self.capacity as i64),
        }
    }
}

impl ListRecord for Room {
    fn id(&self) -> i64 {
        self.id
    }
}

pub fn create_state() -> RwSignal<ListState<Room>> {
    RwSignal::new(ListState::new(PAGE_SIZE))
}

/// Comma separated amenities from the form field
pub fn split_amenities(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: i64, name: &str, capacity: u32, amenities: &[&str]) -> Room {
        Room {
            id,
            name: name.into(),
            capacity,
            amenities: amenities.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn test_search_covers_amenities() {
        let r = room(4, "Room 12", 8, &["AC", "Whiteboard"]);
        assert!(r.matches_filter("board"));
        assert!(r.matches_filter("room 1"));
        assert!(r.matches_filter("8"));
        assert!(!r.matches_filter("projector"));
    }

    #[test]
    fn test_split_amenities() {
        assert_eq!(split_amenities(" AC, WiFi ,,"), vec!["AC", "WiFi"]);
        assert!(split_amenities("").is_empty());
    }

    #[test]
    fn test_capacity_sorts_numerically() {
        let mut state = ListState::new(PAGE_SIZE);
        state.replace_items(vec![
            room(1, "A", 12, &[]),
            room(2, "B", 3, &[]),
            room(3, "C", 20, &[]),
        ]);
        state.toggle_sort(RoomField::Capacity);
        let caps: Vec<u32> = state.visible_items().iter().map(|r| r.capacity).collect();
        assert_eq!(caps, vec![3, 12, 20]);
    }
}
