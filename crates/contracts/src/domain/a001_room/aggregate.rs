use serde::{Deserialize, Serialize};

use crate::shared::validation::{is_filled, Validate};

/// Bookable room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub capacity: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// Writable part of a room. The id is always assigned by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomDto {
    pub name: String,
    pub capacity: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
}

impl From<&Room> for RoomDto {
    fn from(room: &Room) -> Self {
        Self {
            name: room.name.clone(),
            capacity: room.capacity,
            amenities: room.amenities.clone(),
        }
    }
}

impl RoomDto {
    pub fn into_room(self, id: i64) -> Room {
        Room {
            id,
            name: self.name.trim().to_string(),
            capacity: self.capacity,
            amenities: self.amenities,
        }
    }
}

impl Validate for RoomDto {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !is_filled(&self.name) {
            missing.push("name");
        }
        if self.capacity == 0 {
            missing.push("capacity");
        }
        missing
    }
}
