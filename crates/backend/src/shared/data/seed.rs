use contracts::domain::a001_room::aggregate::Room;
use contracts::domain::a002_booking::aggregate::{Booking, BookingStatus};
use contracts::domain::a004_user::aggregate::User;
use chrono::{Duration, NaiveDate};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read a JSON array fixture; a missing file seeds nothing
pub fn load_fixture<T: DeserializeOwned>(dir: &Path, file: &str) -> anyhow::Result<Vec<T>> {
    let path = dir.join(file);
    if !path.exists() {
        tracing::warn!("Fixture {} not found, starting empty", path.display());
        return Ok(Vec::new());
    }

    let contents = std::fs::read_to_string(&path)?;
    let rows: Vec<T> = serde_json::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("invalid fixture {}: {e}", path.display()))?;
    tracing::info!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Demo bookings spread over the seeded rooms and users
pub fn sample_bookings(rooms: &[Room], users: &[User]) -> Vec<Booking> {
    if rooms.is_empty() || users.is_empty() {
        return Vec::new();
    }

    let Some(start) = NaiveDate::from_ymd_opt(2024, 9, 2) else {
        return Vec::new();
    };
    let statuses = [
        BookingStatus::Approved,
        BookingStatus::Pending,
        BookingStatus::Rejected,
        BookingStatus::Pending,
    ];

    (0..24)
        .map(|i| {
            let room = &rooms[(i * 7) % rooms.len()];
            let user = &users[(i * 5) % users.len()];
            let day = start + Duration::days(i as i64 * 3);
            Booking {
                id: i as i64 + 1,
                booking_date: format!("{}T{:02}:00:00", day.format("%Y-%m-%d"), 8 + i % 9),
                room_id: room.id,
                user_id: user.id,
                status: statuses[i % statuses.len()].clone(),
                room_name: room.name.clone(),
                user_name: user.name.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: i64) -> Room {
        Room {
            id,
            name: format!("Room {id}"),
            capacity: 4,
            amenities: vec![],
        }
    }

    fn user(id: i64) -> User {
        User {
            id,
            name: format!("User {id}"),
            email: format!("u{id}@contoh.id"),
            role: "User".into(),
        }
    }

    #[test]
    fn test_sample_bookings_reference_seeded_rows() {
        let rooms = vec![room(1), room(2), room(3)];
        let users = vec![user(10), user(11)];
        let bookings = sample_bookings(&rooms, &users);

        assert_eq!(bookings.len(), 24);
        for b in &bookings {
            let room = rooms.iter().find(|r| r.id == b.room_id).unwrap();
            assert_eq!(b.room_name, room.name);
            assert!(users.iter().any(|u| u.id == b.user_id));
            assert!(contracts::shared::date::parse_date(&b.booking_date).is_some());
        }
    }

    #[test]
    fn test_no_bookings_without_rooms() {
        assert!(sample_bookings(&[], &[user(1)]).is_empty());
    }

    #[test]
    fn test_missing_fixture_is_empty() {
        let rows: Vec<Room> = load_fixture(Path::new("/nonexistent"), "rooms.json").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_bundled_fixtures_parse() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("static");
        let rooms: Vec<Room> = load_fixture(&dir, "rooms.json").unwrap();
        let users: Vec<User> = load_fixture(&dir, "users.json").unwrap();
        let facilities: Vec<contracts::domain::a003_facility::aggregate::Facility> =
            load_fixture(&dir, "facilities.json").unwrap();
        assert!(!rooms.is_empty());
        assert!(!users.is_empty());
        assert!(!facilities.is_empty());
    }
}
