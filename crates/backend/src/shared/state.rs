use crate::shared::data::{seed, MemoryCollection};
use contracts::domain::a001_room::aggregate::Room;
use contracts::domain::a002_booking::aggregate::Booking;
use contracts::domain::a003_facility::aggregate::Facility;
use contracts::domain::a004_user::aggregate::User;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

pub type Shared<T> = Arc<RwLock<MemoryCollection<T>>>;

/// Stores and accepted tokens shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub rooms: Shared<Room>,
    pub bookings: Shared<Booking>,
    pub facilities: Shared<Facility>,
    pub users: Shared<User>,
    pub tokens: Arc<Vec<String>>,
}

fn shared<T>(collection: MemoryCollection<T>) -> Shared<T> {
    Arc::new(RwLock::new(collection))
}

impl AppState {
    /// Empty stores
    pub fn new(tokens: Vec<String>) -> Self {
        Self::with_rows(tokens, Vec::new(), Vec::new(), Vec::new(), Vec::new())
    }

    /// Stores seeded from the fixture directory, plus demo bookings
    pub fn from_fixtures(dir: &Path, tokens: Vec<String>) -> anyhow::Result<Self> {
        let rooms: Vec<Room> = seed::load_fixture(dir, "rooms.json")?;
        let facilities: Vec<Facility> = seed::load_fixture(dir, "facilities.json")?;
        let users: Vec<User> = seed::load_fixture(dir, "users.json")?;
        let bookings = seed::sample_bookings(&rooms, &users);
        Ok(Self::with_rows(tokens, rooms, bookings, facilities, users))
    }

    pub fn with_rows(
        tokens: Vec<String>,
        rooms: Vec<Room>,
        bookings: Vec<Booking>,
        facilities: Vec<Facility>,
        users: Vec<User>,
    ) -> Self {
        let tokens = tokens
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        Self {
            rooms: shared(MemoryCollection::seeded(rooms, |r| r.id)),
            bookings: shared(MemoryCollection::seeded(bookings, |b| b.id)),
            facilities: shared(MemoryCollection::seeded(facilities, |f| f.id)),
            users: shared(MemoryCollection::seeded(users, |u| u.id)),
            tokens: Arc::new(tokens),
        }
    }
}
