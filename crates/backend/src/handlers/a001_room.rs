use axum::extract::{Path, State};
use contracts::domain::a001_room::aggregate::{Room, RoomDto};

use super::response::{self, ApiFailure, Listed, Mutated, Payload};
use crate::shared::state::AppState;

const LABEL: &str = "Room";

/// GET /api/rooms
pub async fn list_all(State(state): State<AppState>) -> Listed<Room> {
    response::listed(state.rooms.read().await.list())
}

/// POST /api/rooms
pub async fn create(
    State(state): State<AppState>,
    Payload(dto): Payload<RoomDto>,
) -> Result<Mutated<Room>, ApiFailure> {
    response::validate(&dto)?;
    let room = state.rooms.write().await.insert(|id| dto.into_room(id));
    tracing::info!("Created room {} ({})", room.id, room.name);
    Ok(response::created(LABEL, room))
}

/// PUT /api/rooms/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Payload(dto): Payload<RoomDto>,
) -> Result<Mutated<Room>, ApiFailure> {
    response::validate(&dto)?;
    let room = state
        .rooms
        .write()
        .await
        .update(id, |room| *room = dto.into_room(id))
        .map_err(|_| ApiFailure::NotFound(LABEL))?;

    // Bookings carry a copy of the room name
    let mut bookings = state.bookings.write().await;
    for booking in bookings.list().into_iter().filter(|b| b.room_id == id) {
        let name = room.name.clone();
        let _ = bookings.update(booking.id, |b| b.room_name = name);
    }

    Ok(response::updated(LABEL, room))
}

/// DELETE /api/rooms/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Mutated<Room>, ApiFailure> {
    state
        .rooms
        .write()
        .await
        .remove(id)
        .map_err(|_| ApiFailure::NotFound(LABEL))?;
    tracing::info!("Deleted room {}", id);
    Ok(response::deleted(LABEL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::http::StatusCode;

    fn dto(name: &str, capacity: u32) -> RoomDto {
        RoomDto {
            name: name.into(),
            capacity,
            amenities: vec!["AC".into()],
        }
    }

    #[tokio::test]
    async fn test_create_list_update_delete() {
        let state = AppState::new(vec!["t".into()]);

        let (status, Json(body)) = create(State(state.clone()), Payload(dto(" Aula ", 30)))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.message.as_deref(), Some("Room berhasil ditambahkan"));
        let room = body.data.unwrap();
        assert_eq!((room.id, room.name.as_str()), (1, "Aula"));

        let (status, Json(body)) = update(State(state.clone()), Path(1), Payload(dto("Aula Besar", 40)))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.data.unwrap().capacity, 40);

        let Json(listed) = list_all(State(state.clone())).await;
        assert_eq!(listed.into_items()[0].name, "Aula Besar");

        let (status, Json(body)) = delete(State(state.clone()), Path(1)).await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert!(body.data.is_none());
        assert!(state.rooms.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_and_unknown() {
        let state = AppState::new(vec![]);

        let err = create(State(state.clone()), Payload(dto("", 0))).await.unwrap_err();
        assert_eq!(err, ApiFailure::Invalid(vec!["name", "capacity"]));

        let err = update(State(state.clone()), Path(5), Payload(dto("A", 1))).await.unwrap_err();
        assert_eq!(err, ApiFailure::NotFound("Room"));

        let err = delete(State(state), Path(5)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
