use axum::{
    extract::{Path, State},
    Extension,
};
use contracts::domain::a001_room::aggregate::Room;
use contracts::domain::a002_booking::aggregate::{Booking, BookingDto, BookingStatus};

use super::response::{self, ApiFailure, Listed, Mutated, Payload};
use crate::shared::state::AppState;
use crate::system::auth::ApiUser;

const LABEL: &str = "Booking";

/// Room referenced by the payload; an unknown room is a validation failure
async fn resolve_room(state: &AppState, room_id: i64) -> Result<Room, ApiFailure> {
    state
        .rooms
        .read()
        .await
        .get(room_id)
        .ok_or_else(|| ApiFailure::Invalid(vec!["roomId"]))
}

/// GET /api/bookings
pub async fn list_all(State(state): State<AppState>) -> Listed<Booking> {
    response::listed(state.bookings.read().await.list())
}

/// POST /api/bookings
///
/// New bookings start as pending and belong to the caller.
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<ApiUser>,
    Payload(dto): Payload<BookingDto>,
) -> Result<Mutated<Booking>, ApiFailure> {
    response::validate(&dto)?;
    let room = resolve_room(&state, dto.room_id).await?;
    let user_name = state
        .users
        .read()
        .await
        .get(user.user_id)
        .map(|u| u.name)
        .unwrap_or_default();

    let booking = state.bookings.write().await.insert(|id| Booking {
        id,
        booking_date: dto.booking_date.trim().to_string(),
        room_id: room.id,
        user_id: user.user_id,
        status: BookingStatus::Pending,
        room_name: room.name,
        user_name,
    });
    tracing::info!("Created booking {} for room {}", booking.id, booking.room_id);
    Ok(response::created(LABEL, booking))
}

/// PUT /api/bookings/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Payload(dto): Payload<BookingDto>,
) -> Result<Mutated<Booking>, ApiFailure> {
    response::validate(&dto)?;
    let room = resolve_room(&state, dto.room_id).await?;

    let booking = state
        .bookings
        .write()
        .await
        .update(id, |b| {
            b.booking_date = dto.booking_date.trim().to_string();
            b.room_id = room.id;
            b.room_name = room.name;
        })
        .map_err(|_| ApiFailure::NotFound(LABEL))?;
    Ok(response::updated(LABEL, booking))
}

/// DELETE /api/bookings/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Mutated<Booking>, ApiFailure> {
    state
        .bookings
        .write()
        .await
        .remove(id)
        .map_err(|_| ApiFailure::NotFound(LABEL))?;
    tracing::info!("Deleted booking {}", id);
    Ok(response::deleted(LABEL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::http::StatusCode;
    use contracts::domain::a004_user::aggregate::User;

    fn state() -> AppState {
        let rooms = vec![
            Room {
                id: 1,
                name: "Ruang Rapat".into(),
                capacity: 8,
                amenities: vec![],
            },
            Room {
                id: 2,
                name: "Aula".into(),
                capacity: 50,
                amenities: vec![],
            },
        ];
        let users = vec![User {
            id: 1,
            name: "Sari Wijaya".into(),
            email: "sari@contoh.id".into(),
            role: "Admin".into(),
        }];
        AppState::with_rows(vec!["t".into()], rooms, vec![], vec![], users)
    }

    fn dto(date: &str, room_id: i64) -> BookingDto {
        BookingDto {
            booking_date: date.into(),
            room_id,
        }
    }

    #[tokio::test]
    async fn test_create_resolves_names_and_starts_pending() {
        let state = state();
        let (status, Json(body)) = create(
            State(state.clone()),
            Extension(ApiUser { user_id: 1 }),
            Payload(dto("2024-10-01", 2)),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        let booking = body.data.unwrap();
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.room_name, "Aula");
        assert_eq!(booking.user_name, "Sari Wijaya");
    }

    #[tokio::test]
    async fn test_update_moves_room_and_keeps_status() {
        let state = state();
        create(
            State(state.clone()),
            Extension(ApiUser { user_id: 1 }),
            Payload(dto("2024-10-01", 2)),
        )
        .await
        .unwrap();
        state
            .bookings
            .write()
            .await
            .update(1, |b| b.status = BookingStatus::Approved)
            .unwrap();

        let (_, Json(body)) = update(State(state.clone()), Path(1), Payload(dto("2024-10-02", 1)))
            .await
            .unwrap();
        let booking = body.data.unwrap();
        assert_eq!(booking.room_name, "Ruang Rapat");
        assert_eq!(booking.booking_date, "2024-10-02");
        assert_eq!(booking.status, BookingStatus::Approved);
    }

    #[tokio::test]
    async fn test_rejects_bad_payloads() {
        let state = state();
        let user = ApiUser { user_id: 1 };

        let err = create(State(state.clone()), Extension(user.clone()), Payload(dto("besok", 1)))
            .await
            .unwrap_err();
        assert_eq!(err, ApiFailure::Invalid(vec!["bookingDate"]));

        let err = create(State(state.clone()), Extension(user), Payload(dto("2024-10-01", 9)))
            .await
            .unwrap_err();
        assert_eq!(err, ApiFailure::Invalid(vec!["roomId"]));

        let err = delete(State(state), Path(3)).await.unwrap_err();
        assert_eq!(err, ApiFailure::NotFound("Booking"));
    }
}
