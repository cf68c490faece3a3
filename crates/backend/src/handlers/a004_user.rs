use axum::extract::{Path, State};
use contracts::domain::a004_user::aggregate::{User, UserDto};

use super::response::{self, ApiFailure, Listed, Mutated, Payload};
use crate::shared::state::AppState;

const LABEL: &str = "User";

/// GET /api/users
pub async fn list_all(State(state): State<AppState>) -> Listed<User> {
    response::listed(state.users.read().await.list())
}

/// POST /api/users
pub async fn create(
    State(state): State<AppState>,
    Payload(dto): Payload<UserDto>,
) -> Result<Mutated<User>, ApiFailure> {
    response::validate(&dto)?;
    let user = state.users.write().await.insert(|id| dto.into_user(id));
    tracing::info!("Created user {} <{}>", user.id, user.email);
    Ok(response::created(LABEL, user))
}

/// PUT /api/users/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Payload(dto): Payload<UserDto>,
) -> Result<Mutated<User>, ApiFailure> {
    response::validate(&dto)?;
    let user = state
        .users
        .write()
        .await
        .update(id, |u| *u = dto.into_user(id))
        .map_err(|_| ApiFailure::NotFound(LABEL))?;
    Ok(response::updated(LABEL, user))
}

/// DELETE /api/users/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Mutated<User>, ApiFailure> {
    state
        .users
        .write()
        .await
        .remove(id)
        .map_err(|_| ApiFailure::NotFound(LABEL))?;
    Ok(response::deleted(LABEL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;

    #[tokio::test]
    async fn test_update_trims_fields() {
        let state = AppState::new(vec![]);
        let dto = UserDto {
            name: "Budi".into(),
            email: "budi@contoh.id".into(),
            role: "User".into(),
        };
        create(State(state.clone()), Payload(dto)).await.unwrap();

        let dto = UserDto {
            name: " Budi Santoso ".into(),
            email: "budi@contoh.id".into(),
            role: "Editor".into(),
        };
        let (_, Json(body)) = update(State(state.clone()), Path(1), Payload(dto)).await.unwrap();
        let user = body.data.unwrap();
        assert_eq!(user.name, "Budi Santoso");
        assert_eq!(user.role, "Editor");

        let missing = UserDto::default();
        let err = update(State(state), Path(1), Payload(missing)).await.unwrap_err();
        assert_eq!(err, ApiFailure::Invalid(vec!["name", "email", "role"]));
    }
}
