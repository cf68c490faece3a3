use axum::extract::{Path, State};
use contracts::domain::a003_facility::aggregate::{Facility, FacilityDto};

use super::response::{self, ApiFailure, Listed, Mutated, Payload};
use crate::shared::state::AppState;

const LABEL: &str = "Fasilitas";

/// GET /api/facilities
pub async fn list_all(State(state): State<AppState>) -> Listed<Facility> {
    response::listed(state.facilities.read().await.list())
}

/// POST /api/facilities
pub async fn create(
    State(state): State<AppState>,
    Payload(dto): Payload<FacilityDto>,
) -> Result<Mutated<Facility>, ApiFailure> {
    response::validate(&dto)?;
    let facility = state
        .facilities
        .write()
        .await
        .insert(|id| dto.into_facility(id));
    Ok(response::created(LABEL, facility))
}

/// PUT /api/facilities/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Payload(dto): Payload<FacilityDto>,
) -> Result<Mutated<Facility>, ApiFailure> {
    response::validate(&dto)?;
    let facility = state
        .facilities
        .write()
        .await
        .update(id, |f| *f = dto.into_facility(id))
        .map_err(|_| ApiFailure::NotFound(LABEL))?;
    Ok(response::updated(LABEL, facility))
}

/// DELETE /api/facilities/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Mutated<Facility>, ApiFailure> {
    state
        .facilities
        .write()
        .await
        .remove(id)
        .map_err(|_| ApiFailure::NotFound(LABEL))?;
    Ok(response::deleted(LABEL))
}
