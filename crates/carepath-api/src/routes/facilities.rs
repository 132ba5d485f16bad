use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use uuid::Uuid;

use carepath_core::models::facility::{Facility, FacilityDraft, FacilityFilter};
use carepath_core::store_keys;
use carepath_storage::error::StorageError;
use carepath_storage::json;
use carepath_storage::store::DocumentStore;

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const FACILITY_NOT_FOUND: &str = "Facility not found";

/// Every facility in the directory, ordered by name.
pub async fn all_facilities(store: &dyn DocumentStore) -> Result<Vec<Facility>, StorageError> {
    let mut facilities: Vec<Facility> = json::load_all(store, store_keys::FACILITIES_PREFIX).await?;
    facilities.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    Ok(facilities)
}

/// Load `facilities` into an empty directory. Returns how many were written;
/// a directory that already has entries is left alone.
pub async fn seed_directory(
    store: &dyn DocumentStore,
    facilities: &[Facility],
) -> Result<usize, StorageError> {
    if !store.list(store_keys::FACILITIES_PREFIX).await?.is_empty() {
        return Ok(0);
    }
    for facility in facilities {
        json::save(store, &store_keys::facility(facility.id), facility).await?;
    }
    Ok(facilities.len())
}

pub async fn list_facilities(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<FacilityFilter>,
) -> Result<Json<Vec<Facility>>, ApiError> {
    let facilities: Vec<Facility> = all_facilities(state.store.as_ref())
        .await?
        .into_iter()
        .filter(|f| filter.matches(f))
        .collect();
    Ok(Json(facilities))
}

pub async fn get_facility(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Facility>, ApiError> {
    let facility = load_facility(state.store.as_ref(), id).await?;
    Ok(Json(facility))
}

pub async fn create_facility(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiJson(draft): ApiJson<FacilityDraft>,
) -> Result<(StatusCode, Json<Facility>), ApiError> {
    let facility = Facility::register(draft, &user.handle)?;
    json::save(state.store.as_ref(), &store_keys::facility(facility.id), &facility).await?;
    tracing::info!(id = %facility.id, facility_type = %facility.facility_type, "facility registered");
    Ok((StatusCode::CREATED, Json(facility)))
}

pub async fn update_facility(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(draft): ApiJson<FacilityDraft>,
) -> Result<Json<Facility>, ApiError> {
    let mut facility = owned_facility(state.store.as_ref(), id, &user).await?;
    facility.revise(draft)?;
    json::save(state.store.as_ref(), &store_keys::facility(id), &facility).await?;
    tracing::info!(id = %id, "facility updated");
    Ok(Json(facility))
}

pub async fn delete_facility(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    owned_facility(state.store.as_ref(), id, &user).await?;
    state.store.delete(&store_keys::facility(id)).await?;
    tracing::info!(id = %id, "facility deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn load_facility(store: &dyn DocumentStore, id: Uuid) -> Result<Facility, ApiError> {
    json::load(store, &store_keys::facility(id))
        .await
        .map_err(ApiError::missing(FACILITY_NOT_FOUND))
}

async fn owned_facility(
    store: &dyn DocumentStore,
    id: Uuid,
    user: &AuthUser,
) -> Result<Facility, ApiError> {
    let facility = load_facility(store, id).await?;
    if !facility.is_owned_by(&user.handle) {
        return Err(ApiError::Forbidden("Forbidden".to_string()));
    }
    Ok(facility)
}
