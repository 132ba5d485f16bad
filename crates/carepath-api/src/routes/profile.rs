use axum::extract::State;
use axum::{Extension, Json};
use serde::Serialize;

use carepath_core::models::profile::{MedicalInfo, PersonalInfo, ProfileUpdate, UserProfile, UserRole};
use carepath_core::store_keys;
use carepath_storage::error::StorageError;
use carepath_storage::json;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub success: bool,
    pub profile: PersonalInfo,
    pub medical_info: MedicalInfo,
    pub role: UserRole,
    pub created_at: jiff::Timestamp,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdated {
    pub success: bool,
    pub message: &'static str,
    pub profile: PersonalInfo,
    pub medical_info: MedicalInfo,
}

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let key = store_keys::profile(&user.handle)?;
    let stored: UserProfile = json::load(state.store.as_ref(), &key)
        .await
        .map_err(ApiError::missing("User not found"))?;

    Ok(Json(ProfileResponse {
        success: true,
        profile: stored.profile,
        medical_info: stored.medical_info,
        role: stored.role,
        created_at: stored.created_at,
    }))
}

/// Merge the body into the caller's profile, creating it on first use.
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiJson(update): ApiJson<ProfileUpdate>,
) -> Result<Json<ProfileUpdated>, ApiError> {
    let key = store_keys::profile(&user.handle)?;
    let now = jiff::Timestamp::now();
    let mut stored = match json::load::<UserProfile>(state.store.as_ref(), &key).await {
        Ok(stored) => stored,
        Err(StorageError::NotFound { .. }) => UserProfile::new(&user.handle, now),
        Err(e) => return Err(e.into()),
    };

    stored.apply(update, now);
    json::save(state.store.as_ref(), &key, &stored).await?;
    tracing::info!("profile updated");

    Ok(Json(ProfileUpdated {
        success: true,
        message: "Profile updated successfully",
        profile: stored.profile,
        medical_info: stored.medical_info,
    }))
}
