//! Document store key conventions.
//!
//! Pure string functions — no storage SDK dependency. These define the
//! canonical layout of documents in the CarePath store.

use uuid::Uuid;

use crate::error::CoreError;

pub const SYMPTOM_CHECKS_PREFIX: &str = "symptom-checks/";
pub const APPOINTMENTS_PREFIX: &str = "appointments/";
pub const FACILITIES_PREFIX: &str = "facilities/";
pub const PROFILES_PREFIX: &str = "profiles/";

/// Reject handles that would escape their key prefix.
pub fn validate_user_handle(handle: &str) -> Result<&str, CoreError> {
    if handle.is_empty() || handle.contains('/') || handle == "." || handle == ".." {
        return Err(CoreError::InvalidUserHandle(handle.to_string()));
    }
    Ok(handle)
}

pub fn symptom_checks_prefix(user_handle: &str) -> Result<String, CoreError> {
    let handle = validate_user_handle(user_handle)?;
    Ok(format!("{SYMPTOM_CHECKS_PREFIX}{handle}/"))
}

pub fn symptom_check(user_handle: &str, id: Uuid) -> Result<String, CoreError> {
    Ok(format!("{}{id}.json", symptom_checks_prefix(user_handle)?))
}

pub fn appointments_prefix(user_handle: &str) -> Result<String, CoreError> {
    let handle = validate_user_handle(user_handle)?;
    Ok(format!("{APPOINTMENTS_PREFIX}{handle}/"))
}

pub fn appointment(user_handle: &str, id: Uuid) -> Result<String, CoreError> {
    Ok(format!("{}{id}.json", appointments_prefix(user_handle)?))
}

pub fn facility(id: Uuid) -> String {
    format!("{FACILITIES_PREFIX}{id}.json")
}

pub fn profile(user_handle: &str) -> Result<String, CoreError> {
    let handle = validate_user_handle(user_handle)?;
    Ok(format!("{PROFILES_PREFIX}{handle}.json"))
}
