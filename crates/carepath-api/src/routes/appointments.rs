use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use carepath_core::models::appointment::Appointment;
use carepath_core::models::facility::FacilityContact;
use carepath_core::store_keys;
use carepath_storage::json;

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::auth::AuthUser;
use crate::routes::facilities::load_facility;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub facility_id: Option<Uuid>,
    pub service: Option<String>,
    pub date: Option<Date>,
    pub time: Option<String>,
}

#[derive(Serialize)]
pub struct AppointmentResponse {
    pub success: bool,
    pub appointment: Appointment,
}

/// An appointment together with the facility's contact details.
#[derive(Serialize)]
pub struct AppointmentView {
    #[serde(flatten)]
    pub appointment: Appointment,
    /// `None` if the facility has since left the directory.
    pub facility: Option<FacilityContact>,
}

#[derive(Serialize)]
pub struct AppointmentList {
    pub success: bool,
    pub appointments: Vec<AppointmentView>,
}

fn missing_fields() -> ApiError {
    ApiError::BadRequest("Missing required fields".to_string())
}

/// Book an appointment for the caller.
pub async fn create_appointment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiJson(req): ApiJson<BookingRequest>,
) -> Result<(StatusCode, Json<AppointmentResponse>), ApiError> {
    let (Some(facility_id), Some(service), Some(date), Some(time)) =
        (req.facility_id, req.service, req.date, req.time)
    else {
        return Err(missing_fields());
    };

    let facility = load_facility(state.store.as_ref(), facility_id).await?;
    let appointment = Appointment::book(
        &user.handle,
        facility.id,
        &service,
        date,
        &time,
        jiff::Timestamp::now(),
    )
    .map_err(|_| missing_fields())?;

    let key = store_keys::appointment(&user.handle, appointment.id)?;
    json::save(state.store.as_ref(), &key, &appointment).await?;
    tracing::info!(id = %appointment.id, facility_id = %facility_id, date = %date, "appointment booked");

    Ok((
        StatusCode::CREATED,
        Json(AppointmentResponse {
            success: true,
            appointment,
        }),
    ))
}

/// A user's appointments, newest booking first. Only the user themself may list them.
pub async fn list_user_appointments(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiPath(handle): ApiPath<String>,
) -> Result<Json<AppointmentList>, ApiError> {
    if handle != user.handle {
        return Err(ApiError::Forbidden("Forbidden".to_string()));
    }

    let prefix = store_keys::appointments_prefix(&user.handle)?;
    let mut appointments: Vec<Appointment> = json::load_all(state.store.as_ref(), &prefix).await?;
    appointments.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut views = Vec::with_capacity(appointments.len());
    for appointment in appointments {
        let facility = match load_facility(state.store.as_ref(), appointment.facility_id).await {
            Ok(f) => Some(FacilityContact::from(&f)),
            Err(ApiError::NotFound(_)) => None,
            Err(e) => return Err(e),
        };
        views.push(AppointmentView {
            appointment,
            facility,
        });
    }

    Ok(Json(AppointmentList {
        success: true,
        appointments: views,
    }))
}

/// Cancel one of the caller's appointments.
pub async fn cancel_appointment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<AppointmentResponse>, ApiError> {
    let key = store_keys::appointment(&user.handle, id)?;
    let mut appointment: Appointment = json::load(state.store.as_ref(), &key)
        .await
        .map_err(ApiError::missing("Appointment not found"))?;

    if appointment.cancel(jiff::Timestamp::now()) {
        json::save(state.store.as_ref(), &key, &appointment).await?;
        tracing::info!(id = %id, "appointment cancelled");
    }

    Ok(Json(AppointmentResponse {
        success: true,
        appointment,
    }))
}
