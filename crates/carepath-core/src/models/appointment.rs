use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

/// A booked visit at a facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Appointment {
    pub id: Uuid,
    pub user_handle: String,
    pub facility_id: Uuid,
    pub service: String,
    pub date: Date,
    /// Slot label as offered by the facility, e.g. "10:30 AM".
    pub time: String,
    #[serde(default)]
    pub status: AppointmentStatus,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl Appointment {
    pub fn book(
        user_handle: &str,
        facility_id: Uuid,
        service: &str,
        date: Date,
        time: &str,
        now: jiff::Timestamp,
    ) -> Result<Self, CoreError> {
        if service.trim().is_empty() {
            return Err(CoreError::MissingField("service"));
        }
        if time.trim().is_empty() {
            return Err(CoreError::MissingField("time"));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            user_handle: user_handle.to_string(),
            facility_id,
            service: service.trim().to_string(),
            date,
            time: time.trim().to_string(),
            status: AppointmentStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    /// Mark as cancelled. Returns false if it already was.
    pub fn cancel(&mut self, now: jiff::Timestamp) -> bool {
        if self.status == AppointmentStatus::Cancelled {
            return false;
        }
        self.status = AppointmentStatus::Cancelled;
        self.updated_at = now;
        true
    }
}
