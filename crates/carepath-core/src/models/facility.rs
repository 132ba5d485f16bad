use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Opening hours value that marks a facility as always open.
pub const ALWAYS_OPEN: &str = "24/7";

/// Facility type value that disables the type filter.
pub const ANY_TYPE: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A care facility in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Facility {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub facility_type: String,
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub hours: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    /// Account that registered the facility. Seeded entries have none and
    /// cannot be edited through the API.
    #[serde(default)]
    pub owner_handle: Option<String>,
}

impl Facility {
    pub fn is_always_open(&self) -> bool {
        self.hours == ALWAYS_OPEN
    }

    pub fn is_owned_by(&self, handle: &str) -> bool {
        self.owner_handle.as_deref() == Some(handle)
    }

    /// Register a new, unverified facility for `owner`.
    pub fn register(draft: FacilityDraft, owner: &str) -> Result<Self, CoreError> {
        draft.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: draft.name,
            facility_type: draft.facility_type,
            address: draft.address,
            phone: draft.phone,
            hours: draft.hours,
            verified: false,
            premium: false,
            rating: None,
            reviews: 0,
            services: draft.services,
            location: draft.location,
            owner_handle: Some(owner.to_string()),
        })
    }

    /// Replace the owner-editable fields. Verification, rating and
    /// ownership are kept.
    pub fn revise(&mut self, draft: FacilityDraft) -> Result<(), CoreError> {
        draft.validate()?;
        self.name = draft.name;
        self.facility_type = draft.facility_type;
        self.address = draft.address;
        self.phone = draft.phone;
        self.hours = draft.hours;
        self.services = draft.services;
        self.location = draft.location;
        Ok(())
    }
}

/// The fields a facility owner supplies on create and update.
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FacilityDraft {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub facility_type: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub hours: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
}

impl FacilityDraft {
    pub fn validate(&self) -> Result<(), CoreError> {
        let required = [
            ("name", &self.name),
            ("type", &self.facility_type),
            ("address", &self.address),
            ("hours", &self.hours),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CoreError::MissingField(field));
            }
        }
        Ok(())
    }
}

/// Directory query. Unset fields do not filter.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityFilter {
    #[serde(rename = "type")]
    pub facility_type: Option<String>,
    #[serde(default)]
    pub verified_only: bool,
    #[serde(default)]
    pub twenty_four_hour: bool,
}

impl FacilityFilter {
    pub fn matches(&self, facility: &Facility) -> bool {
        let type_ok = match self.facility_type.as_deref() {
            None | Some("") | Some(ANY_TYPE) => true,
            Some(wanted) => facility.facility_type == wanted,
        };
        type_ok
            && (!self.verified_only || facility.verified)
            && (!self.twenty_four_hour || facility.is_always_open())
    }
}

/// Contact details embedded in appointment listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FacilityContact {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
}

impl From<&Facility> for FacilityContact {
    fn from(facility: &Facility) -> Self {
        Self {
            name: facility.name.clone(),
            address: facility.address.clone(),
            phone: facility.phone.clone(),
        }
    }
}
