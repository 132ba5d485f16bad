use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum UserRole {
    #[default]
    Patient,
    Facility,
    Admin,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Address {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PersonalInfo {
    #[serde(default)]
    pub date_of_birth: Option<Date>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub blood_type: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Address,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MedicalInfo {
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub chronic_conditions: Vec<String>,
    #[serde(default)]
    pub current_medications: Vec<String>,
}

/// A signed-in user's profile, keyed by identity-provider handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UserProfile {
    pub handle: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub profile: PersonalInfo,
    #[serde(default)]
    pub medical_info: MedicalInfo,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl UserProfile {
    pub fn new(handle: &str, now: jiff::Timestamp) -> Self {
        Self {
            handle: handle.to_string(),
            role: UserRole::default(),
            profile: PersonalInfo::default(),
            medical_info: MedicalInfo::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a partial update. Absent or blank values keep what is stored;
    /// medical lists that are present replace the stored list.
    pub fn apply(&mut self, update: ProfileUpdate, now: jiff::Timestamp) {
        let info = &mut self.profile;
        if let Some(date) = update.date_of_birth {
            info.date_of_birth = Some(date);
        }
        merge_text(&mut info.gender, update.gender);
        merge_text(&mut info.blood_type, update.blood_type);
        merge_text(&mut info.phone, update.phone);

        if let Some(address) = update.address {
            merge_text(&mut info.address.street, address.street);
            merge_text(&mut info.address.city, address.city);
            merge_text(&mut info.address.county, address.county);
            merge_text(&mut info.address.postal_code, address.postal_code);
        }

        if let Some(medical) = update.medical_info {
            let stored = &mut self.medical_info;
            if let Some(allergies) = medical.allergies {
                stored.allergies = allergies;
            }
            if let Some(conditions) = medical.chronic_conditions {
                stored.chronic_conditions = conditions;
            }
            if let Some(medications) = medical.current_medications {
                stored.current_medications = medications;
            }
        }

        self.updated_at = now;
    }
}

fn merge_text(slot: &mut Option<String>, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        *slot = Some(value);
    }
}

/// Body of a profile update. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub date_of_birth: Option<Date>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub blood_type: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub medical_info: Option<MedicalInfoUpdate>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MedicalInfoUpdate {
    #[serde(default)]
    pub allergies: Option<Vec<String>>,
    #[serde(default)]
    pub chronic_conditions: Option<Vec<String>>,
    #[serde(default)]
    pub current_medications: Option<Vec<String>>,
}
