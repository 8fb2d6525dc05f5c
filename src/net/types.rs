//! Wire types shared with the backend API.
//!
//! Field names and casings follow the backend's JSON exactly; serde
//! renames cover the few places the backend deviates from snake_case.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated account as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

impl User {
    /// Name to show in navigation chrome: full name when a first name is
    /// set, otherwise username, otherwise email.
    pub fn display_name(&self) -> String {
        if let Some(first) = self.first_name.as_deref().filter(|s| !s.is_empty()) {
            let last = self.last_name.as_deref().unwrap_or("");
            return format!("{first} {last}").trim().to_owned();
        }
        if self.username.is_empty() {
            self.email.clone()
        } else {
            self.username.clone()
        }
    }

    /// The climbs API keys records by numeric user id while the auth API
    /// serves string ids; `None` when the id is not numeric.
    pub fn numeric_id(&self) -> Option<i64> {
        self.id.parse().ok()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterCredentials {
    pub email: String,
    pub password: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Text fields of a profile update. The optional picture file travels
/// separately so the auth service can decide between JSON and multipart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateUserFields {
    pub email: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

// ---------------------------------------------------------------------
// Climbs
// ---------------------------------------------------------------------

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClimbType {
    #[default]
    Indoor,
    Outdoor,
}

/// A single logged climb.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Climb {
    pub id: i64,
    pub user_id: i64,
    pub climb_type: ClimbType,
    pub climb_date: String,
    pub grade: String,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub route_id: Option<i64>,
    #[serde(default)]
    pub gym_id: Option<i64>,
    pub completed: bool,
    pub attempts: u32,
    pub falls: u32,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateClimbRequest {
    pub climb_type: ClimbType,
    pub climb_date: String,
    pub grade: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gym_id: Option<i64>,
    pub completed: bool,
    pub attempts: u32,
    pub falls: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetClimbsResponse {
    pub climbs: Vec<Climb>,
    pub count: u64,
    pub user_id: i64,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

// ---------------------------------------------------------------------
// Gyms
// ---------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GymType {
    Bouldering,
    Roped,
    Full,
}

/// A climbing facility, with the backend's full amenity/pricing sheet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gym {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub gym_type: GymType,
    #[serde(default)]
    pub address: Option<String>,
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    pub country: String,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default)]
    pub has_bouldering: Option<bool>,
    #[serde(default)]
    pub has_top_rope: Option<bool>,
    #[serde(default)]
    pub has_lead_climbing: Option<bool>,
    #[serde(default)]
    pub has_auto_belay: Option<bool>,
    #[serde(default)]
    pub has_kids_area: Option<bool>,
    #[serde(default)]
    pub has_training_area: Option<bool>,
    #[serde(default)]
    pub has_yoga_classes: Option<bool>,
    #[serde(default)]
    pub has_shower: Option<bool>,
    #[serde(default)]
    pub has_parking: Option<bool>,
    #[serde(default)]
    pub has_gear_rental: Option<bool>,
    #[serde(default)]
    pub has_pro_shop: Option<bool>,
    #[serde(default)]
    pub has_cafe: Option<bool>,
    #[serde(default)]
    pub wall_height: Option<f64>,
    #[serde(default)]
    pub square_feet: Option<f64>,
    #[serde(default)]
    pub day_pass_price: Option<f64>,
    #[serde(default)]
    pub monthly_price: Option<f64>,
    #[serde(default)]
    pub yearly_price: Option<f64>,
    #[serde(default)]
    pub gear_rental_price: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetGymsResponse {
    pub gyms: Vec<Gym>,
    pub count: u64,
}

// ---------------------------------------------------------------------
// Training sessions
// ---------------------------------------------------------------------

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoulderOutcome {
    #[default]
    Fell,
    Flash,
    Onsite,
    Redpoint,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RopeClimbType {
    #[default]
    #[serde(rename = "TR")]
    TopRope,
    Lead,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RopeClimbOutcome {
    #[default]
    Fell,
    Hung,
    Flash,
    Onsite,
    Redpoint,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boulder {
    pub id: i64,
    pub training_session_id: i64,
    pub grade: String,
    #[serde(default)]
    pub color_tag: Option<String>,
    pub outcome: BoulderOutcome,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoulderRequest {
    pub grade: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_tag: Option<String>,
    pub outcome: BoulderOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RopeClimb {
    pub id: i64,
    pub training_session_id: i64,
    pub climb_type: RopeClimbType,
    pub grade: String,
    pub outcome: RopeClimbOutcome,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RopeClimbRequest {
    pub climb_type: RopeClimbType,
    pub grade: String,
    pub outcome: RopeClimbOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Abbreviated gym record nested inside a training session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionGym {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSession {
    pub id: i64,
    pub user_id: i64,
    pub gym_id: i64,
    pub session_date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub gym: Option<SessionGym>,
    #[serde(default)]
    pub partners: Vec<Partner>,
    #[serde(default)]
    pub boulders: Vec<Boulder>,
    #[serde(default)]
    pub rope_climbs: Vec<RopeClimb>,
    pub total_climbs: u32,
    pub total_sends: u32,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTrainingSessionRequest {
    pub gym_id: i64,
    pub session_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub boulders: Vec<BoulderRequest>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub rope_climbs: Vec<RopeClimbRequest>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTrainingSessionsResponse {
    pub training_sessions: Vec<TrainingSession>,
    pub count: u64,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}
