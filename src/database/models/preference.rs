use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::macros::string_enum;

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub enum PreferenceType {
        Wanted => "WANTED",
        Available => "AVAILABLE",
        Unavailable => "UNAVAILABLE",
        PreferredSequence => "PREFERRED_SEQUENCE",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ShiftPreference {
    pub id: i64,
    /// Internal id of the referenced employee (`employees.id`)
    pub employee_id: i64,
    pub shift_id: i64,
    pub preference_type: PreferenceType,
    pub is_part_of_sequence: bool,
    pub sequence_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftPreferenceInput {
    pub employee_id: i64,
    pub shift_id: i64,
    pub preference_type: PreferenceType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShiftPreferenceInput {
    pub preference_type: PreferenceType,
}
