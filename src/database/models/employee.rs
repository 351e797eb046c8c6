use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::macros::string_enum;

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum EmployeeRole {
        #[serde(alias = "ADMIN", alias = "Admin")]
        Admin => "admin",
        #[serde(alias = "MANAGER", alias = "Manager")]
        Manager => "manager",
        #[default]
        #[serde(alias = "USER", alias = "User")]
        User => "user",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    /// External identifier, unique across all employees
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    /// Unique across all employees
    pub email: String,
    pub phone_number: String,
    pub max_shifts_per_week: Option<i32>,
    /// Minimum rest hours required between shifts
    pub min_rest_hours: Option<i32>,
    pub is_active: bool,
    pub role: EmployeeRole,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub max_shifts_per_week: Option<i32>,
    pub min_rest_hours: Option<i32>,
    #[serde(default)]
    pub role: EmployeeRole,
}

/// Fields replaced by an employee update. The external id, role and active
/// flag are not touched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub max_shifts_per_week: Option<i32>,
    pub min_rest_hours: Option<i32>,
}
