use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

pub const MIN_DAY_OF_WEEK: i32 = 1;
pub const MAX_DAY_OF_WEEK: i32 = 7;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: i64,
    pub name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// 1 through 7
    pub day_of_week: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Shift {
    /// Two shifts overlap when they fall on the same day and their half-open
    /// `[start, end)` intervals intersect.
    pub fn overlaps_with(&self, other: &Shift) -> bool {
        self.day_of_week == other.day_of_week
            && times_overlap(self.start_time, self.end_time, other.start_time, other.end_time)
    }
}

/// Half-open interval intersection. Touching boundaries do not overlap.
pub fn times_overlap(
    start_a: NaiveTime,
    end_a: NaiveTime,
    start_b: NaiveTime,
    end_b: NaiveTime,
) -> bool {
    start_a < end_b && start_b < end_a
}

pub fn is_valid_day_of_week(day_of_week: i32) -> bool {
    (MIN_DAY_OF_WEEK..=MAX_DAY_OF_WEEK).contains(&day_of_week)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftInput {
    pub name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub day_of_week: i32,
}

impl ShiftInput {
    pub fn overlaps_with(&self, shift: &Shift) -> bool {
        self.day_of_week == shift.day_of_week
            && times_overlap(self.start_time, self.end_time, shift.start_time, shift.end_time)
    }
}
