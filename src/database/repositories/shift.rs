use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::models::{Shift, ShiftInput};

#[derive(Clone)]
pub struct ShiftRepository {
    pool: SqlitePool,
}

impl ShiftRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_shift(&self, input: ShiftInput) -> Result<Shift> {
        let now = Utc::now().naive_utc();
        let shift = sqlx::query_as::<_, Shift>(
            r#"
            INSERT INTO
                shifts (
                    name,
                    start_time,
                    end_time,
                    day_of_week,
                    created_at,
                    updated_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?)
            RETURNING
                id,
                name,
                start_time,
                end_time,
                day_of_week,
                created_at,
                updated_at
            "#,
        )
        .bind(input.name)
        .bind(input.start_time)
        .bind(input.end_time)
        .bind(input.day_of_week)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(shift)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Shift>> {
        let shift = sqlx::query_as::<_, Shift>(
            r#"
            SELECT
                id,
                name,
                start_time,
                end_time,
                day_of_week,
                created_at,
                updated_at
            FROM
                shifts
            WHERE
                id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(shift)
    }

    pub async fn find_all(&self) -> Result<Vec<Shift>> {
        let shifts = sqlx::query_as::<_, Shift>(
            r#"
            SELECT
                id,
                name,
                start_time,
                end_time,
                day_of_week,
                created_at,
                updated_at
            FROM
                shifts
            ORDER BY
                day_of_week,
                start_time
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(shifts)
    }

    pub async fn find_by_day(&self, day_of_week: i32) -> Result<Vec<Shift>> {
        let shifts = sqlx::query_as::<_, Shift>(
            r#"
            SELECT
                id,
                name,
                start_time,
                end_time,
                day_of_week,
                created_at,
                updated_at
            FROM
                shifts
            WHERE
                day_of_week = ?
            ORDER BY
                start_time
            "#,
        )
        .bind(day_of_week)
        .fetch_all(&self.pool)
        .await?;

        Ok(shifts)
    }

    pub async fn update_shift(&self, id: i64, input: ShiftInput) -> Result<Option<Shift>> {
        let now = Utc::now().naive_utc();
        let shift = sqlx::query_as::<_, Shift>(
            r#"
            UPDATE
                shifts
            SET
                name = ?,
                start_time = ?,
                end_time = ?,
                day_of_week = ?,
                updated_at = ?
            WHERE
                id = ?
            RETURNING
                id,
                name,
                start_time,
                end_time,
                day_of_week,
                created_at,
                updated_at
            "#,
        )
        .bind(input.name)
        .bind(input.start_time)
        .bind(input.end_time)
        .bind(input.day_of_week)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(shift)
    }

    pub async fn delete_shift(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM shifts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
