use anyhow::Result;
use chrono::Utc;
use sqlx::{Executor, Sqlite, SqlitePool};

use crate::database::models::{PreferenceType, ShiftPreference, ShiftPreferenceInput};

#[derive(Clone)]
pub struct ShiftPreferenceRepository {
    pool: SqlitePool,
}

impl ShiftPreferenceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn insert<'e, E>(
        executor: E,
        input: &ShiftPreferenceInput,
        sequence_id: Option<&str>,
    ) -> Result<ShiftPreference>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let now = Utc::now().naive_utc();
        let preference = sqlx::query_as::<_, ShiftPreference>(
            r#"
            INSERT INTO
                shift_preferences (
                    employee_id,
                    shift_id,
                    preference_type,
                    is_part_of_sequence,
                    sequence_id,
                    created_at,
                    updated_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?)
            RETURNING
                id,
                employee_id,
                shift_id,
                preference_type,
                is_part_of_sequence,
                sequence_id,
                created_at,
                updated_at
            "#,
        )
        .bind(input.employee_id)
        .bind(input.shift_id)
        .bind(input.preference_type)
        .bind(sequence_id.is_some())
        .bind(sequence_id)
        .bind(now)
        .bind(now)
        .fetch_one(executor)
        .await?;

        Ok(preference)
    }

    pub async fn create_preference(&self, input: &ShiftPreferenceInput) -> Result<ShiftPreference> {
        Self::insert(&self.pool, input, None).await
    }

    /// Inserts every member of a sequence in one transaction. Nothing is
    /// persisted if any insert fails.
    pub async fn create_sequence(
        &self,
        inputs: &[ShiftPreferenceInput],
        sequence_id: &str,
    ) -> Result<Vec<ShiftPreference>> {
        let mut tx = self.pool.begin().await?;
        let mut created = Vec::with_capacity(inputs.len());

        for input in inputs {
            match Self::insert(&mut *tx, input, Some(sequence_id)).await {
                Ok(preference) => created.push(preference),
                Err(err) => {
                    log::warn!(
                        "Sequence {} insert failed with error: {}, rolling back",
                        sequence_id,
                        err
                    );
                    if let Err(rollback_err) = tx.rollback().await {
                        log::error!(
                            "Rollback failed after error (orig: {}, rollback: {})",
                            err,
                            rollback_err
                        );
                    }
                    return Err(err);
                }
            }
        }

        tx.commit().await?;
        Ok(created)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<ShiftPreference>> {
        let preference = sqlx::query_as::<_, ShiftPreference>(
            r#"
            SELECT
                id,
                employee_id,
                shift_id,
                preference_type,
                is_part_of_sequence,
                sequence_id,
                created_at,
                updated_at
            FROM
                shift_preferences
            WHERE
                id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(preference)
    }

    pub async fn find_by_employee(&self, employee_id: i64) -> Result<Vec<ShiftPreference>> {
        let preferences = sqlx::query_as::<_, ShiftPreference>(
            r#"
            SELECT
                id,
                employee_id,
                shift_id,
                preference_type,
                is_part_of_sequence,
                sequence_id,
                created_at,
                updated_at
            FROM
                shift_preferences
            WHERE
                employee_id = ?
            ORDER BY
                id
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(preferences)
    }

    pub async fn find_by_shift(&self, shift_id: i64) -> Result<Vec<ShiftPreference>> {
        let preferences = sqlx::query_as::<_, ShiftPreference>(
            r#"
            SELECT
                id,
                employee_id,
                shift_id,
                preference_type,
                is_part_of_sequence,
                sequence_id,
                created_at,
                updated_at
            FROM
                shift_preferences
            WHERE
                shift_id = ?
            ORDER BY
                id
            "#,
        )
        .bind(shift_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(preferences)
    }

    pub async fn find_by_employee_and_shift(
        &self,
        employee_id: i64,
        shift_id: i64,
    ) -> Result<Option<ShiftPreference>> {
        let preference = sqlx::query_as::<_, ShiftPreference>(
            r#"
            SELECT
                id,
                employee_id,
                shift_id,
                preference_type,
                is_part_of_sequence,
                sequence_id,
                created_at,
                updated_at
            FROM
                shift_preferences
            WHERE
                employee_id = ?
                AND shift_id = ?
            "#,
        )
        .bind(employee_id)
        .bind(shift_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(preference)
    }

    pub async fn find_by_employee_and_type(
        &self,
        employee_id: i64,
        preference_type: PreferenceType,
    ) -> Result<Vec<ShiftPreference>> {
        let preferences = sqlx::query_as::<_, ShiftPreference>(
            r#"
            SELECT
                id,
                employee_id,
                shift_id,
                preference_type,
                is_part_of_sequence,
                sequence_id,
                created_at,
                updated_at
            FROM
                shift_preferences
            WHERE
                employee_id = ?
                AND preference_type = ?
            ORDER BY
                id
            "#,
        )
        .bind(employee_id)
        .bind(preference_type)
        .fetch_all(&self.pool)
        .await?;

        Ok(preferences)
    }

    pub async fn find_sequences_by_employee(&self, employee_id: i64) -> Result<Vec<ShiftPreference>> {
        let preferences = sqlx::query_as::<_, ShiftPreference>(
            r#"
            SELECT
                id,
                employee_id,
                shift_id,
                preference_type,
                is_part_of_sequence,
                sequence_id,
                created_at,
                updated_at
            FROM
                shift_preferences
            WHERE
                employee_id = ?
                AND is_part_of_sequence = 1
            ORDER BY
                sequence_id,
                id
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(preferences)
    }

    pub async fn count_by_employee_and_type(
        &self,
        employee_id: i64,
        preference_type: PreferenceType,
    ) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT
                COUNT(*)
            FROM
                shift_preferences
            WHERE
                employee_id = ?
                AND preference_type = ?
            "#,
        )
        .bind(employee_id)
        .bind(preference_type)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    pub async fn count_by_shift(&self, shift_id: i64) -> Result<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM shift_preferences WHERE shift_id = ?")
                .bind(shift_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    pub async fn update_preference_type(
        &self,
        id: i64,
        preference_type: PreferenceType,
    ) -> Result<Option<ShiftPreference>> {
        let now = Utc::now().naive_utc();
        let preference = sqlx::query_as::<_, ShiftPreference>(
            r#"
            UPDATE
                shift_preferences
            SET
                preference_type = ?,
                updated_at = ?
            WHERE
                id = ?
            RETURNING
                id,
                employee_id,
                shift_id,
                preference_type,
                is_part_of_sequence,
                sequence_id,
                created_at,
                updated_at
            "#,
        )
        .bind(preference_type)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(preference)
    }
}
