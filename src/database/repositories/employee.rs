use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::models::{Employee, EmployeeInput, EmployeeRole, UpdateEmployeeInput};

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_employee(&self, input: EmployeeInput) -> Result<Employee> {
        let now = Utc::now().naive_utc();
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO
                employees (
                    employee_id,
                    first_name,
                    last_name,
                    email,
                    phone_number,
                    max_shifts_per_week,
                    min_rest_hours,
                    is_active,
                    role,
                    created_at,
                    updated_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, 1, ?, ?, ?)
            RETURNING
                id,
                employee_id,
                first_name,
                last_name,
                email,
                phone_number,
                max_shifts_per_week,
                min_rest_hours,
                is_active,
                role,
                created_at,
                updated_at
            "#,
        )
        .bind(input.employee_id)
        .bind(input.first_name)
        .bind(input.last_name)
        .bind(input.email)
        .bind(input.phone_number)
        .bind(input.max_shifts_per_week)
        .bind(input.min_rest_hours)
        .bind(input.role)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(employee)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT
                id,
                employee_id,
                first_name,
                last_name,
                email,
                phone_number,
                max_shifts_per_week,
                min_rest_hours,
                is_active,
                role,
                created_at,
                updated_at
            FROM
                employees
            WHERE
                id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    pub async fn find_by_employee_id(&self, employee_id: &str) -> Result<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT
                id,
                employee_id,
                first_name,
                last_name,
                email,
                phone_number,
                max_shifts_per_week,
                min_rest_hours,
                is_active,
                role,
                created_at,
                updated_at
            FROM
                employees
            WHERE
                employee_id = ?
            "#,
        )
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT
                id,
                employee_id,
                first_name,
                last_name,
                email,
                phone_number,
                max_shifts_per_week,
                min_rest_hours,
                is_active,
                role,
                created_at,
                updated_at
            FROM
                employees
            WHERE
                email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    pub async fn find_active(&self) -> Result<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT
                id,
                employee_id,
                first_name,
                last_name,
                email,
                phone_number,
                max_shifts_per_week,
                min_rest_hours,
                is_active,
                role,
                created_at,
                updated_at
            FROM
                employees
            WHERE
                is_active = 1
            ORDER BY
                last_name,
                first_name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    pub async fn find_by_role(&self, role: EmployeeRole) -> Result<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT
                id,
                employee_id,
                first_name,
                last_name,
                email,
                phone_number,
                max_shifts_per_week,
                min_rest_hours,
                is_active,
                role,
                created_at,
                updated_at
            FROM
                employees
            WHERE
                role = ?
            ORDER BY
                last_name,
                first_name
            "#,
        )
        .bind(role)
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    pub async fn update_employee(
        &self,
        id: i64,
        input: UpdateEmployeeInput,
    ) -> Result<Option<Employee>> {
        let now = Utc::now().naive_utc();
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            UPDATE
                employees
            SET
                first_name = ?,
                last_name = ?,
                email = ?,
                phone_number = ?,
                max_shifts_per_week = ?,
                min_rest_hours = ?,
                updated_at = ?
            WHERE
                id = ?
            RETURNING
                id,
                employee_id,
                first_name,
                last_name,
                email,
                phone_number,
                max_shifts_per_week,
                min_rest_hours,
                is_active,
                role,
                created_at,
                updated_at
            "#,
        )
        .bind(input.first_name)
        .bind(input.last_name)
        .bind(input.email)
        .bind(input.phone_number)
        .bind(input.max_shifts_per_week)
        .bind(input.min_rest_hours)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    pub async fn set_active(&self, id: i64, is_active: bool) -> Result<Option<Employee>> {
        let now = Utc::now().naive_utc();
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            UPDATE
                employees
            SET
                is_active = ?,
                updated_at = ?
            WHERE
                id = ?
            RETURNING
                id,
                employee_id,
                first_name,
                last_name,
                email,
                phone_number,
                max_shifts_per_week,
                min_rest_hours,
                is_active,
                role,
                created_at,
                updated_at
            "#,
        )
        .bind(is_active)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }
}
