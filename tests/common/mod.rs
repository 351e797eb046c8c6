#![allow(dead_code)]

use actix_web::{App, body::MessageBody, dev::ServiceResponse};
use anyhow::Result;
use chrono::NaiveTime;
use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::PhoneNumber;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::env;
use tempfile::NamedTempFile;

use shift_scheduler::database::models::*;
use shift_scheduler::handlers::shared::{ApiResponse, ErrorResponse};
use shift_scheduler::{AppState, routes};

/// Test database wrapper that provides isolated testing environment
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_file: NamedTempFile,
}

impl TestDb {
    /// Create a new test database with fresh schema
    pub async fn new() -> Result<Self> {
        let temp_file = NamedTempFile::new()?;
        let database_url = format!("sqlite:{}", temp_file.path().display());

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(&database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(TestDb {
            pool,
            _temp_file: temp_file,
        })
    }
}

pub struct TestContext {
    pub db: TestDb,
    pub state: AppState,
}

impl TestContext {
    pub async fn new() -> Result<Self> {
        setup_test_env();
        let db = TestDb::new().await?;
        let state = AppState::new(db.pool.clone());

        Ok(TestContext { db, state })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }

    /// Actix app wired the same way as the binary.
    pub fn app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        let state = self.state.clone();
        App::new()
            .configure(move |cfg| state.register(cfg))
            .configure(routes::configure)
    }
}

// Mock data generators
pub struct MockData;

impl MockData {
    pub fn employee(employee_id: &str) -> EmployeeInput {
        EmployeeInput {
            employee_id: employee_id.to_string(),
            first_name: FirstName().fake(),
            last_name: LastName().fake(),
            email: format!("{}@example.com", employee_id.to_lowercase()),
            phone_number: PhoneNumber().fake(),
            max_shifts_per_week: Some(5),
            min_rest_hours: Some(11),
            role: EmployeeRole::User,
        }
    }

    pub fn employee_with_role(employee_id: &str, role: EmployeeRole) -> EmployeeInput {
        EmployeeInput {
            role,
            ..Self::employee(employee_id)
        }
    }

    pub fn shift(name: &str, day_of_week: i32, start: (u32, u32), end: (u32, u32)) -> ShiftInput {
        ShiftInput {
            name: name.to_string(),
            start_time: time(start.0, start.1),
            end_time: time(end.0, end.1),
            day_of_week,
        }
    }

    pub fn preference(
        employee_id: i64,
        shift_id: i64,
        preference_type: PreferenceType,
    ) -> ShiftPreferenceInput {
        ShiftPreferenceInput {
            employee_id,
            shift_id,
            preference_type,
        }
    }
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
}

// Test assertion helpers
pub struct TestAssertions;

impl TestAssertions {
    pub async fn assert_success_response<T, B>(resp: ServiceResponse<B>) -> T
    where
        T: serde::de::DeserializeOwned,
        B: MessageBody,
    {
        let body = actix_web::test::read_body(resp).await;
        let response: ApiResponse<T> =
            serde_json::from_slice(&body).expect("Failed to parse JSON response");

        assert!(
            response.success,
            "Expected successful response but got error: {:?}",
            response.message
        );
        response.data.expect("Expected data in successful response")
    }

    pub async fn assert_error_response<B>(resp: ServiceResponse<B>) -> ErrorResponse
    where
        B: MessageBody,
    {
        let body = actix_web::test::read_body(resp).await;
        serde_json::from_slice(&body).expect("Failed to parse error response")
    }

    pub async fn assert_record_count(pool: &SqlitePool, table: &str, expected_count: i64) {
        let query = format!("SELECT COUNT(*) as count FROM {}", table);
        let result = sqlx::query_scalar::<_, i64>(&query)
            .fetch_one(pool)
            .await
            .expect("Failed to count records");

        assert_eq!(
            result, expected_count,
            "Expected {} records in {} table, but found {}",
            expected_count, table, result
        );
    }
}

pub fn setup_test_env() {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    let _ = env_logger::builder().is_test(true).try_init();
}
