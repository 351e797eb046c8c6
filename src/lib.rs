pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;

use actix_web::web;
use sqlx::SqlitePool;

pub use config::Config;
pub use database::repositories::{
    EmployeeRepository, ShiftPreferenceRepository, ShiftRepository,
};
pub use error::AppError;
pub use services::{EmployeeService, ShiftPreferenceService, ShiftService};

/// Services shared by every worker, registered as individual app data.
#[derive(Clone)]
pub struct AppState {
    pub employee_service: EmployeeService,
    pub shift_service: ShiftService,
    pub preference_service: ShiftPreferenceService,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        let employee_repository = EmployeeRepository::new(pool.clone());
        let shift_repository = ShiftRepository::new(pool.clone());
        let preference_repository = ShiftPreferenceRepository::new(pool);

        let employee_service = EmployeeService::new(employee_repository);
        let shift_service = ShiftService::new(shift_repository, preference_repository.clone());
        let preference_service = ShiftPreferenceService::new(
            preference_repository,
            employee_service.clone(),
            shift_service.clone(),
        );

        Self {
            employee_service,
            shift_service,
            preference_service,
        }
    }

    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.employee_service.clone()))
            .app_data(web::Data::new(self.shift_service.clone()))
            .app_data(web::Data::new(self.preference_service.clone()));
    }
}
