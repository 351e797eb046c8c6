use actix_web::web;

use crate::error::AppError;

pub mod employees;
pub mod preferences;
pub mod shifts;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Malformed bodies, paths and queries get the same error body as
    // validation failures.
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    )
    .service(
        web::scope("/api/v1")
            .configure(employees::configure)
            .configure(shifts::configure)
            .configure(preferences::configure),
    );
}
