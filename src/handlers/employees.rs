use actix_web::{HttpResponse, web};

use crate::database::models::{EmployeeInput, EmployeeRole, UpdateEmployeeInput};
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::services::EmployeeService;

pub async fn create_employee(
    service: web::Data<EmployeeService>,
    input: web::Json<EmployeeInput>,
) -> Result<HttpResponse, AppError> {
    let employee = service.create_employee(input.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(employee)))
}

pub async fn get_employee(
    service: web::Data<EmployeeService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employee = service.get_employee_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(employee)))
}

pub async fn get_employee_by_employee_id(
    service: web::Data<EmployeeService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let employee = service.get_employee_by_employee_id(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(employee)))
}

pub async fn update_employee(
    service: web::Data<EmployeeService>,
    path: web::Path<i64>,
    input: web::Json<UpdateEmployeeInput>,
) -> Result<HttpResponse, AppError> {
    let employee = service
        .update_employee(path.into_inner(), input.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(employee)))
}

pub async fn deactivate_employee(
    service: web::Data<EmployeeService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employee = service.deactivate_employee(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
        Some(employee),
        "Employee deactivated",
    )))
}

pub async fn get_active_employees(
    service: web::Data<EmployeeService>,
) -> Result<HttpResponse, AppError> {
    let employees = service.get_active_employees().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(employees)))
}

pub async fn get_employees_by_role(
    service: web::Data<EmployeeService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let role = path
        .into_inner()
        .parse::<EmployeeRole>()
        .map_err(AppError::Validation)?;
    let employees = service.get_employees_by_role(role).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(employees)))
}
