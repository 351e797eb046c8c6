use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::database::models::{PreferenceType, ShiftPreferenceInput, UpdateShiftPreferenceInput};
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::services::ShiftPreferenceService;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePreferencesQuery {
    pub preference_type: Option<PreferenceType>,
}

pub async fn create_preference(
    service: web::Data<ShiftPreferenceService>,
    input: web::Json<ShiftPreferenceInput>,
) -> Result<HttpResponse, AppError> {
    let preference = service.create_preference(input.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(preference)))
}

pub async fn create_sequence(
    service: web::Data<ShiftPreferenceService>,
    input: web::Json<Vec<ShiftPreferenceInput>>,
) -> Result<HttpResponse, AppError> {
    let preferences = service
        .create_sequence_preferences(input.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(preferences)))
}

pub async fn get_employee_preferences(
    service: web::Data<ShiftPreferenceService>,
    path: web::Path<i64>,
    query: web::Query<EmployeePreferencesQuery>,
) -> Result<HttpResponse, AppError> {
    let preferences = service
        .get_preferences_by_employee(path.into_inner(), query.into_inner().preference_type)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(preferences)))
}

pub async fn get_employee_sequences(
    service: web::Data<ShiftPreferenceService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let preferences = service
        .get_sequence_preferences_by_employee(path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(preferences)))
}

pub async fn get_shift_preferences(
    service: web::Data<ShiftPreferenceService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let preferences = service.get_preferences_by_shift(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(preferences)))
}

pub async fn update_preference(
    service: web::Data<ShiftPreferenceService>,
    path: web::Path<i64>,
    input: web::Json<UpdateShiftPreferenceInput>,
) -> Result<HttpResponse, AppError> {
    let preference = service
        .update_preference(path.into_inner(), input.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(preference)))
}
