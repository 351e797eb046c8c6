use actix_web::{HttpResponse, web};

use crate::database::models::ShiftInput;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::services::ShiftService;

pub async fn create_shift(
    service: web::Data<ShiftService>,
    input: web::Json<ShiftInput>,
) -> Result<HttpResponse, AppError> {
    let shift = service.create_shift(input.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(shift)))
}

pub async fn get_shifts(service: web::Data<ShiftService>) -> Result<HttpResponse, AppError> {
    let shifts = service.get_all_shifts().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(shifts)))
}

pub async fn get_shift(
    service: web::Data<ShiftService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let shift = service.get_shift_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(shift)))
}

pub async fn update_shift(
    service: web::Data<ShiftService>,
    path: web::Path<i64>,
    input: web::Json<ShiftInput>,
) -> Result<HttpResponse, AppError> {
    let shift = service
        .update_shift(path.into_inner(), input.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(shift)))
}

pub async fn delete_shift(
    service: web::Data<ShiftService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete_shift(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_with_message(
        None,
        "Shift deleted",
    )))
}

pub async fn get_shifts_by_day(
    service: web::Data<ShiftService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let shifts = service.get_shifts_by_day(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(shifts)))
}
