use actix_web::web;

use crate::handlers::employees;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Literal segments are registered ahead of "/{id}"
    cfg.service(
        web::scope("/employees")
            .route("", web::post().to(employees::create_employee))
            .route("/active", web::get().to(employees::get_active_employees))
            .route("/role/{role}", web::get().to(employees::get_employees_by_role))
            .route(
                "/employee-id/{employee_id}",
                web::get().to(employees::get_employee_by_employee_id),
            )
            .route("/{id}", web::get().to(employees::get_employee))
            .route("/{id}", web::put().to(employees::update_employee))
            .route("/{id}", web::delete().to(employees::deactivate_employee)),
    );
}
