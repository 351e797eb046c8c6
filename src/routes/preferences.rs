use actix_web::web;

use crate::handlers::preferences;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/preferences")
            .route("", web::post().to(preferences::create_preference))
            .route("/sequence", web::post().to(preferences::create_sequence))
            .route(
                "/employee/{employee_id}",
                web::get().to(preferences::get_employee_preferences),
            )
            .route(
                "/employee/{employee_id}/sequences",
                web::get().to(preferences::get_employee_sequences),
            )
            .route(
                "/shift/{shift_id}",
                web::get().to(preferences::get_shift_preferences),
            )
            .route("/{id}", web::put().to(preferences::update_preference)),
    );
}
