use actix_web::web;

use crate::handlers::generate_handlers::{generate_qr, get_preview, method_not_allowed};
use crate::handlers::health_handlers::health_check;
use crate::handlers::history_handlers::{
    delete_history_record, export_history_record, get_history,
};
use crate::handlers::template_handlers::get_templates;

/// Configure the routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::resource("/generate")
                    .route(web::post().to(generate_qr))
                    .default_service(web::route().to(method_not_allowed)),
            )
            .route("/preview", web::get().to(get_preview))
            .route("/templates", web::get().to(get_templates))
            .route("/history", web::get().to(get_history))
            .route("/history/{id}", web::delete().to(delete_history_record))
            .route("/history/{id}/export", web::get().to(export_history_record))
            .route("/health/check", web::get().to(health_check)),
    );
}
