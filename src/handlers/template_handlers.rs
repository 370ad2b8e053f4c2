use actix_web::{HttpResponse, Responder};

use crate::models::template::TEMPLATES;

/// The static preset catalog.
pub async fn get_templates() -> impl Responder {
    HttpResponse::Ok().json(TEMPLATES)
}
