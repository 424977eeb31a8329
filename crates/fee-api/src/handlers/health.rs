//! Health check handler

use crate::dto::HealthResponse;
use actix_web::{web, HttpResponse};
use chrono::Utc;

/// Liveness probe
///
/// GET /api/health
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
    })
}

/// Configure health routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
