//! Dashboard handler

use crate::dto::{ApiResponse, DashboardResponse};
use actix_web::{web, HttpResponse};
use chrono_tz::Tz;
use fee_core::AppError;
use fee_db::PgProjectRepository;
use fee_services::ReportService;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::instrument;

/// Spending summary over all projects
///
/// GET /api/dashboard
#[instrument(skip(pool, tz))]
pub async fn get_dashboard(
    pool: web::Data<PgPool>,
    tz: web::Data<Tz>,
) -> Result<HttpResponse, AppError> {
    let service = ReportService::new(
        Arc::new(PgProjectRepository::new(pool.get_ref().clone())),
        *tz.get_ref(),
    );
    let summary = service.dashboard().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(DashboardResponse::from(summary))))
}

/// Configure dashboard routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/dashboard", web::get().to(get_dashboard));
}
