//! Invoice handler

use crate::dto::{ApiResponse, InvoiceQuery, InvoiceResponse};
use actix_web::{web, HttpResponse};
use fee_core::AppError;
use fee_db::{PgEditorRepository, PgProjectRepository};
use fee_services::InvoiceService;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Invoice for a month range, optionally for one editor
///
/// GET /api/invoice?startMonth=2024-01&endMonth=2024-02&editorId=1
#[instrument(skip(pool))]
pub async fn get_invoice(
    pool: web::Data<PgPool>,
    query: web::Query<InvoiceQuery>,
) -> Result<HttpResponse, AppError> {
    let period = query.period().map_err(|e| {
        warn!("Invalid invoice period: {}", e);
        e
    })?;

    let service = InvoiceService::new(
        Arc::new(PgProjectRepository::new(pool.get_ref().clone())),
        Arc::new(PgEditorRepository::new(pool.get_ref().clone())),
    );
    let invoice = service.build(period, query.editor_id).await?;

    info!(
        period = %invoice.period_label,
        total = invoice.summary.total_amount,
        "Invoice built"
    );
    Ok(HttpResponse::Ok().json(ApiResponse::success(InvoiceResponse::from(invoice))))
}

/// Configure invoice routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/invoice", web::get().to(get_invoice));
}
