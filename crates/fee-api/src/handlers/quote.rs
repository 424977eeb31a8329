//! Fee calculation handler

use crate::dto::{ApiResponse, QuoteRequest, QuoteResponse};
use actix_web::{web, HttpResponse};
use chrono_tz::Tz;
use fee_core::AppError;
use fee_db::{PgProjectRepository, PgRateRepository};
use fee_services::QuoteService;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Quote a fee without saving anything
///
/// POST /api/calculate
#[instrument(skip(pool, tz))]
pub async fn calculate(
    pool: web::Data<PgPool>,
    tz: web::Data<Tz>,
    req: web::Json<QuoteRequest>,
) -> Result<HttpResponse, AppError> {
    let service = QuoteService::new(
        Arc::new(PgRateRepository::new(pool.get_ref().clone())),
        Arc::new(PgProjectRepository::new(pool.get_ref().clone())),
        *tz.get_ref(),
    );

    let quote = service.quote(&req.to_fee_request()).await?;
    debug!(total = quote.total, "Quote calculated");

    Ok(HttpResponse::Ok().json(ApiResponse::success(QuoteResponse::from(quote))))
}

/// Configure quote routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/calculate", web::post().to(calculate));
}
