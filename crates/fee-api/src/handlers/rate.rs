//! Rate card handlers

use crate::dto::{rate_card_body, rate_entries, MessageResponse, RateCardBody};
use actix_web::{web, HttpResponse};
use fee_core::AppError;
use fee_db::PgRateRepository;
use fee_services::RateConfigService;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

fn service(pool: &PgPool) -> RateConfigService<PgRateRepository> {
    RateConfigService::new(Arc::new(PgRateRepository::new(pool.clone())))
}

/// Current rate card keyed by rate key
///
/// GET /api/rates
#[instrument(skip(pool))]
pub async fn get_rates(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    debug!("Loading rate card");

    let rates = service(pool.get_ref()).list().await?;
    Ok(HttpResponse::Ok().json(rate_card_body(rates)))
}

/// Upsert every submitted rate
///
/// PUT /api/rates
#[instrument(skip(pool, body))]
pub async fn update_rates(
    pool: web::Data<PgPool>,
    body: web::Json<RateCardBody>,
) -> Result<HttpResponse, AppError> {
    let entries = rate_entries(body.into_inner()).map_err(|e| {
        warn!("Rate update validation failed: {}", e);
        AppError::Validation(e)
    })?;

    let saved = service(pool.get_ref()).update_rates(entries).await?;

    info!(count = saved.len(), "Rates updated");
    Ok(HttpResponse::Ok().json(MessageResponse::new("Rates updated")))
}

/// Restore the default rate card
///
/// POST /api/rates/reset
#[instrument(skip(pool))]
pub async fn reset_rates(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let rates = service(pool.get_ref()).reset_defaults().await?;

    info!("Rates reset to defaults");
    Ok(HttpResponse::Ok().json(rate_card_body(rates)))
}

/// Configure rate routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/rates")
            .route("", web::get().to(get_rates))
            .route("", web::put().to(update_rates))
            .route("/reset", web::post().to(reset_rates)),
    );
}
