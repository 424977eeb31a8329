//! Editor Fee Calculator Backend Server
//!
//! REST backend for quoting video editing fees, keeping the project history
//! and building editor invoices.

use actix_cors::Cors;
use actix_web::{http::header, middleware, web, App, HttpResponse, HttpServer};
use anyhow::Context;
use fee_api::{
    configure_dashboard, configure_editors, configure_health, configure_invoices,
    configure_projects, configure_quotes, configure_rates,
};
use fee_core::AppConfig;
use fee_db::{create_pool, run_migrations, PgRateRepository};
use fee_services::RateConfigService;
use std::env;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configure API routes
fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(configure_health)
            // Calculator
            .configure(configure_quotes)
            // Project history and export
            .configure(configure_projects)
            .configure(configure_editors)
            .configure(configure_rates)
            .configure(configure_invoices)
            .configure(configure_dashboard),
    );
}

/// Initialize tracing/logging
fn init_tracing() {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "editor_fee={},fee_api={},fee_services={},fee_db={},actix_web=info,sqlx=warn",
            log_level, log_level, log_level, log_level
        ))
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// JSON body for a request that failed extraction
fn bad_request(code: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "error": code,
        "message": message,
        "status": 400,
    }))
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    init_tracing();

    info!(
        "Starting Editor Fee backend v{}",
        env!("CARGO_PKG_VERSION")
    );

    let tz = config.business.tz()?;
    info!("Business timezone: {}", tz);

    info!("Connecting to database...");
    let pool = create_pool(&config.database)
        .await
        .context("Failed to create database pool")?;

    if config.database.run_migrations {
        run_migrations(&pool).await?;
    } else {
        warn!("Skipping database migrations");
    }

    if config.business.seed_default_rates {
        let rates = RateConfigService::new(Arc::new(PgRateRepository::new(pool.clone())));
        if rates.seed_defaults_if_empty().await? {
            info!("Seeded default rate card");
        }
    }

    let cors_origins = config.cors.origins();
    info!("Allowed CORS origins: {:?}", cors_origins);

    let bind_addr = config.server_addr();
    let workers = config.server.workers;
    info!(
        "Starting HTTP server on {} with {} workers",
        bind_addr, workers
    );

    HttpServer::new(move || {
        let origins = cors_origins.clone();
        let cors = Cors::default()
            .allowed_origin_fn(move |origin, _req_head| {
                origin
                    .to_str()
                    .map(|o| origins.iter().any(|allowed| allowed == o))
                    .unwrap_or(false)
            })
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .expose_headers(vec![header::CONTENT_DISPOSITION])
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(tz))
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                let message = err.to_string();
                actix_web::error::InternalError::from_response(
                    err,
                    bad_request("invalid_body", message),
                )
                .into()
            }))
            .app_data(web::QueryConfig::default().error_handler(|err, _req| {
                let message = err.to_string();
                actix_web::error::InternalError::from_response(
                    err,
                    bad_request("invalid_query", message),
                )
                .into()
            }))
            // Middleware
            .wrap(cors)
            .wrap(middleware::Logger::new("%a \"%r\" %s %b %Dms"))
            .wrap(TracingLogger::default())
            .wrap(middleware::Compress::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_routes)
            .route(
                "/",
                web::get().to(|| async {
                    HttpResponse::Found()
                        .append_header(("Location", "/api/health"))
                        .finish()
                }),
            )
    })
    .workers(workers)
    .bind(&bind_addr)
    .with_context(|| format!("Failed to bind {}", bind_addr))?
    .run()
    .await?;

    Ok(())
}
