//! Project handlers
//!
//! Listing, saving, deleting and exporting projects.

use crate::dto::{CreateProjectRequest, MessageResponse, ProjectListItem, ProjectQuery};
use actix_web::{http::header, web, HttpResponse};
use chrono_tz::Tz;
use fee_core::traits::ProjectRepository;
use fee_core::AppError;
use fee_db::{PgProjectRepository, PgRateRepository};
use fee_services::{ProjectSubmission, QuoteService, ReportService};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// List projects, newest first
///
/// GET /api/projects?editorId=&startDate=&endDate=
#[instrument(skip(pool))]
pub async fn list_projects(
    pool: web::Data<PgPool>,
    query: web::Query<ProjectQuery>,
) -> Result<HttpResponse, AppError> {
    let filter = query.to_filter();
    debug!("Listing projects: {:?}", filter);

    let repo = PgProjectRepository::new(pool.get_ref().clone());
    let projects = repo.find_all(&filter).await?;

    let items: Vec<ProjectListItem> = projects.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(items))
}

/// Save a calculator quote as a project; the fee is recomputed here
///
/// POST /api/projects
#[instrument(skip(pool, tz, req))]
pub async fn create_project(
    pool: web::Data<PgPool>,
    tz: web::Data<Tz>,
    req: web::Json<CreateProjectRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate().map_err(|e| {
        warn!("Project creation validation failed: {}", e);
        AppError::Validation(e.to_string())
    })?;

    let req = req.into_inner();
    let service = QuoteService::new(
        Arc::new(PgRateRepository::new(pool.get_ref().clone())),
        Arc::new(PgProjectRepository::new(pool.get_ref().clone())),
        *tz.get_ref(),
    );

    let project = service
        .save_project(ProjectSubmission {
            name: req.name,
            editor_id: req.editor_id,
            request: req.quote.to_fee_request(),
        })
        .await?;

    info!(id = project.id, total = project.total, "Project created");
    Ok(HttpResponse::Created().json(ProjectListItem::from(project)))
}

/// Delete one project
///
/// DELETE /api/projects/{id}
#[instrument(skip(pool))]
pub async fn delete_project(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let project_id = path.into_inner();

    let repo = PgProjectRepository::new(pool.get_ref().clone());
    if !repo.delete(project_id).await? {
        return Err(AppError::ProjectNotFound(project_id));
    }

    info!(id = project_id, "Project deleted");
    Ok(HttpResponse::Ok().json(MessageResponse::new("Project deleted")))
}

/// Delete every project
///
/// DELETE /api/projects
#[instrument(skip(pool))]
pub async fn delete_all_projects(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let repo = PgProjectRepository::new(pool.get_ref().clone());
    let removed = repo.delete_all().await?;

    warn!(count = removed, "All projects deleted");
    Ok(HttpResponse::Ok().json(MessageResponse::new("All projects deleted")))
}

/// Export projects as CSV
///
/// GET /api/projects/export?editorId=&startDate=&endDate=
#[instrument(skip(pool, tz))]
pub async fn export_projects(
    pool: web::Data<PgPool>,
    tz: web::Data<Tz>,
    query: web::Query<ProjectQuery>,
) -> Result<HttpResponse, AppError> {
    let service = ReportService::new(
        Arc::new(PgProjectRepository::new(pool.get_ref().clone())),
        *tz.get_ref(),
    );
    let (file_name, csv) = service.export_csv(&query.to_filter()).await?;

    info!("Exported projects to {}", file_name);
    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file_name),
        ))
        .body(csv))
}

/// Configure project routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/projects")
            .route("", web::get().to(list_projects))
            .route("", web::post().to(create_project))
            .route("", web::delete().to(delete_all_projects))
            .route("/export", web::get().to(export_projects))
            .route("/{id}", web::delete().to(delete_project)),
    );
}
