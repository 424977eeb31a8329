//! Editor handlers
//!
//! HTTP handlers for editor management endpoints.

use crate::dto::{EditorRequest, MessageResponse};
use actix_web::{web, HttpResponse};
use fee_core::traits::EditorRepository;
use fee_core::AppError;
use fee_db::PgEditorRepository;
use sqlx::PgPool;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// List all editors, newest first
///
/// GET /api/editors
#[instrument(skip(pool))]
pub async fn list_editors(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    debug!("Listing all editors");

    let repo = PgEditorRepository::new(pool.get_ref().clone());
    let editors = repo.find_all().await?;

    Ok(HttpResponse::Ok().json(editors))
}

/// Create an editor
///
/// POST /api/editors
#[instrument(skip(pool, req))]
pub async fn create_editor(
    pool: web::Data<PgPool>,
    req: web::Json<EditorRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate().map_err(|e| {
        warn!("Editor creation validation failed: {}", e);
        AppError::Validation(e.to_string())
    })?;
    let draft = req.into_inner().into_draft().map_err(|e| {
        warn!("Editor creation validation failed: {}", e);
        AppError::Validation(e)
    })?;

    let repo = PgEditorRepository::new(pool.get_ref().clone());
    let created = repo.create(&draft).await?;

    info!(id = created.id, name = %created.name, "Editor created");
    Ok(HttpResponse::Created().json(created))
}

/// Update an editor
///
/// PUT /api/editors/{id}
#[instrument(skip(pool, req))]
pub async fn update_editor(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
    req: web::Json<EditorRequest>,
) -> Result<HttpResponse, AppError> {
    let editor_id = path.into_inner();

    req.validate().map_err(|e| {
        warn!("Editor update validation failed: {}", e);
        AppError::Validation(e.to_string())
    })?;
    let draft = req.into_inner().into_draft().map_err(|e| {
        warn!("Editor update validation failed: {}", e);
        AppError::Validation(e)
    })?;

    let repo = PgEditorRepository::new(pool.get_ref().clone());
    let updated = repo
        .update(editor_id, &draft)
        .await?
        .ok_or(AppError::EditorNotFound(editor_id))?;

    info!(id = editor_id, "Editor updated");
    Ok(HttpResponse::Ok().json(updated))
}

/// Delete an editor; their projects stay, without an editor
///
/// DELETE /api/editors/{id}
#[instrument(skip(pool))]
pub async fn delete_editor(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let editor_id = path.into_inner();

    let repo = PgEditorRepository::new(pool.get_ref().clone());
    if !repo.delete(editor_id).await? {
        return Err(AppError::EditorNotFound(editor_id));
    }

    info!(id = editor_id, "Editor deleted");
    Ok(HttpResponse::Ok().json(MessageResponse::new("Editor deleted")))
}

/// Configure editor routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/editors")
            .route("", web::get().to(list_editors))
            .route("", web::post().to(create_editor))
            .route("/{id}", web::put().to(update_editor))
            .route("/{id}", web::delete().to(delete_editor)),
    );
}
