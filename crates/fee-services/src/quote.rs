//! Quote service
//!
//! Prices a request against the stored rate card and turns accepted quotes
//! into projects. The fee of a saved project is always computed here, never
//! taken from the client.

use crate::constants::{
    DURATION_DECIMAL_PLACES, MAX_PROJECT_NAME_LEN, MAX_STORED_DURATION_MINUTES,
};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use fee_core::{
    calculate_fee,
    models::{NewProject, Project},
    traits::{ProjectRepository, RateRepository},
    AppError, AppResult, FeeQuote, FeeRequest,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// A quote the user wants to keep as a project
#[derive(Debug, Clone)]
pub struct ProjectSubmission {
    pub name: String,
    pub editor_id: Option<i32>,
    pub request: FeeRequest,
}

/// Fee quoting backed by the rate repository
pub struct QuoteService<R: RateRepository, P: ProjectRepository> {
    rate_repo: Arc<R>,
    project_repo: Arc<P>,
    tz: Tz,
}

impl<R: RateRepository, P: ProjectRepository> QuoteService<R, P> {
    /// Create a quote service stamping project dates in `tz`
    pub fn new(rate_repo: Arc<R>, project_repo: Arc<P>, tz: Tz) -> Self {
        Self {
            rate_repo,
            project_repo,
            tz,
        }
    }

    /// Current business date
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }

    /// Quote `request` against the current rate card
    #[instrument(skip(self))]
    pub async fn quote(&self, request: &FeeRequest) -> AppResult<FeeQuote> {
        let rates = self.rate_repo.load_table().await?;

        let quote = calculate_fee(request, &rates).map_err(|e| {
            if let AppError::RateNotFound(key) = &e {
                error!("Rate card has no entry for {}", key);
            }
            e
        })?;

        debug!(
            "Quoted {} for {} min: total {}",
            quote.category, quote.duration_minutes, quote.total
        );
        Ok(quote)
    }

    /// Quote the submission again and store it as a project dated today
    #[instrument(skip(self), fields(name = %submission.name))]
    pub async fn save_project(&self, submission: ProjectSubmission) -> AppResult<Project> {
        let name = submission.name.trim();
        if name.is_empty() {
            return Err(AppError::MissingField("project name".to_string()));
        }
        if name.chars().count() > MAX_PROJECT_NAME_LEN {
            return Err(AppError::Validation(format!(
                "Project name cannot exceed {} characters",
                MAX_PROJECT_NAME_LEN
            )));
        }
        let editor_id = submission
            .editor_id
            .ok_or_else(|| AppError::MissingField("editorId".to_string()))?;
        check_storable_duration(submission.request.duration_minutes)?;

        let quote = self.quote(&submission.request).await?;

        let project = self
            .project_repo
            .create(&NewProject {
                name: name.to_string(),
                category_label: quote.label,
                duration_minutes: quote.duration_minutes,
                total: quote.total,
                tags: quote.tags,
                editor_id: Some(editor_id),
                date: self.today(),
            })
            .await?;

        info!(
            "Saved project {} for editor {}: total {}",
            project.id, editor_id, project.total
        );
        Ok(project)
    }
}

/// Reject durations the `NUMERIC(10, 2)` column would round or overflow
fn check_storable_duration(minutes: Decimal) -> AppResult<()> {
    if minutes.normalize().scale() > DURATION_DECIMAL_PLACES {
        return Err(AppError::Validation(format!(
            "Duration {} has more than {} decimal places",
            minutes, DURATION_DECIMAL_PLACES
        )));
    }
    if minutes >= Decimal::from(MAX_STORED_DURATION_MINUTES) {
        return Err(AppError::Validation(format!(
            "Duration must be below {} minutes",
            MAX_STORED_DURATION_MINUTES
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockProjectRepository, MockRateRepository};
    use fee_core::models::{Category, Condition, ConditionSet, RateEntry};
    use rust_decimal_macros::dec;

    fn service(
        rates: Vec<RateEntry>,
    ) -> (
        QuoteService<MockRateRepository, MockProjectRepository>,
        Arc<MockProjectRepository>,
    ) {
        let projects = Arc::new(MockProjectRepository::default());
        let service = QuoteService::new(
            Arc::new(MockRateRepository::with(rates)),
            projects.clone(),
            chrono_tz::Asia::Jakarta,
        );
        (service, projects)
    }

    fn rush_full_edit() -> FeeRequest {
        FeeRequest {
            category: Category::FullEdit,
            duration_minutes: dec!(5),
            conditions: ConditionSet::default().with(Condition::Rush, true),
        }
    }

    #[tokio::test]
    async fn test_quote_uses_stored_rates() {
        let (service, _) = service(RateEntry::defaults());
        let quote = service.quote(&rush_full_edit()).await.unwrap();
        assert_eq!(quote.total, 234_000);
    }

    #[tokio::test]
    async fn test_quote_reflects_rate_changes() {
        let (service, _) = service(vec![RateEntry::new("full_edit", "Full Editing", 200_000, 0)]);
        let quote = service.quote(&rush_full_edit()).await.unwrap();
        assert_eq!(quote.total, 260_000);
    }

    #[tokio::test]
    async fn test_quote_without_rate_entry() {
        let (service, _) = service(vec![]);
        let err = service.quote(&rush_full_edit()).await.unwrap_err();
        assert!(matches!(err, AppError::RateNotFound(_)));
    }

    #[tokio::test]
    async fn test_save_project_recomputes_fee() {
        let (service, projects) = service(RateEntry::defaults());

        let project = service
            .save_project(ProjectSubmission {
                name: "  Wedding teaser ".to_string(),
                editor_id: Some(3),
                request: rush_full_edit(),
            })
            .await
            .unwrap();

        assert_eq!(project.name, "Wedding teaser");
        assert_eq!(project.total, 234_000);
        assert_eq!(project.category_label, "Full Editing");
        assert_eq!(project.tags, vec!["Rush"]);
        assert_eq!(project.editor_id, Some(3));
        assert_eq!(project.date, service.today());
        assert_eq!(projects.projects.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_project_requires_name_and_editor() {
        let (service, projects) = service(RateEntry::defaults());

        let err = service
            .save_project(ProjectSubmission {
                name: "   ".to_string(),
                editor_id: Some(1),
                request: rush_full_edit(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MissingField(_)));

        let err = service
            .save_project(ProjectSubmission {
                name: "Podcast".to_string(),
                editor_id: None,
                request: rush_full_edit(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MissingField(_)));

        assert!(projects.projects.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_project_rejects_short_duration() {
        let (service, projects) = service(RateEntry::defaults());
        let mut request = rush_full_edit();
        request.duration_minutes = dec!(0.5);

        let err = service
            .save_project(ProjectSubmission {
                name: "Reel".to_string(),
                editor_id: Some(1),
                request,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert!(projects.projects.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_project_rejects_unstorable_duration() {
        let (service, projects) = service(RateEntry::defaults());

        for minutes in [dec!(2.333), dec!(100000000), dec!(250000000.5)] {
            let mut request = rush_full_edit();
            request.duration_minutes = minutes;

            let err = service
                .save_project(ProjectSubmission {
                    name: "Reel".to_string(),
                    editor_id: Some(1),
                    request,
                })
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{}", minutes);
        }

        assert!(projects.projects.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_project_accepts_trailing_zeros() {
        let (service, _) = service(RateEntry::defaults());
        let mut request = rush_full_edit();
        request.duration_minutes = dec!(2.5000);

        let project = service
            .save_project(ProjectSubmission {
                name: "Reel".to_string(),
                editor_id: Some(1),
                request,
            })
            .await
            .unwrap();
        assert_eq!(project.duration_minutes, dec!(2.5));
    }
}
