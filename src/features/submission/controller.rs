use std::sync::Arc;

use super::form::{Rejection, SubmissionForm};
use crate::core::error::{AppError, Result};
use crate::features::dpm::models::Directory;
use crate::features::dpm::{DpmApi, SessionContext};
use crate::shared::constants::{MSG_GENERIC_ERROR, MSG_LOAD_FAILED, MSG_SUBMITTED};
use crate::shared::view::PageView;

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Blocked client-side, nothing was sent
    Rejected(Rejection),
    Submitted,
    Failed(AppError),
}

/// Drives the report form: directory load, validation and submission.
pub struct SubmissionController<V: PageView> {
    api: Arc<dyn DpmApi>,
    session: SessionContext,
    view: V,
    directory: Directory,
}

impl<V: PageView> SubmissionController<V> {
    pub fn new(api: Arc<dyn DpmApi>, session: SessionContext, view: V) -> Self {
        Self {
            api,
            session,
            view,
            directory: Directory::default(),
        }
    }

    /// Fetch the directory and feed the autocomplete source.
    pub async fn load(&mut self) -> Result<()> {
        match self.api.fetch_directory().await {
            Ok(dto) => {
                self.directory = Directory::from_response(dto);
                self.view.set_autocomplete(&self.directory.names());
                tracing::info!("Directory loaded with {} people", self.directory.len());
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to load directory: {}", e);
                let message = if e.is_connection() {
                    MSG_GENERIC_ERROR
                } else {
                    MSG_LOAD_FAILED
                };
                self.view.toast(message);
                Err(e)
            }
        }
    }

    pub async fn submit(&mut self, form: &SubmissionForm) -> SubmitOutcome {
        let entry = match form.check(&self.directory) {
            Ok(entry) => entry,
            Err(rejection) => {
                tracing::debug!("Submission rejected: {:?}", rejection);
                self.view.toast(rejection.message());
                return SubmitOutcome::Rejected(rejection);
            }
        };

        let report = form.to_report(entry, self.directory.user_id());
        match self
            .api
            .create_report(self.session.csrf_token(), &report)
            .await
        {
            Ok(()) => {
                self.view.clear_form();
                self.view.toast(MSG_SUBMITTED);
                SubmitOutcome::Submitted
            }
            Err(e) => {
                tracing::error!("Failed to submit report for {}: {}", report.name, e);
                self.view.toast(MSG_GENERIC_ERROR);
                SubmitOutcome::Failed(e)
            }
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}
