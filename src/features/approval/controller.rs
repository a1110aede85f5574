use serde::Serialize;
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::dpm::dtos::{ApproveDto, ReportDto};
use crate::features::dpm::{DpmApi, SessionContext};
use crate::shared::constants::{MSG_APPROVED, MSG_APPROVE_FAILED, MSG_DENIED, MSG_DENY_FAILED};
use crate::shared::format::{self, DateStyle};
use crate::shared::templates::{self, APPROVAL_DETAIL};
use crate::shared::view::{PageView, RowState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    Approve,
    Deny,
}

impl Decision {
    fn messages(self) -> (&'static str, &'static str) {
        match self {
            Decision::Approve => (MSG_APPROVED, MSG_APPROVE_FAILED),
            Decision::Deny => (MSG_DENIED, MSG_DENY_FAILED),
        }
    }
}

#[derive(Debug, Serialize)]
struct ApprovalDetail<'a> {
    name: String,
    sup_name: &'a str,
    points: &'a str,
    dpmtype: &'a str,
    block: &'a str,
    location: &'a str,
    date: String,
    start_time: String,
    end_time: String,
    notes: &'a str,
    created: String,
}

pub fn render_detail(report: &ReportDto) -> Result<String> {
    let times = format::time_and_date(
        &report.start_time,
        &report.end_time,
        &report.date,
        DateStyle::Dashed,
    );
    let detail = ApprovalDetail {
        name: report.display_name(),
        sup_name: &report.sup_name,
        points: &report.points,
        dpmtype: &report.dpm_type,
        block: &report.block,
        location: &report.location,
        date: times.date,
        start_time: times.start_time,
        end_time: times.end_time,
        notes: &report.notes,
        created: format::created(&report.created),
    };
    Ok(templates::render_template(APPROVAL_DETAIL, &detail)?)
}

pub fn summary_row(report: &ReportDto) -> String {
    format!(
        "{}  {}  {}  {}  (by {})",
        report.display_name(),
        report.points,
        report.dpm_type,
        format::date(&report.date, DateStyle::Dashed),
        report.sup_name
    )
}

/// Supervisor queue of reports awaiting a decision.
///
/// The approve/deny buttons belong to the modal, so only the row opened last
/// can be acted on. Acting on a row hides it straight away; the toast is
/// chosen once the server answers.
pub struct ApprovalController<V: PageView> {
    api: Arc<dyn DpmApi>,
    session: SessionContext,
    view: V,
    reports: Vec<ReportDto>,
    rows: Vec<RowState>,
    /// Row whose detail the modal currently shows
    armed: Option<usize>,
}

impl<V: PageView> ApprovalController<V> {
    pub fn new(api: Arc<dyn DpmApi>, session: SessionContext, view: V) -> Self {
        Self {
            api,
            session,
            view,
            reports: Vec::new(),
            rows: Vec::new(),
            armed: None,
        }
    }

    pub async fn load(&mut self) -> Result<()> {
        let reports = self.api.list_pending().await.map_err(|e| {
            tracing::error!("Failed to load pending reports: {}", e);
            e
        })?;

        let summaries: Vec<String> = reports.iter().map(summary_row).collect();
        self.rows = vec![RowState::Rendered; reports.len()];
        self.reports = reports;
        self.armed = None;
        self.view.render_rows(&summaries);
        Ok(())
    }

    fn state(&self, index: usize) -> Result<RowState> {
        self.rows
            .get(index)
            .copied()
            .ok_or_else(|| AppError::NotFound(format!("no report at row {}", index)))
    }

    /// Show the detail of row `index` and arm its approve/deny buttons.
    pub fn click(&mut self, index: usize) -> Result<()> {
        let next = self.state(index)?.click()?;

        let body = render_detail(&self.reports[index])?;
        self.rows[index] = next;
        self.armed = Some(index);
        self.view.show_modal(&body);
        Ok(())
    }

    pub async fn approve(&mut self, index: usize) -> Result<()> {
        self.decide(index, Decision::Approve).await
    }

    pub async fn deny(&mut self, index: usize) -> Result<()> {
        self.decide(index, Decision::Deny).await
    }

    async fn decide(&mut self, index: usize, decision: Decision) -> Result<()> {
        let next = self.state(index)?.act()?;
        if self.armed != Some(index) {
            return Err(AppError::InvalidState(format!(
                "row {} is not the report shown in the modal",
                index
            )));
        }
        self.rows[index] = next;
        self.armed = None;
        self.view.hide_row(index);

        let report = &self.reports[index];
        let csrf_token = self.session.csrf_token();
        let result = match decision {
            Decision::Approve => {
                let body = ApproveDto {
                    points: format::normalize_points(&report.points).to_string(),
                    name: report.display_name(),
                };
                self.api.approve(csrf_token, &report.id, &body).await
            }
            Decision::Deny => self.api.deny(csrf_token, &report.id).await,
        };

        let (success, failure) = decision.messages();
        match result {
            Ok(()) => {
                self.view.toast(success);
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    status = ?e.status(),
                    "Failed to {:?} report {}: {}",
                    decision,
                    report.id,
                    e
                );
                self.view.toast(failure);
                Err(e)
            }
        }
    }

    #[cfg(test)]
    pub fn row_state(&self, index: usize) -> Option<RowState> {
        self.rows.get(index).copied()
    }

    #[cfg(test)]
    pub fn view(&self) -> &V {
        &self.view
    }
}
