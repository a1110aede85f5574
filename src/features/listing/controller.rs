use serde::Serialize;
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::dpm::dtos::ReportDto;
use crate::features::dpm::DpmApi;
use crate::shared::format::{self, DateStyle};
use crate::shared::templates::{self, LISTING_DETAIL};
use crate::shared::view::{PageView, RowState};

#[derive(Debug, Serialize)]
struct ListingDetail<'a> {
    first_name: &'a str,
    last_name: &'a str,
    points: &'a str,
    dpmtype: &'a str,
    block: &'a str,
    location: &'a str,
    date: String,
    start_time: String,
    end_time: String,
    notes: &'a str,
}

pub fn render_detail(report: &ReportDto) -> Result<String> {
    let times = format::time_and_date(
        &report.start_time,
        &report.end_time,
        &report.date,
        DateStyle::Slashed,
    );
    let detail = ListingDetail {
        first_name: &report.first_name,
        last_name: &report.last_name,
        points: &report.points,
        dpmtype: &report.dpm_type,
        block: &report.block,
        location: &report.location,
        date: times.date,
        start_time: times.start_time,
        end_time: times.end_time,
        notes: &report.notes,
    };
    Ok(templates::render_template(LISTING_DETAIL, &detail)?)
}

/// One summary line per report
pub fn summary_row(report: &ReportDto) -> String {
    format!(
        "{}  {}  {}  {}",
        report.display_name(),
        report.points,
        report.dpm_type,
        format::date(&report.date, DateStyle::Slashed)
    )
}

/// Read-only list of every report, with a detail modal per row.
pub struct ListingController<V: PageView> {
    api: Arc<dyn DpmApi>,
    view: V,
    reports: Vec<ReportDto>,
    rows: Vec<RowState>,
}

impl<V: PageView> ListingController<V> {
    pub fn new(api: Arc<dyn DpmApi>, view: V) -> Self {
        Self {
            api,
            view,
            reports: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Load failures are logged only; the page stays empty.
    pub async fn load(&mut self) -> Result<()> {
        let reports = self.api.list_all().await.map_err(|e| {
            tracing::error!("Failed to load reports: {}", e);
            e
        })?;

        let summaries: Vec<String> = reports.iter().map(summary_row).collect();
        self.rows = vec![RowState::Rendered; reports.len()];
        self.reports = reports;
        self.view.render_rows(&summaries);
        Ok(())
    }

    /// Show the detail of the report at load-order position `index`.
    pub fn click(&mut self, index: usize) -> Result<()> {
        let state = self
            .rows
            .get(index)
            .copied()
            .ok_or_else(|| AppError::NotFound(format!("no report at row {}", index)))?;
        let next = state.click()?;

        let body = render_detail(&self.reports[index])?;
        self.rows[index] = next;
        self.view.show_modal(&body);
        Ok(())
    }

    #[cfg(test)]
    pub fn reports(&self) -> &[ReportDto] {
        &self.reports
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
