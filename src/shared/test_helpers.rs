use async_trait::async_trait;
use std::sync::Mutex;

use crate::core::error::{AppError, Result};
use crate::features::dpm::clients::DpmApi;
use crate::features::dpm::dtos::{ApproveDto, DirectoryResponseDto, NewReportDto, ReportDto};
use crate::shared::view::PageView;

/// How a fake request should fail
#[derive(Debug, Clone, Copy)]
pub enum Failure {
    Status(u16),
    Connection,
}

impl Failure {
    fn into_error(self) -> AppError {
        match self {
            Failure::Status(status) => AppError::Server {
                status,
                body: String::new(),
            },
            Failure::Connection => AppError::Connection("connection refused".to_string()),
        }
    }
}

/// In-memory DPM server that records every call it receives.
#[derive(Default)]
pub struct FakeDpmApi {
    directory: DirectoryResponseDto,
    all: Vec<ReportDto>,
    pending: Vec<ReportDto>,
    page: String,
    read_failure: Option<Failure>,
    write_failure: Option<Failure>,
    calls: Mutex<Vec<String>>,
    created: Mutex<Vec<NewReportDto>>,
    approved: Mutex<Vec<(String, ApproveDto)>>,
    csrf_tokens: Mutex<Vec<String>>,
}

impl FakeDpmApi {
    pub fn with_directory(mut self, names: &[&str], ids: &[i64], user_id: &str) -> Self {
        self.directory = DirectoryResponseDto {
            names: names.iter().map(|n| n.to_string()).collect(),
            ids: ids.iter().map(|i| i.to_string()).collect(),
            user_id: user_id.to_string(),
        };
        self
    }

    pub fn with_all(mut self, reports: Vec<ReportDto>) -> Self {
        self.all = reports;
        self
    }

    pub fn with_pending(mut self, reports: Vec<ReportDto>) -> Self {
        self.pending = reports;
        self
    }

    pub fn with_page(mut self, html: &str) -> Self {
        self.page = html.to_string();
        self
    }

    pub fn failing_reads(mut self, failure: Failure) -> Self {
        self.read_failure = Some(failure);
        self
    }

    pub fn failing_writes(mut self, failure: Failure) -> Self {
        self.write_failure = Some(failure);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<NewReportDto> {
        self.created.lock().unwrap().clone()
    }

    pub fn approved(&self) -> Vec<(String, ApproveDto)> {
        self.approved.lock().unwrap().clone()
    }

    pub fn csrf_tokens(&self) -> Vec<String> {
        self.csrf_tokens.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn read<T: Clone>(&self, call: &str, value: &T) -> Result<T> {
        self.record(call.to_string());
        match self.read_failure {
            Some(failure) => Err(failure.into_error()),
            None => Ok(value.clone()),
        }
    }

    fn write(&self, call: String, csrf_token: &str) -> Result<()> {
        self.record(call);
        self.csrf_tokens.lock().unwrap().push(csrf_token.to_string());
        match self.write_failure {
            Some(failure) => Err(failure.into_error()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DpmApi for FakeDpmApi {
    async fn fetch_directory(&self) -> Result<DirectoryResponseDto> {
        self.read("GET /users", &self.directory)
    }

    async fn list_all(&self) -> Result<Vec<ReportDto>> {
        self.read("GET /dpm/all", &self.all)
    }

    async fn list_pending(&self) -> Result<Vec<ReportDto>> {
        self.read("GET /dpm/approve", &self.pending)
    }

    async fn create_report(&self, csrf_token: &str, report: &NewReportDto) -> Result<()> {
        self.created.lock().unwrap().push(report.clone());
        self.write("POST /dpm".to_string(), csrf_token)
    }

    async fn approve(&self, csrf_token: &str, id: &str, body: &ApproveDto) -> Result<()> {
        self.approved
            .lock()
            .unwrap()
            .push((id.to_string(), body.clone()));
        self.write(format!("POST /dpm/approve/{}", id), csrf_token)
    }

    async fn deny(&self, csrf_token: &str, id: &str) -> Result<()> {
        self.write(format!("POST /dpm/deny/{}", id), csrf_token)
    }

    async fn fetch_page(&self, path: &str) -> Result<String> {
        self.read(&format!("GET {}", path), &self.page)
    }
}

/// View that remembers everything a controller showed.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub toasts: Vec<String>,
    pub autocomplete: Vec<String>,
    pub rows: Vec<String>,
    pub modals: Vec<String>,
    pub hidden: Vec<usize>,
    pub form_clears: usize,
}

impl RecordingView {
    pub fn last_modal(&self) -> &str {
        self.modals.last().map(String::as_str).unwrap_or_default()
    }
}

impl PageView for RecordingView {
    fn toast(&mut self, message: &str) {
        self.toasts.push(message.to_string());
    }

    fn set_autocomplete(&mut self, names: &[String]) {
        self.autocomplete = names.to_vec();
    }

    fn render_rows(&mut self, rows: &[String]) {
        self.rows = rows.to_vec();
    }

    fn show_modal(&mut self, body: &str) {
        self.modals.push(body.to_string());
    }

    fn hide_row(&mut self, index: usize) {
        self.hidden.push(index);
    }

    fn clear_form(&mut self) {
        self.form_clears += 1;
    }
}

/// Approval-queue entry with the fields the server fills in.
pub fn pending_report(id: &str, name: &str, points: &str) -> ReportDto {
    ReportDto {
        id: id.to_string(),
        name: name.to_string(),
        sup_name: "Sam Supervisor".to_string(),
        points: points.to_string(),
        dpm_type: "Type G: Good! (+1 Point)".to_string(),
        block: "01".to_string(),
        location: "JPA".to_string(),
        date: "2024-01-05".to_string(),
        start_time: "2024-01-05T09:15:00".to_string(),
        end_time: "2024-01-05T17:45:00".to_string(),
        notes: "Thanks!".to_string(),
        created: "2024-01-05T18:02:00".to_string(),
        ..Default::default()
    }
}

/// Listing entry as served by `/dpm/all`.
pub fn listed_report(first_name: &str, last_name: &str, points: &str) -> ReportDto {
    ReportDto {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        points: points.to_string(),
        dpm_type: "Type D: DNS/Did Not Show (-10 Points)".to_string(),
        block: "02".to_string(),
        location: "OFF".to_string(),
        date: "2024-01-05".to_string(),
        start_time: "2024-01-05T09:15:00".to_string(),
        end_time: "2024-01-05T17:45:00".to_string(),
        notes: "No call".to_string(),
        ..Default::default()
    }
}
