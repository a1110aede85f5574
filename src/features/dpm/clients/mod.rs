mod dpm_api_client;

pub use dpm_api_client::DpmApiClient;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::dpm::dtos::{ApproveDto, DirectoryResponseDto, NewReportDto, ReportDto};

/// Endpoints of the DPM server used by the page controllers.
///
/// Every method issues exactly one request. Failures are returned as-is;
/// nothing is retried.
#[async_trait]
pub trait DpmApi: Send + Sync {
    /// `GET /users`
    async fn fetch_directory(&self) -> Result<DirectoryResponseDto>;

    /// `GET /dpm/all`
    async fn list_all(&self) -> Result<Vec<ReportDto>>;

    /// `GET /dpm/approve`
    async fn list_pending(&self) -> Result<Vec<ReportDto>>;

    /// `POST /dpm`
    async fn create_report(&self, csrf_token: &str, report: &NewReportDto) -> Result<()>;

    /// `POST /dpm/approve/:id`
    async fn approve(&self, csrf_token: &str, id: &str, body: &ApproveDto) -> Result<()>;

    /// `POST /dpm/deny/:id`
    async fn deny(&self, csrf_token: &str, id: &str) -> Result<()>;

    /// Raw HTML of a server-rendered page
    async fn fetch_page(&self, path: &str) -> Result<String>;
}
