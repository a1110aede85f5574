use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, COOKIE};
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::DpmApi;
use crate::core::config::{ServerConfig, SessionConfig};
use crate::core::error::{AppError, Result};
use crate::features::dpm::dtos::{ApproveDto, DirectoryResponseDto, NewReportDto, ReportDto};
use crate::shared::constants::{CSRF_HEADER, JSON_CONTENT_TYPE};

/// HTTP client for the DPM server's JSON endpoints
pub struct DpmApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl DpmApiClient {
    pub fn new(server: &ServerConfig, session: &SessionConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = &session.cookie {
            let value = HeaderValue::from_str(cookie).map_err(|_| {
                AppError::Config("DPM_SESSION_COOKIE is not a valid header value".to_string())
            })?;
            headers.insert(COOKIE, value);
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(server.user_agent.clone())
            .default_headers(headers);
        if let Some(timeout) = server.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url: server.base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Accept any 2xx or 3xx status, as the browser pages did.
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() || status.is_redirection() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!("DPM API error: HTTP {} - {}", status, body);
        Err(AppError::Server {
            status: status.as_u16(),
            body,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        tracing::debug!("Fetching {}", url);

        let response = self.http_client.get(&url).send().await.map_err(|e| {
            tracing::error!("Failed to fetch {}: {}", url, e);
            AppError::Connection(e.to_string())
        })?;

        let response = Self::check_status(response).await?;
        response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to parse response from {}: {}", url, e);
            AppError::Http(e)
        })
    }

    /// POST a state-changing request carrying the CSRF token.
    ///
    /// Headers are set before the body so the JSON content type is sent once.
    async fn send_write<B: Serialize + ?Sized>(
        &self,
        url: &str,
        csrf_token: &str,
        body: Option<&B>,
    ) -> Result<()> {
        let mut request = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(CSRF_HEADER, csrf_token);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("Failed to send request to {}: {}", url, e);
            AppError::Connection(e.to_string())
        })?;

        Self::check_status(response).await?;
        Ok(())
    }
}

#[async_trait]
impl DpmApi for DpmApiClient {
    async fn fetch_directory(&self) -> Result<DirectoryResponseDto> {
        self.get_json("/users").await
    }

    async fn list_all(&self) -> Result<Vec<ReportDto>> {
        let reports: Vec<ReportDto> = self.get_json("/dpm/all").await?;
        tracing::info!("Loaded {} reports", reports.len());
        Ok(reports)
    }

    async fn list_pending(&self) -> Result<Vec<ReportDto>> {
        let reports: Vec<ReportDto> = self.get_json("/dpm/approve").await?;
        tracing::info!("Loaded {} reports awaiting approval", reports.len());
        Ok(reports)
    }

    async fn create_report(&self, csrf_token: &str, report: &NewReportDto) -> Result<()> {
        let url = self.url("/dpm");
        tracing::debug!("Submitting report for {} to {}", report.name, url);

        self.send_write(&url, csrf_token, Some(report)).await?;

        tracing::info!("Submitted report for {}", report.name);
        Ok(())
    }

    async fn approve(&self, csrf_token: &str, id: &str, body: &ApproveDto) -> Result<()> {
        let url = self.url(&format!("/dpm/approve/{}", urlencoding::encode(id)));
        tracing::debug!("Approving report {} at {}", id, url);

        self.send_write(&url, csrf_token, Some(body)).await?;

        tracing::info!("Approved report {}", id);
        Ok(())
    }

    async fn deny(&self, csrf_token: &str, id: &str) -> Result<()> {
        let url = self.url(&format!("/dpm/deny/{}", urlencoding::encode(id)));
        tracing::debug!("Denying report {} at {}", id, url);

        self.send_write::<()>(&url, csrf_token, None).await?;

        tracing::info!("Denied report {}", id);
        Ok(())
    }

    async fn fetch_page(&self, path: &str) -> Result<String> {
        let url = self.url(path);
        tracing::debug!("Fetching page {}", url);

        let response = self.http_client.get(&url).send().await.map_err(|e| {
            tracing::error!("Failed to fetch page {}: {}", url, e);
            AppError::Connection(e.to_string())
        })?;
        let response = Self::check_status(response).await?;
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Request as seen on the wire: head lower-cased, body verbatim
    struct Captured {
        head: String,
        body: String,
    }

    /// Accept one connection, answer with `status` and return what was sent.
    async fn serve_once(
        status: &'static str,
        reply: &'static str,
    ) -> (String, JoinHandle<Captured>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut chunk = [0u8; 4096];

            let head_end = loop {
                let n = stream.read(&mut chunk).await.unwrap();
                assert!(n > 0, "connection closed before headers ended");
                raw.extend_from_slice(&chunk[..n]);
                if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };

            let head = String::from_utf8_lossy(&raw[..head_end]).to_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .map(|v| v.trim().parse::<usize>().unwrap())
                .unwrap_or(0);
            while raw.len() < head_end + content_length {
                let n = stream.read(&mut chunk).await.unwrap();
                assert!(n > 0, "connection closed before body ended");
                raw.extend_from_slice(&chunk[..n]);
            }
            let body = String::from_utf8_lossy(&raw[head_end..head_end + content_length])
                .into_owned();

            let response = format!(
                "HTTP/1.1 {}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                reply.len(),
                reply
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();

            Captured { head, body }
        });

        (base_url, handle)
    }

    fn client(base_url: &str, cookie: Option<&str>) -> DpmApiClient {
        let session = SessionConfig {
            cookie: cookie.map(str::to_string),
            csrf_token: None,
        };
        DpmApiClient::new(&server(base_url), &session).unwrap()
    }

    fn server(base_url: &str) -> ServerConfig {
        ServerConfig {
            base_url: base_url.to_string(),
            timeout: None,
            user_agent: "dpm-client/test".to_string(),
        }
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let session = SessionConfig {
            cookie: None,
            csrf_token: None,
        };
        let client = DpmApiClient::new(&server("http://localhost:8080"), &session).unwrap();
        assert_eq!(client.url("/dpm/all"), "http://localhost:8080/dpm/all");
    }

    #[test]
    fn test_invalid_cookie_is_rejected() {
        let session = SessionConfig {
            cookie: Some("session=abc\ndef".to_string()),
            csrf_token: None,
        };
        let result = DpmApiClient::new(&server("http://localhost:8080"), &session);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[tokio::test]
    async fn test_approve_sends_token_cookie_and_json_body() {
        let (base_url, handle) = serve_once("200 OK", "").await;
        let api = client(&base_url, Some("_gorilla_csrf=abc; dpm-session=xyz"));
        let body = ApproveDto {
            points: "5".to_string(),
            name: "Jane Doe".to_string(),
        };

        api.approve("tok+1/2==", "4 1", &body).await.unwrap();

        let req = handle.await.unwrap();
        assert!(req.head.starts_with("post /dpm/approve/4%201 http/1.1\r\n"));
        assert!(req.head.contains("\r\nx-csrf-token: tok+1/2==\r\n"));
        assert!(req.head.contains("\r\ncookie: _gorilla_csrf=abc; dpm-session=xyz\r\n"));
        assert_eq!(req.head.matches("content-type:").count(), 1);
        assert!(req.head.contains("\r\ncontent-type: application/json; charset=utf-8\r\n"));

        let sent: serde_json::Value = serde_json::from_str(&req.body).unwrap();
        assert_eq!(sent, json!({"points": "5", "name": "Jane Doe"}));
    }

    #[tokio::test]
    async fn test_deny_sends_empty_body_and_accepts_redirect_status() {
        let (base_url, handle) = serve_once("302 Found", "").await;
        let api = client(&base_url, None);

        api.deny("tok", "41").await.unwrap();

        let req = handle.await.unwrap();
        assert!(req.head.starts_with("post /dpm/deny/41 http/1.1\r\n"));
        assert!(req.head.contains("\r\nx-csrf-token: tok\r\n"));
        assert!(!req.head.contains("\r\ncookie:"));
        assert!(req.body.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_status_maps_to_server_error() {
        let (base_url, handle) = serve_once("500 Internal Server Error", "boom").await;
        let api = client(&base_url, None);
        let report = NewReportDto {
            name: "Jane Doe".to_string(),
            block: "01".to_string(),
            location: "JPA".to_string(),
            date: "2024-01-05".to_string(),
            start_time: "09:15".to_string(),
            end_time: "17:45".to_string(),
            notes: String::new(),
            dpm_type: "Type G: Good! (+1 Point)".to_string(),
            sender: "7".to_string(),
            id: "12".to_string(),
            points: "0".to_string(),
        };

        let result = api.create_report("tok", &report).await;

        match result {
            Err(AppError::Server { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected server error, got {:?}", other),
        }
        let req = handle.await.unwrap();
        assert!(req.head.starts_with("post /dpm http/1.1\r\n"));
        let sent: serde_json::Value = serde_json::from_str(&req.body).unwrap();
        assert_eq!(sent["startTime"], "09:15");
        assert_eq!(sent["dpmType"], "Type G: Good! (+1 Point)");
    }

    #[tokio::test]
    async fn test_list_pending_reads_json_feed() {
        let (base_url, handle) = serve_once(
            "200 OK",
            r#"[{"id":41,"name":"Jane Doe","supName":"Sam","points":"+5"}]"#,
        )
        .await;
        let api = client(&base_url, None);

        let reports = api.list_pending().await.unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].id, "41");
        assert_eq!(reports[0].sup_name, "Sam");
        let req = handle.await.unwrap();
        assert!(req.head.starts_with("get /dpm/approve http/1.1\r\n"));
    }
}
