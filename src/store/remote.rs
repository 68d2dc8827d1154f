use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{HrError, Result};
use crate::model::{Employee, EmployeeId, EmployeePatch, EmployeePayload};
use crate::query::{EmployeeQuery, QueryPage};
use crate::store::{BulkDeleteReport, EmployeeStore};

/// Connection settings for a remote directory API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    /// Base URL the `/employees` routes hang off, e.g. `http://hr.internal/api`
    pub base_url: String,

    /// Per-request timeout
    pub timeout: Duration,
}

impl RemoteConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize)]
struct BulkDeleteRequest<'a> {
    ids: &'a [EmployeeId],
}

/// Record store backed by another directory service over HTTP.
pub struct RemoteEmployeeStore {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteEmployeeStore {
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn employees_url(&self) -> String {
        format!("{}/employees", self.base_url)
    }

    fn employee_url(&self, id: EmployeeId) -> String {
        format!("{}/employees/{}", self.base_url, id)
    }

    /// Pass 2xx responses through; map everything else onto `HrError`.
    /// `subject` is the employee the request addressed, if any. A 404 only
    /// names it when the body is the directory's own `{error}` document; a
    /// bare 404 means the route itself is missing, i.e. a misconfigured base
    /// URL, and is a transport failure.
    async fn check(response: Response, subject: Option<EmployeeId>) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let body = serde_json::from_str::<ErrorBody>(&text).ok();
        let from_directory = body.is_some();
        let message = body.map(|body| body.error).unwrap_or(text);

        let err = match (status, subject) {
            (StatusCode::NOT_FOUND, Some(id)) if from_directory => HrError::NotFound(id),
            (StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY, _) => {
                HrError::Validation(message)
            }
            _ => HrError::transport(format!("remote directory returned {status}: {message}")),
        };

        if matches!(err, HrError::Transport(_)) {
            warn!(%status, "remote directory request failed");
        }
        Err(err)
    }

    async fn decode<T: DeserializeOwned>(
        response: Response,
        subject: Option<EmployeeId>,
    ) -> Result<T> {
        let response = Self::check(response, subject).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl EmployeeStore for RemoteEmployeeStore {
    async fn query(&self, query: &EmployeeQuery) -> Result<QueryPage> {
        let params = query.to_params();
        debug!(url = %self.employees_url(), ?params, "remote employee query");

        let response = self
            .client
            .get(self.employees_url())
            .query(&params)
            .send()
            .await?;
        Self::decode(response, None).await
    }

    async fn get(&self, id: EmployeeId) -> Result<Option<Employee>> {
        let response = self.client.get(self.employee_url(id)).send().await?;
        match Self::decode(response, Some(id)).await {
            Ok(employee) => Ok(Some(employee)),
            Err(HrError::NotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn create(&self, payload: EmployeePayload) -> Result<Employee> {
        let response = self
            .client
            .post(self.employees_url())
            .json(&payload)
            .send()
            .await?;
        Self::decode(response, None).await
    }

    async fn update(&self, id: EmployeeId, patch: EmployeePatch) -> Result<Employee> {
        let response = self
            .client
            .put(self.employee_url(id))
            .json(&patch)
            .send()
            .await?;
        Self::decode(response, Some(id)).await
    }

    async fn delete(&self, id: EmployeeId) -> Result<()> {
        let response = self.client.delete(self.employee_url(id)).send().await?;
        Self::check(response, Some(id)).await?;
        Ok(())
    }

    async fn delete_bulk(&self, ids: &[EmployeeId]) -> Result<BulkDeleteReport> {
        let response = self
            .client
            .post(format!("{}/bulk-delete", self.employees_url()))
            .json(&BulkDeleteRequest { ids })
            .send()
            .await?;
        Self::decode(response, None).await
    }
}
