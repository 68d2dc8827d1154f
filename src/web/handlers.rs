use axum::Json;
use axum::extract::{FromRequest, Path, Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::core::{HrError, Result};
use crate::model::{
    Alert, DashboardSnapshot, Employee, EmployeeId, EmployeePatch, EmployeePayload,
    PerformancePoint,
};
use crate::query::{EmployeeQuery, Pagination, QueryPage};
use crate::store::BulkDeleteReport;
use crate::web::AppState;

/// `Json` whose rejection is rendered as an `HrError`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(HrError))]
pub struct ApiJson<T>(pub T);

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct BulkDeleteBody {
    pub ids: Vec<EmployeeId>,
}

pub async fn healthcheck() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn list_employees(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<QueryPage>> {
    let query = EmployeeQuery::from_params(params)?;
    let page = state.store.query(&query).await?;
    Ok(Json(page))
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>> {
    let id = id.parse::<EmployeeId>()?;
    let employee = state.store.get(id).await?.ok_or(HrError::NotFound(id))?;
    Ok(Json(employee))
}

pub async fn create_employee(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<EmployeePayload>,
) -> Result<(StatusCode, Json<Employee>)> {
    payload.validate()?;
    let employee = state.store.create(payload).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<EmployeePatch>,
) -> Result<Json<Employee>> {
    let id = id.parse::<EmployeeId>()?;
    patch.validate()?;
    let employee = state.store.update(id, patch).await?;
    Ok(Json(employee))
}

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = id.parse::<EmployeeId>()?;
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_employees_bulk(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<BulkDeleteBody>,
) -> Result<Json<BulkDeleteReport>> {
    let report = state.store.delete_bulk(&body.ids).await?;
    Ok(Json(report))
}

pub async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardSnapshot>> {
    // Only the count is needed, so ask for the smallest page.
    let probe = EmployeeQuery::new().paginate(Pagination::new(1, 1)?);
    let headcount = state.store.query(&probe).await?.total;
    Ok(Json(state.insights.snapshot(headcount)))
}

pub async fn performance_series(State(state): State<AppState>) -> Json<Vec<PerformancePoint>> {
    Json(state.insights.performance_series().to_vec())
}

pub async fn alerts(State(state): State<AppState>) -> Json<Vec<Alert>> {
    Json(state.insights.alerts().to_vec())
}
