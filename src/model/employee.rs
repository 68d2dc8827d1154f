use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{HrError, Result};

/// Stable identifier assigned by the record store on create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub u64);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EmployeeId {
    type Err = HrError;

    fn from_str(raw: &str) -> Result<Self> {
        raw.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| HrError::validation(format!("invalid employee id: {raw}")))
    }
}

impl From<u64> for EmployeeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// An employee record as held by the store and sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub role: String,
    pub hire_date: NaiveDate,
    pub performance_score: i32,
}

impl Employee {
    pub fn from_payload(id: EmployeeId, payload: EmployeePayload) -> Self {
        Self {
            id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            department: payload.department,
            role: payload.role,
            hire_date: payload.hire_date,
            performance_score: payload.performance_score,
        }
    }

    /// Given and family name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Merge every field present in `patch`. The identifier is never touched.
    pub fn apply(&mut self, patch: EmployeePatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(hire_date) = patch.hire_date {
            self.hire_date = hire_date;
        }
        if let Some(performance_score) = patch.performance_score {
            self.performance_score = performance_score;
        }
    }
}

/// Create body: every field except the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub role: String,
    pub hire_date: NaiveDate,
    pub performance_score: i32,
}

impl EmployeePayload {
    pub fn validate(&self) -> Result<()> {
        ensure_not_blank("firstName", &self.first_name)?;
        ensure_not_blank("lastName", &self.last_name)?;
        validate_email(&self.email)?;
        ensure_not_blank("department", &self.department)?;
        ensure_not_blank("role", &self.role)?;
        validate_score(self.performance_score)?;
        Ok(())
    }
}

/// Update body. Absent fields are left unchanged; an `id` key is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_score: Option<i32>,
}

impl EmployeePatch {
    pub fn has_changes(&self) -> bool {
        self.first_name.is_some()
            || self.last_name.is_some()
            || self.email.is_some()
            || self.department.is_some()
            || self.role.is_some()
            || self.hire_date.is_some()
            || self.performance_score.is_some()
    }

    pub fn validate(&self) -> Result<()> {
        if !self.has_changes() {
            return Err(HrError::validation(
                "at least one field must be provided for an update",
            ));
        }
        if let Some(first_name) = self.first_name.as_deref() {
            ensure_not_blank("firstName", first_name)?;
        }
        if let Some(last_name) = self.last_name.as_deref() {
            ensure_not_blank("lastName", last_name)?;
        }
        if let Some(email) = self.email.as_deref() {
            validate_email(email)?;
        }
        if let Some(department) = self.department.as_deref() {
            ensure_not_blank("department", department)?;
        }
        if let Some(role) = self.role.as_deref() {
            ensure_not_blank("role", role)?;
        }
        if let Some(score) = self.performance_score {
            validate_score(score)?;
        }
        Ok(())
    }
}

fn ensure_not_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HrError::validation(format!("{field} must not be blank")));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(HrError::validation(format!(
            "email must be a valid address: {email}"
        ))),
    }
}

fn validate_score(score: i32) -> Result<()> {
    if !(0..=100).contains(&score) {
        return Err(HrError::validation(
            "performanceScore must be between 0 and 100",
        ));
    }
    Ok(())
}
