use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::core::{HrError, Result};
use crate::model::Employee;

/// Employee attributes usable as filter keys, including the synthetic
/// `fullName`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterField {
    Id,
    FirstName,
    LastName,
    FullName,
    Email,
    Department,
    Role,
    HireDate,
    PerformanceScore,
}

impl FilterField {
    pub const ALL: [FilterField; 9] = [
        Self::Id,
        Self::FirstName,
        Self::LastName,
        Self::FullName,
        Self::Email,
        Self::Department,
        Self::Role,
        Self::HireDate,
        Self::PerformanceScore,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Department => "department",
            Self::Role => "role",
            Self::HireDate => "hireDate",
            Self::PerformanceScore => "performanceScore",
        }
    }

    /// Text a filter pattern is matched against. Numbers and dates use
    /// their wire rendering.
    pub fn text_of(self, employee: &Employee) -> Cow<'_, str> {
        match self {
            Self::Id => Cow::Owned(employee.id.to_string()),
            Self::FirstName => Cow::Borrowed(employee.first_name.as_str()),
            Self::LastName => Cow::Borrowed(employee.last_name.as_str()),
            Self::FullName => Cow::Owned(employee.full_name()),
            Self::Email => Cow::Borrowed(employee.email.as_str()),
            Self::Department => Cow::Borrowed(employee.department.as_str()),
            Self::Role => Cow::Borrowed(employee.role.as_str()),
            Self::HireDate => Cow::Owned(employee.hire_date.format("%Y-%m-%d").to_string()),
            Self::PerformanceScore => Cow::Owned(employee.performance_score.to_string()),
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterField {
    type Err = HrError;

    fn from_str(raw: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == raw)
            .ok_or_else(|| HrError::validation(format!("unknown filter field: {raw}")))
    }
}

/// Stored employee attributes usable as sort keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Id,
    FirstName,
    LastName,
    Email,
    Department,
    Role,
    HireDate,
    PerformanceScore,
}

impl SortField {
    pub const ALL: [SortField; 8] = [
        Self::Id,
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Department,
        Self::Role,
        Self::HireDate,
        Self::PerformanceScore,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Department => "department",
            Self::Role => "role",
            Self::HireDate => "hireDate",
            Self::PerformanceScore => "performanceScore",
        }
    }

    /// Ascending comparison in the field's own value type.
    pub fn compare(self, left: &Employee, right: &Employee) -> Ordering {
        match self {
            Self::Id => left.id.cmp(&right.id),
            Self::FirstName => left.first_name.cmp(&right.first_name),
            Self::LastName => left.last_name.cmp(&right.last_name),
            Self::Email => left.email.cmp(&right.email),
            Self::Department => left.department.cmp(&right.department),
            Self::Role => left.role.cmp(&right.role),
            Self::HireDate => left.hire_date.cmp(&right.hire_date),
            Self::PerformanceScore => left.performance_score.cmp(&right.performance_score),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = HrError;

    fn from_str(raw: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == raw)
            .ok_or_else(|| HrError::validation(format!("unknown sort field: {raw}")))
    }
}
