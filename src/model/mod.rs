pub mod employee;
pub mod insights;

pub use employee::{Employee, EmployeeId, EmployeePatch, EmployeePayload};
pub use insights::{Alert, DashboardSnapshot, Insights, PerformancePoint, Severity};
