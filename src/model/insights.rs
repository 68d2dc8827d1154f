//! Dashboard aggregates shown next to the directory: a monthly performance
//! series, the open alert feed, and the snapshot derived from both.

use serde::{Deserialize, Serialize};

/// Quarter-over-quarter movement reported on the dashboard.
const PERFORMANCE_TREND: f64 = 4.6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
    pub month: String,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub employees: u64,
    pub performance: u32,
    pub alerts: usize,
    pub performance_trend: f64,
}

/// Performance series and alert feed backing the dashboard.
#[derive(Debug, Clone, Default)]
pub struct Insights {
    series: Vec<PerformancePoint>,
    alerts: Vec<Alert>,
}

impl Insights {
    pub fn new(series: Vec<PerformancePoint>, alerts: Vec<Alert>) -> Self {
        Self { series, alerts }
    }

    pub fn seeded() -> Self {
        let scores = [82, 85, 86, 88, 84, 89, 91, 90, 92, 89, 93, 95];
        let months = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        let series = months
            .iter()
            .zip(scores)
            .map(|(month, score)| PerformancePoint {
                month: (*month).to_string(),
                score,
            })
            .collect();

        let alerts = vec![
            Alert {
                id: "ALT-001".to_string(),
                message: "2 performance reviews overdue in Sales.".to_string(),
                severity: Severity::Warning,
            },
            Alert {
                id: "ALT-002".to_string(),
                message: "Payroll anomalies detected for November.".to_string(),
                severity: Severity::Critical,
            },
            Alert {
                id: "ALT-003".to_string(),
                message: "New onboarding task requires approval.".to_string(),
                severity: Severity::Info,
            },
        ];

        Self::new(series, alerts)
    }

    pub fn performance_series(&self) -> &[PerformancePoint] {
        &self.series
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Rounded mean of the performance series; zero for an empty series.
    pub fn average_performance(&self) -> u32 {
        if self.series.is_empty() {
            return 0;
        }
        let sum: u32 = self.series.iter().map(|point| point.score).sum();
        (f64::from(sum) / self.series.len() as f64).round() as u32
    }

    pub fn snapshot(&self, employees: u64) -> DashboardSnapshot {
        DashboardSnapshot {
            employees,
            performance: self.average_performance(),
            alerts: self.alerts.len(),
            performance_trend: PERFORMANCE_TREND,
        }
    }
}
