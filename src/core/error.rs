use thiserror::Error;

use crate::model::EmployeeId;

#[derive(Error, Debug)]
pub enum HrError {
    #[error("Employee {0} not found")]
    NotFound(EmployeeId),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, HrError>;

impl HrError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }
}

impl From<reqwest::Error> for HrError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Transport(format!("undecodable response body: {err}"))
        } else {
            Self::Transport(err.to_string())
        }
    }
}
