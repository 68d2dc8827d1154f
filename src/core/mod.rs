pub mod error;

pub use error::{HrError, Result};
