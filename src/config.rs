use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use crate::core::Result;
use crate::store::{EmployeeStore, InMemoryEmployeeStore, RemoteConfig, RemoteEmployeeStore};

/// Which record store backs the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// Process-local store, optionally seeded with the mock directory.
    Memory { seed: bool },
    /// Another directory API reached over HTTP.
    Remote(RemoteConfig),
}

impl StoreBackend {
    pub fn open(&self) -> Result<Arc<dyn EmployeeStore>> {
        let store: Arc<dyn EmployeeStore> = match self {
            Self::Memory { seed: true } => Arc::new(InMemoryEmployeeStore::seeded()),
            Self::Memory { seed: false } => Arc::new(InMemoryEmployeeStore::new()),
            Self::Remote(config) => Arc::new(RemoteEmployeeStore::new(config)?),
        };
        Ok(store)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "pulse-hr", version, about = "Employee directory API")]
pub struct AppConfig {
    /// Interface to bind
    #[arg(long, env = "PULSE_HR_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PULSE_HR_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Base URL of a remote directory API. When unset the in-memory store is used.
    #[arg(long, env = "PULSE_HR_API_BASE")]
    pub api_base: Option<String>,

    /// Request timeout for the remote directory, in milliseconds
    #[arg(long, env = "PULSE_HR_API_TIMEOUT_MS", default_value_t = 10_000)]
    pub api_timeout_ms: u64,

    /// Load the mock directory into the in-memory store on startup
    #[arg(
        long,
        env = "PULSE_HR_SEED",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub seed: bool,
}

impl AppConfig {
    /// Parse command-line arguments, falling back to the environment and a
    /// `.env` file.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn backend(&self) -> StoreBackend {
        match self
            .api_base
            .as_deref()
            .map(str::trim)
            .filter(|base| !base.is_empty())
        {
            Some(base) => StoreBackend::Remote(
                RemoteConfig::new(base).timeout(Duration::from_millis(self.api_timeout_ms)),
            ),
            None => StoreBackend::Memory { seed: self.seed },
        }
    }
}
