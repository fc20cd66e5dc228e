//! Runtime configuration read from the environment

use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{SupportError, SupportResult};

/// Default data file name, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "support.jsonl";

/// Default HTTP bind address
pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:3030";

/// Default log filter directive
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportConfig {
    /// JSONL file holding FAQs, orders and tickets
    pub data_file: PathBuf,
    /// Address the HTTP server binds to
    pub http_addr: SocketAddr,
    /// `EnvFilter` directive, e.g. `scooter_support=debug,tower_http=info`
    pub log_filter: String,
    /// Emit JSON log lines instead of human-readable ones
    pub log_json: bool,
}

impl SupportConfig {
    /// Read `SUPPORT_DATA_FILE`, `SUPPORT_HTTP_ADDR`, `SUPPORT_LOG` and `SUPPORT_LOG_JSON`
    pub fn from_env() -> SupportResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> SupportResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let data_file = match lookup("SUPPORT_DATA_FILE") {
            Some(path) if !path.trim().is_empty() => resolve_path(&current_dir, &path),
            _ => current_dir.join(DEFAULT_DATA_FILE),
        };

        let addr = lookup("SUPPORT_HTTP_ADDR").unwrap_or_else(|| DEFAULT_HTTP_ADDR.to_string());
        let http_addr = addr
            .parse()
            .map_err(|_| SupportError::InvalidInput(format!("bad SUPPORT_HTTP_ADDR '{}'", addr)))?;

        let log_filter = lookup("SUPPORT_LOG")
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let log_json = lookup("SUPPORT_LOG_JSON")
            .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            data_file,
            http_addr,
            log_filter,
            log_json,
        })
    }
}

fn resolve_path(base: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
