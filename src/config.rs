//! Runtime configuration loaded from the environment (optionally via `.env`).

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use validator::Validate;

pub const ENV_HOST: &str = "SIGNHOOK_HOST";
pub const ENV_PORT: &str = "SIGNHOOK_PORT";
pub const ENV_CHATTY_LOGS: &str = "SIGNHOOK_CHATTY_LOGS";
pub const ENV_DOCUMENT_PATH: &str = "SIGNHOOK_DOCUMENT_PATH";
pub const ENV_DOCUMENT_DIR: &str = "SIGNHOOK_DOCUMENT_DIR";
pub const ENV_LOG_DIR: &str = "SIGNHOOK_LOG_DIR";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DOCUMENT_PATH: &str = "received_file.pdf";

/// Where signed documents end up on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentTarget {
    /// Single file, overwritten by every document (last write wins).
    Fixed(PathBuf),
    /// One new file per document inside this directory.
    UniqueIn(PathBuf),
}

#[derive(Debug, Clone, Validate)]
pub struct AppConfig {
    #[validate(length(min = 1, message = "host must not be empty"))]
    pub host: String,

    #[validate(range(min = 1, message = "port must be non-zero"))]
    pub port: u16,

    /// Log full request bodies before handling them.
    pub chatty_logs: bool,

    pub document_target: DocumentTarget,

    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            chatty_logs: false,
            document_target: DocumentTarget::Fixed(PathBuf::from(DEFAULT_DOCUMENT_PATH)),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut cfg = Self::default();

        if let Some(host) = get(ENV_HOST) {
            cfg.host = host;
        }

        if let Some(port) = get(ENV_PORT) {
            cfg.port = port
                .parse()
                .with_context(|| format!("{ENV_PORT} must be a port number, got '{port}'"))?;
        }

        if let Some(flag) = get(ENV_CHATTY_LOGS) {
            cfg.chatty_logs = parse_bool(&flag)
                .ok_or_else(|| anyhow!("{ENV_CHATTY_LOGS} must be a boolean, got '{flag}'"))?;
        }

        cfg.document_target = match (get(ENV_DOCUMENT_DIR), get(ENV_DOCUMENT_PATH)) {
            (Some(dir), _) => DocumentTarget::UniqueIn(PathBuf::from(dir)),
            (None, Some(path)) => DocumentTarget::Fixed(PathBuf::from(path)),
            (None, None) => DocumentTarget::Fixed(PathBuf::from(DEFAULT_DOCUMENT_PATH)),
        };

        cfg.log_dir = get(ENV_LOG_DIR).map(PathBuf::from);

        cfg.validate().context("invalid configuration")?;
        Ok(cfg)
    }

    /// Resolves `host:port`; the host may be an IP literal or a name such as `localhost`.
    pub async fn resolve_bind_addr(&self) -> Result<SocketAddr> {
        tokio::net::lookup_host((self.host.as_str(), self.port))
            .await
            .with_context(|| format!("Failed to resolve bind address {}:{}", self.host, self.port))?
            .next()
            .ok_or_else(|| anyhow!("{}:{} did not resolve to any address", self.host, self.port))
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
