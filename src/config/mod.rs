//! Configuration module for the hub site server.
//!
//! Process settings are loaded from environment variables with sensible defaults.
//! The hub's own content configuration lives in `hub-config.json` and is handled
//! by [`crate::hub`].

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_SITE_ROOT: &str = "./public";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory containing `config/` and `data/`
    pub site_root: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Treat missing recommended hub fields as fatal
    pub strict_recommended: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Also returns warnings about values that were ignored. Logging is not
    /// up yet at this point, so the caller reports them.
    pub fn from_env() -> (Self, Vec<String>) {
        let mut warnings = Vec::new();
        dotenvy::dotenv().ok();

        let site_root = env::var("HUB_SITE_ROOT")
            .unwrap_or_else(|_| DEFAULT_SITE_ROOT.to_string())
            .into();

        let (bind_addr, warning) = parse_bind_addr(env::var("HUB_BIND_ADDR").ok());
        warnings.extend(warning);

        let log_level = env::var("HUB_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        let strict_recommended = env::var("HUB_STRICT_RECOMMENDED")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let config = Self {
            site_root,
            bind_addr,
            log_level,
            strict_recommended,
        };
        (config, warnings)
    }
}

/// Parse `HUB_BIND_ADDR`, falling back to the default with a warning.
fn parse_bind_addr(raw: Option<String>) -> (SocketAddr, Option<String>) {
    match raw {
        None => (default_bind_addr(), None),
        Some(raw) => match raw.parse() {
            Ok(addr) => (addr, None),
            Err(_) => (
                default_bind_addr(),
                Some(format!(
                    "Invalid HUB_BIND_ADDR {:?}, using {}",
                    raw, DEFAULT_BIND_ADDR
                )),
            ),
        },
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
