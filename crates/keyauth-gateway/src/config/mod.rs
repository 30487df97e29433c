//! Service config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use keyauth_core::error::{KeyAuthError, Result};

pub use schema::{KeysSection, LoggingSection, ServerSection, ServiceConfig, ServiceSection};

pub fn load_from_file(path: &Path) -> Result<ServiceConfig> {
    let s = fs::read_to_string(path).map_err(|e| {
        KeyAuthError::Internal(format!("read config {} failed: {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServiceConfig> {
    let cfg: ServiceConfig = serde_yaml::from_str(s)
        .map_err(|e| KeyAuthError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
