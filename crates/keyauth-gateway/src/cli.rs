//! Command line interface.

use std::path::PathBuf;

use clap::Parser;

use keyauth_core::error::Result;

use crate::config::{self, ServiceConfig};

#[derive(Debug, Parser)]
#[command(name = "keyauth-gateway", version, about = "Tenant-scoped bearer key validation service")]
pub struct Cli {
    /// Host to bind to (default: 0.0.0.0)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (default: 8081)
    #[arg(long)]
    pub port: Option<u16>,

    /// Enable debug logging (RUST_LOG still wins when set)
    #[arg(long)]
    pub debug: bool,

    /// Path to a .env file consulted when the key variable is unset
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Path to a YAML config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Refuse to start when no valid keys are configured
    #[arg(long)]
    pub require_keys: bool,
}

impl Cli {
    /// Load the config file (or defaults) and apply command line overrides.
    pub fn resolve_config(&self) -> Result<ServiceConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from_file(path)?,
            None => ServiceConfig::default(),
        };
        self.apply_overrides(&mut cfg);
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn apply_overrides(&self, cfg: &mut ServiceConfig) {
        if let Some(host) = &self.host {
            cfg.server.host = host.clone();
        }
        if let Some(port) = self.port {
            cfg.server.port = port;
        }
        if self.require_keys {
            cfg.keys.require_keys = true;
        }
    }

    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}
