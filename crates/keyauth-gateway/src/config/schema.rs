use keyauth_core::error::{KeyAuthError, Result};
use serde::Deserialize;

pub const DEFAULT_SERVICE_NAME: &str = "Key Auth Service";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub service: ServiceSection,

    #[serde(default)]
    pub keys: KeysSection,

    #[serde(default)]
    pub logging: LoggingSection,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            service: ServiceSection::default(),
            keys: KeysSection::default(),
            logging: LoggingSection::default(),
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(KeyAuthError::UnsupportedVersion(self.version));
        }
        self.server.validate()?;
        if self.service.name.trim().is_empty() {
            return Err(KeyAuthError::InvalidConfig("service.name must not be empty".into()));
        }
        if self.keys.env_var.trim().is_empty() {
            return Err(KeyAuthError::InvalidConfig("keys.env_var must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(KeyAuthError::InvalidConfig("server.host must not be empty".into()));
        }
        Ok(())
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    8081
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceSection {
    #[serde(default = "default_service_name")]
    pub name: String,
}

impl Default for ServiceSection {
    fn default() -> Self {
        Self {
            name: default_service_name(),
        }
    }
}

fn default_service_name() -> String {
    DEFAULT_SERVICE_NAME.into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeysSection {
    /// Environment variable holding the key registry.
    #[serde(default = "default_env_var")]
    pub env_var: String,

    /// Refuse to start with an empty registry.
    #[serde(default)]
    pub require_keys: bool,
}

impl Default for KeysSection {
    fn default() -> Self {
        Self {
            env_var: default_env_var(),
            require_keys: false,
        }
    }
}

fn default_env_var() -> String {
    "VALID_KEYS".into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    /// Dump request headers at debug level (credentials redacted).
    #[serde(default = "default_log_headers")]
    pub log_headers: bool,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            log_headers: default_log_headers(),
        }
    }
}

fn default_log_headers() -> bool {
    true
}
