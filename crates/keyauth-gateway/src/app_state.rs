//! Shared application state for the keyauth gateway.
//!
//! Holds the service config and the key registry. Both are built once before
//! the listener starts and are read-only afterwards, so handlers share them
//! through an `Arc` without locking.

use std::sync::Arc;

use keyauth_core::Registry;

use crate::config::ServiceConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServiceConfig,
    registry: Registry,
}

impl AppState {
    pub fn new(cfg: ServiceConfig, registry: Registry) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, registry }),
        }
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }

    pub fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
