//! Authorization engine.
//!
//! A pure function of the registry and the two values extracted from the
//! request. Rules are evaluated in a fixed order and the first match wins.

use crate::registry::{Registry, TenantSet};

const BEARER_PREFIX: &str = "Bearer ";

/// Decision for one validation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict<'a> {
    /// Registry has no keys.
    ServiceMisconfigured,
    TenantHeaderMissing,
    /// Token is absent or not a registered key.
    TokenUnauthorized,
    /// Key is valid but not scoped to the presented tenant.
    TenantUnauthorized { allowed: &'a TenantSet },
    Authorized {
        tenant: &'a str,
        allowed: &'a TenantSet,
    },
}

impl Verdict<'_> {
    /// Short stable label for logs.
    pub fn outcome(&self) -> &'static str {
        match self {
            Verdict::ServiceMisconfigured => "misconfigured",
            Verdict::TenantHeaderMissing => "tenant_missing",
            Verdict::TokenUnauthorized => "unauthorized",
            Verdict::TenantUnauthorized { .. } => "forbidden",
            Verdict::Authorized { .. } => "authorized",
        }
    }

    pub fn is_authorized(&self) -> bool {
        matches!(self, Verdict::Authorized { .. })
    }
}

/// Strip one leading `"Bearer "` (case-sensitive) and surrounding whitespace.
/// A value without the prefix is used as-is.
pub fn extract_token(raw: &str) -> &str {
    raw.strip_prefix(BEARER_PREFIX).unwrap_or(raw).trim()
}

pub fn authorize<'a>(
    registry: &'a Registry,
    presented_token: Option<&'a str>,
    presented_tenant: Option<&'a str>,
) -> Verdict<'a> {
    if registry.is_empty() {
        return Verdict::ServiceMisconfigured;
    }

    let tenant = match presented_tenant.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => return Verdict::TenantHeaderMissing,
    };

    let allowed = match presented_token.map(extract_token).and_then(|t| registry.get(t)) {
        Some(set) => set,
        None => return Verdict::TokenUnauthorized,
    };

    if !allowed.contains(tenant) {
        return Verdict::TenantUnauthorized { allowed };
    }

    Verdict::Authorized { tenant, allowed }
}
