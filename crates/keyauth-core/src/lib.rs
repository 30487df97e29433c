//! keyauth core: the key registry and the authorization decision engine.
//!
//! This crate turns the `VALID_KEYS` configuration string into an immutable
//! [`Registry`] and answers, for one presented token and tenant, whether the
//! request is authorized. It carries no transport or runtime dependencies so
//! the gateway and tests can drive it directly.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Parsing and authorization are total: malformed input degrades to fewer
//! usable keys or a negative [`Verdict`], never to a crash.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod authz;
pub mod error;
pub mod registry;

pub use authz::{authorize, extract_token, Verdict};
pub use error::{KeyAuthError, Result};
pub use registry::{parse, parse_with_report, MalformedEntry, ParseReport, Registry, TenantSet};
