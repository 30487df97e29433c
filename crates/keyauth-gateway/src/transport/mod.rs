//! HTTP transport for validation.
//!
//! Extracts the two request values the engine needs, renders verdicts as
//! HTTP responses, and owns header logging (credentials redacted).

pub mod headers;
pub mod validate;
