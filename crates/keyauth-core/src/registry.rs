//! Key registry and its `VALID_KEYS` parser.
//!
//! Grammar: `key:tenant1,tenant2;key2:tenant3`. Entries are separated by `;`,
//! a key is separated from its tenant list by the first `:`, and tenants are
//! separated by `,`. Whitespace around every piece is trimmed.
//!
//! Parsing is best effort: a malformed entry is skipped with a warning and the
//! rest of the string is still used.

use std::collections::{HashMap, HashSet};

use serde::ser::{Serialize, SerializeSeq, Serializer};
use thiserror::Error;

/// Non-empty set of tenants a key is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantSet(HashSet<String>);

impl TenantSet {
    /// Returns `None` when no non-empty tenant survives trimming.
    pub fn new<I, S>(tenants: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: HashSet<String> = tenants
            .into_iter()
            .map(|t| t.as_ref().trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if set.is_empty() {
            None
        } else {
            Some(Self(set))
        }
    }

    pub fn contains(&self, tenant: &str) -> bool {
        self.0.contains(tenant)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tenants in lexicographic order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self.0.iter().map(String::as_str).collect();
        v.sort_unstable();
        v
    }
}

// Serialized as a sorted list so responses are deterministic.
impl Serialize for TenantSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let sorted = self.sorted();
        let mut seq = serializer.serialize_seq(Some(sorted.len()))?;
        for t in sorted {
            seq.serialize_element(t)?;
        }
        seq.end()
    }
}

/// Immutable key -> tenant set mapping.
/// Built once at startup, then shared read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    keys: HashMap<String, TenantSet>,
}

impl Registry {
    pub fn parse(raw: &str) -> Self {
        parse(raw)
    }

    pub fn get(&self, key: &str) -> Option<&TenantSet> {
        self.keys.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// An empty registry means the service is misconfigured.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// A `VALID_KEYS` entry that was rejected during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedEntry {
    #[error("entry has no ':' separator: {entry:?}")]
    MissingSeparator { entry: String },
    #[error("entry has an empty key: {entry:?}")]
    EmptyKey { entry: String },
    #[error("key {key:?} has no tenants")]
    NoTenants { key: String },
}

/// Outcome of a parse, with diagnostics.
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    pub registry: Registry,
    pub rejected: Vec<MalformedEntry>,
    /// Entries that replaced an earlier entry for the same key.
    pub overwritten: usize,
}

/// Parse `VALID_KEYS` into a registry, dropping malformed entries.
pub fn parse(raw: &str) -> Registry {
    parse_with_report(raw).registry
}

pub fn parse_with_report(raw: &str) -> ParseReport {
    let mut report = ParseReport::default();

    for entry in raw.split(';').map(str::trim) {
        if entry.is_empty() {
            continue;
        }
        match parse_entry(entry) {
            Ok((key, tenants)) => {
                // last write wins on duplicate keys
                if report.registry.keys.insert(key, tenants).is_some() {
                    report.overwritten += 1;
                }
            }
            Err(bad) => {
                tracing::warn!(error = %bad, "skipping malformed VALID_KEYS entry");
                report.rejected.push(bad);
            }
        }
    }

    report
}

fn parse_entry(entry: &str) -> std::result::Result<(String, TenantSet), MalformedEntry> {
    let (key, tenants) = entry.split_once(':').ok_or_else(|| MalformedEntry::MissingSeparator {
        entry: entry.to_string(),
    })?;

    let key = key.trim();
    if key.is_empty() {
        return Err(MalformedEntry::EmptyKey {
            entry: entry.to_string(),
        });
    }

    let tenants = TenantSet::new(tenants.split(',')).ok_or_else(|| MalformedEntry::NoTenants {
        key: key.to_string(),
    })?;

    Ok((key.to_string(), tenants))
}
