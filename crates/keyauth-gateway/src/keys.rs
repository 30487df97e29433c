//! Key registry bootstrap.
//!
//! The raw registry string is read from the process environment first. When
//! the variable is unset there, the explicit `--env-file` is consulted, then
//! the `.env` discovered from the working directory. Files are read without
//! touching the process environment.

use std::path::Path;

use keyauth_core::error::{KeyAuthError, Result};
use keyauth_core::{parse_with_report, Registry};

use crate::config::KeysSection;

/// Where the raw key string came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    Env,
    EnvFile,
    Unset,
}

impl KeySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeySource::Env => "env",
            KeySource::EnvFile => "env-file",
            KeySource::Unset => "unset",
        }
    }
}

/// Look up `var` in a dotenv file. A missing default `.env` is not an error;
/// a missing explicit file is.
pub fn lookup_env_file(path: Option<&Path>, var: &str) -> Result<Option<String>> {
    let iter = match path {
        Some(p) => dotenvy::from_path_iter(p).map_err(|e| {
            KeyAuthError::InvalidConfig(format!("env file {} unreadable: {e}", p.display()))
        })?,
        None => match dotenvy::dotenv_iter() {
            Ok(iter) => iter,
            Err(e) if e.not_found() => return Ok(None),
            Err(e) => {
                return Err(KeyAuthError::InvalidConfig(format!("invalid .env file: {e}")))
            }
        },
    };

    let mut found = None;
    for item in iter {
        let (k, v) =
            item.map_err(|e| KeyAuthError::InvalidConfig(format!("invalid env file: {e}")))?;
        if k == var {
            found = Some(v);
        }
    }
    Ok(found)
}

/// Resolve the raw registry string.
///
/// Lookup order: process environment, then the explicit env file, then the
/// default `.env`.
pub fn resolve_raw_keys(
    var: &str,
    from_env: Option<String>,
    env_file: Option<&Path>,
) -> Result<(String, KeySource)> {
    resolve_with_default(var, from_env, env_file, || lookup_env_file(None, var))
}

fn resolve_with_default<F>(
    var: &str,
    from_env: Option<String>,
    env_file: Option<&Path>,
    default_env: F,
) -> Result<(String, KeySource)>
where
    F: FnOnce() -> Result<Option<String>>,
{
    if let Some(v) = from_env {
        return Ok((v, KeySource::Env));
    }
    if let Some(path) = env_file {
        if let Some(v) = lookup_env_file(Some(path), var)? {
            return Ok((v, KeySource::EnvFile));
        }
    }
    match default_env()? {
        Some(v) => Ok((v, KeySource::EnvFile)),
        None => Ok((String::new(), KeySource::Unset)),
    }
}

/// Build the registry from raw text and apply the startup policy.
pub fn build_registry(raw: &str, source: &KeySource, keys: &KeysSection) -> Result<Registry> {
    let report = parse_with_report(raw);

    if report.overwritten > 0 {
        tracing::warn!(
            var = %keys.env_var,
            overwritten = report.overwritten,
            "duplicate keys in registry; later entries replaced earlier ones"
        );
    }

    if report.registry.is_empty() {
        tracing::warn!(
            var = %keys.env_var,
            source = source.as_str(),
            rejected = report.rejected.len(),
            "no valid keys configured; /validate will answer 500"
        );
        if keys.require_keys {
            return Err(KeyAuthError::Misconfigured(format!(
                "no valid keys found; set {} (example: {}='key1:tenant1,tenant2;key2:tenant3')",
                keys.env_var, keys.env_var
            )));
        }
    } else {
        tracing::info!(
            source = source.as_str(),
            key_count = report.registry.len(),
            rejected = report.rejected.len(),
            "loaded key registry"
        );
    }

    Ok(report.registry)
}

/// Read and build the registry for the given key settings.
pub fn load_registry(keys: &KeysSection, env_file: Option<&Path>) -> Result<Registry> {
    let from_env = std::env::var(&keys.env_var).ok();
    let (raw, source) = resolve_raw_keys(&keys.env_var, from_env, env_file)?;
    build_registry(&raw, &source, keys)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_env_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir()
            .join(format!("keyauth-{}-{name}.env", std::process::id()));
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    fn no_default() -> Result<Option<String>> {
        Ok(None)
    }

    #[test]
    fn process_env_wins_over_file() {
        let path = temp_env_file("wins", "VALID_KEYS=file:t1\n");
        let (raw, src) =
            resolve_raw_keys("VALID_KEYS", Some("env:t1".into()), Some(&path)).unwrap();
        assert_eq!(raw, "env:t1");
        assert_eq!(src, KeySource::Env);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn env_file_is_used_when_env_unset() {
        let path = temp_env_file("fallback", "OTHER=x\nVALID_KEYS='k1:t1,t2;k2:t3'\n");
        let (raw, src) =
            resolve_with_default("VALID_KEYS", None, Some(&path), no_default).unwrap();
        assert_eq!(raw, "k1:t1,t2;k2:t3");
        assert_eq!(src, KeySource::EnvFile);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn env_file_without_var_is_unset() {
        let path = temp_env_file("absent", "OTHER=x\n");
        let (raw, src) =
            resolve_with_default("VALID_KEYS", None, Some(&path), no_default).unwrap();
        assert!(raw.is_empty());
        assert_eq!(src, KeySource::Unset);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn default_env_consulted_when_explicit_file_lacks_var() {
        let explicit = temp_env_file("explicit-other", "UNRELATED=x\n");
        let default = temp_env_file("default-keys", "VALID_KEYS=k1:t1\n");
        let (raw, src) = resolve_with_default("VALID_KEYS", None, Some(&explicit), || {
            lookup_env_file(Some(&default), "VALID_KEYS")
        })
        .unwrap();
        assert_eq!(raw, "k1:t1");
        assert_eq!(src, KeySource::EnvFile);
        let _ = std::fs::remove_file(explicit);
        let _ = std::fs::remove_file(default);
    }

    #[test]
    fn explicit_file_wins_over_default_env() {
        let explicit = temp_env_file("explicit-keys", "VALID_KEYS=k2:t2\n");
        let default = temp_env_file("default-shadowed", "VALID_KEYS=k1:t1\n");
        let (raw, _) = resolve_with_default("VALID_KEYS", None, Some(&explicit), || {
            lookup_env_file(Some(&default), "VALID_KEYS")
        })
        .unwrap();
        assert_eq!(raw, "k2:t2");
        let _ = std::fs::remove_file(explicit);
        let _ = std::fs::remove_file(default);
    }

    #[test]
    fn missing_explicit_env_file_is_an_error() {
        let path = std::env::temp_dir().join("keyauth-definitely-missing.env");
        let err = resolve_raw_keys("VALID_KEYS", None, Some(&path)).expect_err("must fail");
        assert_eq!(err.code().as_str(), "INVALID_CONFIG");
    }

    #[test]
    fn empty_registry_allowed_by_default() {
        let reg = build_registry("", &KeySource::Unset, &KeysSection::default()).unwrap();
        assert!(reg.is_empty());
    }

    #[test]
    fn empty_registry_rejected_when_required() {
        let keys = KeysSection {
            require_keys: true,
            ..KeysSection::default()
        };
        let err = build_registry("garbage;also-garbage", &KeySource::Env, &keys)
            .expect_err("must fail");
        assert_eq!(err.code().as_str(), "MISCONFIGURED");

        let reg = build_registry("k1:t1", &KeySource::Env, &keys).unwrap();
        assert_eq!(reg.len(), 1);
    }
}
