use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

const DEFAULT_CACHE_CAPACITY: usize = 512;
const DEFAULT_CACHE_TTL_SECS: u64 = 3600;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheBackend {
    Memory,
    Redis,
    None,
}

impl FromStr for CacheBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(CacheBackend::Memory),
            "redis" => Ok(CacheBackend::Redis),
            "none" | "off" => Ok(CacheBackend::None),
            other => bail!("Unknown CACHE_BACKEND '{other}' (expected memory, redis or none)"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub cache_backend: CacheBackend,
    /// Required when `cache_backend` is `Redis`.
    pub redis_url: Option<String>,
    pub cache_capacity: usize,
    pub cache_ttl_secs: u64,
    /// Fixed seed for skill-gap sampling; unset draws from OS entropy.
    pub skill_gap_seed: Option<u64>,
    /// TOML file replacing the built-in analysis tables.
    pub analysis_tables_path: Option<PathBuf>,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            cache_backend: CacheBackend::Memory,
            redis_url: None,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            skill_gap_seed: None,
            analysis_tables_path: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            port: parse_or(var("PORT"), "PORT", defaults.port)?,
            rust_log: var("RUST_LOG").unwrap_or(defaults.rust_log),
            cache_backend: parse_or(var("CACHE_BACKEND"), "CACHE_BACKEND", defaults.cache_backend)?,
            redis_url: var("REDIS_URL"),
            cache_capacity: parse_or(var("CACHE_CAPACITY"), "CACHE_CAPACITY", defaults.cache_capacity)?,
            cache_ttl_secs: parse_or(var("CACHE_TTL_SECS"), "CACHE_TTL_SECS", defaults.cache_ttl_secs)?,
            skill_gap_seed: var("SKILL_GAP_SEED")
                .map(|v| parse_var::<u64>(&v, "SKILL_GAP_SEED"))
                .transpose()?,
            analysis_tables_path: var("ANALYSIS_TABLES_PATH").map(PathBuf::from),
            max_upload_bytes: parse_or(
                var("MAX_UPLOAD_BYTES"),
                "MAX_UPLOAD_BYTES",
                defaults.max_upload_bytes,
            )?,
        })
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(v) => parse_var(&v, key),
        None => Ok(default),
    }
}

fn parse_var<T>(value: &str, key: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("Environment variable '{key}' has an invalid value '{value}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.cache_backend, CacheBackend::Memory);
        assert_eq!(config.cache_capacity, 512);
        assert_eq!(config.cache_ttl_secs, 3600);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert!(config.skill_gap_seed.is_none());
        assert!(config.analysis_tables_path.is_none());
    }

    #[test]
    fn test_values_are_parsed() {
        let config = config_from(&[
            ("PORT", "9000"),
            ("CACHE_BACKEND", "Redis"),
            ("REDIS_URL", "redis://cache:6379"),
            ("CACHE_CAPACITY", "0"),
            ("SKILL_GAP_SEED", "42"),
            ("ANALYSIS_TABLES_PATH", "/etc/resume/tables.toml"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.cache_backend, CacheBackend::Redis);
        assert_eq!(config.redis_url.as_deref(), Some("redis://cache:6379"));
        assert_eq!(config.cache_capacity, 0);
        assert_eq!(config.skill_gap_seed, Some(42));
        assert_eq!(
            config.analysis_tables_path,
            Some(PathBuf::from("/etc/resume/tables.toml"))
        );
    }

    #[test]
    fn test_invalid_numbers_fail_with_context() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(format!("{err:#}").contains("PORT"));
        assert!(config_from(&[("CACHE_TTL_SECS", "-1")]).is_err());
        assert!(config_from(&[("CACHE_BACKEND", "memcached")]).is_err());
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let config = config_from(&[("SKILL_GAP_SEED", "  "), ("PORT", "")]).unwrap();
        assert!(config.skill_gap_seed.is_none());
        assert_eq!(config.port, 8080);
    }
}
