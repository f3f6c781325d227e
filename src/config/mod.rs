use std::env;
use std::time::Duration;

use crate::store::StoreLimits;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub is_dev: bool,
    /// Upper bound on stored embeds. `None` keeps every embed for the
    /// lifetime of the process.
    pub max_embeds: Option<usize>,
    /// How long an embed stays resolvable. `None` means forever.
    pub embed_ttl: Option<Duration>,
}

impl Config {
    /// Reads the process environment only; `main` loads `.env` beforehand.
    pub fn from_env() -> Self {
        Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),
            is_dev: env::var("APP_ENV").as_deref() != Ok("production"),
            max_embeds: positive_var("MAX_EMBEDS").and_then(|n| usize::try_from(n).ok()),
            embed_ttl: positive_var("EMBED_TTL_SECS").map(Duration::from_secs),
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn store_limits(&self) -> StoreLimits {
        StoreLimits {
            max_embeds: self.max_embeds,
            ttl: self.embed_ttl,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_host: "0.0.0.0".to_string(),
            server_port: 5000,
            is_dev: true,
            max_embeds: None,
            embed_ttl: None,
        }
    }
}

/// Zero and garbage both read as "not set".
fn positive_var(key: &str) -> Option<u64> {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ENV_KEYS: &[&str] = &[
        "SERVER_HOST",
        "PORT",
        "APP_ENV",
        "MAX_EMBEDS",
        "EMBED_TTL_SECS",
    ];

    fn with_env_vars<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let saved: Vec<_> = ENV_KEYS.iter().map(|k| (*k, env::var(k).ok())).collect();

        for k in ENV_KEYS {
            env::remove_var(k);
        }
        for (k, v) in vars {
            env::set_var(k, v);
        }

        f();

        for (k, v) in &saved {
            match v {
                Some(val) => env::set_var(k, val),
                None => env::remove_var(k),
            }
        }
    }

    #[test]
    #[serial]
    fn defaults_when_unset() {
        with_env_vars(&[], || {
            let config = Config::from_env();
            assert_eq!(config.server_host, "0.0.0.0");
            assert_eq!(config.server_port, 5000);
            assert!(config.is_dev);
            assert!(config.max_embeds.is_none());
            assert!(config.embed_ttl.is_none());
        });
    }

    #[test]
    #[serial]
    fn reads_port_and_host() {
        with_env_vars(&[("PORT", "8123"), ("SERVER_HOST", "127.0.0.1")], || {
            let config = Config::from_env();
            assert_eq!(config.server_addr(), "127.0.0.1:8123");
        });
    }

    #[test]
    #[serial]
    fn bad_port_falls_back_to_default() {
        with_env_vars(&[("PORT", "not-a-port")], || {
            assert_eq!(Config::from_env().server_port, 5000);
        });
    }

    #[test]
    #[serial]
    fn production_mode() {
        with_env_vars(&[("APP_ENV", "production")], || {
            assert!(!Config::from_env().is_dev);
        });
    }

    #[test]
    #[serial]
    fn store_limits_parsed() {
        with_env_vars(&[("MAX_EMBEDS", "100"), ("EMBED_TTL_SECS", "3600")], || {
            let limits = Config::from_env().store_limits();
            assert_eq!(limits.max_embeds, Some(100));
            assert_eq!(limits.ttl, Some(Duration::from_secs(3600)));
        });
    }

    #[test]
    #[serial]
    fn zero_or_invalid_limits_are_disabled() {
        with_env_vars(&[("MAX_EMBEDS", "0"), ("EMBED_TTL_SECS", "soon")], || {
            let limits = Config::from_env().store_limits();
            assert!(limits.max_embeds.is_none());
            assert!(limits.ttl.is_none());
        });
    }

    #[test]
    #[serial]
    fn max_embeds_out_of_range_is_not_truncated() {
        with_env_vars(&[("MAX_EMBEDS", "18446744073709551615")], || {
            let expected = usize::try_from(u64::MAX).ok();
            assert_eq!(Config::from_env().max_embeds, expected);
            assert_ne!(Config::from_env().max_embeds, Some(0));
        });
    }
}
