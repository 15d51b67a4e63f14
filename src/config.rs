use anyhow::Context;
use axum::http::HeaderValue;
use std::env;

const DEFAULT_PLAN_TTL_DAYS: i64 = 7;
const DEFAULT_PURGE_SCHEDULE: &str = "0 */15 * * * *";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: String,
    pub plan_ttl_days: i64,
    pub purge_schedule: String,
    pub cors_allow_origin: Option<HeaderValue>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = lookup("PORT").context("PORT must be set")?;

        let plan_ttl_days = match lookup("PLAN_TTL_DAYS") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|days| *days > 0)
                .with_context(|| format!("PLAN_TTL_DAYS must be a positive integer, got {raw:?}"))?,
            None => DEFAULT_PLAN_TTL_DAYS,
        };

        let purge_schedule =
            lookup("PURGE_SCHEDULE").unwrap_or_else(|| DEFAULT_PURGE_SCHEDULE.to_string());

        let cors_allow_origin = match lookup("CORS_ALLOW_ORIGIN").filter(|o| !o.is_empty()) {
            Some(raw) => Some(HeaderValue::from_str(&raw).with_context(|| {
                format!("CORS_ALLOW_ORIGIN must be a valid header value, got {raw:?}")
            })?),
            None => None,
        };

        Ok(Self {
            port,
            plan_ttl_days,
            purge_schedule,
            cors_allow_origin,
        })
    }

    pub fn plan_ttl(&self) -> chrono::Duration {
        chrono::Duration::days(self.plan_ttl_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "3000")])).unwrap();

        assert_eq!(config.port, "3000");
        assert_eq!(config.plan_ttl_days, 7);
        assert_eq!(config.plan_ttl(), chrono::Duration::days(7));
        assert_eq!(config.purge_schedule, "0 */15 * * * *");
        assert_eq!(config.cors_allow_origin, None);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("PLAN_TTL_DAYS", "14"),
            ("PURGE_SCHEDULE", "0 0 * * * *"),
            ("CORS_ALLOW_ORIGIN", "https://routinelab.app"),
        ]))
        .unwrap();

        assert_eq!(config.plan_ttl_days, 14);
        assert_eq!(config.purge_schedule, "0 0 * * * *");
        assert_eq!(
            config.cors_allow_origin,
            Some(HeaderValue::from_static("https://routinelab.app"))
        );
    }

    #[test]
    fn test_missing_port_fails() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_invalid_cors_origin_fails() {
        let err = Config::from_lookup(lookup_from(&[
            ("PORT", "3000"),
            ("CORS_ALLOW_ORIGIN", "https://bad\norigin"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("CORS_ALLOW_ORIGIN"));
    }

    #[test]
    fn test_empty_cors_origin_is_unset() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "3000"),
            ("CORS_ALLOW_ORIGIN", ""),
        ]))
        .unwrap();
        assert_eq!(config.cors_allow_origin, None);
    }

    #[test]
    fn test_invalid_ttl_fails() {
        for raw in ["0", "-3", "week"] {
            let err = Config::from_lookup(lookup_from(&[("PORT", "3000"), ("PLAN_TTL_DAYS", raw)]))
                .unwrap_err();
            assert!(err.to_string().contains("PLAN_TTL_DAYS"));
        }
    }
}
