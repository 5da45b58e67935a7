//! Runtime settings, read from the environment with defaults.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

pub const TRACKING_TICK_MS: &str = "CHECKOUT_TRACKING_TICK_MS";
pub const ACTOR_BUFFER: &str = "CHECKOUT_ACTOR_BUFFER";
pub const HOME_ROUTE: &str = "CHECKOUT_HOME_ROUTE";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutConfig {
    /// Interval between simulated tracking advances.
    pub tracking_tick: Duration,
    /// Request channel capacity of each actor.
    pub actor_buffer: usize,
    /// Where "continue shopping" and the empty-cart redirect lead.
    pub home_route: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            tracking_tick: Duration::from_millis(3000),
            actor_buffer: 32,
            home_route: "/".to_string(),
        }
    }
}

impl CheckoutConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source. Unset keys fall back to
    /// the defaults; set but unparsable keys are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let tick_ms: u64 = try_load(&lookup, TRACKING_TICK_MS, defaults.tracking_tick.as_millis())?;
        if tick_ms == 0 {
            return Err(ConfigError::Invalid {
                key: TRACKING_TICK_MS,
                value: "0".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        let actor_buffer: usize = try_load(&lookup, ACTOR_BUFFER, defaults.actor_buffer)?;
        if actor_buffer == 0 {
            return Err(ConfigError::Invalid {
                key: ACTOR_BUFFER,
                value: "0".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        let home_route: String = try_load(&lookup, HOME_ROUTE, defaults.home_route)?;

        Ok(Self {
            tracking_tick: Duration::from_millis(tick_ms),
            actor_buffer,
            home_route,
        })
    }
}

fn try_load<T, D>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: D,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    D: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    raw.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_unset_keys_use_defaults() {
        let config = CheckoutConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CheckoutConfig::default());
        assert_eq!(config.tracking_tick, Duration::from_millis(3000));
        assert_eq!(config.home_route, "/");
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = CheckoutConfig::from_lookup(lookup(&[
            (TRACKING_TICK_MS, "250"),
            (ACTOR_BUFFER, " 8 "),
            (HOME_ROUTE, "/market"),
        ]))
        .unwrap();
        assert_eq!(config.tracking_tick, Duration::from_millis(250));
        assert_eq!(config.actor_buffer, 8);
        assert_eq!(config.home_route, "/market");
    }

    #[test]
    fn test_bad_values_are_rejected() {
        let err = CheckoutConfig::from_lookup(lookup(&[(TRACKING_TICK_MS, "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: TRACKING_TICK_MS, .. }));

        let err = CheckoutConfig::from_lookup(lookup(&[(ACTOR_BUFFER, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: ACTOR_BUFFER, .. }));
    }
}
