// Scene configuration with environment overrides

use std::str::FromStr;

/// Errors produced while reading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

pub const ENV_WIDTH: &str = "FUNNEL_DROP_WIDTH";
pub const ENV_HEIGHT: &str = "FUNNEL_DROP_HEIGHT";
pub const ENV_GRAVITY: &str = "FUNNEL_DROP_GRAVITY";

/// Dimensions and simulation parameters of a scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Scene width in points
    pub width: i32,
    /// Scene height in points
    pub height: i32,
    /// Vertical acceleration in points/s² (negative pulls down)
    pub gravity: f32,
    /// Fixed physics timestep in seconds
    pub timestep: f32,
    /// Upper bound on physics steps run for a single `advance` call
    pub max_steps_per_tick: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 600,
            gravity: -980.0,
            timestep: 1.0 / 60.0,
            max_steps_per_tick: 5,
        }
    }
}

impl SceneConfig {
    /// Defaults overridden by `FUNNEL_DROP_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each known key
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            width: parse_or(&lookup, ENV_WIDTH, defaults.width)?,
            height: parse_or(&lookup, ENV_HEIGHT, defaults.height)?,
            gravity: parse_finite_or(&lookup, ENV_GRAVITY, defaults.gravity)?,
            ..defaults
        })
    }
}

/// Parse `key` from `lookup`, falling back to `default` when it is unset
pub fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&'static str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

/// Like [`parse_or`], but also rejects NaN and infinities
pub fn parse_finite_or<F>(lookup: &F, key: &'static str, default: f32) -> Result<f32, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
{
    let value = parse_or(lookup, key, default)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = SceneConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SceneConfig::default());
    }

    #[test]
    fn test_overrides_applied() {
        let config =
            SceneConfig::from_lookup(lookup_from(&[(ENV_HEIGHT, "480"), (ENV_GRAVITY, " -500 ")]))
                .unwrap();
        assert_eq!(config.height, 480);
        assert_eq!(config.width, 400);
        assert_eq!(config.gravity, -500.0);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let err = SceneConfig::from_lookup(lookup_from(&[(ENV_WIDTH, "wide")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for FUNNEL_DROP_WIDTH: \"wide\"");
    }

    #[test]
    fn test_non_finite_gravity_rejected() {
        for value in ["NaN", "inf", "-infinity"] {
            let result = SceneConfig::from_lookup(lookup_from(&[(ENV_GRAVITY, value)]));
            assert!(
                matches!(result, Err(ConfigError::InvalidValue { key: ENV_GRAVITY, .. })),
                "{} accepted",
                value
            );
        }
    }
}
