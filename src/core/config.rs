use std::env;
use std::time::Duration;

use crate::core::theme::ThemeMode;

/// How long the "Copied" indicator stays visible when not configured.
pub const DEFAULT_COPY_CONFIRM_MS: u64 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Forced theme; `None` means follow the terminal preference.
    pub theme: Option<ThemeMode>,
    pub copy_confirm: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: None,
            copy_confirm: Duration::from_millis(DEFAULT_COPY_CONFIRM_MS),
        }
    }
}

impl Config {
    /// Theme to start with: the override if set, else the detected preference.
    pub fn initial_theme(&self) -> ThemeMode {
        self.theme.unwrap_or_else(ThemeMode::detect)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("UNISPACE_THEME must be light, dark or auto (got {0:?})")]
    InvalidTheme(String),
    #[error("UNISPACE_COPY_CONFIRM_MS must be a positive integer (got {0:?})")]
    InvalidDelay(String),
}

/// Load configuration from environment.
pub fn load() -> Result<Config, ConfigError> {
    from_lookup(|key| env::var(key).ok())
}

/// Build a config from an arbitrary variable source. Empty values count as unset.
pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let theme = match get("UNISPACE_THEME") {
        None => None,
        Some(v) if v.trim().eq_ignore_ascii_case("auto") => None,
        Some(v) => Some(
            v.parse::<ThemeMode>()
                .map_err(|_| ConfigError::InvalidTheme(v.clone()))?,
        ),
    };

    let copy_confirm = match get("UNISPACE_COPY_CONFIRM_MS") {
        None => Duration::from_millis(DEFAULT_COPY_CONFIRM_MS),
        Some(v) => match v.trim().parse::<u64>() {
            Ok(ms) if ms > 0 => Duration::from_millis(ms),
            _ => return Err(ConfigError::InvalidDelay(v)),
        },
    };

    Ok(Config {
        theme,
        copy_confirm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(load_from(&[]), Ok(Config::default()));
    }

    #[test]
    fn theme_override() {
        let c = load_from(&[("UNISPACE_THEME", "Light")]).expect("valid");
        assert_eq!(c.theme, Some(ThemeMode::Light));
        assert_eq!(c.initial_theme(), ThemeMode::Light);
    }

    #[test]
    fn theme_auto_and_empty_mean_detect() {
        assert_eq!(load_from(&[("UNISPACE_THEME", "auto")]).map(|c| c.theme), Ok(None));
        assert_eq!(load_from(&[("UNISPACE_THEME", " ")]).map(|c| c.theme), Ok(None));
    }

    #[test]
    fn theme_invalid() {
        assert_eq!(
            load_from(&[("UNISPACE_THEME", "sepia")]),
            Err(ConfigError::InvalidTheme("sepia".to_string()))
        );
    }

    #[test]
    fn delay_parsed() {
        let c = load_from(&[("UNISPACE_COPY_CONFIRM_MS", "1000")]).expect("valid");
        assert_eq!(c.copy_confirm, Duration::from_millis(1000));
    }

    #[test]
    fn delay_zero_or_garbage_rejected() {
        assert!(matches!(
            load_from(&[("UNISPACE_COPY_CONFIRM_MS", "0")]),
            Err(ConfigError::InvalidDelay(_))
        ));
        assert!(matches!(
            load_from(&[("UNISPACE_COPY_CONFIRM_MS", "soon")]),
            Err(ConfigError::InvalidDelay(_))
        ));
    }
}
