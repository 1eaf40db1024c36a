use std::{fmt, path::Path, str::FromStr};

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::error::{DisplayError, Result};

pub const CONFIG_ENV_VAR: &str = "ALARM_DISPLAY_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub timezone: TimeZoneSetting,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| DisplayError::Config(format!("Failed to read config: {}", e)))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| DisplayError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Resolve configuration for a named site.
    ///
    /// Order: `ALARM_DISPLAY_CONFIG`, then `config/<name>.toml`, then defaults.
    pub fn load_with_fallback(name: &str) -> Self {
        Self::resolve(name, Path::new("config"))
    }

    fn resolve(name: &str, config_dir: &Path) -> Self {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            match Self::load(&path) {
                Ok(config) => {
                    tracing::info!("Loaded configuration from {}", path);
                    return config;
                }
                Err(e) => tracing::warn!("Ignoring {}={}: {}", CONFIG_ENV_VAR, path, e),
            }
        }

        let site_path = config_dir.join(format!("{}.toml", name));
        if site_path.exists() {
            match Self::load(&site_path) {
                Ok(config) => {
                    tracing::info!("Loaded configuration from {}", site_path.display());
                    return config;
                }
                Err(e) => tracing::warn!("Ignoring {}: {}", site_path.display(), e),
            }
        }

        tracing::info!("No configuration file for '{}', using defaults", name);
        Self::default()
    }

    pub fn messages(&self) -> Messages {
        self.display.language.messages()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                bind: "0.0.0.0:8091".to_string(),
            },
            display: DisplayConfig::default(),
        }
    }
}

/// Language of the fixed texts in the V2 widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    pub fn messages(&self) -> Messages {
        match self {
            Language::En => Messages {
                device_unavailable: "Device is off or unavailable",
                no_events: "No events",
            },
            Language::Ru => Messages {
                device_unavailable: "Устройство выключено или не доступно",
                no_events: "Нет событий",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub device_unavailable: &'static str,
    pub no_events: &'static str,
}

impl Default for Messages {
    fn default() -> Self {
        Language::default().messages()
    }
}

/// Zone used to turn event timestamps into calendar time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeZoneSetting {
    /// Host's local zone.
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl FromStr for TimeZoneSetting {
    type Err = DisplayError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "local" => return Ok(TimeZoneSetting::Local),
            "utc" | "z" => return Ok(TimeZoneSetting::Utc),
            _ => {}
        }

        parse_offset(trimmed)
            .map(TimeZoneSetting::Fixed)
            .ok_or_else(|| DisplayError::Config(format!("Invalid timezone '{}'", s)))
    }
}

impl TryFrom<String> for TimeZoneSetting {
    type Error = DisplayError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TimeZoneSetting> for String {
    fn from(value: TimeZoneSetting) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TimeZoneSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeZoneSetting::Local => f.write_str("local"),
            TimeZoneSetting::Utc => f.write_str("utc"),
            TimeZoneSetting::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

// Accepts "+03:00", "-0530" and "+3".
fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };

    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit() || b == b':') {
        return None;
    }

    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h, m),
        None if rest.len() == 4 => rest.split_at(2),
        None => (rest, "0"),
    };

    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config = Config::from_toml(
            r#"
            [server]
            bind = "127.0.0.1:9000"

            [display]
            language = "ru"
            timezone = "+03:00"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.bind, "127.0.0.1:9000");
        assert_eq!(config.display.language, Language::Ru);
        assert_eq!(
            config.display.timezone,
            TimeZoneSetting::Fixed(FixedOffset::east_opt(3 * 3600).unwrap())
        );
        assert_eq!(config.messages().no_events, "Нет событий");
    }

    #[test]
    fn display_section_is_optional() {
        let config = Config::from_toml("[server]\nbind = \"0.0.0.0:1\"\n").unwrap();
        assert_eq!(config.display.language, Language::En);
        assert_eq!(config.display.timezone, TimeZoneSetting::Local);
    }

    #[test]
    fn rejects_bad_timezone() {
        let err = Config::from_toml("[server]\nbind = \"x\"\n[display]\ntimezone = \"Mars\"\n")
            .unwrap_err();
        assert!(matches!(err, DisplayError::Config(_)));
    }

    #[test]
    fn offset_forms() {
        assert_eq!("UTC".parse::<TimeZoneSetting>().unwrap(), TimeZoneSetting::Utc);
        assert_eq!(
            "-0530".parse::<TimeZoneSetting>().unwrap(),
            TimeZoneSetting::Fixed(FixedOffset::west_opt(5 * 3600 + 30 * 60).unwrap())
        );
        assert_eq!(
            "+3".parse::<TimeZoneSetting>().unwrap(),
            TimeZoneSetting::Fixed(FixedOffset::east_opt(3 * 3600).unwrap())
        );
        assert!("+25:00".parse::<TimeZoneSetting>().is_err());
        assert!("".parse::<TimeZoneSetting>().is_err());
    }

    #[test]
    fn malformed_offsets_are_rejected() {
        for raw in ["+1é1", "+é", "+-5", "--5", "-+03:00", "+", "+:30", "+03:-1"] {
            assert!(
                raw.parse::<TimeZoneSetting>().is_err(),
                "{:?} should not parse",
                raw
            );
        }
    }

    // Single test: the branches share the process-wide env var.
    #[test]
    fn fallback_order() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[server]\nbind = \"x\"\n[display]\ntimezone = \"+1é1\"\n").unwrap();
        let env_file = dir.path().join("env.toml");
        std::fs::write(&env_file, "[server]\nbind = \"127.0.0.1:7001\"\n").unwrap();
        let site_dir = dir.path().join("config");
        std::fs::create_dir(&site_dir).unwrap();

        // bad env file, no site file
        std::env::set_var(CONFIG_ENV_VAR, &bad);
        let config = Config::resolve("panel", &site_dir);
        assert_eq!(config.server.bind, Config::default().server.bind);
        assert_eq!(config.display.timezone, TimeZoneSetting::Local);

        // bad env file falls through to the site file
        std::fs::write(site_dir.join("panel.toml"), "[server]\nbind = \"127.0.0.1:7000\"\n")
            .unwrap();
        assert_eq!(Config::resolve("panel", &site_dir).server.bind, "127.0.0.1:7000");

        // env file wins over the site file
        std::env::set_var(CONFIG_ENV_VAR, &env_file);
        assert_eq!(Config::resolve("panel", &site_dir).server.bind, "127.0.0.1:7001");

        std::env::remove_var(CONFIG_ENV_VAR);
        assert_eq!(Config::resolve("panel", &site_dir).server.bind, "127.0.0.1:7000");

        // unparsable site file
        std::fs::write(site_dir.join("panel.toml"), "[server\n").unwrap();
        assert_eq!(
            Config::resolve("panel", &site_dir).server.bind,
            Config::default().server.bind
        );
    }

    #[test]
    fn missing_file_is_a_config_error() {
        assert!(matches!(
            Config::load("/nonexistent/alarm_display.toml"),
            Err(DisplayError::Config(_))
        ));
    }
}
