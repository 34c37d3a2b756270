//! Display preferences
//!
//! Persisted as `{"theme": "...", "mode": "dark" | "light"}`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Dark,
    Light,
}

impl Mode {
    pub fn toggled(&self) -> Mode {
        match self {
            Mode::Dark => Mode::Light,
            Mode::Light => Mode::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Dark => "dark",
            Mode::Light => "light",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Mode::Dark),
            "light" => Ok(Mode::Light),
            _ => Err(format!("Unknown mode: {}", s)),
        }
    }
}

pub const DEFAULT_THEME: &str = "classic";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Identifier of the visual asset set
    pub theme: String,
    pub mode: Mode,
}

impl Preferences {
    pub fn new(theme: impl Into<String>, mode: Mode) -> Self {
        Self {
            theme: theme.into(),
            mode,
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self::new(DEFAULT_THEME, Mode::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse_and_toggle() {
        assert_eq!("dark".parse::<Mode>(), Ok(Mode::Dark));
        assert_eq!(" Light ".parse::<Mode>(), Ok(Mode::Light));
        assert!("sepia".parse::<Mode>().is_err());
        assert_eq!(Mode::Dark.toggled(), Mode::Light);
        assert_eq!(Mode::Light.toggled().to_string(), "dark");
    }

    #[test]
    fn test_record_shape() {
        let prefs = Preferences::new("ocean", Mode::Light);
        let json = serde_json::to_string(&prefs).unwrap();
        assert_eq!(json, r#"{"theme":"ocean","mode":"light"}"#);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"mode":"light"}"#).unwrap();
        assert_eq!(prefs.theme, DEFAULT_THEME);
        assert_eq!(prefs.mode, Mode::Light);

        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, Preferences::default());
    }
}
