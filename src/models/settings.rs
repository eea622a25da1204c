use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "VND")]
    Vnd,
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Vnd => "VND",
            Currency::Usd => "USD",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "VND" => Some(Currency::Vnd),
            "USD" => Some(Currency::Usd),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Vi,
    En,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::Vi => Language::En,
            Language::En => Language::Vi,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Vi => "vi",
            Language::En => "en",
        }
    }
}

/// User settings, persisted as the `settings` record.
///
/// Each field falls back to its default on its own, so a partial record
/// written by an older version still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_rounding")]
    pub rounding_minutes: i64,
    #[serde(default)]
    pub service_fee: f64,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub language: Language,
}

fn default_rounding() -> i64 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rounding_minutes: default_rounding(),
            service_fee: 0.0,
            currency: Currency::default(),
            theme: Theme::default(),
            language: Language::default(),
        }
    }
}

impl Settings {
    /// Names accepted by `settings set`.
    pub const KEYS: [&'static str; 5] = [
        "roundingMinutes",
        "serviceFee",
        "currency",
        "theme",
        "language",
    ];

    /// Update one setting from its textual form.
    ///
    /// Only the type is checked: a negative fee or rounding interval is
    /// accepted and simply yields odd costs. A fee must be finite, since
    /// JSON cannot store NaN or infinity.
    pub fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let invalid = || AppError::InvalidSetting {
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "roundingMinutes" | "rounding" => {
                self.rounding_minutes = value.trim().parse().map_err(|_| invalid())?;
            }
            "serviceFee" | "fee" => {
                let fee: f64 = value.trim().parse().map_err(|_| invalid())?;
                if !fee.is_finite() {
                    return Err(invalid());
                }
                self.service_fee = fee;
            }
            "currency" => {
                self.currency = Currency::from_code(value.trim()).ok_or_else(invalid)?;
            }
            "theme" => {
                self.theme = match value.trim().to_lowercase().as_str() {
                    "light" => Theme::Light,
                    "dark" => Theme::Dark,
                    _ => return Err(invalid()),
                };
            }
            "language" | "lang" => {
                self.language = match value.trim().to_lowercase().as_str() {
                    "vi" => Language::Vi,
                    "en" => Language::En,
                    _ => return Err(invalid()),
                };
            }
            other => return Err(AppError::UnknownSetting(other.to_string())),
        }

        Ok(())
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_record_fills_defaults() {
        let s: Settings = serde_json::from_str(r#"{"serviceFee": 5}"#).unwrap();
        assert_eq!(s.service_fee, 5.0);
        assert_eq!(s.rounding_minutes, 1);
        assert_eq!(s.currency, Currency::Vnd);
        assert_eq!(s.theme, Theme::Light);
        assert_eq!(s.language, Language::Vi);
    }

    #[test]
    fn record_uses_camel_case_field_names() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["roundingMinutes"], 1);
        assert_eq!(json["currency"], "VND");
        assert_eq!(json["theme"], "light");
        assert_eq!(json["language"], "vi");
    }

    #[test]
    fn set_parses_each_key() {
        let mut s = Settings::default();
        s.set("roundingMinutes", "15").unwrap();
        s.set("serviceFee", "10").unwrap();
        s.set("currency", "usd").unwrap();
        s.set("theme", "dark").unwrap();
        s.set("language", "en").unwrap();

        assert_eq!(s.rounding_minutes, 15);
        assert_eq!(s.service_fee, 10.0);
        assert_eq!(s.currency, Currency::Usd);
        assert_eq!(s.theme, Theme::Dark);
        assert_eq!(s.language, Language::En);
    }

    #[test]
    fn set_rejects_garbage() {
        let mut s = Settings::default();
        assert!(matches!(
            s.set("roundingMinutes", "abc"),
            Err(AppError::InvalidSetting { .. })
        ));
        assert!(matches!(
            s.set("volume", "3"),
            Err(AppError::UnknownSetting(_))
        ));
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn set_rejects_non_finite_fee() {
        let mut s = Settings::default();
        s.set("serviceFee", "5").unwrap();

        for bad in ["NaN", "inf", "-infinity"] {
            assert!(matches!(
                s.set("serviceFee", bad),
                Err(AppError::InvalidSetting { .. })
            ));
        }
        assert_eq!(s.service_fee, 5.0);
    }

    #[test]
    fn toggles_flip_back_and_forth() {
        let mut s = Settings::default();
        assert_eq!(s.toggle_theme(), Theme::Dark);
        assert_eq!(s.toggle_theme(), Theme::Light);
        assert_eq!(s.toggle_language(), Language::En);
        assert_eq!(s.toggle_language(), Language::Vi);
    }
}
