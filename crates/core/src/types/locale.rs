//! Display locale for merchant-facing text.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unsupported locale code.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported locale: {0} (expected \"en\" or \"ja\")")]
pub struct UnsupportedLocale(pub String);

/// Language used for labels and messages shown to the merchant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    /// BCP 47 language tag, used for the `lang` attribute of rendered pages.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ja => "ja",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Ok(Self::En),
            "ja" | "ja-jp" => Ok(Self::Ja),
            other => Err(UnsupportedLocale(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale() {
        assert_eq!("en".parse(), Ok(Locale::En));
        assert_eq!("JA".parse(), Ok(Locale::Ja));
        assert_eq!(" ja-JP ".parse(), Ok(Locale::Ja));
        assert_eq!(
            "fr".parse::<Locale>(),
            Err(UnsupportedLocale("fr".to_string()))
        );
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Locale::default(), Locale::En);
        assert_eq!(Locale::default().to_string(), "en");
    }
}
