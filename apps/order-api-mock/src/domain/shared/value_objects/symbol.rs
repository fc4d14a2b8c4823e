//! Symbol value object for the tradeable currency pairs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::shared::DomainError;

/// A currency pair accepted by the order API.
///
/// Matching is exact: `"eurusd"` is not a valid symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// Euro / US dollar.
    #[serde(rename = "EURUSD")]
    EurUsd,
    /// US dollar / Euro.
    #[serde(rename = "USDEUR")]
    UsdEur,
    /// Japanese yen / US dollar.
    #[serde(rename = "JPYUSD")]
    JpyUsd,
}

impl Symbol {
    /// Every symbol the API accepts.
    pub const ALL: [Self; 3] = [Self::EurUsd, Self::UsdEur, Self::JpyUsd];

    /// Get the wire name of the symbol.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EurUsd => "EURUSD",
            Self::UsdEur => "USDEUR",
            Self::JpyUsd => "JPYUSD",
        }
    }

    /// Look up a symbol by its exact wire name.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Symbol {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::invalid("symbol", format!("unknown symbol '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_parse_known() {
        assert_eq!(Symbol::parse("EURUSD"), Some(Symbol::EurUsd));
        assert_eq!(Symbol::parse("USDEUR"), Some(Symbol::UsdEur));
        assert_eq!(Symbol::parse("JPYUSD"), Some(Symbol::JpyUsd));
    }

    #[test]
    fn symbol_parse_is_case_sensitive() {
        assert!(Symbol::parse("eurusd").is_none());
        assert!(Symbol::parse("GBPUSD").is_none());
        assert!(Symbol::parse("").is_none());
    }

    #[test]
    fn symbol_from_str_error() {
        let err = "AAPL".parse::<Symbol>().unwrap_err();
        assert!(err.to_string().contains("AAPL"));
    }

    #[test]
    fn symbol_serde_roundtrip() {
        let json = serde_json::to_string(&Symbol::JpyUsd).unwrap();
        assert_eq!(json, "\"JPYUSD\"");

        let parsed: Symbol = serde_json::from_str("\"USDEUR\"").unwrap();
        assert_eq!(parsed, Symbol::UsdEur);
    }
}
