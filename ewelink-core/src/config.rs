//! Service configuration
//!
//! Parsed from a small TOML subset:
//!
//! ```toml
//! [link]
//! transmit_power = 7   # 0 (minimal) to 7 (maximum)
//! ```
//!
//! Only `key = value` pairs, `[section]` headers and `#` comments are
//! understood.

use ewelink_hal::TxPower;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Value missing or out of range
    InvalidValue,
    /// Key not recognized in its section
    UnknownKey,
}

/// Service configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ServiceConfig {
    /// Transmit power applied on start; provider default when `None`
    pub transmit_power: Option<TxPower>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Link,
}

/// Parse configuration text into a [`ServiceConfig`]
pub fn parse_config(input: &str) -> Result<ServiceConfig, ConfigError> {
    let mut config = ServiceConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = match line[1..line.len() - 1].trim() {
                "link" => Section::Link,
                _ => return Err(ConfigError::InvalidSection),
            };
            continue;
        }

        let (key, value) = line.split_once('=').ok_or(ConfigError::InvalidValue)?;
        match (section, key.trim()) {
            (Section::Link, "transmit_power") => {
                let level: u8 = value.trim().parse().map_err(|_| ConfigError::InvalidValue)?;
                let power = TxPower::new(level).ok_or(ConfigError::InvalidValue)?;
                config.transmit_power = Some(power);
            }
            _ => return Err(ConfigError::UnknownKey),
        }
    }

    Ok(config)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_transmit_power() {
        let config = parse_config(
            "# remote settings\n\
             [link]\n\
             transmit_power = 4  # medium range\n",
        )
        .unwrap();
        assert_eq!(config.transmit_power, TxPower::new(4));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(parse_config("").unwrap(), ServiceConfig::default());
        assert_eq!(parse_config("[link]\n").unwrap().transmit_power, None);
    }

    #[test]
    fn test_out_of_range_power() {
        assert_eq!(
            parse_config("[link]\ntransmit_power = 8"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[link]\ntransmit_power = high"),
            Err(ConfigError::InvalidValue)
        );
    }

    #[test]
    fn test_unknown_section_and_key() {
        assert_eq!(
            parse_config("[display]\n"),
            Err(ConfigError::InvalidSection)
        );
        assert_eq!(
            parse_config("transmit_power = 3"),
            Err(ConfigError::UnknownKey)
        );
        assert_eq!(
            parse_config("[link]\nname = \"remote\""),
            Err(ConfigError::UnknownKey)
        );
    }

    #[test]
    fn test_missing_equals() {
        assert_eq!(
            parse_config("[link]\ntransmit_power"),
            Err(ConfigError::InvalidValue)
        );
    }
}
