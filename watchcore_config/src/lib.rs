//! This watchcore sub-crate contains all definitions to help generate
//! the configuration module of the final watchcore binaries.
//!
//! NOTE: This code is not included anywhere from watchcore itself! This
//! is a dependency of the watchcore **build script**. The build script
//! uses this dependency to turn a `.ron` configuration file into the
//! constants that watchcore includes (default application, idle timeout,
//! radio parameters).

use std::fmt::Display;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

pub mod codegen;

/// Letters a clicker channel code is built from.
pub const CHANNEL_LETTERS: std::ops::RangeInclusive<char> = 'A'..='D';

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Registry index the manager activates on power up.
    pub default_application: usize,
    /// Minute boundaries the device may sit through untouched before
    /// it is sent back to the home application.
    pub idle_timeout_minutes: u8,
    pub clicker: ClickerConfiguration,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickerConfiguration {
    /// Two letter button code, as printed on the base station.
    pub channel: String,
    /// Raw PA table byte.
    pub power: u8,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            default_application: 0,
            idle_timeout_minutes: 3,
            clicker: ClickerConfiguration::default(),
        }
    }
}

impl Default for ClickerConfiguration {
    fn default() -> Self { Self { channel: "DA".into(), power: 0x25 } }
}

impl Configuration {
    pub fn complete(&self) -> bool { self.problems().next().is_none() }

    pub fn problems(&self) -> impl Iterator<Item = ConfigurationProblem> + '_ {
        let channel = &self.clicker.channel;
        #[rustfmt::skip]
        let problems = [
            (self.idle_timeout_minutes == 0).then(|| ConfigurationProblem::IdleTimeoutZero),

            (channel.chars().count() != 2 || !channel.chars().all(|c| CHANNEL_LETTERS.contains(&c)))
                .then(|| ConfigurationProblem::ChannelCode),
        ];
        problems.into_iter().flatten()
    }

    /// Fails with every problem found, one per line.
    pub fn validate(&self) -> Result<()> {
        if self.complete() {
            return Ok(());
        }
        let report = self.problems().map(|p| p.to_string()).collect::<Vec<_>>().join("\n");
        bail!("Invalid watchcore configuration:\n{}", report)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigurationProblem {
    IdleTimeoutZero,
    ChannelCode,
}

impl Display for ConfigurationProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ConfigurationProblem::IdleTimeoutZero => {
                "[Manager] Idle timeout must be at least one minute"
            }
            ConfigurationProblem::ChannelCode => {
                "[Clicker] Channel code must be two letters between 'A' and 'D'"
            }
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sample_configuration_parses_and_validates() {
        // Given
        let text = include_str!("../sample_configurations/default.ron");

        // When
        let configuration: Configuration = ron::from_str(text).unwrap();

        // Then
        assert_eq!(configuration, Configuration::default());
        assert!(configuration.validate().is_ok());
    }

    #[test]
    fn validation_lists_every_problem() {
        // Given
        let configuration = Configuration {
            idle_timeout_minutes: 0,
            clicker: ClickerConfiguration { channel: "DE".into(), power: 0x25 },
            ..Default::default()
        };

        // When
        let problems: Vec<_> = configuration.problems().collect();

        // Then
        assert_eq!(
            problems,
            vec![ConfigurationProblem::IdleTimeoutZero, ConfigurationProblem::ChannelCode]
        );
        assert!(configuration.validate().is_err());
    }

    #[test]
    fn channel_codes_must_be_exactly_two_letters() {
        for bad in ["", "A", "ABC", "da", "A1"] {
            let configuration = Configuration {
                clicker: ClickerConfiguration { channel: bad.into(), power: 0 },
                ..Default::default()
            };
            assert!(!configuration.complete(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn any_power_byte_is_accepted() {
        for power in [0x00, 0x25, 0xC0, 0xFF] {
            let configuration = Configuration {
                clicker: ClickerConfiguration { channel: "DA".into(), power },
                ..Default::default()
            };
            assert!(configuration.complete(), "{:#04x} should be accepted", power);
        }
    }

    #[test]
    fn widest_idle_timeout_is_accepted() {
        let configuration = Configuration { idle_timeout_minutes: u8::MAX, ..Default::default() };
        assert!(configuration.validate().is_ok());
    }
}
