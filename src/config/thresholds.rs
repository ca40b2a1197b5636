use serde::{Deserialize, Serialize};

/// Version of the default tier breakpoints. Bump when the defaults change
/// so stored results can be compared against the policy that produced them.
pub const TIER_POLICY_VERSION: u32 = 1;

/// Score breakpoints for risk tiers.
///
/// A total at or above `high` is High, at or above `medium` is Medium, at
/// or above `low` is Low, and anything below `low` is Safe.
///
/// ```toml
/// [thresholds]
/// version = 1
/// high = 8
/// medium = 4
/// low = 1
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_high")]
    pub high: u32,

    #[serde(default = "default_medium")]
    pub medium: u32,

    #[serde(default = "default_low")]
    pub low: u32,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            version: default_version(),
            high: default_high(),
            medium: default_medium(),
            low: default_low(),
        }
    }
}

impl TierThresholds {
    /// Flags fewer messages; suited to noisy inboxes.
    pub fn lenient() -> Self {
        Self {
            high: 12,
            medium: 6,
            low: 2,
            ..Default::default()
        }
    }

    /// Flags more messages; suited to high-risk audiences.
    pub fn strict() -> Self {
        Self {
            high: 5,
            medium: 3,
            low: 1,
            ..Default::default()
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.low >= 1 && self.medium >= self.low && self.high >= self.medium
    }
}

fn default_version() -> u32 {
    TIER_POLICY_VERSION
}
fn default_high() -> u32 {
    8
}
fn default_medium() -> u32 {
    4
}
fn default_low() -> u32 {
    1
}

/// Guards applied to input before any analyzer runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputLimits {
    /// Maximum accepted length in characters (not bytes).
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
        }
    }
}

fn default_max_chars() -> usize {
    10_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_ordered() {
        assert!(TierThresholds::default().is_ordered());
        assert!(TierThresholds::lenient().is_ordered());
        assert!(TierThresholds::strict().is_ordered());
    }

    #[test]
    fn test_unordered_thresholds_detected() {
        let thresholds = TierThresholds {
            high: 3,
            medium: 4,
            ..Default::default()
        };
        assert!(!thresholds.is_ordered());

        let zero_low = TierThresholds {
            low: 0,
            ..Default::default()
        };
        assert!(!zero_low.is_ordered());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let thresholds: TierThresholds = toml::from_str("high = 10").unwrap();
        assert_eq!(thresholds.high, 10);
        assert_eq!(thresholds.medium, 4);
        assert_eq!(thresholds.version, TIER_POLICY_VERSION);
    }
}
