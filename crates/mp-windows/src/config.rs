//! Rule constants.
//!
//! Every offset used by the window rules lives in [`RuleConfig`]. The
//! defaults are the production values; a TOML file may override any of them:
//!
//! ```toml
//! program_lead_days = 7
//! processing_days = 4
//! program_days_before_day6 = 5
//! max_cheat_days = 30
//! ```

use std::path::Path;

use mp_core::ensure;
use mp_core::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// Largest offset any rule may apply: the span of the supported date range,
/// 1900-01-01 to 2199-12-31.
pub const MAX_OFFSET_DAYS: i32 = 109_572;

/// Offsets and limits applied by the window rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct RuleConfig {
    /// Minimum days between signup and program start.
    pub program_lead_days: i32,
    /// Days needed to prepare the first delivery after signup.
    pub processing_days: i32,
    /// Days from program start to Day 6, before cheat days are added.
    pub program_days_before_day6: i32,
    /// Largest accepted cheat-day extension.
    pub max_cheat_days: i32,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            program_lead_days: 7,
            processing_days: 4,
            program_days_before_day6: 5,
            max_cheat_days: 30,
        }
    }
}

impl RuleConfig {
    /// Parse from TOML, filling unspecified fields with defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: RuleConfig =
            toml::from_str(s).map_err(|e| Error::Config(format!("invalid rule config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load and validate a TOML rule file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Check that every offset is usable.
    ///
    /// Each value must lie between its lower bound and [`MAX_OFFSET_DAYS`].
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("program_lead_days", self.program_lead_days, 0),
            ("processing_days", self.processing_days, 0),
            ("program_days_before_day6", self.program_days_before_day6, 1),
            ("max_cheat_days", self.max_cheat_days, 0),
        ];
        for (name, value, min) in fields {
            ensure!(
                (min..=MAX_OFFSET_DAYS).contains(&value),
                "{name} must be between {min} and {MAX_OFFSET_DAYS}, got {value}"
            );
        }
        Ok(())
    }

    /// Minimum signup-to-start separation that leaves room for delivery 1:
    /// the processing days plus one day of delivery buffer.
    pub fn minimum_separation_days(&self) -> i32 {
        self.processing_days.saturating_add(1)
    }

    /// Return `true` if `cheat_days` lies in `[0, max_cheat_days]`.
    pub fn accepts_cheat_days(&self, cheat_days: i64) -> bool {
        (0..=i64::from(self.max_cheat_days)).contains(&cheat_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = RuleConfig::default();
        assert_eq!(cfg.program_lead_days, 7);
        assert_eq!(cfg.processing_days, 4);
        assert_eq!(cfg.program_days_before_day6, 5);
        assert_eq!(cfg.max_cheat_days, 30);
        assert_eq!(cfg.minimum_separation_days(), 5);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn cheat_day_bounds_are_inclusive() {
        let cfg = RuleConfig::default();
        assert!(cfg.accepts_cheat_days(0));
        assert!(cfg.accepts_cheat_days(30));
        assert!(!cfg.accepts_cheat_days(-1));
        assert!(!cfg.accepts_cheat_days(31));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = RuleConfig::from_toml_str("processing_days = 3\n").unwrap();
        assert_eq!(cfg.processing_days, 3);
        assert_eq!(cfg.program_lead_days, 7);
        assert_eq!(cfg.minimum_separation_days(), 4);
    }

    #[test]
    fn rejects_unknown_keys_and_bad_values() {
        assert!(matches!(
            RuleConfig::from_toml_str("lead = 3\n"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            RuleConfig::from_toml_str("max_cheat_days = -2\n"),
            Err(Error::Precondition(_))
        ));
        assert!(matches!(
            RuleConfig::from_toml_str("program_days_before_day6 = 0\n"),
            Err(Error::Precondition(_))
        ));
    }

    #[test]
    fn rejects_offsets_beyond_the_date_range() {
        for key in [
            "program_lead_days",
            "processing_days",
            "program_days_before_day6",
            "max_cheat_days",
        ] {
            let err = RuleConfig::from_toml_str(&format!("{key} = 2147483647\n")).unwrap_err();
            assert!(matches!(err, Error::Precondition(_)), "{key}: {err}");
        }
        let widest = RuleConfig {
            program_lead_days: MAX_OFFSET_DAYS,
            processing_days: MAX_OFFSET_DAYS,
            program_days_before_day6: MAX_OFFSET_DAYS,
            max_cheat_days: MAX_OFFSET_DAYS,
        };
        assert!(widest.validate().is_ok());
        assert_eq!(widest.minimum_separation_days(), MAX_OFFSET_DAYS + 1);
    }
}
