//! Machine configuration: clearance limits for the banjo, the change gears on hand, and the threads
//! we want a chart for.
//!
//! Everything has a default matching an 8x14 lathe, so a TOML file only needs the values that differ:
//!
//! ```
//! use change_gears::config::Config;
//!
//! let config = Config::from_toml_str(r#"
//!     gears = [20, 40, 60, 80, 100, 127]
//!
//!     [limits]
//!     max_slot_span = 180
//!
//!     [targets]
//!     mm = [0.5, 0.75, 1.0]
//! "#).unwrap();
//!
//! assert_eq!(config.gears.teeth().len(), 6);
//! assert_eq!(config.limits.max_slot_span, 180);
//! assert_eq!(config.limits.hub_size, 30);
//! assert_eq!(config.targets.mm.len(), 3);
//! ```
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

pub const MM_PER_INCH: f64 = 25.4;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Physical limits on where gears can sit on the banjo. All values are in teeth.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Minimum gear train length
    pub min_train_length: f64,
    /// Minimum center to center for the final two gears
    pub min_final_center_distance: i64,
    /// Maximum difference between a co-axial pair driven off the idler
    pub max_coaxial_diff: i64,
    /// Minimum gear to gear clearance
    pub min_gear_clearance: i64,
    /// Size of a hub with no gear present
    pub hub_size: i64,
    /// Maximum length for engaged gears in the slot
    pub max_slot_span: i64,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            min_train_length: 154.0,
            min_final_center_distance: 80,
            max_coaxial_diff: 6,
            min_gear_clearance: 4,
            hub_size: 30,
            max_slot_span: 168,
        }
    }
}

/// The change gears available, by tooth count. A set may hold more than one gear of the same size.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<u32>")]
pub struct GearInventory(Vec<u32>);

impl GearInventory {
    pub fn new(teeth: Vec<u32>) -> Result<Self, ConfigError> {
        if teeth.is_empty() {
            return Err(ConfigError::Invalid("gear set is empty".to_string()));
        }
        if teeth.contains(&0) {
            return Err(ConfigError::Invalid(
                "gear set contains a gear with no teeth".to_string(),
            ));
        }
        Ok(GearInventory(teeth))
    }

    pub fn teeth(&self) -> &[u32] {
        &self.0
    }
}

impl TryFrom<Vec<u32>> for GearInventory {
    type Error = ConfigError;

    fn try_from(teeth: Vec<u32>) -> Result<Self, Self::Error> {
        GearInventory::new(teeth)
    }
}

impl Default for GearInventory {
    fn default() -> Self {
        GearInventory(vec![
            30, 35, 40, 45, 48, 50, 60, 66, 68, 70, 70, 72, 75, 80, 90, 100,
        ])
    }
}

/// A thread we'd like to cut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    /// Threads per inch
    Tpi(f64),
    /// Pitch in mm
    Mm(f64),
}

impl Target {
    /// Pitch of the thread, in inches
    pub fn goal_pitch(self) -> f64 {
        match self {
            Target::Tpi(tpi) => 1.0 / tpi,
            Target::Mm(mm) => mm / MM_PER_INCH,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Tpi(tpi) => write!(f, "{tpi} tpi"),
            Target::Mm(mm) => write!(f, "{mm} mm"),
        }
    }
}

/// Threads to chart, inch sizes first then metric.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Targets {
    pub tpi: Vec<f64>,
    pub mm: Vec<f64>,
}

impl Default for Targets {
    fn default() -> Self {
        // 3.5 to 205 tpi in half steps, and 0.1 to 7.5mm in 0.1mm steps
        Targets {
            tpi: (7..=410).map(|n| f64::from(n) / 2.0).collect(),
            mm: (1..=75).map(|n| f64::from(n) / 10.0).collect(),
        }
    }
}

impl Targets {
    pub fn inch(&self) -> impl Iterator<Item = Target> + '_ {
        self.tpi.iter().map(|&tpi| Target::Tpi(tpi))
    }

    pub fn metric(&self) -> impl Iterator<Item = Target> + '_ {
        self.mm.iter().map(|&mm| Target::Mm(mm))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub limits: Limits,
    pub gears: GearInventory,
    pub targets: Targets,
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let bad = |v: &f64| !(v.is_finite() && *v > 0.0);
        if let Some(tpi) = self.targets.tpi.iter().find(|v| bad(v)) {
            return Err(ConfigError::Invalid(format!("target of {tpi} tpi")));
        }
        if let Some(mm) = self.targets.mm.iter().find(|v| bad(v)) {
            return Err(ConfigError::Invalid(format!("target pitch of {mm} mm")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.gears.teeth().len(), 16);
        assert_eq!(config.limits.max_slot_span, 168);
        assert_eq!(config.targets.tpi.len(), 404);
        assert_relative_eq!(config.targets.tpi[0], 3.5);
        assert_relative_eq!(*config.targets.tpi.last().unwrap(), 205.0);
        assert_eq!(config.targets.mm.len(), 75);
        assert_relative_eq!(*config.targets.mm.last().unwrap(), 7.5);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_rejects_zero_teeth() {
        let err = Config::from_toml_str("gears = [30, 0, 40]").unwrap_err();
        assert!(err.to_string().contains("no teeth"), "{err}");
    }

    #[test]
    fn test_rejects_empty_gear_set() {
        assert!(Config::from_toml_str("gears = []").is_err());
    }

    #[test]
    fn test_rejects_bad_targets() {
        let err = Config::from_toml_str("[targets]\ntpi = [12.0, 0.0]").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(Config::from_toml_str("[targets]\nmm = [-1.0]").is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Config::load("/nonexistent/change_gears.toml"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_goal_pitch() {
        assert_relative_eq!(Target::Tpi(80.0).goal_pitch(), 0.0125);
        assert_relative_eq!(Target::Mm(25.4).goal_pitch(), 1.0);
    }
}
