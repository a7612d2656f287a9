//! TOML-based supply profiles and preset definitions.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::tables::ServiceTier;
use crate::wizard::stage::{GENERATOR_KVA_RANGE, HOURS_PER_DAY};
use crate::wizard::{DAYS_PER_WEEK, InputSnapshot, SnapshotUpdate};

/// One household's supply situation parsed from TOML.
///
/// Every section is optional. Load from TOML with
/// [`ProfileConfig::from_toml_file`] or pick a built-in preset with
/// [`ProfileConfig::from_preset`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    /// Grid service tier and optional overrides of its band.
    #[serde(default)]
    pub grid: GridProfile,
    /// Backup generator details and weekly run pattern.
    #[serde(default)]
    pub generator: GeneratorProfile,
}

/// Grid supply section.
///
/// The overrides replace the tier's nominal band after the tier is applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridProfile {
    pub tier: Option<ServiceTier>,
    /// Lower bound of daily grid hours.
    pub hours_min: Option<f64>,
    /// Upper bound of daily grid hours.
    pub hours_max: Option<f64>,
    /// Average daily consumption (kWh).
    pub avg_daily_consumption_kwh: Option<f64>,
}

/// Backup generator section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorProfile {
    /// Rated capacity (kVA).
    pub capacity_kva: f64,
    /// Fuel price per liter.
    pub fuel_price_per_liter: f64,
    /// Yearly maintenance spend.
    pub yearly_maintenance_cost: f64,
    /// Run hours for each day of the week, Monday first.
    pub daily_hours: Vec<f64>,
}

impl Default for GeneratorProfile {
    fn default() -> Self {
        let snapshot = InputSnapshot::default();
        Self {
            capacity_kva: snapshot.generator_capacity_kva,
            fuel_price_per_liter: snapshot.fuel_price_per_liter,
            yearly_maintenance_cost: snapshot.yearly_maintenance_cost,
            daily_hours: snapshot.daily_generator_hours,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"generator.capacity_kva"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl ProfileConfig {
    /// Tier B home running a 5 kVA generator four hours a day.
    pub fn household() -> Self {
        Self {
            grid: GridProfile {
                tier: Some(ServiceTier::B),
                ..GridProfile::default()
            },
            generator: GeneratorProfile::default(),
        }
    }

    /// Tier D shop on a 3 kVA generator, closed on Sundays.
    pub fn small_shop() -> Self {
        Self {
            grid: GridProfile {
                tier: Some(ServiceTier::D),
                ..GridProfile::default()
            },
            generator: GeneratorProfile {
                capacity_kva: 3.0,
                fuel_price_per_liter: 1150.0,
                yearly_maintenance_cost: 60_000.0,
                daily_hours: vec![8.0, 8.0, 8.0, 8.0, 8.0, 6.0, 0.0],
            },
        }
    }

    /// Tier A home with a large 10 kVA standby generator.
    pub fn large_home() -> Self {
        Self {
            grid: GridProfile {
                tier: Some(ServiceTier::A),
                avg_daily_consumption_kwh: Some(40.0),
                ..GridProfile::default()
            },
            generator: GeneratorProfile {
                capacity_kva: 10.0,
                fuel_price_per_liter: 1200.0,
                yearly_maintenance_cost: 250_000.0,
                daily_hours: vec![2.0, 1.0, 2.0, 1.0, 2.0, 3.0, 3.0],
            },
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["household", "small_shop", "large_home"];

    /// Loads a profile from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "household" => Ok(Self::household()),
            "small_shop" => Ok(Self::small_shop()),
            "large_home" => Ok(Self::large_home()),
            _ => Err(ConfigError::new(
                "preset",
                format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            )),
        }
    }

    /// Parses a profile from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("profile", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a profile from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the profile is valid. Hour bounds are
    /// checked after the tier's band has been applied, so an override of only
    /// one bound is compared against the tier's other bound.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let g = &self.grid;

        match g.tier {
            None => errors.push(ConfigError::new("grid.tier", "must be set")),
            Some(tier) => {
                let band = tier.band();
                let min = g.hours_min.unwrap_or(band.min_hours);
                let max = g.hours_max.unwrap_or(band.max_hours);
                if !(0.0..=HOURS_PER_DAY).contains(&min) {
                    errors.push(ConfigError::new("grid.hours_min", "must be in [0, 24]"));
                }
                if !(0.0..=HOURS_PER_DAY).contains(&max) {
                    errors.push(ConfigError::new("grid.hours_max", "must be in [0, 24]"));
                }
                if min > max {
                    errors.push(ConfigError::new("grid.hours_min", "must be <= grid.hours_max"));
                }
            }
        }
        if g.avg_daily_consumption_kwh.is_some_and(|kwh| kwh.is_nan() || kwh < 0.0) {
            errors.push(ConfigError::new("grid.avg_daily_consumption_kwh", "must be >= 0"));
        }

        let generator = &self.generator;
        if !GENERATOR_KVA_RANGE.contains(&generator.capacity_kva) {
            errors.push(ConfigError::new(
                "generator.capacity_kva",
                format!(
                    "must be in [{}, {}]",
                    GENERATOR_KVA_RANGE.start(),
                    GENERATOR_KVA_RANGE.end()
                ),
            ));
        }
        if generator.fuel_price_per_liter.is_nan() || generator.fuel_price_per_liter <= 0.0 {
            errors.push(ConfigError::new("generator.fuel_price_per_liter", "must be > 0"));
        }
        if generator.yearly_maintenance_cost.is_nan() || generator.yearly_maintenance_cost < 0.0 {
            errors.push(ConfigError::new("generator.yearly_maintenance_cost", "must be >= 0"));
        }
        if generator.daily_hours.len() != DAYS_PER_WEEK {
            errors.push(ConfigError::new(
                "generator.daily_hours",
                format!("must have {DAYS_PER_WEEK} entries, got {}", generator.daily_hours.len()),
            ));
        }
        for (day, hours) in generator.daily_hours.iter().enumerate() {
            if !(0.0..=HOURS_PER_DAY).contains(hours) {
                errors.push(ConfigError::new(
                    format!("generator.daily_hours[{day}]"),
                    "must be in [0, 24]",
                ));
            }
        }

        errors
    }

    /// Splits the profile into the updates entered at each input stage:
    /// tier selection, generator details and usage pattern, in that order.
    ///
    /// Applying the tier first lets its band cascade before the grid
    /// overrides land.
    pub fn stage_updates(&self) -> [SnapshotUpdate; 3] {
        let tier = SnapshotUpdate::tier(self.grid.tier);
        let generator = SnapshotUpdate {
            generator_capacity_kva: Some(self.generator.capacity_kva),
            fuel_price_per_liter: Some(self.generator.fuel_price_per_liter),
            yearly_maintenance_cost: Some(self.generator.yearly_maintenance_cost),
            ..SnapshotUpdate::default()
        };
        let usage = SnapshotUpdate {
            grid_hours_min: self.grid.hours_min,
            grid_hours_max: self.grid.hours_max,
            avg_daily_consumption_kwh: self.grid.avg_daily_consumption_kwh,
            daily_generator_hours: Some(self.generator.daily_hours.clone()),
            ..SnapshotUpdate::default()
        };
        [tier, generator, usage]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::apply_update;

    #[test]
    fn household_preset_valid() {
        let errors = ProfileConfig::household().validate();
        assert!(errors.is_empty(), "household should be valid: {errors:?}");
    }

    #[test]
    fn from_preset_unknown() {
        let err = ProfileConfig::from_preset("mansion");
        assert!(err.is_err());
        let e = err.unwrap_err();
        assert!(e.message.contains("unknown preset"));
        assert!(e.to_string().starts_with("config error: preset"));
    }

    #[test]
    fn all_presets_are_valid() {
        for name in ProfileConfig::PRESETS {
            let cfg = ProfileConfig::from_preset(name);
            assert!(cfg.is_ok(), "preset \"{name}\" should load");
            let errors = cfg.as_ref().map(|c| c.validate()).unwrap_or_default();
            assert!(
                errors.is_empty(),
                "preset \"{name}\" should be valid: {errors:?}"
            );
        }
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[grid]
tier = "C"
hours_min = 10.0
avg_daily_consumption_kwh = 18.5

[generator]
capacity_kva = 7.0
fuel_price_per_liter = 1300.0
yearly_maintenance_cost = 90000.0
daily_hours = [3.0, 3.0, 3.0, 3.0, 3.0, 5.0, 5.0]
"#;
        let cfg = ProfileConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "valid TOML should parse: {:?}", cfg.err());
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().and_then(|c| c.grid.tier), Some(ServiceTier::C));
        assert_eq!(cfg.as_ref().and_then(|c| c.grid.hours_max), None);
        assert_eq!(cfg.as_ref().map(|c| c.generator.capacity_kva), Some(7.0));
    }

    #[test]
    fn lowercase_tier_is_rejected() {
        let result = ProfileConfig::from_toml_str("[grid]\ntier = \"b\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[generator]
capacity_kva = 5.0
turbo = true
"#;
        assert!(ProfileConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let cfg = ProfileConfig::from_toml_str("[grid]\ntier = \"E\"\n");
        assert!(cfg.is_ok());
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().map(|c| c.generator.capacity_kva), Some(5.0));
        assert_eq!(
            cfg.as_ref().map(|c| c.generator.daily_hours.len()),
            Some(DAYS_PER_WEEK)
        );
    }

    #[test]
    fn validation_catches_missing_tier() {
        let errors = ProfileConfig::default().validate();
        assert!(errors.iter().any(|e| e.field == "grid.tier"));
    }

    #[test]
    fn validation_catches_generator_out_of_range() {
        let mut cfg = ProfileConfig::household();
        cfg.generator.capacity_kva = 12.0;
        cfg.generator.fuel_price_per_liter = 0.0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "generator.capacity_kva"));
        assert!(errors.iter().any(|e| e.field == "generator.fuel_price_per_liter"));
    }

    #[test]
    fn validation_catches_inverted_hours() {
        let mut cfg = ProfileConfig::household();
        cfg.grid.hours_min = Some(22.0);
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "grid.hours_min"));
    }

    #[test]
    fn validation_catches_bad_week() {
        let mut cfg = ProfileConfig::household();
        cfg.generator.daily_hours = vec![4.0, 25.0, 4.0];
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "generator.daily_hours"));
        assert!(errors.iter().any(|e| e.field == "generator.daily_hours[1]"));
    }

    #[test]
    fn stage_updates_apply_overrides_after_cascade() {
        let mut cfg = ProfileConfig::household();
        cfg.grid.avg_daily_consumption_kwh = Some(20.0);
        let snapshot = cfg
            .stage_updates()
            .iter()
            .fold(InputSnapshot::default(), apply_update);
        assert_eq!(snapshot.service_tier, Some(ServiceTier::B));
        assert_eq!(snapshot.grid_hours_min, 16.0);
        assert_eq!(snapshot.grid_hours_max, 20.0);
        assert_eq!(snapshot.avg_daily_consumption_kwh, 20.0);
    }
}
