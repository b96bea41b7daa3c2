//! Configuration type definitions
//!
//! These types represent the remote's tunables. The firmware bakes them in
//! at build time from `remote.toml`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lowest voltage the backlight rail accepts (mV)
pub const BACKLIGHT_MIN_MV: u16 = 700;

/// Highest voltage the backlight rail accepts (mV)
pub const BACKLIGHT_MAX_MV: u16 = 3500;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A timeout or period is zero
    ZeroPeriod,
    /// A backlight level is outside the rail range
    BacklightOutOfRange,
    /// Dimmed level is brighter than the normal level
    DimmedAboveNormal,
    /// Slider minimum is not below its maximum
    EmptySliderRange,
}

/// Policy deadlines in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Timeouts {
    /// Disconnected time before the device powers off
    pub power_off_ms: u32,
    /// Idle time before the screen dims
    pub dim_ms: u32,
    /// Interval between telemetry refreshes
    pub diagnostic_period_ms: u32,
    /// Delay before the first telemetry refresh after boot
    pub diagnostic_settle_ms: u32,
}

impl Timeouts {
    pub const DEFAULT: Self = Self {
        power_off_ms: 40_000,
        dim_ms: 20_000,
        diagnostic_period_ms: 500,
        diagnostic_settle_ms: 3_000,
    };
}

impl Default for Timeouts {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Backlight rail levels (mV)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct BacklightConfig {
    pub normal_mv: u16,
    pub dimmed_mv: u16,
}

impl BacklightConfig {
    pub const DEFAULT: Self = Self {
        normal_mv: 2800,
        dimmed_mv: 2500,
    };

    /// Rail level for the given dim state
    pub const fn level_mv(&self, dimmed: bool) -> u16 {
        if dimmed {
            self.dimmed_mv
        } else {
            self.normal_mv
        }
    }
}

impl Default for BacklightConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Inclusive slider bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SliderRange {
    pub min: u8,
    pub max: u8,
}

impl SliderRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }
}

/// Complete remote configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct RemoteConfig {
    pub timeouts: Timeouts,
    pub backlight: BacklightConfig,
    /// Brightness slider range
    pub brightness: SliderRange,
    /// Speed slider range
    pub speed: SliderRange,
}

impl RemoteConfig {
    pub const DEFAULT: Self = Self {
        timeouts: Timeouts::DEFAULT,
        backlight: BacklightConfig::DEFAULT,
        brightness: SliderRange::new(10, 250),
        speed: SliderRange::new(1, 100),
    };

    /// Check the configuration for values the remote cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.timeouts;
        if t.power_off_ms == 0 || t.dim_ms == 0 || t.diagnostic_period_ms == 0 {
            return Err(ConfigError::ZeroPeriod);
        }

        let rail = BACKLIGHT_MIN_MV..=BACKLIGHT_MAX_MV;
        if !rail.contains(&self.backlight.normal_mv) || !rail.contains(&self.backlight.dimmed_mv) {
            return Err(ConfigError::BacklightOutOfRange);
        }
        if self.backlight.dimmed_mv > self.backlight.normal_mv {
            return Err(ConfigError::DimmedAboveNormal);
        }

        for range in [self.brightness, self.speed] {
            if range.min >= range.max {
                return Err(ConfigError::EmptySliderRange);
            }
        }

        Ok(())
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
