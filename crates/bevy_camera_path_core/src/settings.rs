use bevy::log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    easing::Easing,
    errors::{ConfigurationError, PlaybackResult, SerialError},
    subject::GameMode,
};

/// Engine-wide configuration. Missing fields take their default values when loading from RON:
/// ```ron
/// (
///     tick_rate: 20.0,
///     default_duration: 5.0,
///     default_easing: easeinout,
///     default_target_mode: spectator,
/// )
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CameraPathSettings {
    /// Ticks per second of the host's game loop. Durations are converted to tick counts with it.
    pub tick_rate: f64,
    /// Playback duration, in seconds, of sessions that never had one set
    pub default_duration: f64,
    pub default_easing: Easing,
    pub default_target_mode: GameMode,
    /// Whether the Bevy plugin should set the fixed timestep to `tick_rate`
    pub configure_fixed_timestep: bool,
}

impl Default for CameraPathSettings {
    fn default() -> Self {
        Self {
            tick_rate: 20.,
            default_duration: 5.,
            default_easing: Easing::Linear,
            default_target_mode: GameMode::Survival,
            configure_fixed_timestep: true,
        }
    }
}

impl CameraPathSettings {
    /// Parses settings, rejecting a tick rate or default duration that isn't strictly positive
    pub fn from_ron(source: &str) -> Result<Self, SerialError> {
        let settings: Self = ron::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> PlaybackResult<()> {
        if !is_positive(self.tick_rate) {
            return Err(ConfigurationError::NonPositiveTickRate(self.tick_rate));
        }
        if !is_positive(self.default_duration) {
            return Err(ConfigurationError::NonPositiveDuration(
                self.default_duration,
            ));
        }
        Ok(())
    }

    /// Copy of these settings with invalid values swapped for their defaults
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let mut settings = self.clone();
        if !is_positive(settings.tick_rate) {
            warn!(
                "Camera path tick rate {} is not a positive number, using {}",
                settings.tick_rate, defaults.tick_rate
            );
            settings.tick_rate = defaults.tick_rate;
        }
        if !is_positive(settings.default_duration) {
            warn!(
                "Default camera path duration {} is not a positive number, using {}",
                settings.default_duration, defaults.default_duration
            );
            settings.default_duration = defaults.default_duration;
        }
        settings
    }

    pub fn to_ron(&self) -> Result<String, SerialError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    pub fn ticks_for(&self, duration: f64) -> u64 {
        duration_to_ticks(duration, self.tick_rate)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.
}

/// Number of ticks a playback of `duration` seconds lasts at `tick_rate`. Never zero.
pub fn duration_to_ticks(duration: f64, tick_rate: f64) -> u64 {
    ((duration * tick_rate).round() as u64).max(1)
}
