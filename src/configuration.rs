//! Flyover behaviour profiles.

use std::time::Duration;

use bevy::math::curve::Curve;
use bevy::math::curve::easing::EaseFunction;
use bevy::prelude::*;

use crate::parameter::Parameter;

/// Timing curve applied to each flyover step.
#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AnimationCurve {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl AnimationCurve {
    pub const fn ease_function(self) -> EaseFunction {
        match self {
            Self::Linear => EaseFunction::Linear,
            Self::EaseIn => EaseFunction::CubicIn,
            Self::EaseOut => EaseFunction::CubicOut,
            Self::EaseInOut => EaseFunction::CubicInOut,
        }
    }

    /// Maps linear time `t` in `[0, 1]` to eased progress.
    pub fn sample(self, t: f32) -> f32 { self.ease_function().sample_unchecked(t.clamp(0.0, 1.0)) }
}

/// One complete flyover behaviour: step timing plus how altitude (metres),
/// pitch (degrees) and heading (degrees) evolve from step to step.
#[derive(Clone, Debug, PartialEq)]
pub struct Configuration {
    /// Length of a single step. Zero applies each step instantly.
    pub animation_duration: Duration,
    pub animation_curve:    AnimationCurve,
    pub altitude:           Parameter<f64>,
    pub pitch:              Parameter<f64>,
    pub heading:            Parameter<f64>,
}

impl Configuration {
    pub const DEFAULT: Self = Self::preset(4_000, 600.0, 45.0, 20.0);
    pub const LOW_FLYING: Self = Self::preset(4_000, 65.0, 80.0, 20.0);
    pub const FAR_AWAY: Self = Self::preset(4_000, 1330.0, 55.0, 20.0);
    pub const GIDDY: Self = Self::preset(0, 250.0, 80.0, 50.0);
    pub const ASTRONAUT_VIEW: Self = Self::preset(20_000, 2000.0, 100.0, 35.0);

    const fn preset(duration_ms: u64, altitude: f64, pitch: f64, heading_step: f64) -> Self {
        Self {
            animation_duration: Duration::from_millis(duration_ms),
            animation_curve:    AnimationCurve::Linear,
            altitude:           Parameter::constant(altitude),
            pitch:              Parameter::constant(pitch),
            heading:            Parameter::increment(heading_step),
        }
    }

    /// Linear configuration with a one second step.
    pub fn new(
        altitude: impl Into<Parameter<f64>>,
        pitch: impl Into<Parameter<f64>>,
        heading: impl Into<Parameter<f64>>,
    ) -> Self {
        Self {
            animation_duration: Duration::from_secs(1),
            animation_curve:    AnimationCurve::Linear,
            altitude:           altitude.into(),
            pitch:              pitch.into(),
            heading:            heading.into(),
        }
    }

    pub fn with_duration(mut self, animation_duration: Duration) -> Self {
        self.animation_duration = animation_duration;
        self
    }

    pub fn with_curve(mut self, animation_curve: AnimationCurve) -> Self {
        self.animation_curve = animation_curve;
        self
    }
}

impl Default for Configuration {
    fn default() -> Self { Self::DEFAULT }
}

/// The named configurations shipped with the crate.
#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Preset {
    #[default]
    Default,
    LowFlying,
    FarAway,
    Giddy,
    AstronautView,
}

impl Preset {
    pub const ALL: [Self; 5] = [
        Self::Default,
        Self::LowFlying,
        Self::FarAway,
        Self::Giddy,
        Self::AstronautView,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::LowFlying => "lowFlying",
            Self::FarAway => "farAway",
            Self::Giddy => "giddy",
            Self::AstronautView => "astronautView",
        }
    }

    pub const fn configuration(self) -> Configuration {
        match self {
            Self::Default => Configuration::DEFAULT,
            Self::LowFlying => Configuration::LOW_FLYING,
            Self::FarAway => Configuration::FAR_AWAY,
            Self::Giddy => Configuration::GIDDY,
            Self::AstronautView => Configuration::ASTRONAUT_VIEW,
        }
    }
}

impl From<Preset> for Configuration {
    fn from(preset: Preset) -> Self { preset.configuration() }
}
