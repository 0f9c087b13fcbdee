//! Per-tick health progression.
//!
//! The game went through two playtested rule sets that differ only in
//! their rate constants, so the rates live in a [`HealthRules`] value
//! handed to the model at construction instead of hard-coded tables.
//! Both historical rule sets ship as named presets.
//!
//! One deliberate quirk is preserved from the original rules:
//! `cat_resistance` is recomputed from the current health value on
//! every tick rather than latched once true. As long as health never
//! drops, the two behaviors coincide; the recompute form is what was
//! playtested, so it is what the model does.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bands::{bounds, HealthBand};

/// A participant's persistent infection state, carried between ticks.
///
/// Owned by the driver, one per participant. Everything else in this
/// module is stateless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthState {
    /// Current health value. Higher means sicker.
    pub health: i32,
    /// Suppresses the cat exposure channel while set. Recomputed from
    /// infection status every tick (see module docs).
    pub cat_resistance: bool,
}

impl Default for HealthState {
    /// The boot condition of a freshly tagged-in device: bottom of
    /// super-healthy, no resistance.
    fn default() -> Self {
        Self {
            health: bounds::SUPER_HEALTHY,
            cat_resistance: false,
        }
    }
}

impl HealthState {
    /// Classification of the current health value.
    pub fn band(&self) -> HealthBand {
        HealthBand::from_health(self.health)
    }
}

/// Infectious contacts observed since the last tick.
///
/// Counts are signed only so that bad driver input is representable
/// and can be rejected; valid exposures are non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exposure {
    /// Infected humans encountered this tick.
    pub human: i32,
    /// Cats encountered this tick.
    pub cat: i32,
}

/// Boundary validation error for a tick's exposure counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExposureError {
    /// Negative contact counts are physically meaningless.
    NegativeCount { human: i32, cat: i32 },
}

impl fmt::Display for ExposureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeCount { human, cat } => write!(
                f,
                "exposure counts must be non-negative (human: {}, cat: {})",
                human, cat
            ),
        }
    }
}

impl std::error::Error for ExposureError {}

/// Rate constants for health progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthRules {
    /// Target per-tick climb while super-healthy; the actual increment
    /// oscillates so the value hovers below the healthy bound.
    pub super_healthy_progress: i32,
    /// Per-tick climb while in any infected band.
    pub infected_progress: i32,
    /// Health gained per infected-human contact.
    pub human_infection_rate: i32,
    /// Health gained per cat contact (unless cat-resistant).
    pub cat_infection_rate: i32,
}

impl HealthRules {
    /// The original playtest rule set. Fast games: a single cat brush
    /// is a quarter of the way from healthy to infected.
    pub const CLASSIC: Self = Self {
        super_healthy_progress: 4,
        infected_progress: 8,
        human_infection_rate: 2,
        cat_infection_rate: 5,
    };

    /// The toned-down second rule set for longer sessions.
    pub const GENTLE: Self = Self {
        super_healthy_progress: 2,
        infected_progress: 6,
        human_infection_rate: 1,
        cat_infection_rate: 2,
    };
}

impl Default for HealthRules {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// The per-tick health transition function.
///
/// Deterministic and infallible once the exposure counts have passed
/// validation; any randomness lives in the driver that produces the
/// exposures.
#[derive(Debug, Clone, Copy, Default)]
pub struct HealthModel {
    rules: HealthRules,
}

impl HealthModel {
    pub fn new(rules: HealthRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> HealthRules {
        self.rules
    }

    /// Advance a participant by one tick.
    ///
    /// Zombie and immune are absorbing: the health value is pinned to
    /// the band limit and nothing further applies, regardless of
    /// exposure.
    pub fn update(
        &self,
        state: HealthState,
        exposure: Exposure,
    ) -> Result<HealthState, ExposureError> {
        if exposure.human < 0 || exposure.cat < 0 {
            return Err(ExposureError::NegativeCount {
                human: exposure.human,
                cat: exposure.cat,
            });
        }

        let mut next = state;
        if let Some(pinned) = next.band().pinned_health() {
            next.health = pinned;
            return Ok(next);
        }

        next.health += self.progress_delta(next.health) + self.exposure_delta(&next, exposure);

        // Recomputed from the new value each tick, not latched.
        next.cat_resistance = next.band().is_infected();

        if next.band() == HealthBand::Zombie {
            next.health = bounds::ZOMBIE;
        }
        Ok(next)
    }

    /// Time-driven increment: disease progression independent of any
    /// contact this tick.
    fn progress_delta(&self, health: i32) -> i32 {
        let band = HealthBand::from_health(health);
        if band == HealthBand::SuperHealthy {
            // Oscillating self-correcting increment. Once the climb
            // would cross the healthy bound, the remainder term pulls
            // the step back so the value hovers near the top of the
            // band. Kept in this exact integer form; the constants
            // vary between rule sets but the shape does not.
            let sum = health + self.rules.super_healthy_progress;
            let remainder = sum % bounds::HEALTHY;
            let quotient = sum / bounds::HEALTHY;
            return self.rules.super_healthy_progress - remainder * quotient;
        }
        if band.is_infected() {
            return self.rules.infected_progress;
        }
        0
    }

    /// Exposure-driven increment. Contacts only matter while healthy
    /// or super-healthy; immune and infected participants accumulate
    /// nothing.
    fn exposure_delta(&self, state: &HealthState, exposure: Exposure) -> i32 {
        let band = state.band();
        if band == HealthBand::Immune || band.is_infected() {
            return 0;
        }
        let cat_rate = if state.cat_resistance {
            0
        } else {
            self.rules.cat_infection_rate
        };
        exposure.human * self.rules.human_infection_rate + exposure.cat * cat_rate
    }
}
