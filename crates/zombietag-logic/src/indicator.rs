//! Health value → wearable light status.
//!
//! The device LED is the only thing other players can see, so the
//! mapping is deliberately coarse: green means safe to tag, red means
//! trouble, blinking red means trouble getting worse. Healthy and
//! asymptomatic participants show nothing — part of the game is not
//! knowing who is carrying.

use serde::{Deserialize, Serialize};

use crate::bands::HealthBand;

/// LED color on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightColor {
    None,
    Green,
    Red,
}

/// What the light driver should show: a color and a blink rate, with
/// rate 0 meaning steady (or dark, for [`LightColor::None`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedStatus {
    pub color: LightColor,
    pub blink_rate: i32,
}

impl LedStatus {
    /// Dark LED.
    pub const OFF: Self = Self {
        color: LightColor::None,
        blink_rate: 0,
    };

    const fn steady(color: LightColor) -> Self {
        Self {
            color,
            blink_rate: 0,
        }
    }
}

/// Blink constants for the indicator mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorRules {
    /// Fastest blink rate; late-stage symptomatic blinks at exactly
    /// this, and the variable symptomatic rate is capped here so the
    /// late stage always reads as at-least-as-urgent.
    pub max_blink_rate: i32,
    /// Per-health-point multiplier for the symptomatic band's blink
    /// rate.
    pub blink_variable_factor: i32,
}

impl IndicatorRules {
    pub const CLASSIC: Self = Self {
        max_blink_rate: 100,
        blink_variable_factor: 1,
    };
}

impl Default for IndicatorRules {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Pure mapping from health value to light status.
///
/// Total over all integers and stateless; safe to call as often as the
/// light driver likes.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndicatorMapper {
    rules: IndicatorRules,
}

impl IndicatorMapper {
    pub fn new(rules: IndicatorRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> IndicatorRules {
        self.rules
    }

    pub fn map(&self, health: i32) -> LedStatus {
        match HealthBand::from_health(health) {
            HealthBand::Immune => LedStatus::steady(LightColor::Green),
            HealthBand::Zombie => LedStatus::steady(LightColor::Red),
            HealthBand::InfectedSymLate => LedStatus {
                color: LightColor::Red,
                blink_rate: self.rules.max_blink_rate,
            },
            HealthBand::InfectedSym => LedStatus {
                color: LightColor::Red,
                blink_rate: (health * self.rules.blink_variable_factor)
                    .min(self.rules.max_blink_rate),
            },
            HealthBand::SuperHealthy | HealthBand::Healthy | HealthBand::InfectedAsym => {
                LedStatus::OFF
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn immune_shows_steady_green() {
        let mapper = IndicatorMapper::default();
        assert_eq!(
            mapper.map(1),
            LedStatus {
                color: LightColor::Green,
                blink_rate: 0
            }
        );
        assert_eq!(mapper.map(-40).color, LightColor::Green);
    }

    #[test]
    fn zombie_shows_steady_red() {
        let mapper = IndicatorMapper::default();
        assert_eq!(
            mapper.map(99),
            LedStatus {
                color: LightColor::Red,
                blink_rate: 0
            }
        );
        assert_eq!(mapper.map(500).blink_rate, 0);
    }

    #[test]
    fn late_stage_blinks_at_max() {
        let mapper = IndicatorMapper::default();
        assert_eq!(
            mapper.map(95),
            LedStatus {
                color: LightColor::Red,
                blink_rate: 100
            }
        );
    }

    #[test]
    fn symptomatic_blink_grows_with_health() {
        let mapper = IndicatorMapper::default();
        assert_eq!(
            mapper.map(75),
            LedStatus {
                color: LightColor::Red,
                blink_rate: 75
            }
        );
        assert_eq!(mapper.map(89).blink_rate, 89);
    }

    #[test]
    fn symptomatic_blink_capped_at_max() {
        let mapper = IndicatorMapper::new(IndicatorRules {
            max_blink_rate: 80,
            blink_variable_factor: 1,
        });
        assert_eq!(mapper.map(89).blink_rate, 80);

        let mapper = IndicatorMapper::new(IndicatorRules {
            max_blink_rate: 100,
            blink_variable_factor: 5,
        });
        // 75 * 5 would be 375; late stage is 100, so cap there.
        assert_eq!(mapper.map(75).blink_rate, 100);
    }

    #[test]
    fn hidden_bands_show_nothing() {
        let mapper = IndicatorMapper::default();
        for h in [2, 5, 10, 20, 39, 40, 55, 69] {
            assert_eq!(mapper.map(h), LedStatus::OFF, "health {}", h);
        }
    }

    #[test]
    fn mapping_is_idempotent() {
        let mapper = IndicatorMapper::default();
        for h in -10..120 {
            assert_eq!(mapper.map(h), mapper.map(h));
        }
    }

    #[test]
    fn blink_rate_monotone_within_symptomatic_band() {
        let mapper = IndicatorMapper::default();
        for h in 70..89 {
            assert!(
                mapper.map(h).blink_rate <= mapper.map(h + 1).blink_rate,
                "rate must not drop between {} and {}",
                h,
                h + 1
            );
        }
    }
}
