//! Health classification bands.
//!
//! The health value partitions the integer line into seven contiguous
//! half-open ranges. Immune is open-ended below, zombie open-ended
//! above, so every integer lands in exactly one band.

use serde::{Deserialize, Serialize};

/// Band boundary values.
///
/// Each constant is the inclusive lower bound of its band; the band
/// runs up to (excluding) the next constant. `IMMUNE` is the one
/// exception — it is an inclusive *upper* bound, since immune covers
/// everything at or below it.
pub mod bounds {
    pub const IMMUNE: i32 = 1;
    pub const SUPER_HEALTHY: i32 = 2;
    pub const HEALTHY: i32 = 10;
    pub const INFECTED_ASYM: i32 = 40;
    pub const INFECTED_SYM: i32 = 70;
    pub const INFECTED_SYM_LATE: i32 = 90;
    pub const ZOMBIE: i32 = 99;
}

/// Infection classification derived from a health value.
///
/// Never stored — always recomputed from the current health value via
/// [`HealthBand::from_health`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthBand {
    /// `..=1` — terminal, health pinned at 1.
    Immune,
    /// `2..10` — hovers near the top of the band rather than drifting up.
    SuperHealthy,
    /// `10..40`
    Healthy,
    /// `40..70` — infected, no visible symptoms yet.
    InfectedAsym,
    /// `70..90` — infected and visibly symptomatic.
    InfectedSym,
    /// `90..99` — late-stage symptomatic.
    InfectedSymLate,
    /// `99..` — terminal, health pinned at 99.
    Zombie,
}

impl HealthBand {
    /// Classify a health value. Total over all of `i32`; exactly one
    /// band matches any value.
    pub fn from_health(health: i32) -> Self {
        if health <= bounds::IMMUNE {
            Self::Immune
        } else if health < bounds::HEALTHY {
            Self::SuperHealthy
        } else if health < bounds::INFECTED_ASYM {
            Self::Healthy
        } else if health < bounds::INFECTED_SYM {
            Self::InfectedAsym
        } else if health < bounds::INFECTED_SYM_LATE {
            Self::InfectedSym
        } else if health < bounds::ZOMBIE {
            Self::InfectedSymLate
        } else {
            Self::Zombie
        }
    }

    /// Whether the disease has taken hold — any infected band, zombie
    /// included.
    pub fn is_infected(self) -> bool {
        matches!(
            self,
            Self::InfectedAsym | Self::InfectedSym | Self::InfectedSymLate | Self::Zombie
        )
    }

    /// Terminal bands never transition out; the driver can stop
    /// gathering exposures for these participants.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Immune | Self::Zombie)
    }

    /// The value a terminal band pins health to, if any.
    pub fn pinned_health(self) -> Option<i32> {
        match self {
            Self::Immune => Some(bounds::IMMUNE),
            Self::Zombie => Some(bounds::ZOMBIE),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_at_boundaries() {
        assert_eq!(HealthBand::from_health(i32::MIN), HealthBand::Immune);
        assert_eq!(HealthBand::from_health(0), HealthBand::Immune);
        assert_eq!(HealthBand::from_health(1), HealthBand::Immune);
        assert_eq!(HealthBand::from_health(2), HealthBand::SuperHealthy);
        assert_eq!(HealthBand::from_health(9), HealthBand::SuperHealthy);
        assert_eq!(HealthBand::from_health(10), HealthBand::Healthy);
        assert_eq!(HealthBand::from_health(39), HealthBand::Healthy);
        assert_eq!(HealthBand::from_health(40), HealthBand::InfectedAsym);
        assert_eq!(HealthBand::from_health(69), HealthBand::InfectedAsym);
        assert_eq!(HealthBand::from_health(70), HealthBand::InfectedSym);
        assert_eq!(HealthBand::from_health(89), HealthBand::InfectedSym);
        assert_eq!(HealthBand::from_health(90), HealthBand::InfectedSymLate);
        assert_eq!(HealthBand::from_health(98), HealthBand::InfectedSymLate);
        assert_eq!(HealthBand::from_health(99), HealthBand::Zombie);
        assert_eq!(HealthBand::from_health(i32::MAX), HealthBand::Zombie);
    }

    #[test]
    fn bands_partition_the_integer_line() {
        // Every value in a generous sweep matches exactly one band
        // predicate set derived from the bounds.
        for h in -200..300 {
            let band = HealthBand::from_health(h);
            let memberships = [
                (h <= bounds::IMMUNE, HealthBand::Immune),
                (
                    (bounds::SUPER_HEALTHY..bounds::HEALTHY).contains(&h),
                    HealthBand::SuperHealthy,
                ),
                (
                    (bounds::HEALTHY..bounds::INFECTED_ASYM).contains(&h),
                    HealthBand::Healthy,
                ),
                (
                    (bounds::INFECTED_ASYM..bounds::INFECTED_SYM).contains(&h),
                    HealthBand::InfectedAsym,
                ),
                (
                    (bounds::INFECTED_SYM..bounds::INFECTED_SYM_LATE).contains(&h),
                    HealthBand::InfectedSym,
                ),
                (
                    (bounds::INFECTED_SYM_LATE..bounds::ZOMBIE).contains(&h),
                    HealthBand::InfectedSymLate,
                ),
                (h >= bounds::ZOMBIE, HealthBand::Zombie),
            ];
            let matching: Vec<_> = memberships.iter().filter(|(hit, _)| *hit).collect();
            assert_eq!(matching.len(), 1, "health {} matched {:?}", h, matching);
            assert_eq!(matching[0].1, band, "health {}", h);
        }
    }

    #[test]
    fn infected_covers_all_infected_bands_and_zombie() {
        assert!(!HealthBand::Immune.is_infected());
        assert!(!HealthBand::SuperHealthy.is_infected());
        assert!(!HealthBand::Healthy.is_infected());
        assert!(HealthBand::InfectedAsym.is_infected());
        assert!(HealthBand::InfectedSym.is_infected());
        assert!(HealthBand::InfectedSymLate.is_infected());
        assert!(HealthBand::Zombie.is_infected());
    }

    #[test]
    fn terminal_bands_pin_their_health() {
        assert_eq!(HealthBand::Immune.pinned_health(), Some(bounds::IMMUNE));
        assert_eq!(HealthBand::Zombie.pinned_health(), Some(bounds::ZOMBIE));
        assert_eq!(HealthBand::Healthy.pinned_health(), None);
        assert!(HealthBand::Immune.is_terminal());
        assert!(HealthBand::Zombie.is_terminal());
        assert!(!HealthBand::InfectedSymLate.is_terminal());
    }
}
