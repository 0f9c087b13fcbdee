//! Pure simulation logic for the zombie tag game.
//!
//! Each participant wears a device that carries a single integer health
//! value. The value climbs as the wearer is exposed to infected humans
//! and to cats (a secondary vector), and the device maps the value to a
//! visible light so nearby players can read the wearer's condition.
//!
//! This crate contains the rules only: plain data in, plain data out.
//! It knows nothing about proximity sensors, LEDs, or game servers —
//! any driver (hardware firmware, a headless harness, a plotting tool)
//! owns the tick loop and calls in here once per tick.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`bands`] | Health classification bands over the integer line |
//! | [`health`] | Per-tick health progression ([`health::HealthModel`]) |
//! | [`indicator`] | Health value → LED color and blink rate |

pub mod bands;
pub mod health;
pub mod indicator;
