//! Zombie Tag Headless Simulation Harness
//!
//! Validates the pure game rules and the shipped rule presets without
//! any device hardware. Runs entirely in-process — no sensors, no LEDs,
//! no networking.
//!
//! Usage:
//!   cargo run -p zombietag-simtest
//!   cargo run -p zombietag-simtest -- --verbose

use rand::Rng;
use serde::Deserialize;

use zombietag_logic::bands::{bounds, HealthBand};
use zombietag_logic::health::{Exposure, ExposureError, HealthModel, HealthRules, HealthState};
use zombietag_logic::indicator::{IndicatorMapper, IndicatorRules, LightColor};

// ── Rule presets (same JSON a device build would bake in) ───────────────
const PRESETS_JSON: &str = include_str!("../../../data/rule_presets.json");

#[derive(Debug, Deserialize)]
struct RulePreset {
    name: String,
    #[serde(flatten)]
    health: HealthRules,
    #[serde(flatten)]
    indicator: IndicatorRules,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: String) -> TestResult {
    TestResult {
        name: name.into(),
        passed,
        detail,
    }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Zombie Tag Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Rule preset file sanity
    results.extend(validate_presets(verbose));

    // 2. Band classification sweep
    results.extend(validate_bands(verbose));

    // 3. Health model properties
    results.extend(validate_health_model(verbose));

    // 4. Indicator mapping
    results.extend(validate_indicator(verbose));

    // 5. Full-game demo runs with random exposures
    results.extend(run_demo_games(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Rule presets ─────────────────────────────────────────────────────

fn validate_presets(verbose: bool) -> Vec<TestResult> {
    println!("--- Rule Presets ---");
    let mut results = Vec::new();

    let presets: Vec<RulePreset> = match serde_json::from_str(PRESETS_JSON) {
        Ok(p) => p,
        Err(e) => {
            results.push(check(
                "presets_parse",
                false,
                format!("JSON parse error: {}", e),
            ));
            return results;
        }
    };

    results.push(check(
        "presets_not_empty",
        presets.len() == 2,
        format!("{} presets loaded", presets.len()),
    ));

    // The data file must agree with the compiled-in constants.
    let classic = presets.iter().find(|p| p.name == "classic");
    results.push(check(
        "preset_classic_matches_const",
        classic.map(|p| p.health) == Some(HealthRules::CLASSIC),
        format!("{:?}", classic.map(|p| p.health)),
    ));
    let gentle = presets.iter().find(|p| p.name == "gentle");
    results.push(check(
        "preset_gentle_matches_const",
        gentle.map(|p| p.health) == Some(HealthRules::GENTLE),
        format!("{:?}", gentle.map(|p| p.health)),
    ));

    for p in &presets {
        let sane = p.health.human_infection_rate > 0
            && p.health.cat_infection_rate > 0
            && p.health.infected_progress > 0
            && p.indicator.max_blink_rate > 0;
        results.push(check(
            &format!("preset_{}_rates_positive", p.name),
            sane,
            format!("{:?} {:?}", p.health, p.indicator),
        ));
        if verbose {
            println!("  preset {}: {:?}", p.name, p.health);
        }
    }

    results
}

// ── 2. Bands ────────────────────────────────────────────────────────────

fn validate_bands(_verbose: bool) -> Vec<TestResult> {
    println!("--- Band Classification ---");
    let mut results = Vec::new();

    // Every boundary lands where the rules say it should.
    let expectations = [
        (-100, HealthBand::Immune),
        (1, HealthBand::Immune),
        (2, HealthBand::SuperHealthy),
        (10, HealthBand::Healthy),
        (40, HealthBand::InfectedAsym),
        (70, HealthBand::InfectedSym),
        (90, HealthBand::InfectedSymLate),
        (99, HealthBand::Zombie),
        (1000, HealthBand::Zombie),
    ];
    let bad: Vec<_> = expectations
        .iter()
        .filter(|(h, b)| HealthBand::from_health(*h) != *b)
        .collect();
    results.push(check(
        "band_boundaries",
        bad.is_empty(),
        if bad.is_empty() {
            "all boundary values classified correctly".into()
        } else {
            format!("misclassified: {:?}", bad)
        },
    ));

    // Adjacent health values never skip a band going up.
    let mut ordered = true;
    let mut prev = HealthBand::from_health(-200);
    for h in -199..300 {
        let band = HealthBand::from_health(h);
        if (band as u8) < (prev as u8) {
            ordered = false;
        }
        prev = band;
    }
    results.push(check(
        "bands_ordered",
        ordered,
        "classification is monotone in health".into(),
    ));

    results
}

// ── 3. Health model ─────────────────────────────────────────────────────

fn validate_health_model(_verbose: bool) -> Vec<TestResult> {
    println!("--- Health Model ---");
    let mut results = Vec::new();

    let model = HealthModel::new(HealthRules::CLASSIC);
    let heavy = Exposure { human: 10, cat: 10 };

    // Terminal bands are fixed points regardless of exposure.
    let zombie_ok = [99, 120, 500].iter().all(|&h| {
        let s = HealthState {
            health: h,
            cat_resistance: true,
        };
        model.update(s, heavy).map(|n| n.health) == Ok(bounds::ZOMBIE)
    });
    results.push(check(
        "zombie_fixed_point",
        zombie_ok,
        "zombie health pinned at 99".into(),
    ));

    let immune_ok = [1, 0, -20].iter().all(|&h| {
        let s = HealthState {
            health: h,
            cat_resistance: false,
        };
        model.update(s, heavy).map(|n| n.health) == Ok(bounds::IMMUNE)
    });
    results.push(check(
        "immune_fixed_point",
        immune_ok,
        "immune health pinned at 1".into(),
    ));

    // The worked example from the classic rules.
    let next = model.update(
        HealthState {
            health: 3,
            cat_resistance: false,
        },
        Exposure::default(),
    );
    results.push(check(
        "classic_progress_from_3",
        next.map(|n| n.health) == Ok(7),
        format!("health 3 + progress -> {:?}", next.map(|n| n.health)),
    ));

    // Negative exposure is rejected at the boundary.
    let err = model.update(HealthState::default(), Exposure { human: -1, cat: 0 });
    results.push(check(
        "negative_exposure_rejected",
        err == Err(ExposureError::NegativeCount { human: -1, cat: 0 }),
        format!("{:?}", err),
    ));

    // Infected participants stop accumulating exposure: with or
    // without contacts, an asymptomatic case climbs by the same step.
    let infected = HealthState {
        health: 50,
        cat_resistance: true,
    };
    let quiet = model.update(infected, Exposure::default());
    let crowded = model.update(infected, heavy);
    results.push(check(
        "infected_ignores_exposure",
        quiet == crowded && quiet.map(|n| n.health) == Ok(58),
        format!("quiet {:?} vs crowded {:?}", quiet, crowded),
    ));

    results
}

// ── 4. Indicator ────────────────────────────────────────────────────────

fn validate_indicator(_verbose: bool) -> Vec<TestResult> {
    println!("--- Indicator Mapping ---");
    let mut results = Vec::new();

    let mapper = IndicatorMapper::new(IndicatorRules::CLASSIC);

    let spot_checks = [
        (1, LightColor::Green, 0),
        (99, LightColor::Red, 0),
        (95, LightColor::Red, 100),
        (75, LightColor::Red, 75),
        (20, LightColor::None, 0),
    ];
    let bad: Vec<_> = spot_checks
        .iter()
        .filter(|(h, color, rate)| {
            let led = mapper.map(*h);
            led.color != *color || led.blink_rate != *rate
        })
        .collect();
    results.push(check(
        "indicator_spot_checks",
        bad.is_empty(),
        if bad.is_empty() {
            "all spot values map correctly".into()
        } else {
            format!("mismatches at {:?}", bad)
        },
    ));

    // Blink rate never decreases as a symptomatic case worsens, and
    // never exceeds the late-stage rate.
    let mut monotone = true;
    let mut capped = true;
    let mut prev_rate = 0;
    for h in bounds::INFECTED_SYM..bounds::INFECTED_SYM_LATE {
        let led = mapper.map(h);
        if led.blink_rate < prev_rate {
            monotone = false;
        }
        if led.blink_rate > mapper.rules().max_blink_rate {
            capped = false;
        }
        prev_rate = led.blink_rate;
    }
    results.push(check(
        "symptomatic_blink_monotone",
        monotone,
        "rate non-decreasing across 70..90".into(),
    ));
    results.push(check(
        "symptomatic_blink_capped",
        capped,
        "rate never exceeds max".into(),
    ));

    results
}

// ── 5. Demo games ───────────────────────────────────────────────────────

/// Run a handful of participants through a full game under each preset:
/// the fixed exposure profiles the rules were originally tuned with,
/// plus one participant with uniform random exposures per tick.
fn run_demo_games(verbose: bool) -> Vec<TestResult> {
    println!("--- Demo Games ---");
    let mut results = Vec::new();

    let presets: Vec<RulePreset> = match serde_json::from_str(PRESETS_JSON) {
        Ok(p) => p,
        Err(_) => return results, // already reported by validate_presets
    };

    let mut rng = rand::thread_rng();
    let ticks = 40;

    for preset in &presets {
        let model = HealthModel::new(preset.health);
        let mapper = IndicatorMapper::new(preset.indicator);

        let profiles: [(&str, Option<Exposure>); 5] = [
            ("isolated", Some(Exposure { human: 0, cat: 0 })),
            ("one_human", Some(Exposure { human: 1, cat: 0 })),
            ("one_cat", Some(Exposure { human: 0, cat: 1 })),
            ("mobbed", Some(Exposure { human: 3, cat: 3 })),
            ("random", None),
        ];

        for (label, fixed) in profiles {
            let mut state = HealthState::default();
            let mut ok = true;
            let mut detail = String::new();

            for tick in 1..=ticks {
                let exposure = fixed.unwrap_or_else(|| Exposure {
                    human: rng.gen_range(0..=3),
                    cat: rng.gen_range(0..=3),
                });
                let was_terminal = state.band().is_terminal();
                let before = state.health;

                state = match model.update(state, exposure) {
                    Ok(next) => next,
                    Err(e) => {
                        ok = false;
                        detail = format!("tick {}: {}", tick, e);
                        break;
                    }
                };
                let led = mapper.map(state.health);

                if verbose {
                    println!(
                        "  [{}/{}] tick {:2}: health {:3} {:?} -> {:?}",
                        preset.name,
                        label,
                        tick,
                        state.health,
                        state.band(),
                        led
                    );
                }

                // Invariants that must hold on every tick of any game.
                if was_terminal && state.health != before {
                    ok = false;
                    detail = format!("tick {}: terminal state moved from {}", tick, before);
                    break;
                }
                if state.health < before {
                    ok = false;
                    detail = format!(
                        "tick {}: health decreased {} -> {}",
                        tick, before, state.health
                    );
                    break;
                }
                if state.band() == HealthBand::Zombie && state.health != bounds::ZOMBIE {
                    ok = false;
                    detail = format!("tick {}: unpinned zombie at {}", tick, state.health);
                    break;
                }
                if state.cat_resistance != state.band().is_infected() {
                    ok = false;
                    detail = format!("tick {}: stale cat resistance", tick);
                    break;
                }
            }

            if ok {
                detail = format!(
                    "{} ticks, final health {} ({:?})",
                    ticks,
                    state.health,
                    state.band()
                );
            }
            results.push(check(&format!("game_{}_{}", preset.name, label), ok, detail));
        }

        // The mobbed profile must actually lose the game under both
        // rule sets; anything else means the rates are off.
        let mut state = HealthState::default();
        for _ in 0..200 {
            state = model
                .update(state, Exposure { human: 3, cat: 3 })
                .unwrap_or(state);
        }
        results.push(check(
            &format!("game_{}_mobbed_turns_zombie", preset.name),
            state.band() == HealthBand::Zombie,
            format!("final health {}", state.health),
        ));
    }

    results
}
