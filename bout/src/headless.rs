//! Headless mode for the bout simulator.
//!
//! This module provides a simple text-based interface for running a bout
//! without screen control. It's designed for scripts and automated play.

use crate::config::ConsoleConfig;
use crate::interactive::read_choice;
use crate::render::{fighter_summary, outcome_banner};
use anyhow::{Context, Result};
use bout_core::{BoutSession, ChoiceOutcome, Effect, Outcome};
use std::io::{BufRead, Write};

/// Run the bout in headless mode.
///
/// This provides a simple line-oriented protocol:
/// - `[ROUND n]` opens each round
/// - `[STRIKE]` and `[REST]` lines narrate effects
/// - `[JSON]` lines carry the full round report when `--json` is set
/// - `[CHOICE]` asks for one input line (`1`, `2` or `3`)
/// - `[RESULT]` closes the bout
pub fn run_headless<I: BufRead, O: Write>(
    config: &ConsoleConfig,
    input: &mut I,
    out: &mut O,
) -> Result<Outcome> {
    let mut session = BoutSession::new(config.bout.clone());

    writeln!(out, "=== Bout Headless Mode ===")?;
    writeln!(out, "[RED]\n{}", fighter_summary(session.player()))?;
    writeln!(out, "[BLUE]\n{}", fighter_summary(session.opponent()))?;
    writeln!(out)?;

    loop {
        writeln!(out, "[ROUND {}]", session.bout().round())?;
        let report = session.play_round().context("Round could not be fought")?;

        for effect in &report.effects {
            writeln!(out, "{} {}", tag(effect), effect.narrative())?;
        }
        if config.json {
            let json = serde_json::to_string(&report).context("Failed to encode round report")?;
            writeln!(out, "[JSON] {json}")?;
        }
        writeln!(
            out,
            "[STATUS] {}: {} | {}: {}",
            session.player().name,
            session.player().stamina(),
            session.opponent().name,
            session.opponent().stamina()
        )?;

        if let Some(outcome) = session.outcome() {
            writeln!(
                out,
                "[RESULT] {}",
                outcome_banner(outcome, session.player(), session.opponent())
            )?;
            out.flush()?;
            return Ok(outcome);
        }

        writeln!(out, "[CHOICE]")?;
        out.flush()?;

        match session.choose(read_choice(input)?)? {
            ChoiceOutcome::Rested(effect) => {
                writeln!(out, "{} {}", tag(&effect), effect.narrative())?;
            }
            ChoiceOutcome::StrikesUnchanged => {
                writeln!(out, "[INFO] Changing strikes is coming soon.")?;
            }
            ChoiceOutcome::Kept => {}
        }
    }
}

fn tag(effect: &Effect) -> &'static str {
    match effect {
        Effect::StrikeLanded { .. } => "[STRIKE]",
        Effect::Rested { .. } => "[REST]",
    }
}
