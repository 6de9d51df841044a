//! Interactive console bout.
//!
//! Clears the screen each round, narrates the exchange with a short pause
//! between lines, and asks for the between-round choice.

use crate::config::ConsoleConfig;
use crate::render::{clear_screen, fighter_summary, header, menu, outcome_banner, PROMPT};
use anyhow::{Context, Result};
use bout_core::{BetweenRounds, BoutSession, ChoiceOutcome, Outcome};
use std::io::{BufRead, Write};
use std::thread;

/// Run a bout to completion against the given input and output.
pub fn run_interactive<I: BufRead, O: Write>(
    config: &ConsoleConfig,
    input: &mut I,
    out: &mut O,
) -> Result<Outcome> {
    let mut session = BoutSession::new(config.bout.clone());

    clear_screen(out)?;
    writeln!(out, "{}", header("Tale of the Tape"))?;
    writeln!(out, "{}\n", fighter_summary(session.player()))?;
    writeln!(out, "{}", fighter_summary(session.opponent()))?;
    pause(config);

    loop {
        clear_screen(out)?;
        writeln!(out, "{}", header(&format!("Round {}", session.bout().round())))?;

        let report = session.play_round().context("Round could not be fought")?;
        for effect in &report.effects {
            writeln!(out, "{}", effect.narrative())?;
            out.flush()?;
            pause(config);
        }

        if let Some(outcome) = session.outcome() {
            clear_screen(out)?;
            writeln!(out, "{}", header("Fight Result"))?;
            writeln!(
                out,
                "{}",
                outcome_banner(outcome, session.player(), session.opponent())
            )?;
            return Ok(outcome);
        }

        writeln!(out, "{}", menu(session.config().rest_amount))?;
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let choice = read_choice(input)?;
        match session.choose(choice)? {
            ChoiceOutcome::Rested(effect) => {
                writeln!(out, "{}", effect.narrative())?;
                pause(config);
            }
            ChoiceOutcome::StrikesUnchanged => {
                writeln!(out, "Changing strikes is coming soon.")?;
            }
            ChoiceOutcome::Kept => {}
        }
    }
}

/// Read one menu line. End of input counts as keeping the strategy.
pub fn read_choice<I: BufRead>(input: &mut I) -> Result<BetweenRounds> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read choice")?;
    if read == 0 {
        return Ok(BetweenRounds::KeepStrategy);
    }
    Ok(BetweenRounds::from_input(&line))
}

fn pause(config: &ConsoleConfig) {
    if !config.pace.is_zero() {
        thread::sleep(config.pace);
    }
}
