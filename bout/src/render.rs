//! Text formatting for the console.

use bout_core::{Corner, Fighter, Outcome};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

const RULE_WIDTH: usize = 30;
const TOP_STATS: usize = 3;

pub const PROMPT: &str = "Choose: ";

pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// `=== TITLE ===` followed by a dashed rule.
pub fn header(title: &str) -> String {
    format!("=== {} ===\n{}", title.to_uppercase(), "-".repeat(RULE_WIDTH))
}

/// The between-round choices.
pub fn menu(rest_amount: u32) -> String {
    format!(
        "\n1. Keep current strategy\n2. Change strikes (coming soon)\n\
         3. Rest (recover {rest_amount} stamina)"
    )
}

/// Name, archetype, level, energy, stance and the top stats.
pub fn fighter_summary(fighter: &Fighter) -> String {
    let mut lines = vec![
        format!("{} ({})", fighter.name, fighter.archetype),
        format!(
            "Level: {} | Energy: {}/100 | Stance: {}",
            fighter.level, fighter.energy, fighter.stance
        ),
        "Top Attributes:".to_string(),
    ];
    for (stat, value) in fighter.top_stats(TOP_STATS) {
        lines.push(format!("  {stat}: {value}"));
    }
    lines.join("\n")
}

pub fn outcome_banner(outcome: Outcome, red: &Fighter, blue: &Fighter) -> String {
    match outcome {
        Outcome::Knockout { winner, .. } => {
            let name = match winner {
                Corner::Red => &red.name,
                Corner::Blue => &blue.name,
            };
            format!("{name} wins by knockout!")
        }
        Outcome::NoContest { rounds } => {
            format!("No contest after {rounds} rounds.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bout_core::Archetype;

    #[test]
    fn test_header() {
        assert_eq!(
            header("Round 3"),
            format!("=== ROUND 3 ===\n{}", "-".repeat(30))
        );
    }

    #[test]
    fn test_menu_mentions_rest_amount() {
        assert!(menu(20).ends_with("3. Rest (recover 20 stamina)"));
    }

    #[test]
    fn test_fighter_summary() {
        let fighter = Fighter::new("Player", Archetype::PressureBrawler);
        let summary = fighter_summary(&fighter);
        let lines: Vec<_> = summary.lines().collect();
        assert_eq!(lines[0], "Player (Pressure Brawler)");
        assert_eq!(lines[1], "Level: 1 | Energy: 100/100 | Stance: orthodox");
        assert_eq!(lines[3], "  Stamina: 100");
        assert_eq!(lines[4], "  Aggression: 80");
        assert_eq!(lines[5], "  Hook Power: 70");
    }

    #[test]
    fn test_outcome_banner() {
        let red = Fighter::new("Player", Archetype::Boxer);
        let blue = Fighter::new("CPU", Archetype::Boxer);
        assert_eq!(
            outcome_banner(Outcome::Knockout { winner: Corner::Blue, round: 4 }, &red, &blue),
            "CPU wins by knockout!"
        );
        assert_eq!(
            outcome_banner(Outcome::NoContest { rounds: 12 }, &red, &blue),
            "No contest after 12 rounds."
        );
    }
}
