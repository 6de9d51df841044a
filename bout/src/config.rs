//! Command line configuration for the console front end.

use anyhow::{bail, Context, Result};
use bout_core::{parse_loadout, Archetype, BoutConfig};
use std::time::Duration;

/// Pause after each narrated strike or rest.
pub const DEFAULT_PACE: Duration = Duration::from_millis(1000);

/// Everything the binary needs to run a bout.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub bout: BoutConfig,
    /// Pause between narration lines. Zero disables pacing.
    pub pace: Duration,
    /// Line-oriented mode for scripts and automated play.
    pub headless: bool,
    /// Also print each round report as JSON (headless only).
    pub json: bool,
    pub show_help: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            bout: BoutConfig::new(),
            pace: DEFAULT_PACE,
            headless: false,
            json: false,
            show_help: false,
        }
    }
}

/// Parse configuration from command line arguments.
///
/// `args[0]` is the program name and is skipped. Unknown flags are ignored.
/// A valued flag with its value missing, or followed by another flag, is an
/// error.
pub fn parse_config_from_args(args: &[String]) -> Result<ConsoleConfig> {
    let mut config = ConsoleConfig::default();

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-h" | "--help" => config.show_help = true,
            "--headless" => {
                config.headless = true;
                config.pace = Duration::ZERO;
            }
            "--json" => config.json = true,
            _ if VALUED_FLAGS.contains(&flag) => {
                let value = match args.get(i + 1) {
                    Some(value) if !value.starts_with("--") => value,
                    Some(value) => bail!("{flag} expects a value, got flag '{value}'"),
                    None => bail!("{flag} expects a value"),
                };
                apply_valued_flag(&mut config, flag, value)?;
                i += 1;
            }
            _ => tracing::debug!(flag, "ignoring unknown argument"),
        }
        i += 1;
    }

    Ok(config)
}

const VALUED_FLAGS: &[&str] = &[
    "--name",
    "--archetype",
    "--strikes",
    "--stance",
    "--opponent-name",
    "--opponent-archetype",
    "--opponent-strikes",
    "--opponent-stance",
    "--seed",
    "--max-rounds",
    "--rest",
    "--pace-ms",
];

fn apply_valued_flag(config: &mut ConsoleConfig, flag: &str, value: &str) -> Result<()> {
    let bout = &mut config.bout;
    match flag {
        "--name" => bout.player.name = value.to_string(),
        "--archetype" => bout.player.archetype = Archetype::from_tag(value),
        "--stance" => bout.player.stance = value.parse().context("Invalid --stance")?,
        "--strikes" => {
            bout.player.loadout = parse_loadout(value).context("Invalid --strikes")?;
        }
        "--opponent-name" => bout.opponent.name = value.to_string(),
        "--opponent-archetype" => bout.opponent.archetype = Archetype::from_tag(value),
        "--opponent-strikes" => {
            bout.opponent.loadout = parse_loadout(value).context("Invalid --opponent-strikes")?;
        }
        "--opponent-stance" => {
            bout.opponent.stance = value.parse().context("Invalid --opponent-stance")?;
        }
        "--seed" => bout.seed = Some(parse_number(flag, value)?),
        "--max-rounds" => bout.max_rounds = Some(parse_number(flag, value)?),
        "--rest" => bout.rest_amount = parse_number(flag, value)?,
        "--pace-ms" => config.pace = Duration::from_millis(parse_number(flag, value)?),
        _ => bail!("Unknown option {flag}"),
    }
    Ok(())
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T> {
    match value.parse() {
        Ok(n) => Ok(n),
        Err(_) => bail!("{flag} expects a number, got '{value}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bout_core::{BetweenRounds, BoutSession, ChoiceOutcome, Stance, Strike};

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("bout")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = parse_config_from_args(&args(&[])).unwrap();
        assert_eq!(config.pace, DEFAULT_PACE);
        assert!(!config.headless);
        assert_eq!(config.bout.player.name, "Player");
        assert_eq!(config.bout.opponent.archetype, Archetype::CounterSniper);
        assert_eq!(config.bout.seed, None);
    }

    #[test]
    fn test_fighter_flags() {
        let config = parse_config_from_args(&args(&[
            "--name",
            "Ali",
            "--archetype",
            "counter-sniper",
            "--strikes",
            "jab,uppercut",
            "--opponent-strikes",
            "",
            "--seed",
            "42",
        ]))
        .unwrap();

        assert_eq!(config.bout.player.name, "Ali");
        assert_eq!(config.bout.player.archetype, Archetype::CounterSniper);
        assert_eq!(config.bout.player.loadout, vec![Strike::Jab, Strike::Uppercut]);
        assert!(config.bout.opponent.loadout.is_empty());
        assert_eq!(config.bout.seed, Some(42));
    }

    #[test]
    fn test_headless_disables_pacing() {
        let config = parse_config_from_args(&args(&["--headless", "--json"])).unwrap();
        assert!(config.headless);
        assert!(config.json);
        assert_eq!(config.pace, Duration::ZERO);
    }

    #[test]
    fn test_bad_values_are_errors() {
        assert!(parse_config_from_args(&args(&["--strikes", "jab,headbutt"])).is_err());
        assert!(parse_config_from_args(&args(&["--seed", "lucky"])).is_err());
        assert!(parse_config_from_args(&args(&["--stance", "switch"])).is_err());
    }

    #[test]
    fn test_missing_values_are_errors() {
        assert!(parse_config_from_args(&args(&["--seed"])).is_err());
        assert!(parse_config_from_args(&args(&["--headless", "--rest"])).is_err());
        assert!(parse_config_from_args(&args(&["--name", "--headless"])).is_err());
        // unknown flags are skipped on their own
        let config = parse_config_from_args(&args(&["--verbose", "--seed", "3"])).unwrap();
        assert_eq!(config.bout.seed, Some(3));
    }

    #[test]
    fn test_negative_rest_is_rejected() {
        assert!(parse_config_from_args(&args(&["--rest", "-150"])).is_err());

        let mut config = parse_config_from_args(&args(&["--rest", "150"])).unwrap();
        config.bout.seed = Some(5);
        let mut session = BoutSession::new(config.bout);
        session.play_round().unwrap();
        let before = session.player().stamina();
        match session.choose(BetweenRounds::Rest).unwrap() {
            ChoiceOutcome::Rested(effect) => {
                assert_eq!(effect.narrative(), "Player rests and recovers 150 stamina!");
            }
            other => panic!("Expected rest, got {other:?}"),
        }
        assert!(session.player().stamina() >= before);
        assert_eq!(session.player().stamina(), 100);
    }

    #[test]
    fn test_stance_flags() {
        let config = parse_config_from_args(&args(&[
            "--stance",
            "southpaw",
            "--opponent-stance",
            "orthodox",
        ]))
        .unwrap();
        assert_eq!(config.bout.player.stance, Stance::Southpaw);
        assert_eq!(config.bout.opponent.stance, Stance::Orthodox);
        assert_eq!(BoutSession::new(config.bout).player().stance, Stance::Southpaw);
    }
}
