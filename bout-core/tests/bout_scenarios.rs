//! Scripted bout scenarios driven through the public session API.
//!
//! Run with: `cargo test -p bout-core --test bout_scenarios`

use bout_core::{
    Archetype, BetweenRounds, BoutConfig, BoutError, BoutHarness, BoutSession, Corner, Effect,
    Fighter, FighterConfig, FixedDraw, Outcome, Stat, Strike,
};

// =============================================================================
// Round flow
// =============================================================================

#[test]
fn round_numbers_count_up_from_one() {
    let mut harness = BoutHarness::new();
    let reports = harness.fight_to_finish(100).unwrap();

    for (index, report) in reports.iter().enumerate() {
        assert_eq!(report.round, index as u32 + 1);
    }
    assert_eq!(
        harness.session.bout().round(),
        reports.len() as u32 + 1
    );
}

#[test]
fn classic_bout_with_fixed_draws() {
    // Red always jabs: 50 - 35 = 15. Blue always front kicks: 50 - 25 = 25.
    let mut harness = BoutHarness::new();
    let reports = harness.fight_to_finish(100).unwrap();

    assert_eq!(reports.len(), 4);
    harness.assert_winner(Corner::Blue);
    harness.assert_stamina(Corner::Red, 0);
    harness.assert_stamina(Corner::Blue, 40);

    let last = reports.last().unwrap();
    assert_eq!(last.winner, Some(Corner::Blue));
    assert_eq!(
        last.effects[1].narrative(),
        "CPU counters with a front kick for 25 damage!"
    );
}

#[test]
fn resting_every_round_changes_the_result() {
    let mut harness = BoutHarness::new();
    while harness.session.outcome().is_none() {
        harness.round_then(BetweenRounds::Rest).unwrap();
    }
    // Red loses 25 and regains 20 each round, while blue loses 15.
    harness.assert_winner(Corner::Red);
}

#[test]
fn knocked_out_blue_never_answers() {
    let red = Fighter::new("Red", Archetype::Boxer)
        .with_loadout([Strike::Jab])
        .with_stat(Stat::Stamina, 10);
    let blue = Fighter::new("Blue", Archetype::Boxer)
        .with_loadout([Strike::Jab])
        .with_stat(Stat::Stamina, 20);
    let mut harness = BoutHarness::with_fighters(red, blue);

    let report = harness.round().unwrap();
    // blue drops on red's jab and never answers
    assert_eq!(report.effects.len(), 1);
    harness.assert_winner(Corner::Red);
    harness.assert_stamina(Corner::Red, 10);
}

#[test]
fn simultaneous_zero_goes_to_red() {
    let red = Fighter::new("Red", Archetype::Boxer).with_stat(Stat::Stamina, 0);
    let blue = Fighter::new("Blue", Archetype::Boxer).with_stat(Stat::Stamina, 0);
    let mut harness = BoutHarness::with_fighters(red, blue);

    let report = harness.round().unwrap();
    assert_eq!(report.winner, Some(Corner::Red));
}

// =============================================================================
// Rest
// =============================================================================

#[test]
fn rest_caps_at_one_hundred() {
    let red = Fighter::new("Player", Archetype::Boxer).with_stat(Stat::Stamina, 90);
    let blue = Fighter::new("CPU", Archetype::Boxer);
    let mut harness = BoutHarness::with_fighters(red, blue);

    let effect = harness.rest().unwrap();
    harness.assert_stamina(Corner::Red, 100);
    assert_eq!(
        effect,
        Effect::Rested {
            corner: Corner::Red,
            name: "Player".to_string(),
            amount: 20,
            recovered: 10,
            new_stamina: 100,
        }
    );
}

#[test]
fn rest_amount_is_configurable() {
    let config = BoutConfig::new().with_rest_amount(5);
    let mut harness = BoutHarness::with_config(config, FixedDraw::neutral());
    harness.round().unwrap();
    let before = harness.stamina(Corner::Red);

    harness.rest().unwrap();
    harness.assert_stamina(Corner::Red, before + 5);
}

// =============================================================================
// Edge cases
// =============================================================================

#[test]
fn empty_loadouts_never_end() {
    let mut harness = BoutHarness::with_corners(
        FighterConfig::new("Statue", Archetype::Boxer),
        FighterConfig::new("Mirror", Archetype::Boxer),
    );
    let reports = harness.fight_to_finish(250).unwrap();

    assert_eq!(reports.len(), 250);
    assert!(reports.iter().all(|r| r.effects.is_empty()));
    harness.assert_undecided();
    harness.assert_stamina(Corner::Red, 100);
    harness.assert_stamina(Corner::Blue, 100);
}

#[test]
fn unmapped_strike_is_rejected() {
    let config = BoutConfig::new()
        .with_player(FighterConfig::new("Clinch", Archetype::Boxer).with_loadout([Strike::Elbow]));
    let mut session = BoutSession::with_rng(config, FixedDraw::neutral());

    assert_eq!(
        session.play_round(),
        Err(BoutError::InvalidStrike(Strike::Elbow))
    );
    assert_eq!(session.bout().round(), 1);
}

#[test]
fn round_limit_reports_no_contest() {
    let config = BoutConfig::new()
        .with_player(FighterConfig::new("A", Archetype::Boxer))
        .with_opponent(FighterConfig::new("B", Archetype::Boxer))
        .with_max_rounds(12);
    let mut session = BoutSession::new(config.with_seed(5));

    while session.outcome().is_none() {
        session.play_round().unwrap();
    }
    assert_eq!(session.outcome(), Some(Outcome::NoContest { rounds: 12 }));
    assert!(session.winner().is_none());
}

#[test]
fn reports_serialize_to_json() {
    let mut harness = BoutHarness::new();
    let report = harness.round().unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["round"], 1);
    assert_eq!(json["effects"][0]["StrikeLanded"]["strike"], "jab");
    assert_eq!(json["effects"][0]["StrikeLanded"]["attacker"], "Red");
}
