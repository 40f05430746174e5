//! End-to-end tests: raw battle logs in, summaries out
//!
//! Fixtures live in `tests/fixtures/` and are compiled in with `include_str!`.

use vgcscope_analysis::{
    parse_showdown_log, ActionDetails, AnalysisError, AnalyzerConfig, BattleSummary, LogAnalyzer,
    MomentType, Significance,
};

const SAMPLE: &str = include_str!("fixtures/sample.log");
const MINIMAL: &str = include_str!("fixtures/minimal.log");
const MALFORMED: &str = include_str!("fixtures/malformed.log");
const KNOCKOUT: &str = include_str!("fixtures/knockout.log");
const NOISY: &str = include_str!("fixtures/noisy.log");

fn parse(raw: &str) -> BattleSummary {
    parse_showdown_log(raw).expect("log within size limit")
}

fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

fn action_types(summary: &BattleSummary, turn: u32) -> Vec<&str> {
    summary
        .turn(turn)
        .expect("turn exists")
        .actions
        .iter()
        .map(|a| a.action_type.as_str())
        .collect()
}

mod sample_log {
    use super::*;

    #[test]
    fn test_players_format_and_winner() {
        let summary = parse(SAMPLE);

        assert!(!summary.id.is_empty());
        assert_eq!(summary.format, "[Gen 9] VGC 2025 Reg H (Bo3)");
        assert_eq!(summary.player1.name, "Player1");
        assert_eq!(summary.player2.name, "Player2");
        assert_eq!(summary.player1.rating, Some(1487));
        assert_eq!(summary.player2.rating, Some(1398));
        assert_eq!(summary.winner, "player2");
        assert_eq!(summary.winning_player().unwrap().name, "Player2");
        assert_eq!(summary.player1.team, vec!["Pikachu", "Charizard"]);
        assert_eq!(summary.player2.team, vec!["Blastoise", "Dragonite"]);
    }

    #[test]
    fn test_turns_are_contiguous() {
        let summary = parse(SAMPLE);

        assert_eq!(summary.turns.len(), 5);
        assert_eq!(summary.stats.total_turns, summary.turns.len());
        for (i, turn) in summary.turns.iter().enumerate() {
            assert_eq!(turn.number as usize, i + 1);
        }
    }

    #[test]
    fn test_turn_contents() {
        let summary = parse(SAMPLE);

        // Lead switches happen before the first turn marker
        assert_eq!(action_types(&summary, 1), ["switch", "switch", "move", "move"]);
        assert_eq!(action_types(&summary, 2), ["move", "move", "-singleturn"]);
        assert_eq!(action_types(&summary, 3), ["switch", "move"]);
        // The replacement switch after the faint is still turn 4
        assert_eq!(action_types(&summary, 4), ["move", "move", "faint", "switch"]);
        assert_eq!(action_types(&summary, 5), ["move", "move", "faint"]);

        for turn in &summary.turns {
            for action in &turn.actions {
                assert!(action.player == "player1" || action.player == "player2");
            }
        }
    }

    #[test]
    fn test_move_details() {
        let summary = parse(SAMPLE);
        let first = summary.turn(1).unwrap();
        let (action, move_ref) = first.moves().next().unwrap();

        assert_eq!(action.player, "player1");
        assert_eq!(move_ref.id, "thunderbolt");
        assert_eq!(move_ref.name, "Thunderbolt");

        match &action.details {
            ActionDetails::Move {
                target, outcome, ..
            } => {
                assert_eq!(target.as_deref(), Some("Blastoise"));
                assert!(outcome.super_effective);
                assert!(!outcome.critical);
                approx(outcome.damage, 35.0);
            }
            other => panic!("expected move, got {other:?}"),
        }

        let turn4 = summary.turn(4).unwrap();
        let (_, flamethrower) = turn4.moves().next().unwrap();
        assert_eq!(flamethrower.id, "flamethrower");
        match &turn4.actions[0].details {
            ActionDetails::Move { outcome, .. } => assert!(outcome.resisted),
            other => panic!("expected move, got {other:?}"),
        }
    }

    #[test]
    fn test_stats() {
        let stats = parse(SAMPLE).stats;

        assert_eq!(stats.total_moves, 9);
        assert_eq!(stats.move_count("waterfall"), 2);
        assert_eq!(stats.move_count("thunder-wave"), 1);
        assert_eq!(stats.move_count("quick-attack"), 1);
        assert_eq!(stats.move_frequency.values().sum::<u32>(), stats.total_moves);
        assert_eq!(stats.most_used_move(), Some(("waterfall", 2)));

        assert_eq!(stats.switches, 4);
        assert_eq!(stats.super_effective_hits, 5);
        assert_eq!(stats.not_very_effective_hits, 1);
        assert_eq!(stats.critical_hits, 0);

        approx(stats.player1.damage_taken, 200.0);
        approx(stats.player2.damage_taken, 80.0);
        approx(stats.player1.damage_dealt, 80.0);
        approx(stats.player2.damage_dealt, 200.0);
        approx(stats.avg_damage_per_turn, 56.0);
        approx(stats.avg_heal_per_turn, 0.0);
    }

    #[test]
    fn test_key_moments() {
        let summary = parse(SAMPLE);

        let kos: Vec<_> = summary.moments_of(MomentType::KO).collect();
        assert_eq!(kos.len(), 2);
        assert_eq!(kos[0].turn, 4);
        assert_eq!(kos[1].turn, 5);
        assert!(kos.iter().all(|m| m.significance == Significance::High));

        let big_hits: Vec<_> = summary.moments_of(MomentType::BigHit).collect();
        assert_eq!(big_hits.len(), 2);
        assert_eq!(big_hits[0].turn, 1);
        assert!(big_hits[0].description.contains("Pikachu"));
        assert!(big_hits[0].description.ends_with("(super effective)"));
        assert_eq!(big_hits[1].turn, 3);

        assert_eq!(summary.key_moments.len(), 4);
        assert_eq!(summary.player1.losses, 2);
        assert_eq!(summary.player2.losses, 0);
        assert_eq!(summary.total_kos(), 2);
    }

    #[test]
    fn test_ids_unique_but_content_identical() {
        let mut first = parse(SAMPLE);
        let mut second = parse(SAMPLE);

        assert_ne!(first.id, second.id);

        first.id.clear();
        second.id.clear();
        assert_eq!(first, second);
    }
}

#[test]
fn test_minimal_log() {
    let summary = parse(MINIMAL);

    assert_eq!(summary.player1.name, "Player1");
    assert_eq!(summary.player2.name, "Player2");
    assert_eq!(summary.turns.len(), 1);
    assert_eq!(summary.winner, "player1");
    assert_eq!(summary.stats.move_count("tackle"), 1);
}

#[test]
fn test_empty_log() {
    let summary = parse("");

    assert!(!summary.id.is_empty());
    assert!(summary.format.is_empty());
    assert!(summary.player1.name.is_empty());
    assert!(summary.turns.is_empty());
    assert!(summary.winner.is_empty());
    assert!(summary.key_moments.is_empty());
    assert_eq!(summary.stats.total_turns, 0);
    assert_eq!(summary.stats.avg_damage_per_turn, 0.0);
}

#[test]
fn test_malformed_log() {
    let summary = parse(MALFORMED);

    assert!(summary.turns.is_empty());
    assert!(summary.player1.name.is_empty());
    assert!(summary.player2.name.is_empty());
    assert!(summary.stats.move_frequency.is_empty());
}

#[test]
fn test_knockout_scenario() {
    let summary = parse(KNOCKOUT);

    assert_eq!(summary.player1.name, "Alice");
    assert_eq!(summary.player2.name, "Bob");
    assert_eq!(summary.player2.losses, 1);
    assert_eq!(summary.player1.losses, 0);
    assert_eq!(summary.winner, "player1");
    assert_eq!(summary.turns.len(), 2);
    assert_eq!(summary.moments_of(MomentType::KO).count(), 1);

    // 100 -> 45 on turn 1 is a big hit; the finishing blow from 45 is not
    let big_hits: Vec<_> = summary.moments_of(MomentType::BigHit).collect();
    assert_eq!(big_hits.len(), 1);
    assert_eq!(big_hits[0].turn, 1);
    assert!(!big_hits[0].description.contains("super effective"));

    let crits: Vec<_> = summary.moments_of(MomentType::CriticalHit).collect();
    assert_eq!(crits.len(), 1);
    assert_eq!(crits[0].turn, 2);
    assert_eq!(summary.moments_of(MomentType::OneHitKO).count(), 0);

    approx(summary.stats.player2.damage_taken, 100.0);
    approx(summary.stats.player1.damage_dealt, 100.0);
    approx(summary.stats.player1.damage_taken, 0.0);
}

#[test]
fn test_noisy_log() {
    let summary = parse(NOISY);

    assert_eq!(summary.player1.name, "Player1");
    assert_eq!(summary.player2.name, "Player2");
    assert!(summary.winner.is_empty());

    // The skipped-ahead marker becomes turn 2; the later stale one is ignored
    assert_eq!(summary.turns.len(), 2);
    assert_eq!(action_types(&summary, 1), ["move", "-fieldstart", "malformed:move"]);
    assert_eq!(action_types(&summary, 2), ["cant", "-weather", "drag", "heal"]);

    let turn1 = summary.turn(1).unwrap();
    assert!(turn1.actions[0].is_move());
    assert_eq!(turn1.actions[1].player, "");
    assert!(!turn1.actions[2].is_move());

    let turn2 = summary.turn(2).unwrap();
    assert_eq!(turn2.actions[0].player, "player2");
    assert_eq!(turn2.actions[1].player, "");
    assert_eq!(turn2.actions[2].player, "player2");
    assert_eq!(turn2.actions[2].switch_to(), Some("Ferrothorn"));
    assert_eq!(turn2.actions[3].player, "player1");

    assert_eq!(summary.stats.total_moves, 1);
    assert_eq!(summary.stats.switches, 1);
    approx(summary.stats.player2.damage_taken, 0.0);
}

#[test]
fn test_move_actions_always_have_move_details() {
    for raw in [SAMPLE, MINIMAL, KNOCKOUT, NOISY] {
        let summary = parse(raw);
        for action in summary.turns.iter().flat_map(|t| &t.actions) {
            if action.action_type == "move" {
                assert!(action.move_ref().is_some(), "{action:?}");
            }
        }
    }
}

#[test]
fn test_windows_line_endings() {
    let crlf = KNOCKOUT.replace('\n', "\r\n");
    let mut summary = parse(&crlf);
    let mut expected = parse(KNOCKOUT);

    summary.id.clear();
    expected.id.clear();
    assert_eq!(summary, expected);
}

#[test]
fn test_input_too_large() {
    let analyzer = LogAnalyzer::new(AnalyzerConfig::default().with_max_input_bytes(64));

    match analyzer.parse(SAMPLE) {
        Err(AnalysisError::InputTooLarge { size, limit }) => {
            assert_eq!(size, SAMPLE.len());
            assert_eq!(limit, 64);
        }
        other => panic!("expected InputTooLarge, got {other:?}"),
    }

    assert!(analyzer.parse(MALFORMED.lines().next().unwrap()).is_ok());
}

#[cfg(feature = "serde")]
mod json {
    use super::*;

    #[test]
    fn test_json_shape() -> anyhow::Result<()> {
        let summary = parse(KNOCKOUT);
        let json = serde_json::to_value(&summary)?;

        assert_eq!(json["player1"]["name"], "Alice");
        assert_eq!(json["player1"]["rating"], 1500);
        assert_eq!(json["winner"], "player1");
        assert_eq!(json["stats"]["totalTurns"], 2);
        assert_eq!(json["stats"]["moveFrequency"]["thunderbolt"], 2);
        assert!(json["keyMoments"].is_array());

        let ko = json["keyMoments"]
            .as_array()
            .unwrap()
            .iter()
            .find(|m| m["type"] == "KO")
            .expect("KO moment serialized");
        assert_eq!(ko["significance"], "high");
        assert_eq!(ko["turn"], 2);

        let first_move = &json["turns"][0]["actions"][2];
        assert_eq!(first_move["actionType"], "move");
        assert_eq!(first_move["details"]["kind"], "move");
        assert_eq!(first_move["details"]["moveRef"]["id"], "thunderbolt");

        Ok(())
    }

    #[test]
    fn test_json_round_trip() -> anyhow::Result<()> {
        let summary = parse(SAMPLE);
        let json = serde_json::to_string(&summary)?;
        let back: BattleSummary = serde_json::from_str(&json)?;

        assert_eq!(back.id, summary.id);
        assert_eq!(back.player1, summary.player1);
        assert_eq!(back.player2, summary.player2);
        assert_eq!(back.winner, summary.winner);
        assert_eq!(back.key_moments, summary.key_moments);
        assert_eq!(back.turns.len(), summary.turns.len());
        assert_eq!(back.stats.move_frequency, summary.stats.move_frequency);
        approx(back.stats.avg_damage_per_turn, summary.stats.avg_damage_per_turn);
        Ok(())
    }
}
