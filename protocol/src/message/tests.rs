#[cfg(test)]
mod tests {
    use crate::{parse_battle_message, parse_line, tokenize_line, BattleMessage, HpStatus, Player};

    #[test]
    fn test_parse_player() {
        let message = parse_line("|player|p1|Alice|giovanni|1487").unwrap();

        assert_eq!(
            message,
            BattleMessage::Player {
                player: Some(Player::P1),
                slot: "p1".to_string(),
                username: "Alice".to_string(),
                rating: Some(1487),
            }
        );
    }

    #[test]
    fn test_parse_player_missing_slot() {
        assert!(parse_line("|player|").is_err());
        assert!(parse_line("|player").is_err());
    }

    #[test]
    fn test_parse_join_strips_marker() {
        let message = parse_line("|j|☆Player1").unwrap();
        assert_eq!(message, BattleMessage::Join("Player1".to_string()));

        let message = parse_line("|J| +Voiced User").unwrap();
        assert_eq!(message, BattleMessage::Join("Voiced User".to_string()));
    }

    #[test]
    fn test_parse_tier_verbatim() {
        let message = parse_line("|tier|[Gen 9] VGC 2025 Reg H (Bo3)").unwrap();
        assert_eq!(
            message,
            BattleMessage::Tier("[Gen 9] VGC 2025 Reg H (Bo3)".to_string())
        );
    }

    #[test]
    fn test_parse_turn() {
        assert_eq!(parse_line("|turn|12").unwrap(), BattleMessage::Turn(12));
        assert!(parse_line("|turn|twelve").is_err());
        assert!(parse_line("|turn|").is_err());
    }

    #[test]
    fn test_parse_move() {
        let message = parse_line("|move|p1a: Pikachu|Thunderbolt|p2a: Blastoise").unwrap();

        match message {
            BattleMessage::Move {
                pokemon,
                move_name,
                target,
                miss,
            } => {
                assert_eq!(pokemon.player, Some(Player::P1));
                assert_eq!(pokemon.name, "Pikachu");
                assert_eq!(move_name, "Thunderbolt");
                assert_eq!(target.unwrap().slot, "p2");
                assert!(!miss);
            }
            other => panic!("expected move, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_move_miss_and_no_target() {
        let message = parse_line("|move|p2a: Blastoise|Hydro Pump||[miss]").unwrap();

        match message {
            BattleMessage::Move { target, miss, .. } => {
                assert!(target.is_none());
                assert!(miss);
            }
            other => panic!("expected move, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_move_missing_fields() {
        assert!(parse_line("|move|").is_err());
        assert!(parse_line("|move|p1a: Pikachu").is_err());
    }

    #[test]
    fn test_parse_switch_and_drag() {
        let message = parse_line("|switch|p1a: Pikachu|Pikachu, L50, M|100/100").unwrap();

        match message {
            BattleMessage::Switch {
                pokemon,
                details,
                hp_status,
                forced,
            } => {
                assert_eq!(pokemon.name, "Pikachu");
                assert_eq!(details.species, "Pikachu");
                assert_eq!(details.level, Some(50));
                assert_eq!(
                    hp_status,
                    Some(HpStatus {
                        current: 100,
                        max: Some(100),
                        status: None,
                    })
                );
                assert!(!forced);
            }
            other => panic!("expected switch, got {:?}", other),
        }

        let message = parse_line("|drag|p2a: Dragonite|Dragonite, L50, F|71/100").unwrap();
        assert!(matches!(message, BattleMessage::Switch { forced: true, .. }));
    }

    #[test]
    fn test_parse_damage_with_source() {
        let message = parse_line("|-damage|p2a: Blastoise|88/100 psn|[from] psn").unwrap();

        match message {
            BattleMessage::Damage {
                pokemon,
                hp_status,
                from,
            } => {
                assert_eq!(pokemon.player, Some(Player::P2));
                assert_eq!(hp_status.unwrap().current, 88);
                assert_eq!(from.as_deref(), Some("psn"));
            }
            other => panic!("expected damage, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_effectiveness() {
        assert!(matches!(
            parse_line("|-supereffective|p2a: Blastoise").unwrap(),
            BattleMessage::SuperEffective(_)
        ));
        assert!(matches!(
            parse_line("|-resisted|p2a: Blastoise").unwrap(),
            BattleMessage::Resisted(_)
        ));
        assert!(matches!(
            parse_line("|-crit|p1a: Pikachu").unwrap(),
            BattleMessage::Crit(_)
        ));
    }

    #[test]
    fn test_parse_faint() {
        let message = parse_line("|faint|p2a: Blastoise").unwrap();
        match message {
            BattleMessage::Faint(pokemon) => assert_eq!(pokemon.key(), "p2: Blastoise"),
            other => panic!("expected faint, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_win_and_tie() {
        assert_eq!(
            parse_line("|win|Player2").unwrap(),
            BattleMessage::Win("Player2".to_string())
        );
        assert_eq!(parse_line("|tie").unwrap(), BattleMessage::Tie);
    }

    #[test]
    fn test_parse_metadata() {
        assert_eq!(parse_line("|gen|9").unwrap(), BattleMessage::Gen(9));
        assert_eq!(parse_line("|t:|1763188046").unwrap(), BattleMessage::Timestamp);
        assert_eq!(parse_line("|").unwrap(), BattleMessage::Spacer);
        assert_eq!(parse_line("|rated|").unwrap(), BattleMessage::Rated);

        match parse_line("|poke|p2|Dragonite, L50, M|").unwrap() {
            BattleMessage::Poke { player, details } => {
                assert_eq!(player, Some(Player::P2));
                assert_eq!(details.species, "Dragonite");
            }
            other => panic!("expected poke, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_unknown() {
        let message = parse_line("|-singleturn|p2a: Blastoise|Protect").unwrap();

        assert_eq!(
            message,
            BattleMessage::Unknown {
                kind: "-singleturn".to_string(),
                args: vec!["p2a: Blastoise".to_string(), "Protect".to_string()],
            }
        );
    }

    #[test]
    fn test_malformed_known_line() {
        let line = tokenize_line("|move|nobody|Tackle", 7).unwrap();
        assert!(parse_battle_message(&line).is_err());

        assert_eq!(
            BattleMessage::malformed(&line),
            BattleMessage::Malformed {
                kind: "move".to_string(),
                args: vec!["nobody".to_string(), "Tackle".to_string()],
            }
        );
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_line("").is_err());
        assert!(parse_line("no pipe here").is_err());
    }
}
