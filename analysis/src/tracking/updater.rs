//! Update logic for processing BattleMessage into battle state

use tracing::{debug, trace};
use vgcscope_protocol::{BattleMessage, HpStatus, Player, Pokemon, PokemonDetails};

use super::battle::{
    designator, player_to_index, pokemon_designator, position_key, user_id, BattleTracker,
};
use crate::types::{Action, ActionDetails, HitOutcome, MoveRef, MALFORMED_ACTION_PREFIX};

impl BattleTracker {
    /// Update battle state from a single log message
    pub fn update(&mut self, msg: &BattleMessage) {
        trace!(?msg, turn = self.turn(), "dispatch");

        match msg {
            // === Battle Initialization ===
            BattleMessage::Player {
                player,
                slot,
                username,
                rating,
            } => {
                self.handle_player(*player, slot, username, *rating);
            }

            BattleMessage::Join(name) => {
                self.handle_join(name);
            }

            BattleMessage::Tier(tier) => {
                self.format = tier.clone();
            }

            BattleMessage::Poke { player, details } => {
                if let Some(player) = player
                    && !details.species.is_empty()
                {
                    self.sides[player_to_index(*player)]
                        .team
                        .push(details.species.clone());
                }
            }

            BattleMessage::Turn(turn) => {
                self.turns.boundary(*turn);
            }

            // === Major Actions ===
            BattleMessage::Switch {
                pokemon,
                details,
                hp_status,
                forced,
            } => {
                self.handle_switch(pokemon, details, hp_status.as_ref(), *forced);
            }

            BattleMessage::Move {
                pokemon,
                move_name,
                target,
                miss,
            } => {
                self.handle_move(pokemon, move_name, target.as_ref(), *miss);
            }

            BattleMessage::Faint(pokemon) => {
                self.handle_faint(pokemon);
            }

            // === HP Changes ===
            BattleMessage::Damage {
                pokemon,
                hp_status,
                from,
            } => {
                if let Some(hp) = hp_status {
                    self.handle_damage(pokemon, hp, from.is_some());
                }
            }

            BattleMessage::Heal {
                pokemon,
                hp_status,
                from: _,
            } => {
                if let Some(hp) = hp_status {
                    self.handle_heal(pokemon, hp);
                }
            }

            // === Effectiveness ===
            BattleMessage::SuperEffective(pokemon) => {
                self.stats.record_super_effective();
                if let Some(outcome) = self.turns.outcome_against(&pokemon.key()) {
                    outcome.super_effective = true;
                }
            }

            BattleMessage::Resisted(pokemon) => {
                self.stats.record_resisted();
                if let Some(outcome) = self.turns.outcome_against(&pokemon.key()) {
                    outcome.resisted = true;
                }
            }

            BattleMessage::Crit(pokemon) => {
                self.stats.record_crit();
                if let Some(outcome) = self.turns.outcome_against(&pokemon.key()) {
                    outcome.critical = true;
                }
                let turn = self.turn();
                self.moments.on_crit(turn, &pokemon.name);
            }

            // === Battle End ===
            BattleMessage::Win(name) => {
                self.ended = true;
                self.winner = self.player_by_name(name);
                if self.winner.is_none() {
                    debug!(winner = %name, "winner does not match either player");
                }
            }

            BattleMessage::Tie => {
                self.ended = true;
            }

            BattleMessage::Unknown { kind, args } => {
                self.handle_unknown(kind, args);
            }

            BattleMessage::Malformed { kind, args } => {
                self.handle_unknown(&format!("{MALFORMED_ACTION_PREFIX}{kind}"), args);
            }

            // === Informational only ===
            BattleMessage::GameType(_)
            | BattleMessage::Gen(_)
            | BattleMessage::Rated
            | BattleMessage::Rule(_)
            | BattleMessage::ClearPoke
            | BattleMessage::TeamPreview
            | BattleMessage::TeamSize
            | BattleMessage::BattleStart
            | BattleMessage::Timestamp
            | BattleMessage::Spacer
            | BattleMessage::Upkeep => {
                // These don't affect tracked state
            }
        }
    }

    /// Bind a slot to a name; the first declaration for a slot wins
    fn handle_player(
        &mut self,
        player: Option<Player>,
        slot: &str,
        username: &str,
        rating: Option<u32>,
    ) {
        let Some(player) = player else {
            debug!(slot, username, "player declared for unknown slot");
            return;
        };
        if username.is_empty() {
            return;
        }

        let side = &mut self.sides[player_to_index(player)];
        if let Some(existing) = &side.declared {
            if existing != username {
                debug!(slot, existing = %existing, ignored = username, "duplicate player declaration");
            }
            return;
        }
        side.declared = Some(username.to_string());
        side.rating = rating;
    }

    /// Join announcements are kept in order; sides without a declared name
    /// pick from them when names are resolved
    fn handle_join(&mut self, name: &str) {
        let id = user_id(name);
        if id.is_empty() || self.joined.iter().any(|joined| user_id(joined) == id) {
            return;
        }
        self.joined.push(name.to_string());
    }

    /// Handle a switch (or drag) message
    fn handle_switch(
        &mut self,
        pokemon: &Pokemon,
        details: &PokemonDetails,
        hp_status: Option<&HpStatus>,
        forced: bool,
    ) {
        let key = pokemon.key();
        if let Some(hp) = hp_status {
            self.health.insert(key.clone(), hp.fraction());
        }
        self.active.insert(position_key(pokemon), key);

        let switch_to = if details.species.is_empty() {
            pokemon.name.clone()
        } else {
            details.species.clone()
        };

        self.stats.record_switch();
        self.turns.record(Action {
            player: pokemon_designator(pokemon),
            action_type: if forced { "drag" } else { "switch" }.to_string(),
            details: ActionDetails::Switch { switch_to },
        });
    }

    fn handle_move(&mut self, pokemon: &Pokemon, move_name: &str, target: Option<&Pokemon>, miss: bool) {
        let move_ref = MoveRef::from_name(move_name);
        self.stats.record_move(&move_ref.id);

        let action = self.turns.record(Action {
            player: pokemon_designator(pokemon),
            action_type: "move".to_string(),
            details: ActionDetails::Move {
                move_ref,
                target: target.map(|t| t.name.clone()),
                outcome: HitOutcome {
                    missed: miss,
                    ..Default::default()
                },
            },
        });

        if let Some(target) = target {
            self.turns.note_move_against(&target.key(), action);
        }
    }

    /// Damage is charged to the player whose combatant lost health. Residual
    /// damage (`[from]` weather, status, recoil...) is not added to a move.
    fn handle_damage(&mut self, pokemon: &Pokemon, hp: &HpStatus, residual: bool) {
        let key = pokemon.key();
        let before = self.health(&key);
        let after = hp.fraction();
        self.health.insert(key.clone(), after);

        let lost = (before - after) * 100.0;
        if lost <= 0.0 {
            return;
        }

        match pokemon.player {
            Some(player) => self.stats.record_damage(player, lost),
            None => debug!(slot = %pokemon.slot, "damage on unknown slot not attributed"),
        }

        let mut super_effective = false;
        if !residual && let Some(outcome) = self.turns.outcome_against(&key) {
            outcome.damage += lost;
            super_effective = outcome.super_effective;
        }

        let turn = self.turn();
        self.moments
            .on_damage(turn, &pokemon.name, before, after, super_effective);
    }

    fn handle_heal(&mut self, pokemon: &Pokemon, hp: &HpStatus) {
        let key = pokemon.key();
        let before = self.health(&key);
        let after = hp.fraction();
        self.health.insert(key, after);

        let healed = (after - before) * 100.0;
        if healed <= 0.0 {
            return;
        }

        match pokemon.player {
            Some(player) => self.stats.record_heal(player, healed),
            None => debug!(slot = %pokemon.slot, "healing on unknown slot not attributed"),
        }
    }

    /// Handle a faint message
    fn handle_faint(&mut self, pokemon: &Pokemon) {
        let key = pokemon.key();
        self.health.insert(key.clone(), 0.0);

        let position = position_key(pokemon);
        if self.active.get(&position) == Some(&key) {
            self.active.remove(&position);
        }

        if let Some(player) = pokemon.player {
            self.sides[player_to_index(player)].losses += 1;
        }

        let player = pokemon_designator(pokemon);
        let turn = self.turn();
        self.moments.on_faint(turn, &pokemon.name, &player);
        self.turns.record(Action {
            player,
            action_type: "faint".to_string(),
            details: ActionDetails::Faint {
                pokemon: pokemon.name.clone(),
            },
        });
    }

    /// Unknown messages become Other actions inside a turn, or ahead of it
    /// once lead actions are buffered
    fn handle_unknown(&mut self, kind: &str, args: &[String]) {
        if !self.turns.is_turn_open() && !self.turns.has_buffered_actions() {
            return;
        }

        let player = args
            .first()
            .map(|arg| actor_designator(arg))
            .unwrap_or_default();

        self.turns.record(Action {
            player,
            action_type: kind.to_string(),
            details: ActionDetails::Other,
        });
    }
}

/// Acting player for the first argument of an unknown message
///
/// Field-wide effects ("|-weather|RainDance") have no actor and get an
/// empty designator.
fn actor_designator(arg: &str) -> String {
    if let Some(pokemon) = Pokemon::parse(arg) {
        return pokemon_designator(&pokemon);
    }
    match Player::parse(arg) {
        Some(player) => designator(player).to_string(),
        None => String::new(),
    }
}
