//! A single play-through: world, player and the turn loop state.
//!
//! Everything that changes while playing lives on [`GameSession`], so several
//! sessions can run side by side and a seeded session replays identically.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::logutil::escape_log;

use super::combat::combat;
use super::commands::{parse_command, GameCommand};
use super::errors::GameError;
use super::inventory::{format_health, format_inventory, take_item};
use super::navigation::{handle_movement, handle_unknown_direction, MovementHistory};
use super::text;
use super::types::{Encounter, Player, ARTIFACT_ITEM};
use super::world::{canonical_world, World, START_ROOM_ID, TREASURE_GUARDIANS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Victory,
    Defeat,
    Quit,
}

pub struct GameSession {
    world: World,
    player: Player,
    history: MovementHistory,
    rng: StdRng,
    /// The treasure guardians rise at most once per session.
    guardians_spawned: bool,
    /// The first unknown command also prints the full command list.
    full_help_shown: bool,
    /// The treasure room's description is only printed on first sight.
    treasure_described: bool,
    status: GameStatus,
    turn: u32,
}

impl GameSession {
    /// New session in the canonical dungeon. `seed` makes every roll reproducible.
    pub fn new(seed: Option<u64>) -> Result<Self, GameError> {
        Ok(Self::with_world(canonical_world()?, seed))
    }

    /// New session in a caller-supplied world, starting at the canonical entrance.
    pub fn with_world(world: World, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let player = Player::new(START_ROOM_ID, &mut rng);
        info!(
            "New session: seed={:?} attack={} rooms={}",
            seed,
            player.attack,
            world.len()
        );
        Self {
            world,
            player,
            history: MovementHistory::new(),
            rng,
            guardians_spawned: false,
            full_help_shown: false,
            treasure_described: false,
            status: GameStatus::InProgress,
            turn: 0,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn history(&self) -> &MovementHistory {
        &self.history
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn guardians_spawned(&self) -> bool {
        self.guardians_spawned
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Start-of-turn view: the room, the treasure-room event and the victory check.
    pub fn describe_turn(&mut self) -> Result<String, GameError> {
        if self.is_over() {
            return Ok(String::new());
        }
        let room = self.world.room_mut(&self.player.location)?;
        let treasure = room.is_treasure();
        let show_description = !treasure || !self.treasure_described;
        if treasure {
            self.treasure_described = true;
        }
        let mut out = text::describe_room(room, show_description);

        if treasure {
            if !self.player.has_armor() {
                self.player.health = 0;
                self.status = GameStatus::Defeat;
                info!("Dart trap killed unarmored player in {}", room.id);
                out.push_str(text::dart_trap_text());
                return Ok(out);
            }
            if !self.guardians_spawned && !room.encounter.is_hostile() {
                room.encounter = Encounter::sequence(TREASURE_GUARDIANS);
                self.guardians_spawned = true;
                if let Some(first) = room.foe() {
                    info!("Treasure guardians spawned in {}, {} leads", room.id, first);
                    out.push_str(&text::guardian_emerges_text(first));
                }
            }
        }

        if self.player.has_item(ARTIFACT_ITEM) {
            self.status = GameStatus::Victory;
            info!("Victory on turn {} with {} health", self.turn, self.player.health);
            out.push_str(text::victory_text());
        }
        Ok(out)
    }

    /// Run one command to completion, then check for defeat.
    pub fn handle_input(&mut self, input: &str) -> Result<String, GameError> {
        if self.is_over() {
            return Ok(String::new());
        }
        let command = parse_command(input);
        debug!(
            "Turn {} command parsed: input={} command={:?}",
            self.turn,
            escape_log(input),
            command
        );

        let mut out = self.execute(command)?;
        self.turn = self.turn.saturating_add(1);

        if self.status == GameStatus::InProgress && self.player.is_defeated() {
            self.status = GameStatus::Defeat;
            info!("Player defeated on turn {} in {}", self.turn, self.player.location);
            out.push_str(text::defeat_text());
        }
        Ok(out)
    }

    fn execute(&mut self, command: GameCommand) -> Result<String, GameError> {
        match command {
            GameCommand::Move(direction) => handle_movement(
                direction,
                &mut self.player,
                &self.world,
                &mut self.history,
                &mut self.rng,
            ),
            GameCommand::GoUnknown(word) => {
                handle_unknown_direction(&word, &mut self.player, &self.world, &mut self.rng)
            }
            GameCommand::Take(item) => {
                let room = self.world.room_mut(&self.player.location)?;
                Ok(take_item(&item, &mut self.player, room, &mut self.rng))
            }
            GameCommand::Attack => {
                let room = self.world.room_mut(&self.player.location)?;
                let (_, out) = combat(&mut self.player, room, &mut self.rng);
                Ok(out)
            }
            GameCommand::Inventory => Ok(format_inventory(&self.player)),
            GameCommand::Health => Ok(format_health(&self.player)),
            GameCommand::Run => Ok(text::run_text().to_string()),
            GameCommand::Help => Ok(text::help_text().to_string()),
            GameCommand::Quit => {
                self.status = GameStatus::Quit;
                info!("Player quit on turn {}", self.turn);
                Ok(text::quit_text().to_string())
            }
            GameCommand::Unknown(_) => {
                let include_help = !self.full_help_shown;
                self.full_help_shown = true;
                Ok(text::unknown_command_text(include_help))
            }
        }
    }
}
