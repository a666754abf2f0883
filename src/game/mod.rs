//! Dungeon of the Lost Artifact: world model, rules and turn loop.
//! The room graph is fixed; items and encounters are the only state that
//! rooms carry, and a [`GameSession`] owns all of it for one play-through.

pub mod combat;
pub mod commands;
pub mod errors;
pub mod inventory;
pub mod navigation;
pub mod session;
pub mod text;
pub mod types;
pub mod world;

pub use combat::{combat, CombatResult};
pub use commands::{parse_command, GameCommand};
pub use errors::GameError;
pub use inventory::{find_item, format_health, format_inventory, health_band, take_item};
pub use navigation::{
    blocked_message, handle_movement, handle_unknown_direction, move_player, MovementHistory,
};
pub use session::{GameSession, GameStatus};
pub use types::*;
pub use world::{
    canonical_rooms, canonical_world, World, HALLWAY_ROOM_ID, START_ROOM_ID, TREASURE_GUARDIANS,
    TREASURE_ROOM_ID,
};
