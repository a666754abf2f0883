//! Movement between rooms, guarded exits and the price of retreat.

use log::debug;
use rand::Rng;
use std::collections::HashMap;

use super::errors::GameError;
use super::types::{mitigate, Direction, Player, Room};
use super::world::World;

/// Damage range a live foe deals to a player trying to leave.
const LEAVE_DAMAGE_MIN: i32 = 8;
const LEAVE_DAMAGE_MAX: i32 = 18;
const LEAVE_DAMAGE_FLOOR: i32 = 3;

/// Remembers, per room, the direction that leads back the way the player came.
#[derive(Debug, Clone, Default)]
pub struct MovementHistory {
    came_from: HashMap<String, Direction>,
}

impl MovementHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn came_from(&self, room_id: &str) -> Option<Direction> {
        self.came_from.get(room_id).copied()
    }

    pub fn record(&mut self, room_id: &str, back: Direction) {
        self.came_from.insert(room_id.to_string(), back);
    }
}

/// "north", "north or east", "north, east or west"
fn join_directions(dirs: &[Direction]) -> String {
    match dirs.split_last() {
        None => String::new(),
        Some((last, [])) => last.to_string(),
        Some((last, rest)) => {
            let head: Vec<&str> = rest.iter().map(|d| d.as_str()).collect();
            format!("{} or {}", head.join(", "), last)
        }
    }
}

fn passage_name(direction: Direction) -> &'static str {
    match direction {
        Direction::North => "northern passage",
        Direction::South => "southern passage",
        Direction::East => "eastern passage",
        Direction::West => "western passage",
        Direction::Up => "passage above",
        Direction::Down => "passage below",
    }
}

/// Hint listing where the player can actually go from `room`.
pub fn blocked_message(room: &Room) -> String {
    let dirs = room.exit_directions();
    match dirs.len() {
        0 => "The walls offer no escape from this chamber!\n".to_string(),
        1 => format!("The way is blocked! Only {} remains open.\n", dirs[0]),
        _ => format!("Your path is barred! You can go {}.\n", join_directions(&dirs)),
    }
}

/// Relocate the player through an exit of the current room, if one matches.
pub fn move_player(
    direction: Direction,
    player: &mut Player,
    world: &World,
) -> Result<String, GameError> {
    let room = world.room(&player.location)?;
    match room.resolve_exit(direction) {
        Some((taken, destination)) => {
            debug!("Player moves {} from {} to {}", taken, room.id, destination);
            player.location = destination.to_string();
            Ok(format!("You move {}.\n", taken))
        }
        None => Ok(blocked_message(room)),
    }
}

/// Full movement rules: guarded exits, the parting strike of a live foe,
/// retreat bookkeeping, then the move itself.
///
/// Returns early without moving if the strike drops the player to zero health;
/// the caller is responsible for noticing the defeat.
pub fn handle_movement<R: Rng + ?Sized>(
    direction: Direction,
    player: &mut Player,
    world: &World,
    history: &mut MovementHistory,
    rng: &mut R,
) -> Result<String, GameError> {
    let room = world.room(&player.location)?;
    let resolved = room.resolve_exit(direction);
    let taken = resolved.map(|(d, _)| d).unwrap_or(direction);

    if let (Some(foe), Some(guarded)) = (room.foe(), room.guarded_exit) {
        if taken == guarded {
            debug!("Guarded exit {} of {} refused while {} lives", guarded, room.id, foe);
            return Ok(format!(
                "\nThe {} stands firm before the {}!\n\
                 Its eyes gleam with malice - you must defeat it to pass!\n",
                foe,
                passage_name(guarded)
            ));
        }
    }

    let retreat = history.came_from(&room.id) == Some(taken);
    let mut out = parting_strike(room, retreat, player, rng);
    if player.is_defeated() {
        return Ok(out);
    }

    if let Some((taken, destination)) = resolved {
        history.record(destination, taken.opposite());
    }

    out.push_str(&move_player(direction, player, world)?);
    Ok(out)
}

/// A move toward a word that names no direction. The foe still gets its
/// parting strike; the player then learns which exits exist.
pub fn handle_unknown_direction<R: Rng + ?Sized>(
    word: &str,
    player: &mut Player,
    world: &World,
    rng: &mut R,
) -> Result<String, GameError> {
    let room = world.room(&player.location)?;
    let mut out = parting_strike(room, false, player, rng);
    if player.is_defeated() {
        return Ok(out);
    }
    out.push_str(&format!("There is no passage leading '{}'.\n", word));
    out.push_str(&blocked_message(room));
    Ok(out)
}

/// Damage a live foe deals to a player trying to leave; empty when the room is clear.
fn parting_strike<R: Rng + ?Sized>(
    room: &Room,
    retreat: bool,
    player: &mut Player,
    rng: &mut R,
) -> String {
    let foe = match room.foe() {
        Some(foe) => foe,
        None => return String::new(),
    };
    let damage = mitigate(
        rng.gen_range(LEAVE_DAMAGE_MIN..=LEAVE_DAMAGE_MAX),
        player.has_armor(),
        LEAVE_DAMAGE_FLOOR,
    );
    player.health -= damage;
    debug!(
        "{} strikes departing player for {} (retreat={}, health={})",
        foe, damage, retreat, player.health
    );

    let mut out = String::new();
    if retreat {
        out.push_str(&format!("\nAs you turn to flee, the {} strikes!\n", foe));
        out.push_str(&format!("Claws and fangs rake your back! ({} damage)\n", damage));
        out.push_str("Cowardice has its price - next time stand your ground!\n");
    } else {
        out.push_str(&format!("\nThe {} lashes out as you attempt to pass!\n", foe));
        out.push_str(&format!("You suffer {} damage from the vicious attack!\n", damage));
        out.push_str("TIP: Check your health with 'health' or 'h' if you feel weak.\n");
    }
    out
}
