use thiserror::Error;

use super::types::Direction;

/// Errors that can arise while building or querying a world.
///
/// Gameplay itself never fails with these: blocked moves, missing items and
/// lost fights are narrative outcomes reported as text.
#[derive(Debug, Error)]
pub enum GameError {
    /// Returned when looking up a room id that is not part of the world.
    #[error("unknown room: {0}")]
    UnknownRoom(String),

    /// An exit points at a room id that does not exist.
    #[error("dangling exit in {room}: {direction} leads to missing room {target}")]
    DanglingExit {
        room: String,
        direction: Direction,
        target: String,
    },

    /// Two rooms were registered under the same id.
    #[error("duplicate room id: {0}")]
    DuplicateRoom(String),
}
