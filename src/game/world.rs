//! The dungeon's fixed room graph.
//!
//! Rooms are hardcoded; only their items and encounters change during play.
//! [`World::from_rooms`] validates that every exit lands on a known room.

use log::debug;
use std::collections::HashMap;

use super::errors::GameError;
use super::types::{Direction, Room, RoomFlag};

/// Where every adventure begins.
pub const START_ROOM_ID: &str = "entrance";

/// Guarded by the giant rat; its northern passage leads to the treasure.
pub const HALLWAY_ROOM_ID: &str = "hallway";

pub const TREASURE_ROOM_ID: &str = "treasure_room";

/// Foes that rise, in order, the first time an armored player enters the treasure room.
pub const TREASURE_GUARDIANS: [&str; 3] =
    ["poisonous serpent", "cursed guardian", "magical dart trap"];

#[derive(Debug, Clone)]
pub struct World {
    rooms: HashMap<String, Room>,
}

impl World {
    /// Build a world from room records, rejecting duplicate ids and dangling exits.
    pub fn from_rooms(rooms: Vec<Room>) -> Result<Self, GameError> {
        let mut map = HashMap::with_capacity(rooms.len());
        for room in rooms {
            if map.contains_key(&room.id) {
                return Err(GameError::DuplicateRoom(room.id));
            }
            map.insert(room.id.clone(), room);
        }
        let world = Self { rooms: map };
        world.validate()?;
        debug!("World built with {} rooms", world.rooms.len());
        Ok(world)
    }

    /// Check that every exit target exists as a room id.
    pub fn validate(&self) -> Result<(), GameError> {
        for room in self.rooms.values() {
            for exit in &room.exits {
                if !self.rooms.contains_key(&exit.destination) {
                    return Err(GameError::DanglingExit {
                        room: room.id.clone(),
                        direction: exit.direction,
                        target: exit.destination.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn room(&self, id: &str) -> Result<&Room, GameError> {
        self.rooms
            .get(id)
            .ok_or_else(|| GameError::UnknownRoom(id.to_string()))
    }

    pub fn room_mut(&mut self, id: &str) -> Result<&mut Room, GameError> {
        self.rooms
            .get_mut(id)
            .ok_or_else(|| GameError::UnknownRoom(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rooms.contains_key(id)
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

/// Room records for the Dungeon of the Lost Artifact.
pub fn canonical_rooms() -> Vec<Room> {
    use Direction::*;
    vec![
        Room::new(
            START_ROOM_ID,
            "You stand in the crumbling entrance hall. Dusty tapestries line the walls.",
        )
        .with_exit(North, HALLWAY_ROOM_ID)
        .with_exit(East, "armory")
        .with_item("torch"),
        Room::new(
            HALLWAY_ROOM_ID,
            "A long hallway stretches before you. Strange markings cover the walls.",
        )
        .with_exit(South, START_ROOM_ID)
        .with_exit(West, "library")
        .with_exit(East, "chamber")
        .with_exit(North, TREASURE_ROOM_ID)
        .with_foe("giant rat")
        .with_guarded_exit(North),
        Room::new(
            "chamber",
            "A dark chamber filled with ancient relics. The air smells of decay.",
        )
        .with_exit(West, HALLWAY_ROOM_ID)
        .with_exit(North, "armory_back")
        .with_exit(East, "alchemy_lab")
        .with_item("rusty key"),
        Room::new("armory", "An old armory with broken weapons racks.")
            .with_exit(West, START_ROOM_ID)
            .with_exit(North, "guard_room")
            .with_item("dagger"),
        Room::new(
            "guard_room",
            "A room with rusted weapons and armor stands. A skeleton sits in the corner.",
        )
        .with_exit(South, "armory")
        .with_exit(East, "secret_passage")
        .with_foe("skeletal warrior"),
        Room::new(
            "secret_passage",
            "A narrow, dark passageway with cobwebs covering the walls.",
        )
        .with_exit(West, "guard_room")
        .with_exit(East, "hidden_vault")
        .with_item("health potion"),
        Room::new(
            "hidden_vault",
            "A small vault with an ancient chest in the center.",
        )
        .with_exit(West, "secret_passage")
        .with_item("gold coins"),
        Room::new(
            "armory_back",
            "The armory's back storage room. The air is thick with dust.",
        )
        .with_exit(South, "chamber")
        .with_item(super::types::ARMOR_ITEM),
        Room::new(
            "alchemy_lab",
            "A room filled with bubbling potions and strange instruments.",
        )
        .with_exit(West, "chamber")
        .with_exit(North, "garden")
        .with_item("mysterious vial")
        .with_foe("mad alchemist"),
        Room::new(
            "garden",
            "An underground garden with glowing mushrooms and strange plants.",
        )
        .with_exit(South, "alchemy_lab")
        .with_item("glowing mushroom")
        .with_foe("venomous vine"),
        Room::new(
            "library",
            "A ruined library with moldy books scattered everywhere.",
        )
        .with_exit(East, HALLWAY_ROOM_ID)
        .with_exit(Down, "catacombs")
        .with_item("scroll")
        .with_foe("cursed librarian"),
        Room::new(
            "catacombs",
            "Dark, damp catacombs with bones lining the walls.",
        )
        .with_exit(Up, "library")
        .with_exit(North, "ossuary")
        .with_item("bone charm")
        .with_foe("ghostly apparition"),
        Room::new(
            "ossuary",
            "A chamber filled with neatly stacked bones and skulls.",
        )
        .with_exit(South, "catacombs")
        .with_item("ancient skull"),
        Room::new(
            TREASURE_ROOM_ID,
            "An artifact glows with an eerie light atop a stone pedestal!",
        )
        .with_exit(South, HALLWAY_ROOM_ID)
        .with_item(super::types::ARTIFACT_ITEM)
        .with_flag(RoomFlag::Treasure),
    ]
}

/// The canonical dungeon, validated.
pub fn canonical_world() -> Result<World, GameError> {
    World::from_rooms(canonical_rooms())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{Encounter, ARMOR_ITEM, ARTIFACT_ITEM};

    #[test]
    fn canonical_world_is_consistent() {
        let world = canonical_world().expect("canonical world should validate");
        assert_eq!(world.len(), 14);
        for room in world.rooms() {
            for exit in &room.exits {
                assert!(
                    world.contains(&exit.destination),
                    "{} -> {} is dangling",
                    room.id,
                    exit.destination
                );
            }
        }
    }

    #[test]
    fn hallway_rat_guards_north() {
        let world = canonical_world().unwrap();
        let hall = world.room(HALLWAY_ROOM_ID).unwrap();
        assert_eq!(hall.encounter, Encounter::single("giant rat"));
        assert_eq!(hall.guarded_exit, Some(Direction::North));
        assert_eq!(hall.exit(Direction::North), Some(TREASURE_ROOM_ID));
    }

    #[test]
    fn treasure_room_starts_clear_with_artifact() {
        let world = canonical_world().unwrap();
        let treasure = world.room(TREASURE_ROOM_ID).unwrap();
        assert!(treasure.is_treasure());
        assert_eq!(treasure.items, vec![ARTIFACT_ITEM.to_string()]);
        assert!(!treasure.encounter.is_hostile());
        let back = world.room("armory_back").unwrap();
        assert!(back.items.iter().any(|i| i == ARMOR_ITEM));
    }

    #[test]
    fn dangling_exit_is_rejected() {
        let rooms = vec![Room::new("a", "A").with_exit(Direction::East, "nowhere")];
        match World::from_rooms(rooms) {
            Err(GameError::DanglingExit { room, target, .. }) => {
                assert_eq!(room, "a");
                assert_eq!(target, "nowhere");
            }
            other => panic!("expected dangling exit, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_room_is_rejected() {
        let rooms = vec![Room::new("a", "A"), Room::new("a", "again")];
        assert!(matches!(
            World::from_rooms(rooms),
            Err(GameError::DuplicateRoom(id)) if id == "a"
        ));
    }

    #[test]
    fn unknown_room_lookup_errors() {
        let world = canonical_world().unwrap();
        assert!(matches!(
            world.room("attic"),
            Err(GameError::UnknownRoom(_))
        ));
    }
}
