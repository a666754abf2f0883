use rand::Rng;
use std::collections::VecDeque;
use std::fmt;

/// Starting health for a fresh adventurer.
pub const STARTING_HEALTH: i32 = 100;

/// Item that halves incoming damage and unlocks the treasure room.
pub const ARMOR_ITEM: &str = "armor plates";

/// Carrying this item wins the game.
pub const ARTIFACT_ITEM: &str = "lost artifact";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse a full direction word or its single-letter shorthand.
    pub fn parse(word: &str) -> Option<Self> {
        match word.trim() {
            "north" | "n" => Some(Direction::North),
            "south" | "s" => Some(Direction::South),
            "east" | "e" => Some(Direction::East),
            "west" | "w" => Some(Direction::West),
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Horizontal stand-in used when a room has no literal up/down exit.
    pub fn alias(self) -> Option<Self> {
        match self {
            Direction::Up => Some(Direction::North),
            Direction::Down => Some(Direction::South),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoomFlag {
    /// Holds the artifact; entering triggers the dart trap or the guardians.
    Treasure,
}

/// Who, if anyone, currently stands in a room.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Encounter {
    #[default]
    Clear,
    Single(String),
    /// A multi-stage fight: `active` must fall before the next queued foe steps up.
    Sequence {
        active: String,
        queued: VecDeque<String>,
    },
}

impl Encounter {
    pub fn single(foe: &str) -> Self {
        Encounter::Single(foe.to_string())
    }

    /// Queue several foes; the first becomes active. An empty list stays clear.
    pub fn sequence<I, S>(foes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut queued: VecDeque<String> = foes.into_iter().map(Into::into).collect();
        match queued.pop_front() {
            Some(active) => Encounter::Sequence { active, queued },
            None => Encounter::Clear,
        }
    }

    /// Name of the foe currently blocking the room.
    pub fn active(&self) -> Option<&str> {
        match self {
            Encounter::Clear => None,
            Encounter::Single(foe) => Some(foe),
            Encounter::Sequence { active, .. } => Some(active),
        }
    }

    pub fn is_hostile(&self) -> bool {
        self.active().is_some()
    }

    /// Foes still waiting behind the active one.
    pub fn remaining(&self) -> usize {
        match self {
            Encounter::Sequence { queued, .. } => queued.len(),
            _ => 0,
        }
    }

    /// Mark the active foe as defeated and advance the encounter.
    /// Returns the name of the next foe if one steps forward.
    pub fn defeat_active(&mut self) -> Option<&str> {
        match std::mem::take(self) {
            Encounter::Sequence { mut queued, .. } => match queued.pop_front() {
                Some(next) => {
                    *self = Encounter::Sequence {
                        active: next,
                        queued,
                    };
                    self.active()
                }
                None => None,
            },
            Encounter::Single(_) | Encounter::Clear => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    pub direction: Direction,
    pub destination: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: String,
    pub description: String,
    /// Kept in definition order so blocked-move hints list exits predictably.
    pub exits: Vec<Exit>,
    pub items: Vec<String>,
    pub encounter: Encounter,
    /// Exit that cannot be used at all while the room's foe lives.
    pub guarded_exit: Option<Direction>,
    pub flags: Vec<RoomFlag>,
}

impl Room {
    pub fn new(id: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            exits: Vec::new(),
            items: Vec::new(),
            encounter: Encounter::Clear,
            guarded_exit: None,
            flags: Vec::new(),
        }
    }

    pub fn with_exit(mut self, direction: Direction, destination: &str) -> Self {
        self.exits.retain(|e| e.direction != direction);
        self.exits.push(Exit {
            direction,
            destination: destination.to_string(),
        });
        self
    }

    pub fn with_item(mut self, item: &str) -> Self {
        self.items.push(item.to_string());
        self
    }

    pub fn with_foe(mut self, foe: &str) -> Self {
        self.encounter = Encounter::single(foe);
        self
    }

    pub fn with_guarded_exit(mut self, direction: Direction) -> Self {
        self.guarded_exit = Some(direction);
        self
    }

    pub fn with_flag(mut self, flag: RoomFlag) -> Self {
        if !self.flags.contains(&flag) {
            self.flags.push(flag);
        }
        self
    }

    pub fn exit(&self, direction: Direction) -> Option<&str> {
        self.exits
            .iter()
            .find(|e| e.direction == direction)
            .map(|e| e.destination.as_str())
    }

    /// Resolve a requested direction to the exit actually taken, applying the
    /// up/down alias only when no literal exit exists.
    pub fn resolve_exit(&self, direction: Direction) -> Option<(Direction, &str)> {
        if let Some(dest) = self.exit(direction) {
            return Some((direction, dest));
        }
        let aliased = direction.alias()?;
        self.exit(aliased).map(|dest| (aliased, dest))
    }

    pub fn exit_directions(&self) -> Vec<Direction> {
        self.exits.iter().map(|e| e.direction).collect()
    }

    pub fn is_treasure(&self) -> bool {
        self.flags.contains(&RoomFlag::Treasure)
    }

    pub fn foe(&self) -> Option<&str> {
        self.encounter.active()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub location: String,
    pub inventory: Vec<String>,
    /// May dip below zero within a turn; anything at or under zero is defeat.
    pub health: i32,
    pub attack: i32,
}

impl Player {
    /// Fresh adventurer at `start` with an attack rating rolled in 5..=15.
    pub fn new<R: Rng + ?Sized>(start: &str, rng: &mut R) -> Self {
        Self::with_attack(start, rng.gen_range(5..=15))
    }

    pub fn with_attack(start: &str, attack: i32) -> Self {
        Self {
            location: start.to_string(),
            inventory: Vec::new(),
            health: STARTING_HEALTH,
            attack,
        }
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    pub fn has_armor(&self) -> bool {
        self.has_item(ARMOR_ITEM)
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }
}

/// Halve a damage roll for an armored player, never below `floor`.
pub fn mitigate(damage: i32, armored: bool, floor: i32) -> i32 {
    if armored {
        (damage / 2).max(floor)
    } else {
        damage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn armor_halves_with_floor() {
        assert_eq!(mitigate(10, true, 3), 5);
        assert_eq!(mitigate(5, true, 3), 3);
        assert_eq!(mitigate(5, true, 2), 2);
        assert_eq!(mitigate(10, false, 3), 10);
    }

    #[test]
    fn opposite_is_involutive() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn parse_accepts_words_and_letters() {
        assert_eq!(Direction::parse("north"), Some(Direction::North));
        assert_eq!(Direction::parse("d"), Some(Direction::Down));
        assert_eq!(Direction::parse("sideways"), None);
    }

    #[test]
    fn sequence_advances_then_clears() {
        let mut enc = Encounter::sequence(["a", "b", "c"]);
        assert_eq!(enc.active(), Some("a"));
        assert_eq!(enc.remaining(), 2);
        assert_eq!(enc.defeat_active(), Some("b"));
        assert_eq!(enc.defeat_active(), Some("c"));
        assert_eq!(enc.defeat_active(), None);
        assert_eq!(enc, Encounter::Clear);
    }

    #[test]
    fn single_foe_clears_on_defeat() {
        let mut enc = Encounter::single("giant rat");
        assert!(enc.is_hostile());
        assert_eq!(enc.defeat_active(), None);
        assert!(!enc.is_hostile());
        assert_eq!(Encounter::sequence(Vec::<String>::new()), Encounter::Clear);
    }

    #[test]
    fn resolve_prefers_literal_exit_over_alias() {
        let room = Room::new("r", "test")
            .with_exit(Direction::Up, "attic")
            .with_exit(Direction::North, "yard");
        assert_eq!(room.resolve_exit(Direction::Up), Some((Direction::Up, "attic")));
        let flat = Room::new("f", "test").with_exit(Direction::South, "cellar");
        assert_eq!(
            flat.resolve_exit(Direction::Down),
            Some((Direction::South, "cellar"))
        );
        assert_eq!(flat.resolve_exit(Direction::Up), None);
    }

    #[test]
    fn new_player_rolls_attack_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let p = Player::new("entrance", &mut rng);
            assert!((5..=15).contains(&p.attack));
            assert_eq!(p.health, STARTING_HEALTH);
            assert!(p.inventory.is_empty());
        }
    }
}
