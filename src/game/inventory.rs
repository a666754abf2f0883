//! Item pickup and the player's inventory and health readouts.
use log::debug;
use rand::Rng;

use super::types::{mitigate, Player, Room};

const GRAB_DAMAGE_MIN: i32 = 5;
const GRAB_DAMAGE_MAX: i32 = 12;
const GRAB_DAMAGE_FLOOR: i32 = 2;

// ============================================================================
// Item Operations
// ============================================================================

/// First room item equal to, or containing, the requested name.
///
/// Ties between several partial matches go to whichever item is listed first.
pub fn find_item<'a>(requested: &str, items: &'a [String]) -> Option<&'a str> {
    items
        .iter()
        .find(|item| item.as_str() == requested || item.contains(requested))
        .map(String::as_str)
}

/// Try to pick up an item. A live foe punishes any attempt, match or not.
pub fn take_item<R: Rng + ?Sized>(
    requested: &str,
    player: &mut Player,
    room: &mut Room,
    rng: &mut R,
) -> String {
    if let Some(foe) = room.foe() {
        let damage = mitigate(
            rng.gen_range(GRAB_DAMAGE_MIN..=GRAB_DAMAGE_MAX),
            player.has_armor(),
            GRAB_DAMAGE_FLOOR,
        );
        player.health -= damage;
        debug!("{} punished grab for '{}' with {} damage", foe, requested, damage);
        return format!(
            "\nThe {} strikes as you reach for the {}!\n\
             A sharp pain shoots through you! ({} damage)\n\
             You must defeat all guardians first!\n",
            foe, requested, damage
        );
    }

    let index = find_item(requested, &room.items)
        .and_then(|name| room.items.iter().position(|i| i == name));
    match index {
        Some(index) => {
            let item = room.items.remove(index);
            let msg = format!("You carefully take the {}.\n", item);
            debug!("Player took '{}' from {}", item, room.id);
            player.inventory.push(item);
            msg
        }
        None => format!("No {} lies within your grasp.\n", requested),
    }
}

// ============================================================================
// Formatting
// ============================================================================

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn format_inventory(player: &Player) -> String {
    if player.inventory.is_empty() {
        return "\nYour pockets hang empty and forlorn.\n".to_string();
    }
    let mut out = String::from("\nYour possessions:\n");
    for item in &player.inventory {
        out.push_str(&format!("- {}\n", capitalize(item)));
    }
    out
}

pub fn health_band(health: i32) -> &'static str {
    if health < 25 {
        "Barely standing"
    } else if health < 60 {
        "Wounded but steady"
    } else if health < 90 {
        "Bruised but strong"
    } else {
        "In fighting form"
    }
}

pub fn format_health(player: &Player) -> String {
    let mut out = format!(
        "\n{} (Health: {})\n",
        health_band(player.health),
        player.health
    );
    if player.health < 30 {
        out.push_str("The light grows dim... find healing soon!\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{Encounter, ARMOR_ITEM};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn take_moves_item_from_room_to_inventory() {
        let mut player = Player::with_attack("entrance", 10);
        let mut room = Room::new("entrance", "Hall").with_item("torch");
        let msg = take_item("torch", &mut player, &mut room, &mut rng());
        assert_eq!(player.inventory, vec!["torch".to_string()]);
        assert!(room.items.is_empty());
        assert!(msg.contains("You carefully take the torch"));
    }

    #[test]
    fn partial_name_takes_first_listed_match() {
        let mut player = Player::with_attack("vault", 10);
        let mut room = Room::new("vault", "Vault")
            .with_item("gold coins")
            .with_item("gold ring");
        take_item("gold", &mut player, &mut room, &mut rng());
        assert_eq!(player.inventory, vec!["gold coins".to_string()]);
        assert_eq!(room.items, vec!["gold ring".to_string()]);
    }

    #[test]
    fn missing_item_changes_nothing() {
        let mut player = Player::with_attack("vault", 10);
        let mut room = Room::new("vault", "Vault").with_item("gold coins");
        let msg = take_item("sword", &mut player, &mut room, &mut rng());
        assert!(msg.contains("No sword lies within your grasp"));
        assert!(player.inventory.is_empty());
        assert_eq!(room.items.len(), 1);
    }

    #[test]
    fn guarded_item_hurts_and_stays_put() {
        let mut player = Player::with_attack("lab", 10);
        let mut room = Room::new("lab", "Lab").with_item("gem").with_foe("guard");
        let msg = take_item("gem", &mut player, &mut room, &mut rng());
        assert!(player.inventory.is_empty());
        assert_eq!(room.items, vec!["gem".to_string()]);
        let dealt = 100 - player.health;
        assert!((5..=12).contains(&dealt));
        assert!(msg.contains("The guard strikes as you reach for the gem"));
    }

    #[test]
    fn armored_grab_damage_is_halved_with_floor() {
        let mut r = rng();
        for _ in 0..40 {
            let mut player = Player::with_attack("lab", 10);
            player.inventory.push(ARMOR_ITEM.to_string());
            let mut room = Room::new("lab", "Lab");
            room.encounter = Encounter::sequence(["serpent", "guardian"]);
            take_item("anything", &mut player, &mut room, &mut r);
            let dealt = 100 - player.health;
            assert!((2..=6).contains(&dealt), "dealt {}", dealt);
        }
    }

    #[test]
    fn inventory_lists_capitalized_items() {
        let mut player = Player::with_attack("entrance", 10);
        assert!(format_inventory(&player).contains("pockets hang empty"));
        player.inventory.push("rusty key".into());
        let view = format_inventory(&player);
        assert!(view.contains("Your possessions:"));
        assert!(view.contains("- Rusty key"));
    }

    #[test]
    fn health_bands_and_warning() {
        let mut player = Player::with_attack("entrance", 10);
        assert!(format_health(&player).contains("In fighting form (Health: 100)"));
        player.health = 75;
        assert!(format_health(&player).contains("Bruised but strong"));
        player.health = 40;
        assert!(format_health(&player).contains("Wounded but steady"));
        assert!(!format_health(&player).contains("light grows dim"));
        player.health = 20;
        let view = format_health(&player);
        assert!(view.contains("Barely standing"));
        assert!(view.contains("light grows dim"));
    }
}
