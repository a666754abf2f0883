//! Encounter resolution: the player trades blows with the room's active foe
//! until one side falls.

use log::{debug, info};
use rand::Rng;

use super::types::{mitigate, Player, Room};

const FOE_HEALTH_MIN: i32 = 25;
const FOE_HEALTH_MAX: i32 = 45;
const STRIKE_BONUS_MIN: i32 = 3;
const STRIKE_BONUS_MAX: i32 = 12;
const RETALIATION_MIN: i32 = 8;
const RETALIATION_MAX: i32 = 16;
const RETALIATION_FLOOR: i32 = 3;

/// How a fight ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatResult {
    /// There was nobody to fight.
    NoFoe,
    /// The foe fell and the room is clear.
    Victory { foe: String },
    /// The foe fell but another stepped forward to take its place.
    NextFoe { foe: String, next: String },
    /// The player dropped to zero health.
    Defeat { foe: String },
}

/// Fight the room's active foe to the finish. The player always strikes first.
pub fn combat<R: Rng + ?Sized>(
    player: &mut Player,
    room: &mut Room,
    rng: &mut R,
) -> (CombatResult, String) {
    let foe = match room.foe() {
        Some(foe) => foe.to_string(),
        None => {
            return (
                CombatResult::NoFoe,
                "You swing at the air, hitting nothing but your own pride.\n".to_string(),
            )
        }
    };
    let mut foe_health = rng.gen_range(FOE_HEALTH_MIN..=FOE_HEALTH_MAX);
    debug!("Combat in {}: {} with {} health", room.id, foe, foe_health);

    let mut out = format!("\nYou square off against the {}!\n", foe);
    loop {
        let damage = player.attack + rng.gen_range(STRIKE_BONUS_MIN..=STRIKE_BONUS_MAX);
        foe_health -= damage;
        out.push_str(&format!(
            "Your strike lands true! The {} reels from {} damage.\n",
            foe, damage
        ));

        if foe_health <= 0 {
            out.push_str(&format!("\nWith a final blow, the {} collapses!\n", foe));
            out.push_str("Victory is yours... for now.\n");
            let result = match room.encounter.defeat_active() {
                Some(next) => {
                    out.push_str(&format!(
                        "\nFrom the shadows, a {} appears to challenge you!\n",
                        next
                    ));
                    CombatResult::NextFoe {
                        foe,
                        next: next.to_string(),
                    }
                }
                None => CombatResult::Victory { foe },
            };
            info!("Combat in {} won: {:?}", room.id, result);
            return (result, out);
        }

        let retaliation = mitigate(
            rng.gen_range(RETALIATION_MIN..=RETALIATION_MAX),
            player.has_armor(),
            RETALIATION_FLOOR,
        );
        player.health -= retaliation;
        out.push_str(&format!(
            "The {} retaliates! You suffer {} damage.\n",
            foe, retaliation
        ));

        if player.is_defeated() {
            info!("Player fell to {} in {}", foe, room.id);
            return (CombatResult::Defeat { foe }, out);
        }
    }
}
