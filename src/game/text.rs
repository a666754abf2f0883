//! Narrative text shown at the prompt.

use super::types::Room;

pub fn intro_text() -> &'static str {
    "
    DUNGEON OF THE LOST ARTIFACT
    ----------------------------
    Legend speaks of a powerful artifact hidden deep within these ruins.
    Many have entered seeking its power - none have returned.

    Can you survive the dungeon's dangers and claim the artifact?
"
}

pub fn help_text() -> &'static str {
    "
Available commands:
    - go [direction] or just [direction]: Move in a direction (north, south, east, west, up, down).
    - take [item]: Pick up an item in the current room.
    - attack or attack [enemy]: Attack the enemy in the room.
    - inventory, inv, i: Show your current inventory.
    - health, h, status: Show your current health.
    - run: Attempt to flee or act silly.
    - help, help?, /h: Show this help menu.
    - quit or /q: Exit the game.
"
}

/// Hint for an unrecognized command; the full command list rides along the first time.
pub fn unknown_command_text(include_help: bool) -> String {
    let mut out = String::from(
        "\nI don't understand that command.\n\
         TIP: You can always check available commands by typing 'help' or '/h'.\n",
    );
    if include_help {
        out.push_str(help_text());
    }
    out
}

/// Room view: description (unless suppressed), visible items and any foe.
pub fn describe_room(room: &Room, show_description: bool) -> String {
    let mut out = String::new();
    if show_description {
        out.push('\n');
        out.push_str(&room.description);
        out.push('\n');
    }
    if !room.items.is_empty() {
        out.push_str(&format!("You see: {}\n", room.items.join(", ")));
    }
    if let Some(foe) = room.foe() {
        out.push_str(&format!("\nA {} blocks your path!\n", foe));
    }
    out
}

pub fn run_text() -> &'static str {
    "Your instincts scream at you to flee, but courage must prevail!\n"
}

pub fn quit_text() -> &'static str {
    "The dungeon's shadows seem to grow longer as you turn away...\n"
}

pub fn dart_trap_text() -> &'static str {
    "\nAs you step toward the artifact, deadly darts shoot from the walls!\n\
     You're pierced by dozens of poisoned projectiles!\n\
     \nYour vision fades as you collapse to the ground...\n\
     GAME OVER\n\
     \nTIP: Try finding armor plates before entering the treasure room!\n"
}

pub fn guardian_emerges_text(foe: &str) -> String {
    format!("\nA {} emerges from the shadows to protect the artifact!\n", foe)
}

pub fn victory_text() -> &'static str {
    "\nThe artifact's power surges through you!\n\
     Darkness flees before your triumph as you escape the dungeon!\n\
     VICTORY IS YOURS!\n"
}

pub fn defeat_text() -> &'static str {
    "\nYour legs buckle as the world spins...\n\
     The cold stone greets your falling body.\n\
     As darkness takes you, one thought remains:\n\
     You have joined the dungeon's countless victims...\n"
}
