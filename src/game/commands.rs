//! Player command parsing.
//!
//! Input is trimmed and lowercased before matching, so `NORTH`, ` north `
//! and `North` all mean the same thing.

use super::types::Direction;

/// Everything a player can ask for at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    Move(Direction),      // north, n, go north
    GoUnknown(String),    // go <not a direction>
    Take(String),         // take torch
    Attack,               // attack, attack rat
    Inventory,            // inventory, inv, i
    Health,               // health, h, status
    Run,                  // run
    Help,                 // help, help?, /h
    Quit,                 // quit, /q
    Unknown(String),
}

/// Parse raw input into a command.
pub fn parse_command(input: &str) -> GameCommand {
    let input = input.trim().to_lowercase();

    if let Some(direction) = Direction::parse(&input) {
        return GameCommand::Move(direction);
    }

    if let Some(rest) = input.strip_prefix("go ") {
        let rest = rest.trim();
        return match Direction::parse(rest) {
            Some(direction) => GameCommand::Move(direction),
            None => GameCommand::GoUnknown(rest.to_string()),
        };
    }

    if let Some(item) = input.strip_prefix("take ") {
        let item = item.trim();
        if !item.is_empty() {
            return GameCommand::Take(item.to_string());
        }
    }

    match input.as_str() {
        "attack" => GameCommand::Attack,
        s if s.starts_with("attack ") => GameCommand::Attack,
        "inventory" | "inv" | "i" => GameCommand::Inventory,
        "health" | "h" | "status" => GameCommand::Health,
        "run" => GameCommand::Run,
        "help" | "help?" | "/h" => GameCommand::Help,
        "quit" | "/q" => GameCommand::Quit,
        _ => GameCommand::Unknown(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_words_and_go_prefix() {
        assert_eq!(parse_command("north"), GameCommand::Move(Direction::North));
        assert_eq!(parse_command("  WEST "), GameCommand::Move(Direction::West));
        assert_eq!(parse_command("go down"), GameCommand::Move(Direction::Down));
        assert_eq!(parse_command("s"), GameCommand::Move(Direction::South));
        assert_eq!(
            parse_command("go sideways"),
            GameCommand::GoUnknown("sideways".into())
        );
    }

    #[test]
    fn take_keeps_full_item_phrase() {
        assert_eq!(
            parse_command("take Armor Plates"),
            GameCommand::Take("armor plates".into())
        );
        assert_eq!(parse_command("take"), GameCommand::Unknown("take".into()));
    }

    #[test]
    fn aliases_map_to_the_same_command() {
        for inp in ["inventory", "inv", "i"] {
            assert_eq!(parse_command(inp), GameCommand::Inventory);
        }
        for inp in ["health", "h", "status"] {
            assert_eq!(parse_command(inp), GameCommand::Health);
        }
        for inp in ["help", "help?", "/h"] {
            assert_eq!(parse_command(inp), GameCommand::Help);
        }
        for inp in ["quit", "/q"] {
            assert_eq!(parse_command(inp), GameCommand::Quit);
        }
        assert_eq!(parse_command("attack the rat"), GameCommand::Attack);
        assert_eq!(parse_command("run"), GameCommand::Run);
    }

    #[test]
    fn gibberish_is_unknown() {
        assert_eq!(parse_command("dance"), GameCommand::Unknown("dance".into()));
        assert_eq!(parse_command(""), GameCommand::Unknown(String::new()));
        assert_eq!(parse_command("attacker"), GameCommand::Unknown("attacker".into()));
    }
}
