//! # Lost Artifact - a text dungeon crawler
//!
//! Explore a ruined dungeon one typed command at a time, find the armor that
//! keeps the treasure room's dart trap at bay, defeat its three guardians and
//! walk out with the lost artifact.
//!
//! ## Features
//!
//! - **Fixed Room Graph**: Fourteen hand-placed rooms with validated exits.
//! - **Encounters**: Single foes and multi-stage guardian fights resolved turn by turn.
//! - **Movement Rules**: Guarded exits, parting strikes and a harsher welcome for retreat.
//! - **Deterministic Sessions**: All randomness flows from one seedable RNG per session.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lost_artifact::game::GameSession;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut session = GameSession::new(Some(42))?;
//!     print!("{}", session.describe_turn()?);
//!     print!("{}", session.handle_input("take torch")?);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - World, rules, command parsing and the session turn loop
//! - [`config`] - Configuration loading and defaults
//! - [`logutil`] - Log-safe rendering of player input

pub mod config;
pub mod game;
pub mod logutil;
