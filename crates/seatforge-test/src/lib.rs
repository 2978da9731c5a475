//! Shared test fixtures for SeatForge crates.
//!
//! This crate provides layouts, rosters and classroom problems for testing.
//! It depends only on `seatforge-core`, so the engine crate can use it as a
//! dev-dependency without a cycle.
//!
//! - [`layout`] - Layouts from ASCII art and common shapes
//! - [`roster`] - Rosters from id lists
//! - [`classroom`] - A realistic classroom problem
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! seatforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```
//! use seatforge_test::{layout_from_ascii, roster_of};
//!
//! let layout = layout_from_ascii("D.D");
//! let roster = roster_of(&["amy", "bob"]);
//! assert_eq!(layout.seat_count(), roster.len());
//! ```

pub mod classroom;
pub mod layout;
pub mod roster;

pub use classroom::{classroom_problem, CLASSROOM_ASCII};
pub use layout::{desk_row, layout_from_ascii, single_column};
pub use roster::{numbered_roster, roster_of};
