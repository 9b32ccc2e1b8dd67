//! # Connect Four
//!
//! A console Connect Four game: two players (human or an easy random
//! computer opponent) alternately drop discs into a gravity-fed grid until
//! one connects four or the board fills up.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, disc identity, round state machine
//! - [`engine`] — Turn sequencing, restart transition, move-source abstraction
//! - [`ui`] — Console rendering and line-oriented prompting
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod ui;
