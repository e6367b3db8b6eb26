//! Kickflip game library crate.
//!
//! A pixel-art endless skating game: the world scrolls past a fixed skater
//! who jumps, ducks, grinds, and chains tricks to dodge procedurally placed
//! street obstacles.

pub mod app;
pub mod audio;
pub mod constants;
pub mod error;
pub mod events;
pub mod game;
pub mod persistence;
pub mod platform;
pub mod sprites;
pub mod systems;
