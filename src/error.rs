//! Centralized error types for the game.
//!
//! This module defines all error types used throughout the application,
//! providing a consistent error handling approach.

use std::io;

use bevy_ecs::event::Event;

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
/// It can represent any error that can occur during game operation.
#[derive(thiserror::Error, Debug, Event)]
pub enum GameError {
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Errors from the high-score store.
///
/// These are always recoverable: gameplay continues, the record is simply
/// not persisted.
#[derive(thiserror::Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No writable data directory available")]
    NoDataDir,

    #[error("Stored high score is not a number: {0:?}")]
    Corrupt(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
