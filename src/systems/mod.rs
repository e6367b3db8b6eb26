//! The Entity-Component-System (ECS) module.
//!
//! This module contains all the ECS-related logic, including components,
//! systems, and resources. Everything except `input`, `audio`, and `render`
//! is free of SDL types and runs headless in tests.

pub mod audio;
pub mod collision;
pub mod components;
pub mod control;
pub mod hud;
pub mod input;
pub mod movement;
pub mod particles;
pub mod physics;
pub mod render;
pub mod spawner;
pub mod state;
