//! Gallows Yard library.
//!
//! Hangman played against an animated 3D courtyard. This module exposes the
//! ECS components, resources, systems, events and scene builders for use in
//! integration tests and by the executable.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod scene;
pub mod systems;
