//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: the hangman round, the animation
//! clock, the viewport, session handles, rendering handles and asset stores.
//!
//! Overview
//! - `atmosphere` – sky colour and distance fog
//! - `debugmode` – presence toggles the debug overlay
//! - `figurerig` – root entity and attached parts of the hanged figure
//! - `gameconfig` – settings loaded from `config.ini`
//! - `gamestate` – secret word, guesses and remaining-guess counter
//! - `handles` – session-scoped animation loop and resize subscription
//! - `hud` – screen layout of the HUD and click hit-testing
//! - `input` – per-frame keyboard and pointer state
//! - `rendertarget` – off-screen surface the scene is drawn into
//! - `rng` – seeded random generator for the session
//! - `session` – authoritative and pending session phase
//! - `systemsstore` – registry of session hooks by name
//! - `texturestore` – loaded textures keyed by name
//! - `viewport` – camera and surface size derived from the window
//! - `windowsize` – window dimensions
//! - `wordpool` – words a round can draw from
//! - `worldtime` – fixed-step animation clock
pub mod atmosphere;
pub mod debugmode;
pub mod figurerig;
pub mod gameconfig;
pub mod gamestate;
pub mod handles;
pub mod hud;
pub mod input;
pub mod rendertarget;
pub mod rng;
pub mod session;
pub mod systemsstore;
pub mod texturestore;
pub mod viewport;
pub mod windowsize;
pub mod wordpool;
pub mod worldtime;
