//! Gallows Yard main entry point.
//!
//! Hangman with a continuously animated 3D castle courtyard, written in
//! Rust using:
//! - **raylib** for windowing, input and immediate-mode 3D drawing
//! - **bevy_ecs** for the entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, apply command line overrides
//! 2. Open the window, create the render surface, load the wood texture
//! 3. Install resources and observers, run the session `Setup` hook
//! 4. Each frame: read input, apply events, advance the clock, animate
//!    actors, propagate transforms, draw
//! 5. On Escape or window close, run the `Quitting` hook and exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --seed 42
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod scene;
mod systems;

use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::hud::HudLayout;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::session::SessionState;
use crate::resources::texturestore::{TextureStore, WOOD};
use crate::resources::viewport::Viewport;
use crate::systems::add_simulation_systems;
use crate::systems::input::{dispatch_input, update_input_state};
use crate::systems::propagate_transforms::propagate_transforms;
use crate::systems::render::render_system;
use crate::systems::session::session_is_playing;
use crate::systems::window::poll_window_size;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

/// Gallows Yard
#[derive(Parser)]
#[command(version, about = "Hangman in an animated castle courtyard")]
struct Cli {
    /// Configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Secret word of the first round.
    #[arg(long, value_name = "WORD")]
    word: Option<String>,

    /// Seed for the word draw and the grass layout.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Start with the debug overlay shown.
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.word.is_some() {
        config.start_word = cli.word;
    }

    // --------------- Raylib window & assets ---------------
    let (window_width, window_height) = config.window_size();
    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Gallows Yard");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // Escape is handled as a session quit request
    rl.set_exit_key(None);

    let viewport = Viewport::for_window(rl.get_screen_width(), rl.get_screen_height());
    let (surface_w, surface_h) = viewport.surface_size();
    let render_target =
        match RenderTarget::new(&mut rl, &thread, surface_w as u32, surface_h as u32) {
            Ok(target) => target,
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        };

    let mut textures = TextureStore::new();
    textures.load_optional(&mut rl, &thread, WOOD, &config.wood_texture);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    game::init_world(&mut world, config);
    world.insert_resource(HudLayout::compute(&viewport));
    world.insert_resource(viewport);
    if cli.debug {
        world.insert_resource(DebugMode {});
    }
    world.insert_non_send_resource(render_target);
    world.insert_non_send_resource(textures);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    game::start_session(&mut world);

    let mut update = Schedule::default();
    update.add_systems(update_input_state.before(dispatch_input));
    update.add_systems(poll_window_size.run_if(session_is_playing).before(dispatch_input));
    add_simulation_systems(&mut update);
    update.add_systems(render_system.after(propagate_transforms));

    if let Err(e) = update.initialize(&mut world) {
        error!("Failed to initialize schedule: {}", e);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<SessionState>().is_quitting()
    {
        update.run(&mut world);
        world.clear_trackers();
    }

    if !world.resource::<SessionState>().is_quitting() {
        game::end_session(&mut world);
    }
    info!("Bye");
}
