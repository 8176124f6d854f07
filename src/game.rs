//! Session wiring and lifecycle hooks.
//!
//! [`init_world`] installs the long-lived resources and observers.
//! [`start_session`] requests the `Setup` phase, whose hook [`setup`] builds
//! the courtyard, creates the figure rig, draws the first word and registers
//! the session handles. [`teardown`] undoes exactly that: it despawns every
//! scene root and releases both handles.

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::components::bodypart::HangedFigure;
use crate::components::group::Group;
use crate::events::figure::{RemainingGuessesChanged, rebuild_figure_observer};
use crate::events::guess::{guess_observer, reset_observer};
use crate::events::resize::window_resized_observer;
use crate::events::session::{SessionChangedEvent, observe_session_change_event};
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::atmosphere::Atmosphere;
use crate::resources::figurerig::FigureRig;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::GameState;
use crate::resources::handles::{AnimationLoop, ResizeSubscription};
use crate::resources::hud::HudLayout;
use crate::resources::input::InputState;
use crate::resources::rng::GameRng;
use crate::resources::session::{NextSessionState, SessionPhase, SessionState};
use crate::resources::systemsstore::SystemsStore;
use crate::resources::viewport::Viewport;
use crate::resources::wordpool::WordPool;
use crate::resources::worldtime::WorldTime;
use crate::scene::build_environment;
use crate::scene::figure::figure_root;

/// Insert the window-independent resources and register observers and
/// session hooks.
pub fn init_world(world: &mut World, config: GameConfig) {
    let (w, h) = config.window_size();
    let viewport = Viewport::for_window(w as i32, h as i32);

    world.insert_resource(GameRng::new(config.seed));
    world.insert_resource(SessionState::new());
    world.insert_resource(NextSessionState::new());
    world.insert_resource(InputState::default());
    world.insert_resource(WorldTime::default());
    world.insert_resource(HudLayout::compute(&viewport));
    world.insert_resource(viewport);
    world.insert_resource(config);

    let systems_store = SystemsStore::with_session_hooks(world);
    world.insert_resource(systems_store);

    world.spawn(Observer::new(observe_session_change_event));
    world.spawn(Observer::new(guess_observer));
    world.spawn(Observer::new(reset_observer));
    world.spawn(Observer::new(rebuild_figure_observer));
    world.spawn(Observer::new(window_resized_observer));
    world.spawn(Observer::new(switch_debug_observer));
    // Ensure the observers are registered before anything triggers events.
    world.flush();
}

/// Request the `Setup` phase and apply it immediately.
pub fn start_session(world: &mut World) {
    world.resource_mut::<NextSessionState>().set(SessionPhase::Setup);
    world.trigger(SessionChangedEvent {});
    world.flush();
}

/// Request the `Quitting` phase and apply it immediately.
pub fn end_session(world: &mut World) {
    world.resource_mut::<NextSessionState>().set(SessionPhase::Quitting);
    world.trigger(SessionChangedEvent {});
    world.flush();
}

/// Secret word of the first round: the configured start word when it is
/// usable, otherwise a random pick from the pool.
fn first_round(config: &GameConfig, pool: &WordPool, rng: &mut fastrand::Rng) -> GameState {
    if let Some(word) = config.start_word.as_deref() {
        let word = word.trim();
        if !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()) {
            return GameState::new(word);
        }
        warn!("Ignoring start word '{}': only letters A-Z are allowed", word);
    }
    GameState::random(pool, rng)
}

/// `Setup` hook: build the scene and register the session handles.
pub fn setup(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut rng: ResMut<GameRng>,
    mut next_session: ResMut<NextSessionState>,
) {
    let pool = config.word_pool();
    let game_state = first_round(&config, &pool, &mut rng.0);
    let remaining = game_state.remaining_guesses();
    commands.insert_resource(pool);
    commands.insert_resource(game_state);

    commands.insert_resource(
        WorldTime::default()
            .with_step(config.time_step)
            .with_time_scale(config.time_scale),
    );
    commands.insert_resource(Atmosphere::default());

    build_environment(&mut commands, &mut rng.0);

    let root = figure_root().spawn(&mut commands, None);
    commands.entity(root).insert((Group::FIGURE, HangedFigure));
    commands.insert_resource(FigureRig::new(root));
    commands.trigger(RemainingGuessesChanged { remaining });

    commands.insert_resource(AnimationLoop::default());
    commands.insert_resource(ResizeSubscription);

    next_session.set(SessionPhase::Playing);
}

/// `Playing` hook.
pub fn enter_play(game_state: Res<GameState>) {
    info!(
        "Round started: {} ({} letters)",
        game_state.masked_word(),
        game_state.secret_word().chars().count()
    );
}

/// `Quitting` hook: despawn every scene root and release the session
/// handles.
pub fn teardown(
    mut commands: Commands,
    roots: Query<Entity, (With<Group>, Without<ChildOf>)>,
    animation_loop: Option<Res<AnimationLoop>>,
) {
    let mut despawned = 0;
    for entity in roots.iter() {
        commands.entity(entity).despawn();
        despawned += 1;
    }
    commands.remove_resource::<FigureRig>();
    commands.remove_resource::<AnimationLoop>();
    commands.remove_resource::<ResizeSubscription>();

    info!(
        "Session torn down: {} scene roots despawned after {} frames",
        despawned,
        animation_loop.map(|l| l.frames).unwrap_or(0)
    );
}
