//! Integration tests for the session lifecycle, the animation scheduler and
//! the viewport adapter.
//!
//! The simulation half of the frame schedule runs headless; nothing here
//! opens a window.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test session_integration
//! ```

use bevy_ecs::prelude::*;

use gallowsyard::components::actor::{Actor, MotionProfile};
use gallowsyard::components::bodypart::BodyPartNode;
use gallowsyard::components::group::Group;
use gallowsyard::components::light::{AmbientLight, DirectionalLight};
use gallowsyard::components::position::Position3D;
use gallowsyard::components::rotation::Rotation3D;
use gallowsyard::events::guess::GuessEvent;
use gallowsyard::events::resize::WindowResizedEvent;
use gallowsyard::game::{end_session, init_world, start_session};
use gallowsyard::resources::figurerig::{FigureRig, figure_anchor};
use gallowsyard::resources::gameconfig::GameConfig;
use gallowsyard::resources::handles::{AnimationLoop, ResizeSubscription};
use gallowsyard::resources::hud::HudLayout;
use gallowsyard::resources::session::{SessionPhase, SessionState};
use gallowsyard::resources::viewport::{MIN_SURFACE_DIM, Viewport, ViewportPreset};
use gallowsyard::resources::worldtime::{FRAME_STEP, WorldTime};
use gallowsyard::scene::ground::BLADE_COUNT;
use gallowsyard::systems::add_simulation_systems;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn session_world(word: &str) -> World {
    let mut config = GameConfig::new();
    config.seed = Some(7);
    config.start_word = Some(word.to_string());
    let mut world = World::new();
    init_world(&mut world, config);
    start_session(&mut world);
    world
}

fn frame_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    add_simulation_systems(&mut schedule);
    schedule
}

fn run_frames(world: &mut World, schedule: &mut Schedule, frames: usize) {
    for _ in 0..frames {
        schedule.run(world);
    }
}

fn groups(world: &mut World) -> Vec<Group> {
    let mut groups: Vec<Group> = world.query::<&Group>().iter(world).copied().collect();
    groups.sort();
    groups.dedup();
    groups
}

fn count_profile(world: &mut World, profile: MotionProfile) -> usize {
    world
        .query::<&Actor>()
        .iter(world)
        .filter(|actor| actor.profile == profile)
        .count()
}

fn find_profile(world: &mut World, profile: MotionProfile) -> Option<(Actor, Position3D)> {
    world
        .query::<(&Actor, &Position3D)>()
        .iter(world)
        .find(|(actor, _)| actor.profile == profile)
        .map(|(actor, pos)| (*actor, *pos))
}

// =============================================================================
// Session lifecycle
// =============================================================================

#[test]
fn setup_builds_every_group_and_registers_handles() {
    let mut world = session_world("EGER");

    let mut expected = vec![
        Group::CASTLE,
        Group::TREES,
        Group::CROWD,
        Group::GROUND,
        Group::GRASS,
        Group::GALLOWS,
        Group::LIGHTS,
        Group::FIGURE,
    ];
    expected.sort();
    assert_eq!(groups(&mut world), expected);

    assert_eq!(count_profile(&mut world, MotionProfile::GrassBlade), BLADE_COUNT);
    assert_eq!(count_profile(&mut world, MotionProfile::Crowd), 4);
    assert_eq!(count_profile(&mut world, MotionProfile::Animal), 2);
    assert_eq!(count_profile(&mut world, MotionProfile::Executioner), 1);
    assert_eq!(count_profile(&mut world, MotionProfile::Sun), 1);
    assert_eq!(world.query::<&AmbientLight>().iter(&world).count(), 1);
    assert_eq!(world.query::<&DirectionalLight>().iter(&world).count(), 1);

    assert!(world.contains_resource::<AnimationLoop>());
    assert!(world.contains_resource::<ResizeSubscription>());
    assert!(world.contains_resource::<FigureRig>());
}

#[test]
fn first_frame_enters_play() {
    let mut world = session_world("EGER");
    let mut schedule = frame_schedule();
    assert_eq!(*world.resource::<SessionState>().get(), SessionPhase::Setup);

    run_frames(&mut world, &mut schedule, 2);
    assert_eq!(*world.resource::<SessionState>().get(), SessionPhase::Playing);
}

#[test]
fn teardown_releases_everything_the_session_created() {
    let mut world = session_world("EGER");
    let mut schedule = frame_schedule();
    run_frames(&mut world, &mut schedule, 3);

    end_session(&mut world);

    assert!(world.resource::<SessionState>().is_quitting());
    assert!(groups(&mut world).is_empty());
    assert_eq!(world.query::<&Actor>().iter(&world).count(), 0);
    assert_eq!(world.query::<&Position3D>().iter(&world).count(), 0);
    assert!(!world.contains_resource::<AnimationLoop>());
    assert!(!world.contains_resource::<ResizeSubscription>());
    assert!(!world.contains_resource::<FigureRig>());
}

#[test]
fn guesses_after_teardown_spawn_no_parts() {
    let mut world = session_world("EGER");
    end_session(&mut world);

    world.trigger(GuessEvent { letter: 'Z' });
    world.flush();

    assert_eq!(world.query::<&BodyPartNode>().iter(&world).count(), 0);
}

// =============================================================================
// Animation scheduler
// =============================================================================

#[test]
fn clock_advances_one_step_per_frame() {
    let mut world = session_world("EGER");
    let mut schedule = frame_schedule();

    run_frames(&mut world, &mut schedule, 10);

    let time = world.resource::<WorldTime>();
    assert!(approx_eq(time.elapsed, 10.0 * FRAME_STEP));
    assert_eq!(time.frame_count, 10);
    assert_eq!(world.resource::<AnimationLoop>().frames, 10);
}

#[test]
fn clock_stops_after_teardown() {
    let mut world = session_world("EGER");
    let mut schedule = frame_schedule();
    run_frames(&mut world, &mut schedule, 5);

    end_session(&mut world);
    let stopped = world.resource::<WorldTime>().elapsed;
    run_frames(&mut world, &mut schedule, 5);

    assert!(approx_eq(world.resource::<WorldTime>().elapsed, stopped));
}

#[test]
fn sun_light_tracks_the_orbiting_sun() {
    let mut world = session_world("EGER");
    let mut schedule = frame_schedule();
    run_frames(&mut world, &mut schedule, 25);

    let (sun, sun_pos) = find_profile(&mut world, MotionProfile::Sun).unwrap();
    let t = world.resource::<WorldTime>().elapsed;
    let expected = sun.pose(t, false).position;
    assert!(approx_eq(sun_pos.pos.x, expected.x));
    assert!(approx_eq(sun_pos.pos.y, expected.y));

    let light_pos = world
        .query_filtered::<&Position3D, With<DirectionalLight>>()
        .single(&world)
        .unwrap();
    assert!(approx_eq(light_pos.pos.x, sun_pos.pos.x));
    assert!(approx_eq(light_pos.pos.y, sun_pos.pos.y));
    assert!(approx_eq(light_pos.pos.z, sun_pos.pos.z));
}

#[test]
fn empty_figure_stays_at_rest() {
    let mut world = session_world("EGER");
    let mut schedule = frame_schedule();
    run_frames(&mut world, &mut schedule, 30);

    let (figure, pos) = find_profile(&mut world, MotionProfile::HangedFigure).unwrap();
    assert_eq!(pos.pos, figure.rest.position);
    assert_eq!(pos.pos, figure_anchor());
}

#[test]
fn figure_swings_once_a_part_is_attached() {
    let mut world = session_world("EGER");
    let mut schedule = frame_schedule();
    world.trigger(GuessEvent { letter: 'Z' });
    world.flush();
    run_frames(&mut world, &mut schedule, 20);

    let t = world.resource::<WorldTime>().elapsed;
    let (figure, rotation) = world
        .query::<(&Actor, &Rotation3D)>()
        .iter(&world)
        .find(|(actor, _)| actor.profile == MotionProfile::HangedFigure)
        .map(|(actor, rotation)| (*actor, *rotation))
        .unwrap();
    let expected = MotionProfile::HangedFigure
        .pose(t, figure.index, false, figure.rest)
        .rotation;

    assert_eq!(rotation.euler, expected);
    assert!(rotation.euler.z.abs() > EPSILON);
    assert!(rotation.euler.x.abs() > EPSILON);
}

#[test]
fn crowd_escalates_once_the_round_is_over() {
    let mut world = session_world("DUNA");
    let mut schedule = frame_schedule();
    run_frames(&mut world, &mut schedule, 3);

    let (member, before) = find_profile(&mut world, MotionProfile::Crowd).unwrap();
    let t = world.resource::<WorldTime>().elapsed;
    assert_eq!(before.pos, member.pose(t, false).position);

    for letter in ['X', 'Y', 'Z', 'Q', 'W', 'V'] {
        world.trigger(GuessEvent { letter });
        world.flush();
    }
    run_frames(&mut world, &mut schedule, 1);

    let (member, after) = find_profile(&mut world, MotionProfile::Crowd).unwrap();
    let t = world.resource::<WorldTime>().elapsed;
    assert_eq!(after.pos, member.pose(t, true).position);
    assert!((after.pos.y - member.rest.position.y).abs() > EPSILON);
}

// =============================================================================
// Viewport adapter
// =============================================================================

#[test]
fn resize_switches_preset_and_layout() {
    let mut world = session_world("EGER");

    world.trigger(WindowResizedEvent { w: 600, h: 900 });
    world.flush();

    let viewport = *world.resource::<Viewport>();
    assert_eq!(viewport.preset, ViewportPreset::Narrow);
    assert_eq!(viewport, Viewport::for_window(600, 900));
    assert_eq!(world.resource::<HudLayout>().window_w, 600);
}

#[test]
fn repeated_resize_is_idempotent() {
    let mut world = session_world("EGER");
    let mut schedule = frame_schedule();
    run_frames(&mut world, &mut schedule, 4);
    let time_before = *world.resource::<WorldTime>();
    let rebuilds_before = world.resource::<FigureRig>().rebuilds;

    for _ in 0..2 {
        world.trigger(WindowResizedEvent { w: 1920, h: 1080 });
        world.flush();
    }

    assert_eq!(*world.resource::<Viewport>(), Viewport::for_window(1920, 1080));
    assert!(approx_eq(world.resource::<WorldTime>().elapsed, time_before.elapsed));
    assert_eq!(world.resource::<FigureRig>().rebuilds, rebuilds_before);
}

#[test]
fn degenerate_resize_is_clamped() {
    let mut world = session_world("EGER");

    world.trigger(WindowResizedEvent { w: 0, h: -5 });
    world.flush();

    let viewport = *world.resource::<Viewport>();
    assert_eq!(viewport, Viewport::for_window(0, -5));
    assert_eq!((viewport.window.w, viewport.window.h), (1, 1));
    assert_eq!(viewport.surface_size(), (MIN_SURFACE_DIM, MIN_SURFACE_DIM));
    assert!(viewport.camera.aspect.is_finite());
    assert_eq!(world.resource::<HudLayout>().window_w, 1);
}

#[test]
fn resize_after_teardown_is_ignored() {
    let mut world = session_world("EGER");
    let before = *world.resource::<Viewport>();
    end_session(&mut world);

    world.trigger(WindowResizedEvent { w: 500, h: 500 });
    world.flush();

    assert_eq!(*world.resource::<Viewport>(), before);
}
