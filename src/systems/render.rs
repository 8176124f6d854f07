//! Rendering.
//!
//! The scene is drawn into the [`RenderTarget`] with a perspective camera,
//! then the target is blitted onto the window and the HUD is drawn around
//! it. Every primitive is drawn at its local origin under its
//! [`GlobalTransform3D`], pushed onto the rlgl matrix stack. Colours are lit
//! on the CPU ([`SceneLighting`]) and then fogged by distance to the camera
//! ([`Atmosphere`]).
use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;
use log::warn;
use raylib::ffi;
use raylib::prelude::*;

use crate::components::actor::Actor;
use crate::components::globaltransform3d::GlobalTransform3D;
use crate::components::light::{AmbientLight, DirectionalLight, SceneLighting};
use crate::components::position::Position3D;
use crate::components::shape::{Primitive, Shape, rgb};
use crate::resources::atmosphere::Atmosphere;
use crate::resources::debugmode::DebugMode;
use crate::resources::figurerig::FigureRig;
use crate::resources::gamestate::{GameState, GameStatus};
use crate::resources::hud::{
    HudLayout, LETTER_SIZE, RESTART_LABEL, STATUS_SIZE, TITLE, TITLE_SIZE, WORD_SIZE, alphabet,
    approx_text_width,
};
use crate::resources::rendertarget::RenderTarget;
use crate::resources::texturestore::TextureStore;
use crate::resources::viewport::Viewport;
use crate::resources::worldtime::WorldTime;

const PAGE: Color = rgb(0xF4EFE6);
const INK: Color = rgb(0x2B2B2B);
const WON: Color = rgb(0x2E7D32);
const LOST: Color = rgb(0xC62828);
const BUTTON: Color = rgb(0x4A6FA5);
const BUTTON_HIT: Color = rgb(0x6AA84F);
const BUTTON_USED: Color = rgb(0xB0B0B0);
const BUTTON_CLOSED: Color = rgb(0xD6D6D6);
const SHADE: Color = Color {
    r: 0,
    g: 0,
    b: 0,
    a: 110,
};

/// Scene entities the renderer reads.
#[derive(SystemParam)]
pub struct SceneQueries<'w, 's> {
    shapes: Query<'w, 's, (&'static Shape, &'static GlobalTransform3D)>,
    ambient: Query<'w, 's, &'static AmbientLight>,
    sun: Query<'w, 's, (&'static DirectionalLight, &'static Position3D)>,
    actors: Query<'w, 's, (), With<Actor>>,
}

impl SceneQueries<'_, '_> {
    /// Snapshot of the first ambient and the first directional light.
    pub fn lighting(&self) -> SceneLighting {
        SceneLighting {
            ambient: self.ambient.iter().next().copied(),
            sun: self.sun.iter().next().map(|(light, pos)| (*light, pos.pos)),
        }
    }
}

/// Resources the HUD and the camera are built from.
#[derive(SystemParam)]
pub struct FrameData<'w> {
    game_state: Res<'w, GameState>,
    layout: Res<'w, HudLayout>,
    viewport: Res<'w, Viewport>,
    atmosphere: Res<'w, Atmosphere>,
    time: Res<'w, WorldTime>,
    rig: Option<Res<'w, FigureRig>>,
    debug: Option<Res<'w, DebugMode>>,
}

pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut target: NonSendMut<RenderTarget>,
    textures: NonSend<TextureStore>,
    scene: SceneQueries,
    frame: FrameData,
) {
    let (sw, sh) = frame.viewport.surface_size();
    let (sw, sh) = (sw as u32, sh as u32);
    if !target.matches(sw, sh) {
        if let Err(e) = target.recreate(&mut rl, &th, sw, sh) {
            warn!("{}; keeping the previous surface", e);
        }
    }

    let rig = frame.viewport.camera;
    let camera = Camera3D::perspective(rig.position, rig.target, rig.up, rig.fovy);
    let lighting = scene.lighting();

    let mut d = rl.begin_drawing(&th);
    {
        let mut t = d.begin_texture_mode(&th, &mut target.texture);
        t.clear_background(frame.atmosphere.sky);
        let mut d3 = t.begin_mode3D(camera);
        for (shape, gt) in scene.shapes.iter() {
            let color = surface_color(shape, gt, &lighting, &frame.atmosphere, rig.position);
            draw_shape(&mut d3, shape, gt, color, &textures);
        }
    }

    d.clear_background(PAGE);
    let surface = frame.layout.surface;
    unsafe {
        ffi::DrawTextureRec(
            target.texture.texture,
            target.source_rect().into(),
            Vector2::new(surface.x, surface.y).into(),
            Color::WHITE.into(),
        );
    }
    d.draw_rectangle_lines(
        surface.x as i32 - 1,
        surface.y as i32 - 1,
        surface.width as i32 + 2,
        surface.height as i32 + 2,
        INK,
    );

    draw_hud(&mut d, &frame);

    if frame.debug.is_some() {
        let fps = d.get_fps();
        draw_debug_overlay(&mut d, &frame, fps, scene.actors.iter().count());
    }
}

/// Lit and fogged colour of a primitive.
pub fn surface_color(
    shape: &Shape,
    gt: &GlobalTransform3D,
    lighting: &SceneLighting,
    atmosphere: &Atmosphere,
    eye: Vector3,
) -> Color {
    let p = gt.translation;
    let lit = if shape.surface.unlit {
        shape.surface.color
    } else {
        lighting.shade(shape.surface.color, p)
    };
    let (dx, dy, dz) = (p.x - eye.x, p.y - eye.y, p.z - eye.z);
    atmosphere.apply(lit, (dx * dx + dy * dy + dz * dz).sqrt())
}

fn draw_shape<D: RaylibDraw3D>(
    d3: &mut D,
    shape: &Shape,
    gt: &GlobalTransform3D,
    color: Color,
    textures: &TextureStore,
) {
    let origin = Vector3::new(0.0, 0.0, 0.0);
    let matrix = gt.to_gl();
    unsafe {
        ffi::rlPushMatrix();
        ffi::rlMultMatrixf(matrix.as_ptr());
    }

    match shape.primitive {
        Primitive::Box {
            width,
            height,
            depth,
        } => match shape.surface.texture.and_then(|key| textures.get(key)) {
            Some(texture) => draw_textured_box(texture, width, height, depth, color),
            None => d3.draw_cube(origin, width, height, depth, color),
        },
        Primitive::Cylinder {
            radius_top,
            radius_bottom,
            height,
            sides,
        } => d3.draw_cylinder(
            Vector3::new(0.0, -height * 0.5, 0.0),
            radius_top,
            radius_bottom,
            height,
            sides,
            color,
        ),
        Primitive::Cone {
            radius,
            height,
            sides,
        } => d3.draw_cylinder(
            Vector3::new(0.0, -height * 0.5, 0.0),
            0.0,
            radius,
            height,
            sides,
            color,
        ),
        Primitive::Sphere { radius } => d3.draw_sphere(origin, radius, color),
        Primitive::Capsule { radius, length } => {
            let half = length * 0.5;
            d3.draw_cylinder(Vector3::new(0.0, -half, 0.0), radius, radius, length, 12, color);
            d3.draw_sphere(Vector3::new(0.0, half, 0.0), radius, color);
            d3.draw_sphere(Vector3::new(0.0, -half, 0.0), radius, color);
        }
        Primitive::Plane { width, depth } => d3.draw_plane(origin, Vector2::new(width, depth), color),
    }

    unsafe {
        ffi::rlPopMatrix();
    }
}

/// Axis-aligned box centred on the origin with `texture` on every face.
fn draw_textured_box(texture: &Texture2D, width: f32, height: f32, depth: f32, color: Color) {
    let (x, y, z) = (width * 0.5, height * 0.5, depth * 0.5);
    // normal, then four corners counter-clockwise with their UVs
    let faces: [([f32; 3], [[f32; 5]; 4]); 6] = [
        ([0.0, 0.0, 1.0], [[-x, -y, z, 0.0, 1.0], [x, -y, z, 1.0, 1.0], [x, y, z, 1.0, 0.0], [-x, y, z, 0.0, 0.0]]),
        ([0.0, 0.0, -1.0], [[-x, -y, -z, 1.0, 1.0], [-x, y, -z, 1.0, 0.0], [x, y, -z, 0.0, 0.0], [x, -y, -z, 0.0, 1.0]]),
        ([0.0, 1.0, 0.0], [[-x, y, -z, 0.0, 0.0], [-x, y, z, 0.0, 1.0], [x, y, z, 1.0, 1.0], [x, y, -z, 1.0, 0.0]]),
        ([0.0, -1.0, 0.0], [[-x, -y, -z, 1.0, 0.0], [x, -y, -z, 0.0, 0.0], [x, -y, z, 0.0, 1.0], [-x, -y, z, 1.0, 1.0]]),
        ([1.0, 0.0, 0.0], [[x, -y, -z, 1.0, 1.0], [x, y, -z, 1.0, 0.0], [x, y, z, 0.0, 0.0], [x, -y, z, 0.0, 1.0]]),
        ([-1.0, 0.0, 0.0], [[-x, -y, -z, 0.0, 1.0], [-x, -y, z, 1.0, 1.0], [-x, y, z, 1.0, 0.0], [-x, y, -z, 0.0, 0.0]]),
    ];

    unsafe {
        ffi::rlSetTexture(texture.id);
        ffi::rlBegin(ffi::RL_QUADS as i32);
        ffi::rlColor4ub(color.r, color.g, color.b, color.a);
        for (normal, corners) in faces.iter() {
            ffi::rlNormal3f(normal[0], normal[1], normal[2]);
            for [vx, vy, vz, u, v] in corners.iter().copied() {
                ffi::rlTexCoord2f(u, v);
                ffi::rlVertex3f(vx, vy, vz);
            }
        }
        ffi::rlEnd();
        ffi::rlSetTexture(0);
    }
}

fn draw_centered(d: &mut RaylibDrawHandle, layout: &HudLayout, text: &str, y: i32, size: i32, color: Color) {
    d.draw_text(text, layout.centered_x(text, size), y, size, color);
}

fn draw_hud(d: &mut RaylibDrawHandle, frame: &FrameData) {
    let layout = frame.layout.as_ref();
    let state = frame.game_state.as_ref();
    let status = state.status();

    draw_centered(d, layout, TITLE, layout.title_y, TITLE_SIZE, INK);
    draw_centered(d, layout, &state.masked_word(), layout.word_y, WORD_SIZE, INK);

    let status_color = match status {
        GameStatus::Lost => LOST,
        GameStatus::Won => WON,
        GameStatus::InProgress(_) => INK,
    };
    draw_centered(d, layout, &status.to_string(), layout.status_y, STATUS_SIZE, status_color);

    let over = status.is_over();
    let secret = state.secret_word();
    for (rect, letter) in layout.letters.iter().zip(alphabet()) {
        let fill = if state.has_guessed(letter) {
            if secret.contains(letter) { BUTTON_HIT } else { BUTTON_USED }
        } else if over {
            BUTTON_CLOSED
        } else {
            BUTTON
        };
        d.draw_rectangle(rect.x as i32, rect.y as i32, rect.width as i32, rect.height as i32, fill);

        let mut buf = [0u8; 4];
        let label: &str = letter.encode_utf8(&mut buf);
        let size = LETTER_SIZE.min(rect.height as i32 - 4).max(6);
        let tx = rect.x as i32 + (rect.width as i32 - approx_text_width(label, size)) / 2;
        let ty = rect.y as i32 + (rect.height as i32 - size) / 2;
        d.draw_text(label, tx, ty, size, Color::WHITE);
    }

    if state.show_restart() {
        let s = layout.surface;
        d.draw_rectangle(s.x as i32, s.y as i32, s.width as i32, s.height as i32, SHADE);
        let r = layout.restart;
        d.draw_rectangle(r.x as i32, r.y as i32, r.width as i32, r.height as i32, BUTTON);
        d.draw_rectangle_lines(r.x as i32, r.y as i32, r.width as i32, r.height as i32, Color::WHITE);
        let tx = r.x as i32 + (r.width as i32 - approx_text_width(RESTART_LABEL, STATUS_SIZE)) / 2;
        let ty = r.y as i32 + (r.height as i32 - STATUS_SIZE) / 2;
        d.draw_text(RESTART_LABEL, tx, ty, STATUS_SIZE, Color::WHITE);
    }
}

fn draw_debug_overlay(
    d: &mut RaylibDrawHandle,
    frame: &FrameData,
    fps: impl std::fmt::Display,
    actors: usize,
) {
    let parts = frame.rig.as_ref().map(|rig| rig.attached_count()).unwrap_or(0);
    let viewport = frame.viewport.as_ref();
    let lines = [
        format!("DEBUG (F11) | FPS: {}", fps),
        format!(
            "Frame: {}  Clock: {:.2}",
            frame.time.frame_count, frame.time.elapsed
        ),
        format!("Actors: {}  Parts: {}", actors, parts),
        format!(
            "Viewport: {} {}x{} in {}x{}",
            viewport.preset.name(),
            viewport.surface_w,
            viewport.surface_h,
            viewport.window.w,
            viewport.window.h
        ),
    ];
    for (i, line) in lines.iter().enumerate() {
        d.draw_text(line, 10, 10 + 14 * i as i32, 10, INK);
    }
}
