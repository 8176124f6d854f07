//! Viewport adapter state.
//!
//! Holds the camera parameters and the output surface size derived from the
//! window size. Two presets exist: a compact one for narrow windows (camera
//! pulled up and left, surface nearly full width) and a wide one. Deriving
//! the viewport is a pure function of the window size, so applying the same
//! resize twice is harmless.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector3;

use crate::resources::windowsize::WindowSize;

/// Windows narrower than this use [`ViewportPreset::Narrow`].
pub const NARROW_BREAKPOINT: i32 = 768;
/// Smallest output surface edge in pixels.
pub const MIN_SURFACE_DIM: i32 = 16;
/// Point every preset looks at: the gallows area.
pub const LOOK_AT: Vector3 = Vector3 {
    x: -2.0,
    y: 0.5,
    z: -1.0,
};
pub const FOVY_DEGREES: f32 = 75.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportPreset {
    Narrow,
    Wide,
}

impl ViewportPreset {
    pub fn for_width(width: i32) -> Self {
        if width < NARROW_BREAKPOINT {
            ViewportPreset::Narrow
        } else {
            ViewportPreset::Wide
        }
    }

    pub fn camera_position(self) -> Vector3 {
        match self {
            ViewportPreset::Narrow => Vector3::new(-2.5, 3.0, 5.0),
            ViewportPreset::Wide => Vector3::new(0.5, 1.0, 6.0),
        }
    }

    /// Share of the window width and height given to the output surface.
    pub fn surface_fraction(self) -> (f32, f32) {
        match self {
            ViewportPreset::Narrow => (0.98, 0.45),
            ViewportPreset::Wide => (0.60, 0.50),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ViewportPreset::Narrow => "narrow",
            ViewportPreset::Wide => "wide",
        }
    }
}

/// Perspective camera parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub position: Vector3,
    pub target: Vector3,
    pub up: Vector3,
    pub fovy: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub window: WindowSize,
    pub preset: ViewportPreset,
    pub camera: CameraRig,
    pub surface_w: i32,
    pub surface_h: i32,
}

impl Viewport {
    /// Viewport for a window of `w` x `h` pixels.
    pub fn for_window(w: i32, h: i32) -> Self {
        let window = WindowSize::clamped(w, h);
        let preset = ViewportPreset::for_width(window.w);
        let (fw, fh) = preset.surface_fraction();
        let surface_w = ((window.w as f32 * fw).round() as i32).max(MIN_SURFACE_DIM);
        let surface_h = ((window.h as f32 * fh).round() as i32).max(MIN_SURFACE_DIM);

        Self {
            window,
            preset,
            camera: CameraRig {
                position: preset.camera_position(),
                target: LOOK_AT,
                up: Vector3::new(0.0, 1.0, 0.0),
                fovy: FOVY_DEGREES,
                aspect: surface_w as f32 / surface_h as f32,
                near: NEAR_PLANE,
                far: FAR_PLANE,
            },
            surface_w,
            surface_h,
        }
    }

    pub fn surface_size(&self) -> (i32, i32) {
        (self.surface_w, self.surface_h)
    }
}
