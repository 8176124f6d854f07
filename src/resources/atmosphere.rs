//! Sky colour and distance fog.
//!
//! Linear fog: colours are untouched up to `fog_near` units from the camera
//! and fully replaced by the sky colour from `fog_far` on.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Color;

use crate::components::shape::rgb;

pub const SKY_COLOR: Color = rgb(0x87CEEB);
pub const FOG_NEAR: f32 = 15.0;
pub const FOG_FAR: f32 = 25.0;

#[derive(Resource, Debug, Clone, Copy)]
pub struct Atmosphere {
    pub sky: Color,
    pub fog_near: f32,
    pub fog_far: f32,
}

impl Default for Atmosphere {
    fn default() -> Self {
        Self {
            sky: SKY_COLOR,
            fog_near: FOG_NEAR,
            fog_far: FOG_FAR,
        }
    }
}

impl Atmosphere {
    /// 0.0 = no fog, 1.0 = sky colour.
    pub fn fog_factor(&self, distance: f32) -> f32 {
        let span = self.fog_far - self.fog_near;
        if span <= f32::EPSILON {
            return if distance >= self.fog_far { 1.0 } else { 0.0 };
        }
        ((distance - self.fog_near) / span).clamp(0.0, 1.0)
    }

    /// Blend `color` towards the sky by the fog factor at `distance`.
    pub fn apply(&self, color: Color, distance: f32) -> Color {
        let f = self.fog_factor(distance);
        if f <= 0.0 {
            return color;
        }
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * f).round() as u8;
        Color {
            r: mix(color.r, self.sky.r),
            g: mix(color.g, self.sky.g),
            b: mix(color.b, self.sky.b),
            a: color.a,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fog_is_linear_between_near_and_far() {
        let atmosphere = Atmosphere::default();
        assert_eq!(atmosphere.fog_factor(10.0), 0.0);
        assert!((atmosphere.fog_factor(20.0) - 0.5).abs() < 1e-6);
        assert_eq!(atmosphere.fog_factor(40.0), 1.0);
    }

    #[test]
    fn far_colours_become_sky() {
        let atmosphere = Atmosphere::default();
        let near = atmosphere.apply(rgb(0x000000), 5.0);
        let far = atmosphere.apply(rgb(0x000000), 30.0);
        assert_eq!((near.r, near.g, near.b), (0, 0, 0));
        assert_eq!((far.r, far.g, far.b), (SKY_COLOR.r, SKY_COLOR.g, SKY_COLOR.b));
    }
}
