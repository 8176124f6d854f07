//! Light sources.
//!
//! raylib's immediate-mode primitives are unlit, so lighting is applied on
//! the CPU: each primitive's colour is scaled by the ambient term plus a
//! Lambert term for the sun light, evaluated against an up-facing normal at
//! the primitive's world position. The orbiting sun therefore brightens and
//! dims the courtyard as it moves.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector3};

/// Diffuse contribution is damped so the sun never fully washes out colours.
const DIFFUSE_WEIGHT: f32 = 0.6;

#[derive(Component, Clone, Copy, Debug)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

/// Directional light positioned in the world; its direction at any point
/// is from that point towards the light.
#[derive(Component, Clone, Copy, Debug)]
pub struct DirectionalLight {
    pub color: Color,
    pub intensity: f32,
}

/// Snapshot of the scene's lights for one frame.
#[derive(Clone, Copy, Debug)]
pub struct SceneLighting {
    pub ambient: Option<AmbientLight>,
    pub sun: Option<(DirectionalLight, Vector3)>,
}

impl SceneLighting {
    /// Lit colour of a surface at world position `point`.
    pub fn shade(&self, base: Color, point: Vector3) -> Color {
        let mut gain = [0.0f32; 3];

        if let Some(ambient) = self.ambient {
            let c = channels(ambient.color);
            for (g, c) in gain.iter_mut().zip(c) {
                *g += ambient.intensity * c;
            }
        }

        if let Some((light, position)) = self.sun {
            let dx = position.x - point.x;
            let dy = position.y - point.y;
            let dz = position.z - point.z;
            let len = (dx * dx + dy * dy + dz * dz).sqrt();
            if len > f32::EPSILON {
                let lambert = (dy / len).max(0.0) * light.intensity * DIFFUSE_WEIGHT;
                let c = channels(light.color);
                for (g, c) in gain.iter_mut().zip(c) {
                    *g += lambert * c;
                }
            }
        }

        let scale = |v: u8, g: f32| (v as f32 * g.clamp(0.0, 1.0)).round() as u8;
        Color {
            r: scale(base.r, gain[0]),
            g: scale(base.g, gain[1]),
            b: scale(base.b, gain[2]),
            a: base.a,
        }
    }
}

fn channels(c: Color) -> [f32; 3] {
    [c.r as f32 / 255.0, c.g as f32 / 255.0, c.b as f32 / 255.0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::shape::rgb;

    fn white_ambient(intensity: f32) -> AmbientLight {
        AmbientLight {
            color: rgb(0xffffff),
            intensity,
        }
    }

    #[test]
    fn ambient_only_scales_uniformly() {
        let lighting = SceneLighting {
            ambient: Some(white_ambient(0.5)),
            sun: None,
        };
        let c = lighting.shade(rgb(0xc8c8c8), Vector3::new(0.0, 0.0, 0.0));
        assert_eq!((c.r, c.g, c.b), (100, 100, 100));
    }

    #[test]
    fn sun_overhead_is_brighter_than_sun_below() {
        let sun = DirectionalLight {
            color: rgb(0xffffff),
            intensity: 1.0,
        };
        let above = SceneLighting {
            ambient: Some(white_ambient(0.4)),
            sun: Some((sun, Vector3::new(0.0, 10.0, 0.0))),
        };
        let below = SceneLighting {
            ambient: Some(white_ambient(0.4)),
            sun: Some((sun, Vector3::new(0.0, -10.0, 0.0))),
        };
        let p = Vector3::new(0.0, 0.0, 0.0);
        let base = rgb(0x808080);
        assert!(above.shade(base, p).r > below.shade(base, p).r);
        assert_eq!(below.shade(base, p).r, (128.0f32 * 0.4).round() as u8);
    }

    #[test]
    fn gain_is_clamped() {
        let lighting = SceneLighting {
            ambient: Some(white_ambient(5.0)),
            sun: None,
        };
        let c = lighting.shade(rgb(0x102030), Vector3::new(0.0, 0.0, 0.0));
        assert_eq!((c.r, c.g, c.b), (0x10, 0x20, 0x30));
    }
}
