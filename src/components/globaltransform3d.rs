//! Computed world-space transform for entities in a hierarchy.
//!
//! When an entity has a [`ChildOf`](bevy_ecs::hierarchy::ChildOf) parent, its
//! [`Position3D`](super::position::Position3D),
//! [`Rotation3D`](super::rotation::Rotation3D) and
//! [`Scale3D`](super::scale::Scale3D) are interpreted as local to the parent.
//! The [`propagate_transforms`](crate::systems::propagate_transforms::propagate_transforms)
//! system computes the resulting world-space affine transform and stores it
//! here for the renderer.

use bevy_ecs::prelude::*;
use raylib::math::Vector3;

/// Computed world-space affine transform.
///
/// `basis` is row-major and already includes scale (`R * S`), so the
/// transform of a point is `basis * p + translation`.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct GlobalTransform3D {
    pub basis: [[f32; 3]; 3],
    pub translation: Vector3,
}

impl Default for GlobalTransform3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl GlobalTransform3D {
    pub const IDENTITY: Self = Self {
        basis: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        translation: Vector3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        },
    };

    /// Build `T * R * S` from a translation, an XYZ Euler rotation (radians)
    /// and a per-axis scale.
    pub fn from_trs(translation: Vector3, euler: Vector3, scale: Vector3) -> Self {
        let (b, a) = euler.x.sin_cos();
        let (d, c) = euler.y.sin_cos();
        let (f, e) = euler.z.sin_cos();

        let ae = a * e;
        let af = a * f;
        let be = b * e;
        let bf = b * f;

        let r = [
            [c * e, -c * f, d],
            [af + be * d, ae - bf * d, -b * c],
            [bf - ae * d, be + af * d, a * c],
        ];
        let s = [scale.x, scale.y, scale.z];

        let mut basis = [[0.0; 3]; 3];
        for (row, r_row) in basis.iter_mut().zip(r.iter()) {
            for col in 0..3 {
                row[col] = r_row[col] * s[col];
            }
        }

        Self { basis, translation }
    }

    /// Compose `self * child`: the child's local transform expressed in the
    /// space `self` maps to.
    pub fn mul(&self, child: &Self) -> Self {
        let mut basis = [[0.0; 3]; 3];
        for (i, row) in basis.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.basis[i][k] * child.basis[k][j]).sum();
            }
        }
        Self {
            basis,
            translation: self.transform_point(child.translation),
        }
    }

    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        let m = &self.basis;
        Vector3 {
            x: m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            y: m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            z: m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        }
    }

    pub fn transform_point(&self, p: Vector3) -> Vector3 {
        let v = self.transform_vector(p);
        Vector3 {
            x: v.x + self.translation.x,
            y: v.y + self.translation.y,
            z: v.z + self.translation.z,
        }
    }

    /// Column-major 4x4 layout as expected by `rlMultMatrixf`.
    pub fn to_gl(&self) -> [f32; 16] {
        let m = &self.basis;
        let t = self.translation;
        [
            m[0][0], m[1][0], m[2][0], 0.0, //
            m[0][1], m[1][1], m[2][1], 0.0, //
            m[0][2], m[1][2], m[2][2], 0.0, //
            t.x, t.y, t.z, 1.0,
        ]
    }
}
