//! Castle perimeter: four wall segments and four corner towers.

use raylib::prelude::Color;

use crate::components::shape::{Primitive, Surface, rgb};
use crate::scene::node::NodeSpec;

const STONE: Color = rgb(0x808080);
const ROOF: Color = rgb(0x800000);

const WALL_HEIGHT: f32 = 8.0;
const WALL_THICKNESS: f32 = 2.0;
/// Walls are lowered so their base sits below the ground plane.
const SINK: f32 = 2.0;

pub const TOWER_POSITIONS: [(f32, f32); 4] = [(-14.0, -15.0), (14.0, -15.0), (-14.0, 5.0), (14.0, 5.0)];

fn wall(name: &'static str, width: f32, height: f32, depth: f32) -> NodeSpec {
    NodeSpec::mesh(
        name,
        Primitive::Box {
            width,
            height,
            depth,
        },
        Surface::solid(STONE),
    )
}

fn tower(x: f32, z: f32) -> [NodeSpec; 2] {
    let y = WALL_HEIGHT / 2.0 - SINK;
    let tower = NodeSpec::mesh(
        "tower",
        Primitive::Cylinder {
            radius_top: 2.0,
            radius_bottom: 2.0,
            height: WALL_HEIGHT + 2.0,
            sides: 8,
        },
        Surface::solid(STONE),
    )
    .at(x, y, z);
    let roof = NodeSpec::mesh(
        "tower roof",
        Primitive::Cone {
            radius: 2.5,
            height: 2.0,
            sides: 8,
        },
        Surface::solid(ROOF),
    )
    .at(x, y + WALL_HEIGHT / 2.0 + 1.0, z);
    [tower, roof]
}

pub fn castle() -> NodeSpec {
    let full = WALL_HEIGHT / 2.0 - SINK;
    let half = WALL_HEIGHT / 4.0 - SINK;

    NodeSpec::group("castle")
        .child(wall("back wall", 30.0, WALL_HEIGHT, WALL_THICKNESS).at(0.0, full, -20.0))
        .child(wall("front wall", 30.0, WALL_HEIGHT / 2.0, WALL_THICKNESS).at(0.0, half, 8.0))
        .child(wall("left wall", WALL_THICKNESS, WALL_HEIGHT, 30.0).at(-14.0, full, -6.0))
        .child(wall("right wall", WALL_THICKNESS, WALL_HEIGHT, 30.0).at(14.0, full, -6.0))
        .with_children(TOWER_POSITIONS.iter().flat_map(|&(x, z)| tower(x, z)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_walls_four_towers_four_roofs() {
        let castle = castle();
        assert_eq!(castle.shape_count(), 12);
        let roofs: Vec<_> = castle.children.iter().filter(|c| c.name == "tower roof").collect();
        assert_eq!(roofs.len(), 4);
        assert!(roofs.iter().all(|r| r.position.y == 7.0));
        let back = castle.find("back wall").unwrap();
        assert_eq!(back.position.y, 2.0);
        assert_eq!(castle.find("front wall").unwrap().position.y, 0.0);
    }
}
