//! Geometry spawning functions for level construction.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::builder::LevelGeometry;
use super::data::LevelDefinition;
use super::materials::MaterialRegistry;

const FLOOR_DEPTH: f32 = 0.2;
const CEILING_DEPTH: f32 = 0.2;

/// Center of the level footprint in world space.
fn level_center(level: &LevelDefinition) -> Vec3 {
    Vec3::new(
        (level.width as f32 - 1.0) * level.tile_size / 2.0,
        0.0,
        (level.height as f32 - 1.0) * level.tile_size / 2.0,
    )
}

/// Spawn one floor slab spanning the whole grid, top face at y = 0.
pub fn spawn_floor_slab(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    mat_registry: &MaterialRegistry,
    level: &LevelDefinition,
) {
    let extent_x = level.width as f32 * level.tile_size;
    let extent_z = level.height as f32 * level.tile_size;
    let center = level_center(level);

    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(extent_x, FLOOR_DEPTH, extent_z))),
        MeshMaterial3d(mat_registry.floor.clone()),
        Transform::from_xyz(center.x, -FLOOR_DEPTH / 2.0, center.z),
        Collider::cuboid(extent_x / 2.0, FLOOR_DEPTH / 2.0, extent_z / 2.0),
        LevelGeometry,
    ));
}

/// Spawn one ceiling slab spanning the whole grid, bottom face at the
/// wall height. Purely visual, so no collider.
pub fn spawn_ceiling_slab(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    mat_registry: &MaterialRegistry,
    level: &LevelDefinition,
) {
    let extent_x = level.width as f32 * level.tile_size;
    let extent_z = level.height as f32 * level.tile_size;
    let center = level_center(level);

    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(extent_x, CEILING_DEPTH, extent_z))),
        MeshMaterial3d(mat_registry.ceiling.clone()),
        Transform::from_xyz(
            center.x,
            level.wall_height + CEILING_DEPTH / 2.0,
            center.z,
        ),
        LevelGeometry,
    ));
}

/// Spawn a solid wall cube filling one tile, bottom at y = 0.
pub fn spawn_wall_cube(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    mat_registry: &MaterialRegistry,
    world_pos: Vec3,
    tile_size: f32,
    wall_height: f32,
) {
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(tile_size, wall_height, tile_size))),
        MeshMaterial3d(mat_registry.wall.clone()),
        Transform::from_xyz(world_pos.x, wall_height / 2.0, world_pos.z),
        Collider::cuboid(tile_size / 2.0, wall_height / 2.0, tile_size / 2.0),
        LevelGeometry,
    ));
}
