//! Level construction from data definitions.

use bevy::prelude::*;

use super::data::LevelDefinition;
use super::geometry::{spawn_ceiling_slab, spawn_floor_slab, spawn_wall_cube};
use super::materials::MaterialRegistry;
use super::spawning::spawn_enemy;
use crate::player::PLAYER_HALF_HEIGHT;

/// Marker for all level entities that should be cleaned up together.
#[derive(Component)]
pub struct LevelGeometry;

/// Build a level from its definition.
///
/// Returns the world position the player body should spawn at.
pub fn build_level(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    level: &LevelDefinition,
) -> Vec3 {
    let mat_registry = MaterialRegistry::new(materials);

    setup_lighting(commands);
    spawn_floor_slab(commands, meshes, &mat_registry, level);
    spawn_ceiling_slab(commands, meshes, &mat_registry, level);

    for z in 0..level.height as i32 {
        for x in 0..level.width as i32 {
            if level.tile(x, z).is_solid() {
                spawn_wall_cube(
                    commands,
                    meshes,
                    &mat_registry,
                    level.grid_to_world(x, z),
                    level.tile_size,
                    level.wall_height,
                );
            }
        }
    }

    for &(x, z) in &level.enemy_spawns {
        spawn_enemy(commands, meshes, materials, level.grid_to_world(x, z));
        info!("Spawned enemy at grid ({}, {})", x, z);
    }

    let player_pos = level.grid_to_world(level.player_start.0, level.player_start.1);
    Vec3::new(player_pos.x, PLAYER_HALF_HEIGHT, player_pos.z)
}

/// Set up global ambient light and one shadow-casting directional light.
fn setup_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.85, 0.85, 0.9),
        brightness: 150.0,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 6000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -std::f32::consts::FRAC_PI_3,
            std::f32::consts::FRAC_PI_6,
            0.0,
        )),
        LevelGeometry,
    ));
}
