//! Entity spawning functions for level construction.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::builder::LevelGeometry;
use super::materials::enemy_body_material;
use crate::combat::Health;
use crate::enemies::{AiState, AttackTimer, Enemy, EnemyStats, PatrolRoute};

/// Half the enemy body height; bodies sit with their feet on the floor.
pub const ENEMY_HALF_HEIGHT: f32 = 0.9;

/// Spawn one enemy at a resolved floor position.
///
/// The patrol route is anchored on the spawn point, and the body gets
/// its own material instance for flash feedback.
pub fn spawn_enemy(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    position: Vec3,
) -> Entity {
    let stats = EnemyStats::default();
    let spawn = Vec3::new(position.x, ENEMY_HALF_HEIGHT, position.z);

    commands
        .spawn((
            Enemy,
            AiState::default(),
            Health::new(stats.max_health),
            AttackTimer::default(),
            PatrolRoute::hexagon(spawn, stats.patrol_radius),
            stats,
            Mesh3d(meshes.add(Cuboid::new(1.0, ENEMY_HALF_HEIGHT * 2.0, 1.0))),
            MeshMaterial3d(enemy_body_material(materials)),
            Transform::from_translation(spawn),
            Collider::cuboid(0.5, ENEMY_HALF_HEIGHT, 0.5),
            RigidBody::KinematicPositionBased,
            // Enemies count as level geometry so they tear down with it
            LevelGeometry,
        ))
        .id()
}
