//! Emissive flash feedback on enemy bodies.
//!
//! Enemies flash red when they land an attack and amber when they take
//! a hit. Each enemy owns its material instance, so the swap never
//! bleeds onto other bodies.

use bevy::prelude::*;

use super::components::Enemy;
use crate::combat::Dead;
use crate::core::{EnemyAttackEvent, HitEvent};
use crate::world::ENEMY_EMISSIVE;

const ATTACK_FLASH_SECS: f32 = 0.2;
const HURT_FLASH_SECS: f32 = 0.1;

/// Timed emissive override on an enemy body.
#[derive(Component)]
pub struct FlashEffect {
    pub timer: Timer,
}

/// Flash attackers red for the attack duration.
pub fn flash_on_attack(
    mut commands: Commands,
    mut events: EventReader<EnemyAttackEvent>,
    body_query: Query<&MeshMaterial3d<StandardMaterial>, With<Enemy>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for event in events.read() {
        start_flash(
            &mut commands,
            &body_query,
            &mut materials,
            event.enemy,
            LinearRgba::new(1.0, 0.1, 0.1, 1.0),
            ATTACK_FLASH_SECS,
        );
    }
}

/// Flash enemies amber when a hit lands on them.
pub fn flash_on_hurt(
    mut commands: Commands,
    mut events: EventReader<HitEvent>,
    body_query: Query<&MeshMaterial3d<StandardMaterial>, With<Enemy>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for event in events.read() {
        start_flash(
            &mut commands,
            &body_query,
            &mut materials,
            event.entity,
            LinearRgba::new(1.0, 0.8, 0.1, 1.0),
            HURT_FLASH_SECS,
        );
    }
}

fn start_flash(
    commands: &mut Commands,
    body_query: &Query<&MeshMaterial3d<StandardMaterial>, With<Enemy>>,
    materials: &mut Assets<StandardMaterial>,
    entity: Entity,
    color: LinearRgba,
    seconds: f32,
) {
    // Non-enemy entities (the player taking a hit) fall through here
    let Ok(handle) = body_query.get(entity) else {
        return;
    };
    if let Some(material) = materials.get_mut(&handle.0) {
        material.emissive = color;
    }
    commands.entity(entity).insert(FlashEffect {
        timer: Timer::from_seconds(seconds, TimerMode::Once),
    });
}

/// Restore the body emissive once a flash expires.
///
/// Dead enemies keep their last flash color while falling over.
pub fn update_flashes(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<
        (
            Entity,
            &mut FlashEffect,
            &MeshMaterial3d<StandardMaterial>,
            Option<&Dead>,
        ),
        With<Enemy>,
    >,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, mut flash, handle, dead) in query.iter_mut() {
        if !flash.timer.tick(time.delta()).finished() {
            continue;
        }
        if dead.is_none() {
            if let Some(material) = materials.get_mut(&handle.0) {
                material.emissive = ENEMY_EMISSIVE;
            }
        }
        commands.entity(entity).remove::<FlashEffect>();
    }
}
