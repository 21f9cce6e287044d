//! Enemy AI behavior systems.
//!
//! The state machine is re-evaluated from scratch once per tick: the
//! distance to the player picks the state, then one behavior system per
//! state does that state's work. The systems chain in the order they
//! appear here.

use bevy::prelude::*;

use super::components::*;
use crate::combat::{Dead, Health};
use crate::core::{DamageEvent, EnemyAttackEvent};
use crate::player::Player;

/// Arrival distance at which a patrolling enemy switches waypoints.
pub const ARRIVAL_THRESHOLD: f32 = 0.5;

/// Chase speed multiplier over the base patrol speed.
pub const CHASE_SPEED_FACTOR: f32 = 1.5;

fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
    Vec3::new(b.x - a.x, 0.0, b.z - a.z).length()
}

/// Yaw the body toward a point, horizontal plane only.
fn face_toward(transform: &mut Transform, point: Vec3) {
    let target = Vec3::new(point.x, transform.translation.y, point.z);
    if target != transform.translation {
        transform.look_at(target, Vec3::Y);
    }
}

/// Tick every live enemy's attack countdown.
///
/// Runs before the behavior systems so that a reset later in the same
/// tick leaves the timer at the full cooldown.
pub fn tick_attack_timers(
    time: Res<Time>,
    mut query: Query<&mut AttackTimer, (With<Enemy>, Without<Dead>)>,
) {
    for mut timer in query.iter_mut() {
        if timer.remaining > 0.0 {
            timer.remaining -= time.delta_secs();
        }
    }
}

/// Pick each live enemy's state from the distance bands.
///
/// A missing or dead player forces patrol; otherwise the horizontal
/// distance decides: attack range, then detection range, then patrol.
pub fn ai_transition(
    player_query: Query<(&Transform, &Health), (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<(&Transform, &EnemyStats, &mut AiState), (With<Enemy>, Without<Dead>)>,
) {
    let live_target = player_query
        .get_single()
        .ok()
        .filter(|(_, health)| !health.is_dead())
        .map(|(transform, _)| transform.translation);

    for (enemy_transform, stats, mut state) in enemy_query.iter_mut() {
        let next = match live_target {
            Some(target) => {
                stats.state_for_distance(horizontal_distance(enemy_transform.translation, target))
            }
            None => AiState::Patrol,
        };
        if *state != next {
            *state = next;
        }
    }
}

/// Walk the patrol circuit.
///
/// Within the arrival threshold of the current waypoint the cursor
/// advances (wrapping) instead of moving; otherwise the enemy steps
/// toward the waypoint at base speed and faces it.
pub fn ai_patrol(
    time: Res<Time>,
    mut query: Query<
        (&mut Transform, &mut PatrolRoute, &EnemyStats, &AiState),
        (With<Enemy>, Without<Dead>),
    >,
) {
    for (mut transform, mut route, stats, state) in query.iter_mut() {
        if *state != AiState::Patrol {
            continue;
        }

        let waypoint = route.waypoint();
        let to_waypoint = Vec3::new(
            waypoint.x - transform.translation.x,
            0.0,
            waypoint.z - transform.translation.z,
        );

        if to_waypoint.length() < ARRIVAL_THRESHOLD {
            route.advance();
            continue;
        }

        let step = to_waypoint.normalize() * stats.move_speed * time.delta_secs();
        transform.translation += step;
        face_toward(&mut transform, waypoint);
    }
}

/// Run straight at the player at chase speed.
pub fn ai_chase(
    time: Res<Time>,
    player_query: Query<&Transform, (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<
        (&mut Transform, &EnemyStats, &AiState),
        (With<Enemy>, Without<Dead>),
    >,
) {
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };
    let target = player_transform.translation;

    for (mut transform, stats, state) in enemy_query.iter_mut() {
        if *state != AiState::Chase {
            continue;
        }

        let direction = Vec3::new(
            target.x - transform.translation.x,
            0.0,
            target.z - transform.translation.z,
        );
        let Some(step) = direction.try_normalize() else {
            continue;
        };

        transform.translation +=
            step * stats.move_speed * CHASE_SPEED_FACTOR * time.delta_secs();
        face_toward(&mut transform, target);
    }
}

/// Swing at the player when the cooldown has run out.
///
/// Attacking never moves the enemy; it queues a [`DamageEvent`] for the
/// damage pass and resets the countdown to the full cooldown.
pub fn ai_attack(
    player_query: Query<(Entity, &Health), (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<
        (Entity, &EnemyStats, &AiState, &mut AttackTimer),
        (With<Enemy>, Without<Dead>),
    >,
    mut damage_events: EventWriter<DamageEvent>,
    mut attack_events: EventWriter<EnemyAttackEvent>,
) {
    let Ok((player_entity, player_health)) = player_query.get_single() else {
        return;
    };
    if player_health.is_dead() {
        return;
    }

    for (entity, stats, state, mut timer) in enemy_query.iter_mut() {
        if *state != AiState::Attack || !timer.ready() {
            continue;
        }

        timer.reset(stats.attack_cooldown);
        damage_events.send(DamageEvent {
            target: player_entity,
            source: entity,
            amount: stats.damage,
        });
        attack_events.send(EnemyAttackEvent { enemy: entity });
    }
}

/// Start the death teardown: tip the body over and arm the despawn timer.
pub fn handle_enemy_death(
    mut commands: Commands,
    query: Query<(Entity, &Transform), (With<Enemy>, With<Dead>, Without<DeathTimer>)>,
) {
    for (entity, transform) in query.iter() {
        commands.entity(entity).insert((
            DeathTimer::default(),
            DeathFall::from_rotation(transform.rotation),
        ));
    }
}

/// Slerp dying bodies toward their fallen pose.
pub fn animate_death_fall(time: Res<Time>, mut query: Query<(&mut Transform, &DeathFall)>) {
    for (mut transform, fall) in query.iter_mut() {
        let t = (fall.speed * time.delta_secs()).min(1.0);
        transform.rotation = transform.rotation.slerp(fall.target_rotation, t);
    }
}

/// Despawn enemies once the death animation has played out.
pub fn despawn_dead_enemies(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut DeathTimer)>,
) {
    for (entity, mut death_timer) in query.iter_mut() {
        if death_timer.0.tick(time.delta()).finished() {
            commands.entity(entity).despawn_recursive();
        }
    }
}
