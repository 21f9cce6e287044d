//! Cooldown-gated hitscan shooting.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::*;
use super::movement::PlayerCamera;
use crate::combat::Dead;
use crate::core::DamageEvent;
use crate::enemies::Enemy;

/// Fire on left click.
///
/// A shot spends the gate (`can_shoot` goes false, the cooldown arms)
/// and casts one ray from the camera along the view direction. The ray
/// only accepts enemy colliders, so level geometry never blocks a shot;
/// the first enemy hit takes the damage.
pub fn shoot(
    mouse: Res<ButtonInput<MouseButton>>,
    config: Res<PlayerConfig>,
    rapier_context: Query<&RapierContext>,
    camera_query: Query<&GlobalTransform, With<PlayerCamera>>,
    mut player_query: Query<(Entity, &mut ShootState), (With<Player>, Without<Dead>)>,
    enemy_query: Query<(), With<Enemy>>,
    mut damage_events: EventWriter<DamageEvent>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }

    let Ok((player_entity, mut shoot_state)) = player_query.get_single_mut() else {
        return;
    };
    if !shoot_state.can_shoot {
        return;
    }

    shoot_state.can_shoot = false;
    shoot_state.cooldown_remaining = config.shoot_cooldown;

    let Ok(camera_transform) = camera_query.get_single() else {
        return;
    };
    let Ok(context) = rapier_context.get_single() else {
        return;
    };

    let origin = camera_transform.translation();
    let direction = camera_transform.forward().as_vec3();

    let is_enemy = |entity: Entity| enemy_query.contains(entity);
    let filter = QueryFilter::new().predicate(&is_enemy);

    if let Some((enemy, _distance)) =
        context.cast_ray(origin, direction, config.shoot_range, true, filter)
    {
        damage_events.send(DamageEvent {
            target: enemy,
            source: player_entity,
            amount: config.shoot_damage,
        });
    }
}

/// Re-enable shooting when the cooldown runs out.
pub fn tick_shoot_cooldown(time: Res<Time>, mut query: Query<&mut ShootState, With<Player>>) {
    for mut shoot_state in query.iter_mut() {
        if !shoot_state.can_shoot {
            shoot_state.cooldown_remaining -= time.delta_secs();
            if shoot_state.cooldown_remaining <= 0.0 {
                shoot_state.cooldown_remaining = 0.0;
                shoot_state.can_shoot = true;
            }
        }
    }
}
