//! Damage resolution - the one place combatant health is mutated.

use std::collections::HashSet;

use bevy::prelude::*;

use super::components::*;
use crate::core::{DamageEvent, DeathEvent, HitEvent};

/// Apply queued damage to combatants.
///
/// Every applied hit emits a [`HitEvent`] with the health remaining, so
/// the HUD and flash feedback see damage even when it kills. Death is
/// emitted at most once per entity: the `Dead` marker blocks damage on
/// later frames, and the local set blocks duplicates within this frame
/// (the marker only lands when commands apply).
pub fn apply_damage(
    mut commands: Commands,
    mut damage_events: EventReader<DamageEvent>,
    mut health_query: Query<(&mut Health, Option<&Dead>)>,
    mut hit_events: EventWriter<HitEvent>,
    mut death_events: EventWriter<DeathEvent>,
) {
    let mut died_this_frame = HashSet::new();

    for event in damage_events.read() {
        if died_this_frame.contains(&event.target) {
            continue;
        }

        let Ok((mut health, dead)) = health_query.get_mut(event.target) else {
            continue;
        };
        if dead.is_some() {
            continue;
        }

        health.take_damage(event.amount);
        hit_events.send(HitEvent {
            entity: event.target,
            amount: event.amount,
            remaining: health.current,
        });

        if health.is_dead() {
            died_this_frame.insert(event.target);
            commands.entity(event.target).insert(Dead);
            death_events.send(DeathEvent {
                entity: event.target,
                killed_by: Some(event.source),
            });
        }
    }
}
