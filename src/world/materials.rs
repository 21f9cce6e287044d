//! Material definitions for level geometry and enemy bodies.

use bevy::prelude::*;

/// Resting emissive tint on enemy bodies. Flash effects restore to this
/// once they expire.
pub const ENEMY_EMISSIVE: LinearRgba = LinearRgba::new(0.2, 0.0, 0.0, 1.0);

/// Shared handles for the level-geometry materials.
pub struct MaterialRegistry {
    pub floor: Handle<StandardMaterial>,
    pub wall: Handle<StandardMaterial>,
    pub ceiling: Handle<StandardMaterial>,
}

impl MaterialRegistry {
    pub fn new(materials: &mut Assets<StandardMaterial>) -> Self {
        // Floor - desaturated grey-blue
        let floor = materials.add(StandardMaterial {
            base_color: Color::srgb(0.25, 0.25, 0.28),
            perceptual_roughness: 0.9,
            ..default()
        });

        // Walls - warm grey-brown
        let wall = materials.add(StandardMaterial {
            base_color: Color::srgb(0.45, 0.42, 0.38),
            perceptual_roughness: 0.8,
            ..default()
        });

        // Ceiling - dark desaturated
        let ceiling = materials.add(StandardMaterial {
            base_color: Color::srgb(0.20, 0.20, 0.22),
            perceptual_roughness: 0.9,
            ..default()
        });

        Self {
            floor,
            wall,
            ceiling,
        }
    }
}

/// Create a fresh body material for one enemy.
///
/// Every enemy owns its instance so damage and attack flashes never
/// bleed onto other bodies sharing a handle.
pub fn enemy_body_material(materials: &mut Assets<StandardMaterial>) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: Color::srgb(0.55, 0.10, 0.10),
        emissive: ENEMY_EMISSIVE,
        perceptual_roughness: 0.8,
        ..default()
    })
}
