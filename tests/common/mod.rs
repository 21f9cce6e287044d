//! Shared harness for driving the game headless.
//!
//! Builds an `App` with the gameplay plugins but no renderer, window,
//! or physics backend: input and time are plain resources the tests
//! control directly, and entities are spawned with just the components
//! the simulation systems read.

use std::hash::Hash;
use std::time::Duration;

use bevy::ecs::event::EventCursor;
use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use gridfire::combat::{CombatPlugin, Health};
use gridfire::core::{CorePlugin, GameState};
use gridfire::encounter::EncounterPlugin;
use gridfire::enemies::{AiState, AttackTimer, Enemy, EnemyPlugin, EnemyStats, PatrolRoute};
use gridfire::player::{MoveIntent, Player, PlayerCamera, PlayerPlugin, ShootState};
use gridfire::world::{CurrentLevel, LevelDefinition, LevelDefinitionRaw, LevelRegistry};

/// Headless app with the full simulation stack and `level_count`
/// registry entries, already in-game.
#[allow(dead_code)]
pub fn test_app(level_count: usize) -> App {
    let mut app = App::new();
    app.add_plugins((TaskPoolPlugin::default(), StatesPlugin));
    app.add_plugins((
        CorePlugin,
        EncounterPlugin,
        CombatPlugin,
        EnemyPlugin,
        PlayerPlugin,
    ));

    // Stand-ins for the input, time, and asset plugins
    app.init_resource::<Time>();
    app.init_resource::<ButtonInput<KeyCode>>();
    app.init_resource::<ButtonInput<MouseButton>>();
    app.init_resource::<Assets<StandardMaterial>>();
    app.add_event::<MouseMotion>();

    // Level bookkeeping normally installed by the world plugin
    let levels = (1..=level_count)
        .map(|n| test_level(&format!("Arena {n}")))
        .collect();
    app.insert_resource(LevelRegistry { levels });
    app.insert_resource(CurrentLevel::default());

    app.insert_state(GameState::InGame);
    app
}

/// Smallest level that passes validation.
#[allow(dead_code)]
pub fn test_level(name: &str) -> LevelDefinition {
    let raw = LevelDefinitionRaw {
        name: name.to_string(),
        tile_size: 4.0,
        wall_height: 3.0,
        player_start: (1, 1),
        geometry: vec!["###".to_string(), "#.#".to_string(), "###".to_string()],
        enemies: Vec::new(),
    };
    LevelDefinition::from_raw(raw).unwrap()
}

/// Tick the app once with a controlled delta.
///
/// Inputs pressed before the call read as held during the tick and
/// their just-pressed edge is cleared afterwards, matching what the
/// input plugin does per frame.
#[allow(dead_code)]
pub fn advance(app: &mut App, seconds: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(seconds));
    app.update();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .clear();
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .clear();
}

/// Press a key or button so the next tick sees a fresh just-pressed
/// edge, even if the input was already held.
#[allow(dead_code)]
pub fn tap<T>(app: &mut App, input: T)
where
    T: Copy + Eq + Hash + Send + Sync + 'static,
{
    let mut state = app.world_mut().resource_mut::<ButtonInput<T>>();
    state.release(input);
    state.press(input);
}

/// Count the events of one type sent since the cursor last looked.
#[allow(dead_code)]
pub fn count_events<E: Event>(app: &App, cursor: &mut EventCursor<E>) -> usize {
    cursor.read(app.world().resource::<Events<E>>()).count()
}

/// Spawn a player with the components the simulation reads.
///
/// The camera child carries the pitch, like the real spawn; there is no
/// character controller, so movement tests assert on intent instead of
/// displacement.
#[allow(dead_code)]
pub fn spawn_player_at(app: &mut App, position: Vec3) -> Entity {
    let player = app
        .world_mut()
        .spawn((
            Player,
            Health::new(100.0),
            MoveIntent::default(),
            ShootState::default(),
            Transform::from_translation(position),
        ))
        .id();

    let camera = app
        .world_mut()
        .spawn((
            Camera3d::default(),
            PlayerCamera::default(),
            Transform::from_xyz(0.0, 0.8, 0.0),
        ))
        .id();
    app.world_mut().entity_mut(player).add_child(camera);

    player
}

/// Spawn an enemy with default stats at a position.
#[allow(dead_code)]
pub fn spawn_enemy_at(app: &mut App, position: Vec3) -> Entity {
    let stats = EnemyStats::default();
    app.world_mut()
        .spawn((
            Enemy,
            AiState::default(),
            Health::new(stats.max_health),
            AttackTimer::default(),
            PatrolRoute::hexagon(position, stats.patrol_radius),
            stats,
            Transform::from_translation(position),
        ))
        .id()
}
