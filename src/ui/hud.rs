//! In-game HUD - health, level progress, and crosshair.

use bevy::prelude::*;

use crate::combat::Health;
use crate::core::GameState;
use crate::encounter::Encounter;
use crate::player::Player;
use crate::world::CurrentLevel;

/// Marker for HUD root entities.
#[derive(Component)]
pub struct HudRoot;

/// Marker for the health bar fill.
#[derive(Component)]
pub struct HealthBar;

/// Marker for the numeric health readout.
#[derive(Component)]
pub struct HealthText;

/// Marker for the alive-enemy counter.
#[derive(Component)]
pub struct EnemyCountText;

const HEALTH_FULL: Color = Color::srgb(0.2, 0.8, 0.3);
const HEALTH_LOW: Color = Color::srgb(0.9, 0.7, 0.2);
const HEALTH_CRITICAL: Color = Color::srgb(0.7, 0.15, 0.1);

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(OnExit(GameState::InGame), cleanup_hud)
        .add_systems(
            Update,
            (update_health_bar, update_health_text, update_enemy_count)
                .run_if(in_state(GameState::InGame)),
        );
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands, current_level: Res<CurrentLevel>) {
    // Health readout (bottom-left corner)
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::End,
                align_items: AlignItems::Start,
                padding: UiRect::all(Val::Px(20.0)),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    align_items: AlignItems::Center,
                    ..default()
                })
                .with_children(|row| {
                    // Bar background
                    row.spawn((
                        Node {
                            width: Val::Px(180.0),
                            height: Val::Px(14.0),
                            margin: UiRect::right(Val::Px(10.0)),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.1, 0.1, 0.1)),
                    ))
                    .with_children(|bg| {
                        // Bar fill
                        bg.spawn((
                            Node {
                                width: Val::Percent(100.0),
                                height: Val::Percent(100.0),
                                ..default()
                            },
                            BackgroundColor(HEALTH_FULL),
                            HealthBar,
                        ));
                    });

                    row.spawn((
                        Text::new("100"),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.85, 0.85, 0.85)),
                        HealthText,
                    ));
                });
        });

    // Level progress (top-left corner)
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Start,
                padding: UiRect::all(Val::Px(20.0)),
                position_type: PositionType::Absolute,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(format!("Level {}", current_level.number())),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
            ));
            parent.spawn((
                Text::new("Enemies: -"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.7)),
                EnemyCountText,
            ));
        });

    // Crosshair (center of screen)
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            // Crosshair dot
            parent.spawn((
                Node {
                    width: Val::Px(4.0),
                    height: Val::Px(4.0),
                    ..default()
                },
                BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.5)),
            ));
        });
}

/// Update the health bar fill and color from player health.
fn update_health_bar(
    player_query: Query<&Health, With<Player>>,
    mut bar_query: Query<(&mut Node, &mut BackgroundColor), With<HealthBar>>,
) {
    let Ok(health) = player_query.get_single() else {
        return;
    };
    let Ok((mut bar, mut color)) = bar_query.get_single_mut() else {
        return;
    };

    let percentage = health.percentage();
    bar.width = Val::Percent(percentage * 100.0);
    *color = if percentage <= 0.25 {
        HEALTH_CRITICAL.into()
    } else if percentage <= 0.5 {
        HEALTH_LOW.into()
    } else {
        HEALTH_FULL.into()
    };
}

/// Update the numeric health readout.
fn update_health_text(
    player_query: Query<&Health, With<Player>>,
    mut text_query: Query<&mut Text, With<HealthText>>,
) {
    let Ok(health) = player_query.get_single() else {
        return;
    };
    let Ok(mut text) = text_query.get_single_mut() else {
        return;
    };

    text.0 = format!("{:.0}", health.current);
}

/// Update the alive-enemy counter.
fn update_enemy_count(
    encounter: Res<Encounter>,
    mut text_query: Query<&mut Text, With<EnemyCountText>>,
) {
    let Ok(mut text) = text_query.get_single_mut() else {
        return;
    };

    text.0 = format!("Enemies: {}", encounter.alive_enemies);
}

/// Clean up HUD entities.
fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
