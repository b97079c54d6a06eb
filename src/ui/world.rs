//! World setup systems for camera, roads, signal lights and the count overlay

use bevy::prelude::*;

use super::components::{to_world, MainCamera, RoadCountText, SignalLight, SimWorldResource, RED_LIGHT_COLOR};
use crate::simulation::{Position, Road};

const ROAD_COLOR: Color = Color::srgb(0.2, 0.2, 0.2);
const DIVIDER_COLOR: Color = Color::WHITE;
const DIVIDER_THICKNESS: f32 = 6.0;
const TRAFFIC_LIGHT_RADIUS: f32 = 20.0;

/// System to setup the intersection (camera, roads, signal lights)
pub fn setup_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    sim_world: Res<SimWorldResource>,
) {
    let config = sim_world.0.config();
    let width = config.canvas_width as f32;
    let height = config.canvas_height as f32;
    let road_width = config.road_width as f32;

    commands.spawn((MainCamera, Camera2d));

    // Vertical and horizontal roads
    commands.spawn((
        Sprite::from_color(ROAD_COLOR, Vec2::new(road_width, height)),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));
    commands.spawn((
        Sprite::from_color(ROAD_COLOR, Vec2::new(width, road_width)),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    // Center dividers
    commands.spawn((
        Sprite::from_color(DIVIDER_COLOR, Vec2::new(DIVIDER_THICKNESS, height)),
        Transform::from_xyz(0.0, 0.0, 0.5),
    ));
    commands.spawn((
        Sprite::from_color(DIVIDER_COLOR, Vec2::new(width, DIVIDER_THICKNESS)),
        Transform::from_xyz(0.0, 0.0, 0.5),
    ));

    // Signal lights, colored by update_signal_lights
    for road in Road::ALL {
        let position: Position = config.signal_position(road);
        commands.spawn((
            SignalLight(road),
            Mesh2d(meshes.add(Circle::new(TRAFFIC_LIGHT_RADIUS))),
            MeshMaterial2d(materials.add(RED_LIGHT_COLOR)),
            Transform::from_translation(to_world(&position, config, 1.0)),
        ));
    }
}

/// System to setup the per-road vehicle counts in the top-left corner
pub fn setup_count_overlay(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                padding: UiRect::all(Val::Px(8.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
        ))
        .with_children(|parent| {
            for road in Road::ALL {
                parent.spawn((
                    Text::new(format!("{} Road: 0 vehicles (Emergencies: 0)", road)),
                    TextFont {
                        font_size: 18.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    RoadCountText(road),
                ));
            }
        });
}
