//! Input handling systems

use bevy::prelude::*;

use super::components::SimWorldResource;
use crate::simulation::Road;

/// Arrow key to the road it dispatches an emergency vehicle on
const EMERGENCY_KEYS: [(KeyCode, Road); Road::COUNT] = [
    (KeyCode::ArrowUp, Road::North),
    (KeyCode::ArrowDown, Road::South),
    (KeyCode::ArrowLeft, Road::West),
    (KeyCode::ArrowRight, Road::East),
];

/// Handle basic keyboard input
pub fn handle_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut exit: MessageWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}

/// Dispatch an emergency vehicle for each arrow key pressed this frame
pub fn handle_emergency_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut sim_world: ResMut<SimWorldResource>,
) {
    for (key, road) in EMERGENCY_KEYS {
        if keyboard.just_pressed(key) {
            sim_world.0.spawn_emergency(road);
        }
    }
}
