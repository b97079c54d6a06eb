//! UI module that visualizes the simulation state using Bevy
//!
//! This module is purely for visualization - all simulation logic is in the `simulation` module.
//! The UI reads state from `SimWorld` and renders it as 2D sprites.

mod components;
mod input;
mod sync;
mod world;

use bevy::prelude::*;

use crate::simulation::TICKS_PER_SECOND;

pub use components::{EntityMappings, SimWorldResource};

use input::{handle_emergency_keys, handle_input};
use sync::{sync_vehicles, tick_simulation, update_road_count_text, update_signal_lights};
use world::{setup_count_overlay, setup_world};

/// Background behind the roads
const BACKGROUND_COLOR: Color = Color::srgb(0.68, 0.85, 0.9);

/// Plugin to register all UI systems
///
/// Expects a `SimWorldResource` to be inserted by the caller.
pub struct IntersectionUIPlugin;

impl Plugin for IntersectionUIPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EntityMappings>()
            .insert_resource(ClearColor(BACKGROUND_COLOR))
            .insert_resource(Time::<Fixed>::from_hz(TICKS_PER_SECOND as f64))
            .add_systems(Startup, (setup_world, setup_count_overlay))
            .add_systems(FixedUpdate, tick_simulation)
            .add_systems(
                Update,
                (
                    sync_vehicles,
                    update_signal_lights,
                    update_road_count_text,
                    handle_input,
                    handle_emergency_keys,
                ),
            );
    }
}
