//! Systems for syncing Bevy entities with simulation state

use bevy::log::error;
use bevy::prelude::*;
use std::collections::HashMap;

use super::components::{
    to_world, vehicle_size, EntityMappings, RoadCountText, SignalLight, SimWorldResource,
    VehicleLink, EMERGENCY_FLASH_COLOR, EMERGENCY_VEHICLE_COLOR, GREEN_LIGHT_COLOR,
    ORDINARY_VEHICLE_COLOR, RED_LIGHT_COLOR,
};
use crate::simulation::{Road, SignalState, VehicleId, VehicleSnapshot};

const VEHICLE_Z: f32 = 2.0;

/// System to run one simulation tick per fixed step
pub fn tick_simulation(mut sim_world: ResMut<SimWorldResource>, mut exit: MessageWriter<AppExit>) {
    if let Err(err) = sim_world.0.step() {
        error!("Simulation stopped: {:#}", err);
        exit.write(AppExit::error());
    }
}

fn vehicle_color(vehicle: &VehicleSnapshot) -> Color {
    match (vehicle.is_emergency, vehicle.flash_on) {
        (false, _) => ORDINARY_VEHICLE_COLOR,
        (true, true) => EMERGENCY_FLASH_COLOR,
        (true, false) => EMERGENCY_VEHICLE_COLOR,
    }
}

/// System to sync vehicle sprites from simulation state
pub fn sync_vehicles(
    mut commands: Commands,
    sim_world: Res<SimWorldResource>,
    mut mappings: ResMut<EntityMappings>,
    mut vehicle_query: Query<(&mut Transform, &mut Sprite), With<VehicleLink>>,
) {
    let config = sim_world.0.config();
    let snapshot = sim_world.0.snapshot();

    let mut live: HashMap<VehicleId, (Road, &VehicleSnapshot)> = HashMap::new();
    for road in &snapshot.roads {
        for vehicle in &road.vehicles {
            live.insert(vehicle.id, (road.road, vehicle));
        }
    }

    // Despawn vehicles that crossed
    mappings.vehicles.retain(|id, entity| {
        let alive = live.contains_key(id);
        if !alive {
            commands.entity(*entity).despawn();
        }
        alive
    });

    for (id, (road, vehicle)) in live {
        let translation = to_world(&vehicle.position, config, VEHICLE_Z);

        if let Some(&entity) = mappings.vehicles.get(&id) {
            if let Ok((mut transform, mut sprite)) = vehicle_query.get_mut(entity) {
                transform.translation = translation;
                sprite.color = vehicle_color(vehicle);
            }
            continue;
        }

        let entity = commands
            .spawn((
                VehicleLink(id),
                Sprite::from_color(vehicle_color(vehicle), vehicle_size(road, config)),
                Transform::from_translation(translation),
            ))
            .id();
        mappings.vehicles.insert(id, entity);
    }
}

/// System to color each signal light red or green
pub fn update_signal_lights(
    sim_world: Res<SimWorldResource>,
    light_query: Query<(&SignalLight, &MeshMaterial2d<ColorMaterial>)>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let intersection = sim_world.0.intersection();

    for (light, material_handle) in light_query.iter() {
        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.color = match intersection.signal(light.0) {
                SignalState::Green => GREEN_LIGHT_COLOR,
                SignalState::Red => RED_LIGHT_COLOR,
            };
        }
    }
}

/// System to refresh the per-road vehicle counts
pub fn update_road_count_text(
    sim_world: Res<SimWorldResource>,
    mut text_query: Query<(&RoadCountText, &mut Text)>,
) {
    let snapshot = sim_world.0.snapshot();

    for (count_text, mut text) in text_query.iter_mut() {
        **text = snapshot.road(count_text.0).summary_line();
    }
}
