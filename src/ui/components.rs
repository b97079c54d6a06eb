//! UI components and resources for linking Bevy entities to simulation state

use bevy::prelude::*;
use std::collections::HashMap;

use crate::simulation::{Axis, Position, Road, SimConfig, SimWorld, VehicleId};

/// Resource wrapper for the simulation world
#[derive(Resource)]
pub struct SimWorldResource(pub SimWorld);

impl SimWorldResource {
    pub fn new(world: SimWorld) -> Self {
        Self(world)
    }
}

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Links a Bevy entity to a simulation vehicle
#[derive(Component)]
pub struct VehicleLink(pub VehicleId);

/// The signal light facing one road
#[derive(Component)]
pub struct SignalLight(pub Road);

/// Overlay text showing one road's queue
#[derive(Component)]
pub struct RoadCountText(pub Road);

/// Resource to track Bevy entities mapped to simulation vehicles
#[derive(Resource, Default)]
pub struct EntityMappings {
    pub vehicles: HashMap<VehicleId, Entity>,
}

pub const VEHICLE_LENGTH: f32 = 60.0;
pub const VEHICLE_WIDTH: f32 = 30.0;

pub const ORDINARY_VEHICLE_COLOR: Color = Color::srgb(0.8, 0.2, 0.2);
pub const EMERGENCY_VEHICLE_COLOR: Color = Color::srgb(0.0, 0.0, 1.0);
pub const EMERGENCY_FLASH_COLOR: Color = Color::srgb(1.0, 1.0, 0.0);
pub const GREEN_LIGHT_COLOR: Color = Color::srgb(0.0, 1.0, 0.0);
pub const RED_LIGHT_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);

/// Convert canvas coordinates (origin top-left, y down) to Bevy world
/// coordinates (origin at the center, y up)
pub fn to_world(position: &Position, config: &SimConfig, z: f32) -> Vec3 {
    let center = config.center();
    Vec3::new(position.x - center.x, center.y - position.y, z)
}

/// Sprite size of a vehicle travelling along `road`
pub fn vehicle_size(road: Road, config: &SimConfig) -> Vec2 {
    match config.geometry(road).axis {
        Axis::Y => Vec2::new(VEHICLE_WIDTH, VEHICLE_LENGTH),
        Axis::X => Vec2::new(VEHICLE_LENGTH, VEHICLE_WIDTH),
    }
}
