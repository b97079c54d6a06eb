//! Standalone intersection simulation module
//!
//! This module contains all the core signal and vehicle logic that can run
//! independently of the Bevy game engine. It can be tested via console
//! without needing to boot up the full game.

mod config;
mod intersection;
mod snapshot;
mod stats;
mod types;
mod vehicle;
mod vehicle_manager;
mod world;

// Re-export public types for external use
pub use config::{
    SimConfig, CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_EMERGENCY_PROBABILITY, DEFAULT_FLASH_PERIOD,
    DEFAULT_GREEN_DURATION, DEFAULT_MAX_VEHICLES, DEFAULT_SPAWN_INTERVAL, EMERGENCY_SPEED,
    ORDINARY_SPEED, ROAD_WIDTH, TICKS_PER_SECOND,
};
pub use intersection::IntersectionState;
pub use snapshot::{IntersectionSnapshot, RoadSnapshot, VehicleSnapshot};
pub use stats::SimStats;
pub use types::{Axis, Position, Road, RoadGeometry, SignalState, SimId, Tick, VehicleId};
pub use vehicle::{SimVehicle, VehicleUpdateResult};
pub use vehicle_manager::{update_vehicles, CrossedVehicle};
pub use world::{SimWorld, TickReport};
