//! Vehicle movement logic for the intersection simulation
//!
//! Standalone implementation that doesn't depend on Bevy.

use super::config::SimConfig;
use super::types::{Position, Road, RoadGeometry, VehicleId};

/// Result of a vehicle update indicating what should happen to the vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleUpdateResult {
    Waiting, // Held at a red light
    Moved,   // Advanced but still approaching or inside the intersection
    Crossed, // Past the crossing threshold; remove at end of tick
}

/// A vehicle queued on one approach road
#[derive(Debug, Clone)]
pub struct SimVehicle {
    pub id: VehicleId,
    road: Road,
    is_emergency: bool,
    pub position: Position,
    /// Ticks an emergency vehicle has spent moving, drives the light flash
    pub flash_phase: u32,
}

impl SimVehicle {
    pub fn new(id: VehicleId, road: Road, is_emergency: bool, position: Position) -> Self {
        Self {
            id,
            road,
            is_emergency,
            position,
            flash_phase: 0,
        }
    }

    pub fn road(&self) -> Road {
        self.road
    }

    pub fn is_emergency(&self) -> bool {
        self.is_emergency
    }

    /// Emergency vehicles ignore the signal; everyone else needs their road green
    pub fn may_move(&self, green_road: Road) -> bool {
        self.is_emergency || self.road == green_road
    }

    /// Whether the alternate (flashed) appearance should be drawn this tick
    pub fn flash_on(&self, flash_period: u32) -> bool {
        self.is_emergency && self.flash_phase % flash_period < flash_period / 2
    }

    /// Advance one tick
    /// Returns VehicleUpdateResult indicating whether the vehicle is now through
    pub fn advance(
        &mut self,
        green_road: Road,
        geometry: &RoadGeometry,
        config: &SimConfig,
    ) -> VehicleUpdateResult {
        if !self.may_move(green_road) {
            return VehicleUpdateResult::Waiting;
        }

        self.position
            .translate(geometry.axis, geometry.sign, config.speed(self.is_emergency));

        if self.is_emergency {
            self.flash_phase = self.flash_phase.wrapping_add(1);
        }

        if geometry.has_crossed(&self.position) {
            VehicleUpdateResult::Crossed
        } else {
            VehicleUpdateResult::Moved
        }
    }
}
