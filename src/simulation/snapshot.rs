//! Read-only views of the intersection for renderers

use super::config::SimConfig;
use super::intersection::IntersectionState;
use super::types::{Position, Road, SignalState, Tick, VehicleId};

/// What a renderer needs to draw one vehicle
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleSnapshot {
    pub id: VehicleId,
    pub position: Position,
    pub is_emergency: bool,
    pub flash_phase: u32,
    /// Draw the alternate emergency appearance
    pub flash_on: bool,
}

/// One road's signal and queue, in arrival order
#[derive(Debug, Clone, PartialEq)]
pub struct RoadSnapshot {
    pub road: Road,
    pub signal: SignalState,
    pub vehicles: Vec<VehicleSnapshot>,
    pub emergency_count: usize,
}

impl RoadSnapshot {
    pub fn count(&self) -> usize {
        self.vehicles.len()
    }

    /// Overlay line, e.g. "North Road: 3 vehicles (Emergencies: 1)"
    pub fn summary_line(&self) -> String {
        format!(
            "{} Road: {} vehicles (Emergencies: {})",
            self.road,
            self.count(),
            self.emergency_count
        )
    }
}

/// Full intersection state at a point in time
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionSnapshot {
    pub time: Tick,
    pub green_road: Road,
    /// Indexed by `Road::index`
    pub roads: [RoadSnapshot; Road::COUNT],
    pub total_vehicles: usize,
}

impl IntersectionSnapshot {
    pub fn capture(time: Tick, intersection: &IntersectionState, config: &SimConfig) -> Self {
        let roads = Road::ALL.map(|road| RoadSnapshot {
            road,
            signal: intersection.signal(road),
            vehicles: intersection
                .queue(road)
                .iter()
                .map(|vehicle| VehicleSnapshot {
                    id: vehicle.id,
                    position: vehicle.position,
                    is_emergency: vehicle.is_emergency(),
                    flash_phase: vehicle.flash_phase,
                    flash_on: vehicle.flash_on(config.flash_period),
                })
                .collect(),
            emergency_count: intersection.emergency_count(road),
        });

        Self {
            time,
            green_road: intersection.green_road(),
            roads,
            total_vehicles: intersection.total_vehicle_count(),
        }
    }

    pub fn road(&self, road: Road) -> &RoadSnapshot {
        &self.roads[road.index()]
    }
}
