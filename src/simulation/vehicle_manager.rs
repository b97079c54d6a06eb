//! Per-tick vehicle updates for the intersection simulation
//!
//! This module advances queued vehicles and clears the ones that made it
//! through. It separates queue management from the main world coordination.

use anyhow::{ensure, Result};
use log::trace;

use super::config::SimConfig;
use super::intersection::IntersectionState;
use super::types::{Road, VehicleId};
use super::vehicle::VehicleUpdateResult;

/// A vehicle that cleared the intersection this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossedVehicle {
    pub id: VehicleId,
    pub road: Road,
    pub is_emergency: bool,
}

/// Update all vehicles in the simulation
///
/// Every vehicle present at the start of the call is advanced exactly once;
/// vehicles past their threshold are dropped afterwards, keeping the order of
/// the survivors. Returns the vehicles that were removed.
pub fn update_vehicles(
    intersection: &mut IntersectionState,
    config: &SimConfig,
) -> Result<Vec<CrossedVehicle>> {
    let green_road = intersection.green_road();
    let mut crossed = Vec::new();

    for road in Road::ALL {
        let geometry = config.geometry(road);
        let queue = intersection.queue_mut(road);

        for vehicle in queue.iter_mut() {
            ensure!(
                vehicle.road() == road,
                "vehicle {:?} of {} road found in the {} queue",
                vehicle.id.0,
                vehicle.road(),
                road
            );

            if vehicle.advance(green_road, &geometry, config) == VehicleUpdateResult::Crossed {
                trace!("Vehicle {:?} crossed from {} road", vehicle.id.0, road);
                crossed.push(CrossedVehicle {
                    id: vehicle.id,
                    road,
                    is_emergency: vehicle.is_emergency(),
                });
            }
        }

        queue.retain(|vehicle| !geometry.has_crossed(&vehicle.position));
    }

    Ok(crossed)
}
