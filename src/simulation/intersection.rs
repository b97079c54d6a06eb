//! Signal controller for the four-way intersection
//!
//! Owns every queued vehicle and decides which single road has right-of-way.

use log::debug;

use super::config::SimConfig;
use super::types::{Road, SignalState, SimId, Tick, VehicleId};
use super::vehicle::SimVehicle;

/// Queues, current green road and phase timer of the intersection
#[derive(Debug, Clone)]
pub struct IntersectionState {
    /// Arrival-ordered queues, indexed by `Road::index`
    queues: [Vec<SimVehicle>; Road::COUNT],
    green_road: Road,
    last_switch: Tick,
    next_id: usize,
}

impl IntersectionState {
    pub fn new(initial_green: Road) -> Self {
        Self {
            queues: Default::default(),
            green_road: initial_green,
            last_switch: 0,
            next_id: 0,
        }
    }

    pub fn green_road(&self) -> Road {
        self.green_road
    }

    pub fn last_switch(&self) -> Tick {
        self.last_switch
    }

    pub fn is_green(&self, road: Road) -> bool {
        self.green_road == road
    }

    pub fn signal(&self, road: Road) -> SignalState {
        if self.is_green(road) {
            SignalState::Green
        } else {
            SignalState::Red
        }
    }

    pub fn queue(&self, road: Road) -> &[SimVehicle] {
        &self.queues[road.index()]
    }

    pub(crate) fn queue_mut(&mut self, road: Road) -> &mut Vec<SimVehicle> {
        &mut self.queues[road.index()]
    }

    pub fn queue_len(&self, road: Road) -> usize {
        self.queue(road).len()
    }

    pub fn emergency_count(&self, road: Road) -> usize {
        self.queue(road).iter().filter(|v| v.is_emergency()).count()
    }

    pub fn has_emergency(&self, road: Road) -> bool {
        self.queue(road).iter().any(|v| v.is_emergency())
    }

    /// Sum of all four queue lengths
    pub fn total_vehicle_count(&self) -> usize {
        self.queues.iter().map(Vec::len).sum()
    }

    /// Place a new vehicle at the road's entry point, behind everyone already queued
    pub fn spawn_vehicle(&mut self, road: Road, is_emergency: bool, config: &SimConfig) -> VehicleId {
        let id = VehicleId(SimId(self.next_id));
        self.next_id += 1;

        let entry = config.geometry(road).entry;
        self.queue_mut(road)
            .push(SimVehicle::new(id, road, is_emergency, entry));

        debug!(
            "Spawned {} vehicle {:?} on {} road ({} queued)",
            if is_emergency { "emergency" } else { "ordinary" },
            id.0,
            road,
            self.queue_len(road)
        );
        id
    }

    /// Pick the road that should be green next.
    ///
    /// The first road (North, South, East, West) holding an emergency vehicle
    /// wins. Otherwise the longest queue wins, earlier roads taking ties.
    pub fn select_green_road(&self) -> Road {
        if let Some(road) = Road::ALL.into_iter().find(|&road| self.has_emergency(road)) {
            return road;
        }

        let mut best = Road::ALL[0];
        for road in Road::ALL.into_iter().skip(1) {
            if self.queue_len(road) > self.queue_len(best) {
                best = road;
            }
        }
        best
    }

    /// Re-select the green road once the current phase has run its course.
    /// Returns true if a switch happened (possibly to the same road).
    pub fn advance_phase(&mut self, now: Tick, green_duration: Tick) -> bool {
        if now < self.last_switch || now - self.last_switch < green_duration {
            return false;
        }

        let previous = self.green_road;
        self.green_road = self.select_green_road();
        self.last_switch = now;

        debug!(
            "Phase switch at tick {}: {} -> {}",
            now, previous, self.green_road
        );
        true
    }
}
