//! Run statistics for the intersection simulation

use log::info;

use super::types::Tick;

/// Counters accumulated over a simulation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimStats {
    pub ticks_elapsed: Tick,
    pub total_vehicles_spawned: usize,
    pub emergency_vehicles_spawned: usize,
    pub total_vehicles_crossed: usize,
    pub emergency_vehicles_crossed: usize,
    pub phase_switches: usize,
    /// Switches where the emergency override picked the road
    pub emergency_preemptions: usize,
    pub peak_vehicle_count: usize,
}

impl SimStats {
    pub fn record_spawn(&mut self, is_emergency: bool, total_after: usize) {
        self.total_vehicles_spawned += 1;
        if is_emergency {
            self.emergency_vehicles_spawned += 1;
        }
        self.peak_vehicle_count = self.peak_vehicle_count.max(total_after);
    }

    pub fn record_crossing(&mut self, is_emergency: bool) {
        self.total_vehicles_crossed += 1;
        if is_emergency {
            self.emergency_vehicles_crossed += 1;
        }
    }

    pub fn record_switch(&mut self, preempted: bool) {
        self.phase_switches += 1;
        if preempted {
            self.emergency_preemptions += 1;
        }
    }

    /// Share of spawned vehicles that made it through, as a percentage
    pub fn throughput_rate(&self) -> f32 {
        if self.total_vehicles_spawned > 0 {
            (self.total_vehicles_crossed as f32 / self.total_vehicles_spawned as f32) * 100.0
        } else {
            0.0
        }
    }

    /// Write the end-of-run report to the log
    pub fn log_report(&self, active_vehicles: usize) {
        info!("=== SIMULATION COMPLETE ===");
        info!("Ticks elapsed: {}", self.ticks_elapsed);
        info!("Total vehicles spawned: {}", self.total_vehicles_spawned);
        info!("Emergency vehicles spawned: {}", self.emergency_vehicles_spawned);
        info!("Total vehicles crossed: {}", self.total_vehicles_crossed);
        info!("Active vehicles: {}", active_vehicles);
        info!("Phase switches: {}", self.phase_switches);
        info!("Emergency preemptions: {}", self.emergency_preemptions);
        info!("Peak vehicle count: {}", self.peak_vehicle_count);
        info!("Throughput rate: {:.1}%", self.throughput_rate());
    }
}
