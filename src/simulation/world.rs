//! Main simulation world that ties everything together
//!
//! This is the entry point for running the intersection simulation
//! without any Bevy dependencies.

use anyhow::Result;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::Rng;
use rand::SeedableRng;

use super::config::SimConfig;
use super::intersection::IntersectionState;
use super::snapshot::IntersectionSnapshot;
use super::stats::SimStats;
use super::types::{Road, Tick, VehicleId};
use super::vehicle_manager::{update_vehicles, CrossedVehicle};

/// Characters per canvas unit in `draw_map`
const MAP_CELL_SIZE: u32 = 20;

/// What happened during a single tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub time: Tick,
    pub green_road: Road,
    /// The controller re-evaluated the phase this tick
    pub phase_switched: bool,
    pub crossed: Vec<CrossedVehicle>,
    pub spawned: Option<VehicleId>,
    pub total_vehicles: usize,
}

/// The main simulation world
pub struct SimWorld {
    config: SimConfig,

    /// Queues and signal state
    intersection: IntersectionState,

    /// Simulation time of the last tick
    time: Tick,

    /// Time of the last timer spawn
    last_spawn: Tick,

    /// Optional seeded RNG for reproducible simulations
    rng: Option<StdRng>,

    stats: SimStats,
}

impl Default for SimWorld {
    fn default() -> Self {
        Self::new_internal(SimConfig::default(), None)
    }
}

impl SimWorld {
    fn new_internal(config: SimConfig, rng: Option<StdRng>) -> Self {
        let mut world = Self {
            config,
            intersection: IntersectionState::new(Road::North),
            time: 0,
            last_spawn: 0,
            rng,
            stats: SimStats::default(),
        };

        // The first phase goes to a random road
        let initial_green = world.choose_road();
        world.intersection = IntersectionState::new(initial_green);
        world
    }

    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new_internal(config, None))
    }

    /// Create a new SimWorld with a seeded RNG for reproducible simulations
    pub fn new_with_seed(config: SimConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self::new_internal(config, Some(StdRng::seed_from_u64(seed))))
    }

    /// Roll against `probability`, using seeded RNG if available
    fn random_bool(&mut self, probability: f64) -> bool {
        match &mut self.rng {
            Some(rng) => rng.random_bool(probability),
            None => rand::rng().random_bool(probability),
        }
    }

    /// Choose a random road, using seeded RNG if available
    fn choose_road(&mut self) -> Road {
        let choice = match &mut self.rng {
            Some(rng) => Road::ALL.choose(rng).copied(),
            None => Road::ALL.choose(&mut rand::rng()).copied(),
        };
        choice.unwrap_or(Road::North)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn intersection(&self) -> &IntersectionState {
        &self.intersection
    }

    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    pub fn time(&self) -> Tick {
        self.time
    }

    pub fn green_road(&self) -> Road {
        self.intersection.green_road()
    }

    pub fn total_vehicle_count(&self) -> usize {
        self.intersection.total_vehicle_count()
    }

    /// Add a vehicle to the tail of `road`'s queue. Always succeeds.
    pub fn spawn_vehicle(&mut self, road: Road, is_emergency: bool) -> VehicleId {
        let id = self
            .intersection
            .spawn_vehicle(road, is_emergency, &self.config);
        self.stats
            .record_spawn(is_emergency, self.intersection.total_vehicle_count());
        id
    }

    /// Directional emergency dispatch; not subject to the vehicle ceiling
    pub fn spawn_emergency(&mut self, road: Road) -> VehicleId {
        info!("Emergency vehicle dispatched on {} road", road);
        self.spawn_vehicle(road, true)
    }

    /// Spawn only while the intersection holds fewer than `max_vehicles`
    pub fn try_spawn_vehicle(&mut self, road: Road, is_emergency: bool) -> Option<VehicleId> {
        if self.intersection.total_vehicle_count() >= self.config.max_vehicles {
            return None;
        }
        Some(self.spawn_vehicle(road, is_emergency))
    }

    /// Advance the internal clock by one tick
    pub fn step(&mut self) -> Result<TickReport> {
        self.tick(self.time + 1)
    }

    /// Run one simulation step at time `now`
    ///
    /// Order: phase switch, vehicle movement, removal of crossed vehicles,
    /// timer spawn. An error means the queues are inconsistent and the world
    /// must not be ticked again.
    pub fn tick(&mut self, now: Tick) -> Result<TickReport> {
        let clock_ok = now >= self.time;
        if !clock_ok {
            warn!(
                "Clock went backwards (tick {} after {}); phase and spawn timers hold",
                now, self.time
            );
        }
        self.time = self.time.max(now);
        self.stats.ticks_elapsed += 1;

        let phase_switched = clock_ok
            && self
                .intersection
                .advance_phase(now, self.config.green_duration);
        if phase_switched {
            let green = self.intersection.green_road();
            let preempted = self.intersection.has_emergency(green);
            if preempted {
                info!("Emergency override: {} road given right-of-way", green);
            }
            self.stats.record_switch(preempted);
        }

        let crossed = update_vehicles(&mut self.intersection, &self.config)?;
        for vehicle in &crossed {
            self.stats.record_crossing(vehicle.is_emergency);
        }

        let spawned = if clock_ok {
            self.spawn_from_timer(now)
        } else {
            None
        };

        Ok(TickReport {
            time: now,
            green_road: self.intersection.green_road(),
            phase_switched,
            crossed,
            spawned,
            total_vehicles: self.intersection.total_vehicle_count(),
        })
    }

    /// Spawn a random vehicle if the interval has passed and there is room.
    /// The timer only resets on a successful spawn, and a refused spawn
    /// draws nothing from the RNG.
    fn spawn_from_timer(&mut self, now: Tick) -> Option<VehicleId> {
        if now < self.last_spawn || now - self.last_spawn < self.config.spawn_interval {
            return None;
        }
        if self.intersection.total_vehicle_count() >= self.config.max_vehicles {
            return None;
        }

        let road = self.choose_road();
        let is_emergency = self.random_bool(self.config.emergency_probability);
        let id = self.spawn_vehicle(road, is_emergency);
        self.last_spawn = now;
        Some(id)
    }

    /// Capture everything a renderer needs
    pub fn snapshot(&self) -> IntersectionSnapshot {
        IntersectionSnapshot::capture(self.time, &self.intersection, &self.config)
    }

    /// Print a summary of the world state
    pub fn print_summary(&self) {
        let snapshot = self.snapshot();
        println!("=== Intersection @ tick {} ===", snapshot.time);
        println!("Green road: {}", snapshot.green_road);
        for road in &snapshot.roads {
            println!("  {}", road.summary_line());
        }
        println!(
            "Total vehicles: {}/{}",
            snapshot.total_vehicles, self.config.max_vehicles
        );
        println!(
            "Spawned: {} | Crossed: {} | Phase switches: {} (emergency: {})",
            self.stats.total_vehicles_spawned,
            self.stats.total_vehicles_crossed,
            self.stats.phase_switches,
            self.stats.emergency_preemptions
        );
    }

    /// Draw a visual map of the intersection in the terminal
    pub fn draw_map(&self) {
        println!("\n=== Intersection Map ===");
        println!("Legend: G/R=Signal, c=Car, E=Emergency vehicle, .=Road");
        println!();
        for line in self.render_map() {
            println!("{}", line);
        }
        println!();
    }

    /// Render the intersection as rows of characters
    pub fn render_map(&self) -> Vec<String> {
        let config = &self.config;
        let width = config.canvas_width.div_ceil(MAP_CELL_SIZE) as usize;
        let height = config.canvas_height.div_ceil(MAP_CELL_SIZE) as usize;

        // Helper to convert canvas coords to grid coords
        let to_grid = |x: f32, y: f32| -> (usize, usize) {
            let col = (x.max(0.0) as u32 / MAP_CELL_SIZE) as usize;
            let row = (y.max(0.0) as u32 / MAP_CELL_SIZE) as usize;
            (row.min(height - 1), col.min(width - 1))
        };

        let mut grid = vec![vec![' '; width]; height];

        // Draw the two crossing roads
        let center = config.center();
        let half_road = config.road_width as f32 / 2.0;
        for (row, cells) in grid.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                let x = (col as u32 * MAP_CELL_SIZE + MAP_CELL_SIZE / 2) as f32;
                let y = (row as u32 * MAP_CELL_SIZE + MAP_CELL_SIZE / 2) as f32;
                if (x - center.x).abs() < half_road || (y - center.y).abs() < half_road {
                    *cell = '.';
                }
            }
        }

        // Draw signals
        for road in Road::ALL {
            let pos = config.signal_position(road);
            let (row, col) = to_grid(pos.x, pos.y);
            grid[row][col] = if self.intersection.is_green(road) {
                'G'
            } else {
                'R'
            };
        }

        // Draw vehicles
        for road in Road::ALL {
            for vehicle in self.intersection.queue(road) {
                let (row, col) = to_grid(vehicle.position.x, vehicle.position.y);
                grid[row][col] = if vehicle.is_emergency() { 'E' } else { 'c' };
            }
        }

        grid.into_iter().map(|row| row.into_iter().collect()).collect()
    }
}
