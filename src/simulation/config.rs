//! Tunable parameters for the intersection simulation
//!
//! Durations are in ticks. The defaults reproduce a 30 tick-per-second run
//! on a 900 x 600 canvas.

use anyhow::{ensure, Result};

use super::types::{Axis, Position, Road, RoadGeometry, Tick};

/// Simulation ticks per second of displayed time
pub const TICKS_PER_SECOND: u32 = 30;

/// How long a road stays green before the controller re-evaluates (3 s)
pub const DEFAULT_GREEN_DURATION: Tick = 3 * TICKS_PER_SECOND as Tick;

/// Minimum time between timer spawns (0.5 s)
pub const DEFAULT_SPAWN_INTERVAL: Tick = TICKS_PER_SECOND as Tick / 2;

pub const DEFAULT_MAX_VEHICLES: usize = 10;
pub const DEFAULT_EMERGENCY_PROBABILITY: f64 = 0.1;

/// Canvas units per tick
pub const ORDINARY_SPEED: f32 = 2.0;
pub const EMERGENCY_SPEED: f32 = 4.0;

/// Ticks for one full on/off cycle of an emergency vehicle's lights
pub const DEFAULT_FLASH_PERIOD: u32 = 20;

pub const CANVAS_WIDTH: u32 = 900;
pub const CANVAS_HEIGHT: u32 = 600;
pub const ROAD_WIDTH: u32 = 100;

/// Configuration for a simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub green_duration: Tick,
    pub spawn_interval: Tick,
    pub max_vehicles: usize,
    /// Chance that a timer spawn is an emergency vehicle
    pub emergency_probability: f64,
    pub ordinary_speed: f32,
    pub emergency_speed: f32,
    pub flash_period: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub road_width: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            green_duration: DEFAULT_GREEN_DURATION,
            spawn_interval: DEFAULT_SPAWN_INTERVAL,
            max_vehicles: DEFAULT_MAX_VEHICLES,
            emergency_probability: DEFAULT_EMERGENCY_PROBABILITY,
            ordinary_speed: ORDINARY_SPEED,
            emergency_speed: EMERGENCY_SPEED,
            flash_period: DEFAULT_FLASH_PERIOD,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            road_width: ROAD_WIDTH,
        }
    }
}

impl SimConfig {
    /// Reject parameter combinations the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        ensure!(self.green_duration > 0, "green duration must be at least one tick");
        ensure!(self.spawn_interval > 0, "spawn interval must be at least one tick");
        ensure!(self.max_vehicles > 0, "max vehicles must be positive");
        ensure!(
            (0.0..=1.0).contains(&self.emergency_probability),
            "emergency probability {} is outside [0, 1]",
            self.emergency_probability
        );
        ensure!(
            self.ordinary_speed > 0.0,
            "ordinary speed must be positive, got {}",
            self.ordinary_speed
        );
        ensure!(
            self.emergency_speed >= self.ordinary_speed,
            "emergency speed {} is slower than ordinary speed {}",
            self.emergency_speed,
            self.ordinary_speed
        );
        ensure!(self.flash_period > 0, "flash period must be positive");
        ensure!(
            self.road_width < self.canvas_width.min(self.canvas_height),
            "road width {} does not fit a {}x{} canvas",
            self.road_width,
            self.canvas_width,
            self.canvas_height
        );
        Ok(())
    }

    /// Canvas coordinate of the intersection center
    pub fn center(&self) -> Position {
        Position::new(
            (self.canvas_width / 2) as f32,
            (self.canvas_height / 2) as f32,
        )
    }

    /// Entry point, travel direction and crossing threshold of a road.
    ///
    /// Traffic keeps to its own half of each road: a quarter road width off
    /// the center line.
    pub fn geometry(&self, road: Road) -> RoadGeometry {
        let half_w = self.canvas_width / 2;
        let half_h = self.canvas_height / 2;
        let lane = self.road_width / 4;

        let (entry, axis, sign, crossing_threshold) = match road {
            Road::North => (
                Position::new((half_w - lane) as f32, 0.0),
                Axis::Y,
                1.0,
                half_h as f32,
            ),
            Road::South => (
                Position::new((half_w + lane) as f32, self.canvas_height as f32),
                Axis::Y,
                -1.0,
                half_h as f32,
            ),
            Road::East => (
                Position::new(self.canvas_width as f32, (half_h + lane) as f32),
                Axis::X,
                -1.0,
                half_w as f32,
            ),
            Road::West => (
                Position::new(0.0, (half_h - lane) as f32),
                Axis::X,
                1.0,
                half_w as f32,
            ),
        };

        RoadGeometry {
            road,
            entry,
            axis,
            sign,
            crossing_threshold,
        }
    }

    /// Where a road's signal light sits, one road width out from the center
    pub fn signal_position(&self, road: Road) -> Position {
        let center = self.center();
        let offset = self.road_width as f32;
        match road {
            Road::North => Position::new(center.x, center.y - offset),
            Road::South => Position::new(center.x, center.y + offset),
            Road::East => Position::new(center.x + offset, center.y),
            Road::West => Position::new(center.x - offset, center.y),
        }
    }

    pub fn speed(&self, is_emergency: bool) -> f32 {
        if is_emergency {
            self.emergency_speed
        } else {
            self.ordinary_speed
        }
    }
}
