//! Core types for the intersection simulation
//!
//! These are standalone types that don't depend on Bevy.

use anyhow::{bail, Result};
use std::fmt;
use std::str::FromStr;

/// Simulation time, counted in ticks
pub type Tick = u64;

/// A unique identifier for simulation entities
/// This is a simple wrapper around a usize for type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SimId(pub usize);

/// A wrapper type for vehicle IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VehicleId(pub SimId);

/// One of the four approach roads.
///
/// The declaration order is the fixed scan order used for every tie-break:
/// North, South, East, West.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Road {
    North,
    South,
    East,
    West,
}

impl Road {
    pub const COUNT: usize = 4;

    /// All roads in tie-break order
    pub const ALL: [Road; Road::COUNT] = [Road::North, Road::South, Road::East, Road::West];

    /// Index into per-road arrays
    pub fn index(self) -> usize {
        match self {
            Road::North => 0,
            Road::South => 1,
            Road::East => 2,
            Road::West => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Road::North => "North",
            Road::South => "South",
            Road::East => "East",
            Road::West => "West",
        }
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Road {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Road::North),
            "south" | "s" => Ok(Road::South),
            "east" | "e" => Ok(Road::East),
            "west" | "w" => Ok(Road::West),
            other => bail!("unknown road '{}' (expected north, south, east or west)", other),
        }
    }
}

/// Signal shown to a single road
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalState {
    Red,
    Green,
}

/// Coordinate axis a road's traffic travels along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// A 2D position in canvas coordinates (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Move `distance` along `axis`, in the direction of `sign`
    pub fn translate(&mut self, axis: Axis, sign: f32, distance: f32) {
        match axis {
            Axis::X => self.x += sign * distance,
            Axis::Y => self.y += sign * distance,
        }
    }
}

/// Fixed geometry of one approach road
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadGeometry {
    pub road: Road,
    /// Where new vehicles appear
    pub entry: Position,
    pub axis: Axis,
    /// +1.0 or -1.0
    pub sign: f32,
    /// Coordinate on `axis` past which a vehicle has cleared the intersection
    pub crossing_threshold: f32,
}

impl RoadGeometry {
    /// Strictly past the threshold in the direction of travel
    pub fn has_crossed(&self, position: &Position) -> bool {
        self.sign * (position.along(self.axis) - self.crossing_threshold) > 0.0
    }
}
