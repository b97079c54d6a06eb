use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use intersection_sim::simulation::{Road, SimConfig, SimWorld, Tick};
use log::info;

/// An emergency vehicle dispatched on a road at a given tick, e.g. `east@120`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EmergencyDispatch {
    road: Road,
    at: Tick,
}

impl FromStr for EmergencyDispatch {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (road, at) = s
            .split_once('@')
            .context("expected <ROAD>@<TICK>, e.g. north@30")?;
        Ok(Self {
            road: road.parse()?,
            at: at
                .trim()
                .parse()
                .with_context(|| format!("invalid tick '{}'", at))?,
        })
    }
}

#[derive(Parser)]
#[command(name = "intersection_sim")]
#[command(about = "Four-way intersection simulation with emergency vehicle priority")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Number of simulation ticks to run in headless mode
    #[arg(long, default_value = "900")]
    ticks: Tick,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Ticks a road stays green before the controller re-evaluates
    #[arg(long)]
    green_duration: Option<Tick>,

    /// Minimum ticks between random spawns
    #[arg(long)]
    spawn_interval: Option<Tick>,

    /// Random spawning pauses once this many vehicles are queued
    #[arg(long)]
    max_vehicles: Option<usize>,

    /// Chance that a random spawn is an emergency vehicle
    #[arg(long)]
    emergency_probability: Option<f64>,

    /// Print a summary every N ticks in headless mode
    #[arg(long, default_value = "30")]
    summary_every: Tick,

    /// Dispatch an emergency vehicle, e.g. `--emergency north@30` (repeatable)
    #[arg(long = "emergency", value_name = "ROAD@TICK")]
    emergencies: Vec<EmergencyDispatch>,
}

impl Cli {
    fn config(&self) -> SimConfig {
        let defaults = SimConfig::default();
        SimConfig {
            green_duration: self.green_duration.unwrap_or(defaults.green_duration),
            spawn_interval: self.spawn_interval.unwrap_or(defaults.spawn_interval),
            max_vehicles: self.max_vehicles.unwrap_or(defaults.max_vehicles),
            emergency_probability: self
                .emergency_probability
                .unwrap_or(defaults.emergency_probability),
            ..defaults
        }
    }

    fn build_world(&self) -> Result<SimWorld> {
        let config = self.config();
        match self.seed {
            Some(seed) => SimWorld::new_with_seed(config, seed),
            None => SimWorld::new(config),
        }
        .context("invalid simulation configuration")
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.ui {
        #[cfg(feature = "ui")]
        {
            if let Err(err) = run_with_ui(&cli) {
                eprintln!("Error: {:#}", err);
                std::process::exit(1);
            }
        }
        #[cfg(not(feature = "ui"))]
        {
            eprintln!("Error: UI feature is not enabled. Rebuild with --features ui");
            std::process::exit(1);
        }
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .init();

        if let Err(err) = run_headless(&cli) {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    }
}

/// Run the simulation in headless mode (no graphics)
fn run_headless(cli: &Cli) -> Result<()> {
    let mut world = cli.build_world()?;

    info!("Running intersection simulation in headless mode");
    info!(
        "Ticks: {}, green duration: {} ticks, max vehicles: {}",
        cli.ticks,
        world.config().green_duration,
        world.config().max_vehicles
    );

    println!("Initial state:");
    world.print_summary();
    println!();

    for _ in 0..cli.ticks {
        let now = world.time() + 1;
        for dispatch in cli.emergencies.iter().filter(|d| d.at.max(1) == now) {
            world.spawn_emergency(dispatch.road);
        }

        let report = world
            .tick(now)
            .with_context(|| format!("simulation failed at tick {}", now))?;

        if cli.summary_every > 0 && report.time % cli.summary_every == 0 {
            println!("--- After tick {} ---", report.time);
            world.print_summary();
            println!();
        }
    }

    println!("=== Final State ===");
    world.print_summary();
    world.draw_map();

    world.stats().log_report(world.total_vehicle_count());
    Ok(())
}

#[cfg(feature = "ui")]
fn run_with_ui(cli: &Cli) -> Result<()> {
    use bevy::log::LogPlugin;
    use bevy::prelude::*;
    use intersection_sim::simulation::{CANVAS_HEIGHT, CANVAS_WIDTH};
    use intersection_sim::ui::{IntersectionUIPlugin, SimWorldResource};

    let world = cli.build_world()?;

    println!("Starting Intersection Sim UI...");
    println!();
    println!("Controls:");
    println!("  Arrow Up    - Emergency vehicle on North road");
    println!("  Arrow Down  - Emergency vehicle on South road");
    println!("  Arrow Left  - Emergency vehicle on West road");
    println!("  Arrow Right - Emergency vehicle on East road");
    println!("  ESC         - Exit");
    println!();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,intersection_sim=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Traffic Control Simulation with Emergency Vehicles".into(),
                        resolution: (CANVAS_WIDTH, CANVAS_HEIGHT).into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .insert_resource(SimWorldResource::new(world))
        .add_plugins(IntersectionUIPlugin)
        .run();

    Ok(())
}
