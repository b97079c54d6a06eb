//! Vehicle movement validation tests

use intersection_sim::simulation::{
    update_vehicles, IntersectionState, Position, Road, SimConfig, SimId, SimVehicle, VehicleId,
    VehicleUpdateResult,
};

fn vehicle_at_entry(road: Road, is_emergency: bool, config: &SimConfig) -> SimVehicle {
    SimVehicle::new(
        VehicleId(SimId(0)),
        road,
        is_emergency,
        config.geometry(road).entry,
    )
}

#[test]
fn test_road_geometry_matches_canvas_layout() {
    let config = SimConfig::default();

    assert_eq!(config.geometry(Road::North).entry, Position::new(425.0, 0.0));
    assert_eq!(config.geometry(Road::South).entry, Position::new(475.0, 600.0));
    assert_eq!(config.geometry(Road::East).entry, Position::new(900.0, 325.0));
    assert_eq!(config.geometry(Road::West).entry, Position::new(0.0, 275.0));

    assert_eq!(config.geometry(Road::North).crossing_threshold, 300.0);
    assert_eq!(config.geometry(Road::East).crossing_threshold, 450.0);
}

#[test]
fn test_ordinary_vehicle_waits_on_red() {
    let config = SimConfig::default();
    let mut vehicle = vehicle_at_entry(Road::North, false, &config);
    let geometry = config.geometry(Road::North);
    let start = vehicle.position;

    for _ in 0..25 {
        let result = vehicle.advance(Road::East, &geometry, &config);
        assert_eq!(result, VehicleUpdateResult::Waiting);
    }
    assert_eq!(vehicle.position, start);
}

#[test]
fn test_ordinary_vehicle_moves_on_green_in_road_direction() {
    let config = SimConfig::default();

    let expected = [
        (Road::North, Position::new(425.0, 2.0)),
        (Road::South, Position::new(475.0, 598.0)),
        (Road::East, Position::new(898.0, 325.0)),
        (Road::West, Position::new(2.0, 275.0)),
    ];

    for (road, position) in expected {
        let mut vehicle = vehicle_at_entry(road, false, &config);
        let result = vehicle.advance(road, &config.geometry(road), &config);
        assert_eq!(result, VehicleUpdateResult::Moved);
        assert_eq!(vehicle.position, position, "{} road", road);
        assert_eq!(vehicle.flash_phase, 0);
    }
}

#[test]
fn test_emergency_vehicle_ignores_signal() {
    let config = SimConfig::default();
    let mut vehicle = vehicle_at_entry(Road::West, true, &config);
    let geometry = config.geometry(Road::West);

    for _ in 0..3 {
        assert_eq!(
            vehicle.advance(Road::North, &geometry, &config),
            VehicleUpdateResult::Moved
        );
    }
    assert_eq!(vehicle.position.x, 3.0 * config.emergency_speed);
    assert_eq!(vehicle.flash_phase, 3);
}

#[test]
fn test_emergency_flash_toggles_every_half_period() {
    let config = SimConfig::default();
    let mut vehicle = vehicle_at_entry(Road::South, true, &config);
    let geometry = config.geometry(Road::South);

    let mut pattern = Vec::new();
    for _ in 0..config.flash_period {
        vehicle.advance(Road::North, &geometry, &config);
        pattern.push(vehicle.flash_on(config.flash_period));
    }

    // flash_phase is k after k moves: on for 1..=9, off for 10..=19, on again at 20
    let mut expected = vec![true; 9];
    expected.extend(vec![false; 10]);
    expected.push(true);
    assert_eq!(pattern, expected);
    assert_eq!(vehicle.flash_phase, config.flash_period);

    let ordinary = vehicle_at_entry(Road::South, false, &config);
    assert!(!ordinary.flash_on(config.flash_period));
}

#[test]
fn test_crossing_is_strictly_past_threshold() {
    let config = SimConfig::default();
    let mut vehicle = vehicle_at_entry(Road::North, false, &config);
    let geometry = config.geometry(Road::North);

    // 150 ticks at 2 units lands exactly on the threshold
    for _ in 0..150 {
        assert_eq!(
            vehicle.advance(Road::North, &geometry, &config),
            VehicleUpdateResult::Moved
        );
    }
    assert_eq!(vehicle.position.y, 300.0);

    assert_eq!(
        vehicle.advance(Road::North, &geometry, &config),
        VehicleUpdateResult::Crossed
    );
}

#[test]
fn test_red_road_vehicle_starts_moving_once_green() {
    let config = SimConfig::default();
    let mut state = IntersectionState::new(Road::South);
    state.spawn_vehicle(Road::North, false, &config);
    let start = state.queue(Road::North)[0].position;

    for _ in 0..10 {
        update_vehicles(&mut state, &config).unwrap();
    }
    assert_eq!(state.queue(Road::North)[0].position, start);

    // North holds the only vehicle so it wins the next phase
    assert!(state.advance_phase(config.green_duration, config.green_duration));
    assert_eq!(state.green_road(), Road::North);

    for _ in 0..5 {
        update_vehicles(&mut state, &config).unwrap();
    }
    assert_eq!(
        state.queue(Road::North)[0].position.y,
        start.y + config.ordinary_speed * 5.0
    );
}

#[test]
fn test_crossed_vehicle_is_removed_without_skipping_others() {
    let config = SimConfig::default();
    let mut state = IntersectionState::new(Road::West);

    let leader = state.spawn_vehicle(Road::West, false, &config);
    for _ in 0..200 {
        update_vehicles(&mut state, &config).unwrap();
    }
    assert_eq!(state.queue(Road::West)[0].position.x, 400.0);

    let follower = state.spawn_vehicle(Road::West, false, &config);
    let mut crossed = Vec::new();
    for _ in 0..26 {
        crossed.extend(update_vehicles(&mut state, &config).unwrap());
    }

    assert_eq!(crossed.len(), 1);
    assert_eq!(crossed[0].id, leader);
    assert_eq!(crossed[0].road, Road::West);

    let queue = state.queue(Road::West);
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].id, follower);
    assert_eq!(queue[0].position.x, 26.0 * config.ordinary_speed);
    assert_eq!(state.total_vehicle_count(), 1);
}

#[test]
fn test_crossed_vehicle_never_returns() {
    let config = SimConfig::default();
    let mut state = IntersectionState::new(Road::North);
    let id = state.spawn_vehicle(Road::East, true, &config);

    // 4 units per tick from x=900 clears x=450 on tick 113
    for tick in 1..=113 {
        let crossed = update_vehicles(&mut state, &config).unwrap();
        if tick < 113 {
            assert!(crossed.is_empty(), "crossed early at tick {}", tick);
        } else {
            assert_eq!(crossed.len(), 1);
            assert_eq!(crossed[0].id, id);
            assert!(crossed[0].is_emergency);
        }
    }

    for _ in 0..5 {
        assert!(update_vehicles(&mut state, &config).unwrap().is_empty());
        assert_eq!(state.total_vehicle_count(), 0);
    }
}
