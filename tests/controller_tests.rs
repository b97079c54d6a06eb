//! Signal controller validation tests
//!
//! These tests validate green road selection, phase timing and queue bookkeeping

use intersection_sim::simulation::{IntersectionState, Road, SignalState, SimConfig};

fn spawn_many(state: &mut IntersectionState, road: Road, count: usize, config: &SimConfig) {
    for _ in 0..count {
        state.spawn_vehicle(road, false, config);
    }
}

#[test]
fn test_empty_intersection_selects_first_road() {
    let state = IntersectionState::new(Road::West);
    assert_eq!(state.select_green_road(), Road::North);
}

#[test]
fn test_longest_queue_wins() {
    let config = SimConfig::default();
    let mut state = IntersectionState::new(Road::North);
    spawn_many(&mut state, Road::North, 1, &config);
    spawn_many(&mut state, Road::South, 3, &config);

    assert_eq!(state.select_green_road(), Road::South);
}

#[test]
fn test_emergency_overrides_congestion() {
    let config = SimConfig::default();
    let mut state = IntersectionState::new(Road::North);
    spawn_many(&mut state, Road::South, 5, &config);
    state.spawn_vehicle(Road::East, true, &config);

    assert_eq!(state.select_green_road(), Road::East);
}

#[test]
fn test_emergency_tie_break_follows_road_order() {
    let config = SimConfig::default();
    let mut state = IntersectionState::new(Road::North);
    state.spawn_vehicle(Road::West, true, &config);
    state.spawn_vehicle(Road::South, true, &config);
    spawn_many(&mut state, Road::East, 4, &config);

    assert_eq!(state.select_green_road(), Road::South);
}

#[test]
fn test_emergency_behind_ordinary_vehicles_still_counts() {
    let config = SimConfig::default();
    let mut state = IntersectionState::new(Road::North);
    spawn_many(&mut state, Road::North, 6, &config);
    spawn_many(&mut state, Road::West, 2, &config);
    state.spawn_vehicle(Road::West, true, &config);

    assert_eq!(state.select_green_road(), Road::West);
}

#[test]
fn test_queue_length_tie_is_deterministic() {
    let config = SimConfig::default();
    let mut state = IntersectionState::new(Road::North);
    spawn_many(&mut state, Road::West, 2, &config);
    spawn_many(&mut state, Road::East, 2, &config);

    for _ in 0..5 {
        assert_eq!(state.select_green_road(), Road::East);
    }
}

#[test]
fn test_phase_holds_until_green_duration_elapses() {
    let config = SimConfig::default();
    let mut state = IntersectionState::new(Road::North);
    spawn_many(&mut state, Road::South, 2, &config);

    assert!(!state.advance_phase(config.green_duration - 1, config.green_duration));
    assert_eq!(state.green_road(), Road::North);
    assert_eq!(state.last_switch(), 0);

    assert!(state.advance_phase(config.green_duration, config.green_duration));
    assert_eq!(state.green_road(), Road::South);
    assert_eq!(state.last_switch(), config.green_duration);

    // Timer restarts from the switch
    assert!(!state.advance_phase(config.green_duration + 1, config.green_duration));
}

#[test]
fn test_phase_can_reselect_same_road() {
    let config = SimConfig::default();
    let mut state = IntersectionState::new(Road::East);
    spawn_many(&mut state, Road::East, 3, &config);

    assert!(state.advance_phase(10, 10));
    assert_eq!(state.green_road(), Road::East);
    assert_eq!(state.last_switch(), 10);
}

#[test]
fn test_clock_going_backwards_never_switches() {
    let config = SimConfig::default();
    let mut state = IntersectionState::new(Road::North);
    spawn_many(&mut state, Road::West, 1, &config);

    assert!(state.advance_phase(50, 50));
    assert!(!state.advance_phase(10, 1));
    assert_eq!(state.last_switch(), 50);
}

#[test]
fn test_exactly_one_road_is_green() {
    let config = SimConfig::default();
    let mut state = IntersectionState::new(Road::North);
    spawn_many(&mut state, Road::East, 2, &config);
    state.spawn_vehicle(Road::South, true, &config);

    for now in [10, 20, 30] {
        state.advance_phase(now, 10);
        let green: Vec<Road> = Road::ALL
            .into_iter()
            .filter(|&road| state.signal(road) == SignalState::Green)
            .collect();
        assert_eq!(green, vec![state.green_road()]);
    }
}

#[test]
fn test_spawn_appends_at_entry_in_arrival_order() {
    let config = SimConfig::default();
    let mut state = IntersectionState::new(Road::North);

    let first = state.spawn_vehicle(Road::South, false, &config);
    let second = state.spawn_vehicle(Road::South, true, &config);

    let queue = state.queue(Road::South);
    assert_eq!(queue.len(), 2);
    assert_eq!(queue[0].id, first);
    assert_eq!(queue[1].id, second);
    assert!(queue[1].is_emergency());
    assert_eq!(queue[0].position, config.geometry(Road::South).entry);
    assert_eq!(queue[0].road(), Road::South);
}

#[test]
fn test_total_vehicle_count_matches_queues() {
    let config = SimConfig::default();
    let mut state = IntersectionState::new(Road::North);
    spawn_many(&mut state, Road::North, 2, &config);
    spawn_many(&mut state, Road::South, 1, &config);
    spawn_many(&mut state, Road::West, 4, &config);
    state.spawn_vehicle(Road::East, true, &config);

    let sum: usize = Road::ALL.iter().map(|&road| state.queue_len(road)).sum();
    assert_eq!(state.total_vehicle_count(), sum);
    assert_eq!(state.total_vehicle_count(), 8);
    assert_eq!(state.emergency_count(Road::East), 1);
    assert_eq!(state.emergency_count(Road::West), 0);
}
