use rand::rngs::StdRng;
use rand::SeedableRng;
use signal_controller::global_variables::{DEFAULT_MAX_GREEN, DEFAULT_MIN_GREEN, SENSOR_MAX_COUNT};
use signal_controller::simulation_engine::scenarios::{
    deterministic_readings, emergency_directives, emergency_readings,
};
use signal_controller::{
    simulate_traffic_controller, ControllerConfig, Direction, SensorReading, Simulation,
    SimulationInputs,
};
use std::io;

#[test]
fn deterministic_run_matches_reference() {
    let readings = deterministic_readings();
    let logs = simulate_traffic_controller(4, Some(readings.as_slice()), None, false);

    let summary: Vec<_> = logs
        .iter()
        .map(|r| (r.iteration, r.chosen, r.durations.green, r.durations.yellow))
        .collect();
    assert_eq!(
        summary,
        vec![
            (1, Direction::North, 33, 3),
            (2, Direction::East, 38, 3),
            (3, Direction::North, 10, 3),
            (4, Direction::North, 23, 3),
        ]
    );
    assert_eq!(logs[1].counts, SensorReading::new([2, 9, 4, 1]));
}

#[test]
fn emergency_run_overrides_second_cycle() {
    let readings = emergency_readings();
    let directives = emergency_directives();
    let logs = simulate_traffic_controller(
        2,
        Some(readings.as_slice()),
        Some(directives.as_slice()),
        false,
    );
    assert_eq!(logs[0].chosen, Direction::North);
    assert!(!logs[0].emergency);
    assert_eq!(logs[1].chosen, Direction::East);
    assert!(logs[1].emergency);
    // 2 of 8 vehicles -> 10 + 50 * 0.25
    assert_eq!(logs[1].durations.green, 23);
}

#[test]
fn short_script_falls_back_to_random_counts() {
    let readings = deterministic_readings();
    let logs = simulate_traffic_controller(10, Some(&readings[..2]), Some(&[Some("West")][..]), false);

    assert_eq!(logs.len(), 10);
    for (i, record) in logs.iter().enumerate() {
        assert_eq!(record.iteration, i + 1);
        assert!((DEFAULT_MIN_GREEN..=DEFAULT_MAX_GREEN).contains(&record.durations.green));
        assert!(record.counts.as_array().iter().all(|&c| c <= SENSOR_MAX_COUNT));
        assert_eq!(record.emergency, i == 0);
    }
    assert_eq!(logs[0].chosen, Direction::West);
    assert_eq!(logs[1].counts, readings[1]);
}

#[test]
fn random_run_is_reproducible_with_a_seed() {
    let simulation = Simulation::default();
    let run = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        simulation
            .run_with(25, SimulationInputs::default(), &mut rng, &mut io::sink(), false)
            .unwrap()
    };
    let first = run(11);
    assert_eq!(first, run(11));
    assert_eq!(first.len(), 25);
    for record in &first {
        let (best, _) = signal_controller::control_system::prioritize_direction(&record.counts);
        assert_eq!(record.chosen, best);
    }
}

#[test]
fn zero_iterations_yields_empty_log() {
    assert!(simulate_traffic_controller(0, None, None, false).is_empty());
}

#[test]
fn custom_config_bounds_every_cycle() {
    let config = ControllerConfig {
        min_green: 20,
        max_green: 30,
        yellow_duration: 5,
    };
    let simulation = Simulation::new(config).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    let logs = simulation
        .run_with(50, SimulationInputs::default(), &mut rng, &mut io::sink(), false)
        .unwrap();
    for record in logs {
        assert!((20..=30).contains(&record.durations.green));
        assert_eq!(record.durations.yellow, 5);
    }
}

#[test]
fn printed_report_matches_console_format() {
    let readings = deterministic_readings();
    let inputs = SimulationInputs {
        sensor_sequences: Some(readings.as_slice()),
        emergency_sequence: None,
    };
    let mut out = Vec::new();
    let mut rng = StdRng::seed_from_u64(0);
    Simulation::default()
        .run_with(4, inputs, &mut rng, &mut out, true)
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(
        lines[9],
        "Cycle 4: counts={'North': 3, 'East': 3, 'South': 3, 'West': 3}, chosen=North, green=23s"
    );
    assert_eq!(lines[10], "N:G(23s) | E:R(26s) | S:R(26s) | W:R(26s)");
    assert_eq!(lines[11], "-".repeat(60));
}

#[test]
fn scripted_stdin_run_with_config() {
    use signal_controller::sensors::sensor_reader::read_sensor_script;
    use signal_controller::simulation_engine::RunOptions;

    let options = RunOptions::from_args(
        ["--script", "--config", r#"{"min_green": 5, "max_green": 25}"#]
            .iter()
            .map(|a| a.to_string()),
    )
    .unwrap();
    assert!(options.script_from_stdin);

    let script = io::Cursor::new(r#"[{"North": 4}, {"East": "1", "West": 3}]"#);
    let readings = read_sensor_script(script).unwrap();
    let inputs = SimulationInputs {
        sensor_sequences: Some(readings.as_slice()),
        emergency_sequence: None,
    };
    let mut rng = StdRng::seed_from_u64(0);
    let logs = Simulation::new(options.config)
        .unwrap()
        .run_with(readings.len(), inputs, &mut rng, &mut io::sink(), false)
        .unwrap();

    assert_eq!(logs.len(), 2);
    assert_eq!((logs[0].chosen, logs[0].durations.green), (Direction::North, 25));
    // 3 of 4 vehicles -> 5 + 20 * 0.75
    assert_eq!((logs[1].chosen, logs[1].durations.green), (Direction::West, 20));
}

#[test]
fn malformed_script_fails_before_simulating() {
    use signal_controller::sensors::sensor_reader::read_sensor_script;
    use signal_controller::{InputError, SimulationError};

    let err: SimulationError = read_sensor_script(io::Cursor::new(r#"[{"North": "many"}]"#))
        .unwrap_err()
        .into();
    assert!(matches!(
        err,
        SimulationError::Input(InputError::InvalidCount { .. })
    ));
}
