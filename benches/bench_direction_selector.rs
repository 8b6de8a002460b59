// benches/bench_direction_selector.rs
use criterion::{
    black_box, criterion_group, criterion_main, AxisScale, Criterion, PlotConfiguration,
};
use signal_controller::control_system::{calculate_durations, select_direction, TrafficLightController};
use signal_controller::SensorReading;
use std::time::Duration;

fn bench_select_direction(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_direction");

    group.sample_size(100);
    group.measurement_time(Duration::from_secs(5));
    group.warm_up_time(Duration::from_secs(2));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Linear));

    let cases = [
        ("distinct", SensorReading::new([5, 2, 3, 1]), None),
        ("tie", SensorReading::new([3, 3, 3, 3]), None),
        ("empty", SensorReading::new([0, 0, 0, 0]), None),
        ("emergency", SensorReading::new([2, 2, 2, 2]), Some("East")),
    ];
    for (name, counts, emergency) in cases.iter() {
        group.bench_function(*name, |b| {
            b.iter(|| select_direction(black_box(counts), black_box(*emergency)));
        });
    }
    group.finish();
}

fn bench_calculate_durations(c: &mut Criterion) {
    c.bench_function("calculate_durations", |b| {
        b.iter(|| calculate_durations(black_box(9), black_box(16), 10, 60));
    });
}

fn bench_decide(c: &mut Criterion) {
    let controller = TrafficLightController::default();
    let counts = SensorReading::new([2, 9, 4, 1]);
    c.bench_function("controller_decide", |b| {
        b.iter(|| controller.decide(black_box(&counts), None));
    });
}

criterion_group!(
    benches,
    bench_select_direction,
    bench_calculate_durations,
    bench_decide
);
criterion_main!(benches);
