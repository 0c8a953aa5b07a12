use super::*;
use crate::core::vector::PolarVec;
use std::f32::consts::PI;

fn core_300x200() -> SimCore {
    SimCore::new(300.0, 200.0).expect("valid viewport")
}

#[test]
fn bodies_stay_inside_viewport_after_step() {
    let mut core = core_300x200();
    assert!(core.spawn_body(10.0, 10.0, 100.0, 0xffffff));
    assert!(core.spawn_body(290.0, 190.0, 100.0, 0xffffff));
    core.bodies[0].vector = PolarVec::new(5000.0, 0.7);
    core.bodies[1].vector = PolarVec::new(4000.0, -2.3);

    for _ in 0..10 {
        core.step(1.0 / 60.0);
    }

    let max_x = core.width - core.config.ball_diameter;
    let max_y = core.height - core.config.ball_diameter;
    for body in &core.bodies {
        assert!(body.x >= 0.0 && body.x <= max_x, "x out of bounds: {}", body.x);
        assert!(body.y >= 0.0 && body.y <= max_y, "y out of bounds: {}", body.y);
    }
}

#[test]
fn disabled_collisions_let_overlapping_bodies_pass_through() {
    let mut core = core_300x200();
    core.set_gravity_enabled(false);
    core.set_collisions_enabled(false);
    assert!(core.spawn_body(100.0, 100.0, 100.0, 0));
    assert!(core.spawn_body(102.0, 100.0, 100.0, 0));
    core.bodies[0].vector = PolarVec::new(10.0, 0.0);
    core.bodies[1].vector = PolarVec::new(10.0, PI);

    core.step(0.01);

    // Still heading straight at each other, speeds untouched.
    assert_eq!(core.bodies[0].vector, PolarVec::new(10.0, 0.0));
    assert_eq!(core.bodies[1].vector, PolarVec::new(10.0, PI));
    assert!(core.bodies[0].x > 100.0);
    assert!(core.bodies[1].x < 102.0);
}

#[test]
fn bodies_in_different_cells_are_never_paired() {
    // Distance 2 < diameter 4, but a cell boundary at x=100 splits them:
    // the broad phase misses cross-cell pairs by design.
    let mut core = core_300x200();
    core.set_gravity_enabled(false);
    core.enable_perf_metrics(true);
    assert!(core.spawn_body(99.0, 50.0, 100.0, 0));
    assert!(core.spawn_body(101.0, 50.0, 100.0, 0));

    core.step(0.0);

    assert_eq!(core.get_perf_stats().pairs_tested(), 0);
    assert_eq!(core.bodies[0].x, 99.0);
    assert_eq!(core.bodies[1].x, 101.0);
}

#[test]
fn top_left_cell_participates_in_collisions() {
    // Both bodies bucket into cell (0, 0); that cell must resolve pairs
    // like any other.
    let mut core = core_300x200();
    core.set_gravity_enabled(false);
    core.enable_perf_metrics(true);
    assert!(core.spawn_body(1.0, 50.0, 100.0, 0));
    assert!(core.spawn_body(3.0, 50.0, 100.0, 0));

    core.step(0.0);

    assert_eq!(core.get_perf_stats().collisions_resolved(), 1);
    let gap = core.bodies[1].x - core.bodies[0].x;
    assert!((gap - core.config.ball_diameter).abs() < 1e-3);
}

#[test]
fn zero_dt_step_changes_nothing() {
    let mut core = core_300x200();
    assert!(core.spawn_body(50.0, 60.0, 100.0, 0));
    core.bodies[0].vector = PolarVec::new(25.0, 1.0);
    let before = core.bodies[0].vector;

    core.step(0.0);

    assert_eq!((core.bodies[0].x, core.bodies[0].y), (50.0, 60.0));
    // The gravity branch recomposes the vector even for dt = 0, so compare
    // up to float round-trip noise.
    assert!((core.bodies[0].vector.speed - before.speed).abs() < 1e-4);
    assert!((core.bodies[0].vector.direction - before.direction).abs() < 1e-4);
    assert_eq!(core.frame(), 1);
}

#[test]
fn spawn_ring_spawns_forty_bodies_and_cycles_the_palette() {
    let mut core = core_300x200();
    core.spawn_ring(150.0, 100.0);
    assert_eq!(core.body_count(), commands::RING_BODIES as usize);
    let first_color = core.bodies[0].color;
    assert_eq!(first_color, core.config.palette[0]);

    core.spawn_ring(150.0, 100.0);
    assert_eq!(core.bodies[40].color, core.config.palette[1]);

    core.spawn_ring(150.0, 100.0);
    core.spawn_ring(150.0, 100.0);
    core.spawn_ring(150.0, 100.0);
    // Fifth ring wraps back to the first palette entry.
    assert_eq!(core.bodies[160].color, first_color);
}

#[test]
fn spawn_block_spawns_side_squared_bodies() {
    let mut core = core_300x200();
    core.spawn_block(20.0, 20.0, 5);
    assert_eq!(core.body_count(), 25);
    // Pitch is diameter + gap.
    let pitch = core.bodies[5].x - core.bodies[0].x;
    assert!((pitch - (core.config.ball_diameter + 10.0)).abs() < 1e-4);
}

#[test]
fn spawn_body_rejects_bad_mass() {
    let mut core = core_300x200();
    assert!(!core.spawn_body(10.0, 10.0, 0.0, 0));
    assert!(!core.spawn_body(10.0, 10.0, -5.0, 0));
    assert!(!core.spawn_body(10.0, 10.0, f32::NAN, 0));
    assert_eq!(core.body_count(), 0);
}

#[test]
fn clear_drops_all_bodies() {
    let mut core = core_300x200();
    core.spawn_ring(150.0, 100.0);
    core.clear();
    assert_eq!(core.body_count(), 0);
}

#[test]
fn resize_validates_and_takes_effect() {
    let mut core = core_300x200();
    assert!(core.resize(0.0, 100.0).is_err());
    assert!(core.resize(100.0, f32::NAN).is_err());
    core.resize(640.0, 480.0).expect("valid resize");
    assert_eq!(core.width(), 640.0);
    assert_eq!(core.height(), 480.0);
}

#[test]
fn construction_rejects_bad_viewport_or_config() {
    assert!(SimCore::new(-1.0, 100.0).is_err());
    let bad = SimConfig {
        collision_energy_loss: 2.0,
        ..SimConfig::default()
    };
    assert!(SimCore::with_config(300.0, 200.0, bad).is_err());
}

#[test]
fn load_config_json_is_atomic() {
    let mut core = core_300x200();
    assert!(core.load_config_json(r#"{"ball_diameter": -1.0}"#).is_err());
    assert_eq!(core.config.ball_diameter, 4.0);

    core.load_config_json(r#"{"ball_diameter": 8.0}"#).expect("valid bundle");
    assert_eq!(core.config.ball_diameter, 8.0);
    assert!(core.config_json().contains("ball_diameter"));
}

#[test]
fn render_buffers_mirror_the_population() {
    let mut core = core_300x200();
    assert!(core.spawn_body(12.0, 34.0, 100.0, 0xabcdef));
    assert!(core.spawn_body(56.0, 78.0, 100.0, 0x123456));

    assert_eq!(core.sync_render_buffers(), 2);
    assert_eq!(core.positions_len(), 4);
    assert_eq!(core.colors_len(), 2);
    assert_eq!(core.render.positions, vec![12.0, 34.0, 56.0, 78.0]);
    assert_eq!(core.render.colors, vec![0xabcdef, 0x123456]);
}

#[test]
fn perf_stats_are_zero_when_disabled() {
    let mut core = core_300x200();
    core.spawn_ring(150.0, 100.0);
    core.step(0.016);
    assert_eq!(core.get_perf_stats().bodies(), 0);

    core.enable_perf_metrics(true);
    core.step(0.016);
    let stats = core.get_perf_stats();
    assert_eq!(stats.bodies(), 40);
    assert!(stats.step_ms() >= 0.0);
}
