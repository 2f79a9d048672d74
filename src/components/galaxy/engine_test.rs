use super::config::{GalaxyConfig, ViewportClass};
use super::engine::GalaxyEngine;
use super::particle::StarTier;
use super::theme::ThemeMode;

fn desktop_engine(width: f64, height: f64, seed: u64) -> GalaxyEngine {
	GalaxyEngine::new(
		GalaxyConfig::default(),
		ThemeMode::Dark,
		width,
		height,
		ViewportClass::Desktop,
		seed,
	)
}

/// Run `frames` simulation steps at a 16ms cadence.
fn run(engine: &mut GalaxyEngine, frames: usize) {
	for i in 0..frames {
		engine.tick((i as f64 + 1.0) * 16.0);
	}
}

#[test]
fn population_is_area_over_divisor() {
	let engine = desktop_engine(800.0, 600.0, 42);
	assert_eq!(engine.particles.len(), 60);

	let mobile = GalaxyEngine::new(
		GalaxyConfig::default(),
		ThemeMode::Dark,
		800.0,
		600.0,
		ViewportClass::Mobile,
		42,
	);
	assert_eq!(mobile.particles.len(), 40);
}

#[test]
fn resize_regenerates_at_new_density() {
	let mut engine = desktop_engine(800.0, 600.0, 7);
	engine.resize(400.0, 300.0, ViewportClass::Desktop);
	assert_eq!(engine.particles.len(), 15);

	// Same dimensions twice yields the same count both times, even though
	// regeneration re-randomizes individual particles.
	engine.resize(400.0, 300.0, ViewportClass::Desktop);
	assert_eq!(engine.particles.len(), 15);
}

#[test]
fn positions_stay_within_wrap_margin() {
	let mut engine = desktop_engine(800.0, 600.0, 3);
	run(&mut engine, 20_000);

	for p in &engine.particles {
		assert!(
			(-10.0..=810.0).contains(&p.x),
			"x escaped the wrap band: {}",
			p.x
		);
		assert!(
			(-10.0..=610.0).contains(&p.y),
			"y escaped the wrap band: {}",
			p.y
		);
	}
}

#[test]
fn star_identity_is_fixed_and_visuals_stay_in_tier_bounds() {
	let mut engine = desktop_engine(800.0, 600.0, 11);
	let identities: Vec<(f64, f64)> = engine
		.particles
		.iter()
		.map(|p| (p.brightness, p.star_type))
		.collect();

	run(&mut engine, 1_000);

	for (p, (brightness, star_type)) in engine.particles.iter().zip(&identities) {
		assert_eq!(p.brightness, *brightness);
		assert_eq!(p.star_type, *star_type);

		let (lo, hi) = match p.tier() {
			StarTier::Bright => (0.7, 1.3),
			_ => (0.9, 1.1),
		};
		let ratio = p.radius / p.base_radius;
		assert!(
			ratio >= lo - 1e-9 && ratio <= hi + 1e-9,
			"radius ratio {} outside [{}, {}]",
			ratio,
			lo,
			hi
		);

		assert!(p.current_opacity <= p.base_opacity + 1e-12);
		assert!(p.current_opacity >= p.base_opacity * 0.4 - 1e-12);
	}
}

#[test]
fn theme_toggle_recolors_without_touching_motion() {
	let mut engine = desktop_engine(800.0, 600.0, 19);
	let count = engine.particles.len();
	let positions: Vec<(f64, f64)> = engine.particles.iter().map(|p| (p.x, p.y)).collect();
	let old_palette = engine.theme.palette.clone();

	engine.set_theme(ThemeMode::Light);

	assert_eq!(engine.particles.len(), count);
	for (p, (x, y)) in engine.particles.iter().zip(&positions) {
		assert_eq!((p.x, p.y), (*x, *y));
		assert!(
			engine.theme.palette.contains(p.color),
			"color {:?} not in the new palette",
			p.color
		);
		assert!(
			!old_palette.contains(p.color),
			"color {:?} still from the old palette",
			p.color
		);
	}
}

#[test]
fn theme_set_to_current_mode_is_a_no_op() {
	let mut engine = desktop_engine(800.0, 600.0, 23);
	let colors: Vec<_> = engine.particles.iter().map(|p| p.color).collect();
	engine.set_theme(ThemeMode::Dark);
	let after: Vec<_> = engine.particles.iter().map(|p| p.color).collect();
	assert_eq!(colors, after);
}

#[test]
fn click_appends_burst_near_pointer() {
	let mut engine = desktop_engine(800.0, 600.0, 5);
	let before = engine.particles.len();

	engine.pointer_moved(100.0, 100.0);
	engine.pointer_clicked();

	assert_eq!(engine.particles.len(), before + 3);
	for p in &engine.particles[before..] {
		assert!((50.0..=150.0).contains(&p.x), "burst x out of box: {}", p.x);
		assert!((50.0..=150.0).contains(&p.y), "burst y out of box: {}", p.y);
	}
}

#[test]
fn drift_speed_never_exceeds_cap() {
	let mut config = GalaxyConfig::default();
	// Force a direction change every particle every frame.
	config.motion.turn_probability = 1.0;
	let mut engine = GalaxyEngine::new(
		config,
		ThemeMode::Dark,
		800.0,
		600.0,
		ViewportClass::Desktop,
		13,
	);

	run(&mut engine, 500);

	for p in &engine.particles {
		let speed = (p.vx * p.vx + p.vy * p.vy).sqrt();
		assert!(speed <= 0.2 + 1e-9, "speed {} over the cap", speed);
	}
}

#[test]
fn population_cap_drains_excess() {
	let mut config = GalaxyConfig::default();
	config.population.max = Some(10);
	config.population.cull_probability = 1.0;
	let mut engine = GalaxyEngine::new(
		config,
		ThemeMode::Dark,
		800.0,
		600.0,
		ViewportClass::Desktop,
		29,
	);
	assert_eq!(engine.particles.len(), 60);

	// One cull per tick while over the ceiling.
	run(&mut engine, 60);
	assert_eq!(engine.particles.len(), 10);
}

#[test]
fn scrolling_throttles_updates_to_the_configured_interval() {
	let mut engine = desktop_engine(800.0, 600.0, 31);

	engine.tick(1_000.0);
	let time = engine.time;

	engine.set_scrolling(true);
	engine.tick(1_050.0);
	assert_eq!(engine.time, time, "update ran inside the throttle window");

	engine.tick(1_150.0);
	assert!(engine.time > time, "update skipped outside the throttle window");

	engine.set_scrolling(false);
	let time = engine.time;
	engine.tick(1_160.0);
	assert!(engine.time > time, "unthrottled update skipped");
}

#[test]
fn stop_freezes_the_field() {
	let mut engine = desktop_engine(800.0, 600.0, 37);
	engine.stop();

	let positions: Vec<(f64, f64)> = engine.particles.iter().map(|p| (p.x, p.y)).collect();
	engine.tick(1_000.0);
	let after: Vec<(f64, f64)> = engine.particles.iter().map(|p| (p.x, p.y)).collect();
	assert_eq!(positions, after);
	assert_eq!(engine.time, 0.0);

	engine.start();
	engine.tick(2_000.0);
	assert!(engine.time > 0.0);
}
