//! Starfield simulation state.
//!
//! [`GalaxyEngine`] owns the particle collection and advances it one step per
//! animation frame. It is deliberately free of any DOM types: the host
//! component feeds it surface dimensions, pointer coordinates, theme changes,
//! and scroll notifications through its public lifecycle methods, and the
//! renderer reads it back each frame. Seeded RNG keeps the simulation
//! deterministic under test.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::{GalaxyConfig, ViewportClass};
use super::particle::Particle;
use super::theme::{Theme, ThemeMode};

/// Engine-local time advance per simulation step.
const TIME_STEP: f64 = 0.01;

/// Owns and animates the star particles for one canvas.
pub struct GalaxyEngine {
	/// The live particle collection. Regenerated wholesale on resize, grown
	/// by click bursts, shrunk by the population cap.
	pub particles: Vec<Particle>,
	pub config: GalaxyConfig,
	/// Active visual theme, swapped by [`GalaxyEngine::set_theme`].
	pub theme: Theme,
	/// Surface size in CSS pixels.
	pub width: f64,
	pub height: f64,
	/// Last pointer position in surface-local coordinates.
	pub pointer: (f64, f64),
	/// Monotonic simulation time, advanced [`TIME_STEP`] per update.
	pub time: f64,
	/// Gates the update step; rendering is the host's concern.
	pub running: bool,
	viewport: ViewportClass,
	scrolling: bool,
	last_update_ms: f64,
	rng: ChaCha8Rng,
}

impl GalaxyEngine {
	/// Build an engine and populate it at the configured density.
	pub fn new(
		config: GalaxyConfig,
		mode: ThemeMode,
		width: f64,
		height: f64,
		viewport: ViewportClass,
		seed: u64,
	) -> Self {
		let mut engine = Self {
			particles: Vec::new(),
			config,
			theme: Theme::for_mode(mode),
			width,
			height,
			pointer: (0.0, 0.0),
			time: 0.0,
			running: true,
			viewport,
			scrolling: false,
			last_update_ms: 0.0,
			rng: ChaCha8Rng::seed_from_u64(seed),
		};
		engine.populate();
		engine
	}

	/// Particle count the current surface and viewport class call for.
	pub fn target_population(&self) -> usize {
		let divisor = self.config.density.divisor_for(self.viewport);
		(self.width * self.height / divisor).floor() as usize
	}

	/// Resume the update step.
	pub fn start(&mut self) {
		self.running = true;
	}

	/// Pause the update step; particles hold their current state.
	pub fn stop(&mut self) {
		self.running = false;
	}

	/// Adopt new surface dimensions and regenerate the whole population at
	/// the new density. Old particles are discarded, not rescaled.
	pub fn resize(&mut self, width: f64, height: f64, viewport: ViewportClass) {
		self.width = width;
		self.height = height;
		self.viewport = viewport;
		self.populate();
	}

	/// Switch palettes, re-drawing every particle's color and rest opacity.
	/// Positions, velocities, and twinkle phases are preserved.
	pub fn set_theme(&mut self, mode: ThemeMode) {
		if self.theme.mode == mode {
			return;
		}
		self.theme = Theme::for_mode(mode);
		for p in &mut self.particles {
			p.recolor(&mut self.rng, &self.theme);
		}
	}

	/// Record the pointer position in surface-local coordinates.
	pub fn pointer_moved(&mut self, x: f64, y: f64) {
		self.pointer = (x, y);
	}

	/// Append a burst of particles clustered around the pointer.
	pub fn pointer_clicked(&mut self) {
		let burst = self.config.burst;
		let motion = self.config.motion;
		for _ in 0..burst.count {
			let mut p = Particle::spawn(&mut self.rng, self.width, self.height, &motion, &self.theme);
			p.x = self.pointer.0 + (self.rng.random::<f64>() - 0.5) * burst.spread;
			p.y = self.pointer.1 + (self.rng.random::<f64>() - 0.5) * burst.spread;
			self.particles.push(p);
		}
	}

	/// Host signal that continuous scroll input is (or stopped) happening.
	/// While set, updates are throttled to the configured interval.
	pub fn set_scrolling(&mut self, scrolling: bool) {
		self.scrolling = scrolling;
	}

	/// Advance the simulation one frame, given the current wall clock in ms.
	///
	/// Skipped entirely while stopped. While scrolling, an update closer than
	/// the throttle interval to the previous one is skipped; the host keeps
	/// rendering the unchanged state in between.
	pub fn tick(&mut self, now_ms: f64) {
		if !self.running {
			return;
		}
		if self.scrolling && now_ms - self.last_update_ms < self.config.scroll_throttle_ms {
			return;
		}
		self.last_update_ms = now_ms;

		self.time += TIME_STEP;
		self.update_particles();
		self.enforce_population_cap();
	}

	fn populate(&mut self) {
		let count = self.target_population();
		let motion = self.config.motion;
		self.particles.clear();
		self.particles.reserve(count);
		for _ in 0..count {
			self.particles.push(Particle::spawn(
				&mut self.rng,
				self.width,
				self.height,
				&motion,
				&self.theme,
			));
		}
	}

	fn update_particles(&mut self) {
		let motion = self.config.motion;
		let (width, height) = (self.width, self.height);

		for p in &mut self.particles {
			// Gentle drift plus atmospheric shimmer.
			p.x += p.vx + (self.rng.random::<f64>() - 0.5) * motion.jitter;
			p.y += p.vy + (self.rng.random::<f64>() - 0.5) * motion.jitter;

			// Twinkle: opacity oscillates around the rest value, and the
			// radius breathes on a slower secondary sinusoid.
			p.twinkle_phase += p.twinkle_speed;
			p.current_opacity = p.base_opacity * (p.twinkle_phase.sin() * 0.3 + 0.7);
			p.radius = p.base_radius * p.tier().radius_pulse(p.twinkle_phase);

			// Toroidal wrap just past the surface edges.
			let margin = motion.wrap_margin;
			if p.x < -margin {
				p.x = width + margin;
			} else if p.x > width + margin {
				p.x = -margin;
			}
			if p.y < -margin {
				p.y = height + margin;
			} else if p.y > height + margin {
				p.y = -margin;
			}

			// Occasionally nudge the drift direction, renormalizing so the
			// field never picks up runaway speed.
			if self.rng.random::<f64>() < motion.turn_probability {
				p.vx += (self.rng.random::<f64>() - 0.5) * motion.turn_strength;
				p.vy += (self.rng.random::<f64>() - 0.5) * motion.turn_strength;
				let speed = (p.vx * p.vx + p.vy * p.vy).sqrt();
				if speed > motion.speed_cap {
					p.vx = p.vx / speed * motion.speed_cap;
					p.vy = p.vy / speed * motion.speed_cap;
				}
			}
		}
	}

	fn enforce_population_cap(&mut self) {
		let Some(max) = self.config.population.max else {
			return;
		};
		if self.particles.len() > max
			&& self.rng.random::<f64>() < self.config.population.cull_probability
		{
			let idx = self.rng.random_range(0..self.particles.len());
			self.particles.swap_remove(idx);
		}
	}
}
