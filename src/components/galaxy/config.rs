//! Engine configuration for the starfield.
//!
//! This module centralizes every tunable the simulation and renderer read,
//! grouped by concern, so the recorded behaviors are all reachable by
//! configuration: the constellation overlay and population cap are gated
//! here, and the density divisors select the particle count per viewport
//! class.

use serde::Deserialize;

/// Viewport class used to pick the particle density divisor.
///
/// Narrow viewports get a larger divisor (fewer particles) so the per-frame
/// cost stays bounded on phones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
	Desktop,
	Mobile,
}

/// Widest viewport (CSS pixels) still classified as mobile.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

impl ViewportClass {
	/// Classify a viewport by its width in CSS pixels.
	pub fn from_width(width: f64) -> Self {
		if width <= MOBILE_BREAKPOINT {
			Self::Mobile
		} else {
			Self::Desktop
		}
	}
}

/// Particle population density: one particle per `divisor` square pixels.
#[derive(Clone, Copy, Debug)]
pub struct DensityConfig {
	pub desktop_divisor: f64,
	pub mobile_divisor: f64,
}

impl DensityConfig {
	pub fn divisor_for(&self, class: ViewportClass) -> f64 {
		match class {
			ViewportClass::Desktop => self.desktop_divisor,
			ViewportClass::Mobile => self.mobile_divisor,
		}
	}
}

/// Drift and shimmer motion parameters.
#[derive(Clone, Copy, Debug)]
pub struct MotionConfig {
	/// Base drift speed scale at creation (px/frame).
	pub drift_speed: f64,
	/// Span of the uniform per-axis positional jitter added each frame.
	pub jitter: f64,
	/// Maximum drift speed after a direction change (px/frame).
	pub speed_cap: f64,
	/// Per-particle per-frame probability of a small direction change.
	pub turn_probability: f64,
	/// Span of the uniform per-axis velocity nudge on a direction change.
	pub turn_strength: f64,
	/// How far past an edge a particle may drift before wrapping (px).
	pub wrap_margin: f64,
}

/// Click-burst parameters.
#[derive(Clone, Copy, Debug)]
pub struct BurstConfig {
	/// Particles appended per click.
	pub count: usize,
	/// Side length of the jitter box centered on the pointer (px).
	pub spread: f64,
}

/// Constellation overlay: line segments between nearby particles and from
/// particles to the pointer. O(n²) over the population, so it is gated off
/// by default.
#[derive(Clone, Copy, Debug)]
pub struct ConnectionConfig {
	pub enabled: bool,
	/// Maximum particle-to-particle segment length (px).
	pub max_distance: f64,
	/// Maximum particle-to-pointer segment length (px).
	pub pointer_distance: f64,
}

/// Population ceiling for click-grown fields.
#[derive(Clone, Copy, Debug)]
pub struct PopulationConfig {
	/// Hard ceiling; `None` lets clicks grow the field without bound.
	pub max: Option<usize>,
	/// Chance per tick of culling one random particle while over the ceiling.
	pub cull_probability: f64,
}

/// Complete engine configuration.
#[derive(Clone, Copy, Debug)]
pub struct GalaxyConfig {
	pub density: DensityConfig,
	pub motion: MotionConfig,
	pub burst: BurstConfig,
	pub connection: ConnectionConfig,
	pub population: PopulationConfig,
	/// Minimum interval between simulation updates while the host reports
	/// continuous scrolling (ms). Frames keep rendering in between.
	pub scroll_throttle_ms: f64,
}

impl Default for GalaxyConfig {
	fn default() -> Self {
		Self {
			density: DensityConfig {
				desktop_divisor: 8000.0,
				mobile_divisor: 12000.0,
			},
			motion: MotionConfig {
				drift_speed: 0.1,
				jitter: 0.05,
				speed_cap: 0.2,
				turn_probability: 0.001,
				turn_strength: 0.02,
				wrap_margin: 10.0,
			},
			burst: BurstConfig {
				count: 3,
				spread: 100.0,
			},
			connection: ConnectionConfig {
				enabled: false,
				max_distance: 150.0,
				pointer_distance: 100.0,
			},
			population: PopulationConfig {
				max: Some(200),
				cull_probability: 0.1,
			},
			scroll_throttle_ms: 100.0,
		}
	}
}

/// Host-tunable options, read from a JSON script element at startup.
/// Every field is defaulted so a partial (or absent) payload is fine.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct GalaxyOptions {
	/// Square pixels per particle on desktop viewports.
	pub density_desktop: f64,
	/// Square pixels per particle on mobile viewports.
	pub density_mobile: f64,
	/// Draw the constellation overlay.
	pub connections: bool,
	/// Population ceiling; `None` disables culling.
	pub max_particles: Option<usize>,
	/// Particles appended per click.
	pub burst_count: usize,
	/// Fixed RNG seed; `None` seeds from the clock.
	pub seed: Option<u64>,
}

impl Default for GalaxyOptions {
	fn default() -> Self {
		let config = GalaxyConfig::default();
		Self {
			density_desktop: config.density.desktop_divisor,
			density_mobile: config.density.mobile_divisor,
			connections: config.connection.enabled,
			max_particles: config.population.max,
			burst_count: config.burst.count,
			seed: None,
		}
	}
}

impl From<GalaxyOptions> for GalaxyConfig {
	fn from(options: GalaxyOptions) -> Self {
		let mut config = Self::default();
		config.density.desktop_divisor = options.density_desktop;
		config.density.mobile_divisor = options.density_mobile;
		config.connection.enabled = options.connections;
		config.population.max = options.max_particles;
		config.burst.count = options.burst_count;
		config
	}
}
