//! Star particles and their fixed classification tiers.

use std::f64::consts::TAU;

use rand::Rng;

use super::config::MotionConfig;
use super::theme::{Color, Theme};

/// Span of the uniform per-particle twinkle-speed jitter.
const TWINKLE_SPEED_JITTER: f64 = 0.01;

/// Fixed visual class of a star, drawn once at creation.
///
/// The tier sets the rest size and opacity ranges, the twinkle rate, the
/// strength of the size pulse, and whether the star gets a glow and a white
/// core when drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarTier {
	/// Top 10%: largest, strongest glow and pulse.
	Bright,
	/// Next 20%: moderate glow, white core, gentle pulse.
	Medium,
	/// Remaining 70%: small and faint.
	Dim,
}

impl StarTier {
	/// Classify a `star_type` sample in `[0, 1)`.
	pub fn classify(star_type: f64) -> Self {
		if star_type < 0.1 {
			Self::Bright
		} else if star_type < 0.3 {
			Self::Medium
		} else {
			Self::Dim
		}
	}

	/// Rest radius for a `brightness` sample in `[0, 1)`.
	pub fn base_radius(self, brightness: f64) -> f64 {
		match self {
			Self::Bright => brightness * 2.5 + 1.5,
			Self::Medium => brightness * 1.5 + 0.8,
			Self::Dim => brightness * 0.8 + 0.3,
		}
	}

	/// Phase advance per frame before per-particle jitter.
	pub fn twinkle_speed(self) -> f64 {
		match self {
			Self::Bright => 0.03,
			Self::Medium => 0.02,
			Self::Dim => 0.015,
		}
	}

	/// Radius multiplier for the current twinkle phase. Bright stars pulse
	/// visibly (±30%), the rest barely breathe (±10%).
	pub fn radius_pulse(self, phase: f64) -> f64 {
		match self {
			Self::Bright => (phase * 0.7).sin() * 0.3 + 1.0,
			_ => (phase * 0.5).sin() * 0.1 + 1.0,
		}
	}

	/// Whether this tier is drawn with a solid white core overlay.
	pub fn has_core(self) -> bool {
		matches!(self, Self::Bright | Self::Medium)
	}
}

/// A single animated star.
///
/// `brightness` and `star_type` are fixed for the particle's lifetime;
/// everything else mutates every frame.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub base_radius: f64,
	pub color: Color,
	pub base_opacity: f64,
	pub current_opacity: f64,
	pub twinkle_phase: f64,
	pub twinkle_speed: f64,
	pub brightness: f64,
	pub star_type: f64,
}

impl Particle {
	/// Create a star at a uniform position within `width` × `height`.
	pub fn spawn(
		rng: &mut impl Rng,
		width: f64,
		height: f64,
		motion: &MotionConfig,
		theme: &Theme,
	) -> Self {
		let x = rng.random::<f64>() * width;
		let y = rng.random::<f64>() * height;

		// Gentle drift in a random direction, well under the speed cap.
		let angle = rng.random::<f64>() * TAU;
		let vx = angle.cos() * motion.drift_speed * (rng.random::<f64>() - 0.5);
		let vy = angle.sin() * motion.drift_speed * (rng.random::<f64>() - 0.5);

		let brightness = rng.random::<f64>();
		let star_type = rng.random::<f64>();
		let tier = StarTier::classify(star_type);

		let base_radius = tier.base_radius(brightness);
		let twinkle_speed =
			tier.twinkle_speed() + (rng.random::<f64>() - 0.5) * TWINKLE_SPEED_JITTER;
		let base_opacity = Self::rest_opacity(rng, tier, theme);

		Self {
			x,
			y,
			vx,
			vy,
			radius: base_radius,
			base_radius,
			color: theme.palette.get(rng.random_range(0..theme.palette.len())),
			base_opacity,
			current_opacity: base_opacity,
			twinkle_phase: rng.random::<f64>() * TAU,
			twinkle_speed,
			brightness,
			star_type,
		}
	}

	/// Re-draw color and opacity from a new theme, keeping position,
	/// velocity, and twinkle state.
	pub fn recolor(&mut self, rng: &mut impl Rng, theme: &Theme) {
		self.color = theme.palette.get(rng.random_range(0..theme.palette.len()));
		self.base_opacity = Self::rest_opacity(rng, self.tier(), theme);
		self.current_opacity = self.base_opacity;
	}

	pub fn tier(&self) -> StarTier {
		StarTier::classify(self.star_type)
	}

	fn rest_opacity(rng: &mut impl Rng, tier: StarTier, theme: &Theme) -> f64 {
		let rest = match tier {
			StarTier::Bright => theme.opacity.bright,
			StarTier::Medium => theme.opacity.medium,
			StarTier::Dim => theme.opacity.dim,
		};
		if theme.opacity.jitter {
			rest * (0.7 + rng.random::<f64>() * 0.3)
		} else {
			rest
		}
	}
}
