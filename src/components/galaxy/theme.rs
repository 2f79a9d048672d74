//! Visual theming for the starfield.
//!
//! Provides the light/dark color palettes, per-tier opacity ranges, glow
//! strengths, and connection-line styles. The active [`Theme`] is derived
//! from a [`ThemeMode`] injected by the host; nothing here inspects the
//! document.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Light or dark rendering mode, injected by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
	Light,
	Dark,
}

/// Star color palette for one theme mode.
#[derive(Clone, Debug)]
pub struct Palette {
	pub colors: Vec<Color>,
}

impl Palette {
	/// Night sky: whites and slate tints with two golden accents.
	pub fn dark() -> Self {
		Self {
			colors: vec![
				Color::rgb(0xff, 0xff, 0xff), // White
				Color::rgb(0xf8, 0xfa, 0xfc), // Snow
				Color::rgb(0xe2, 0xe8, 0xf0), // Pale slate
				Color::rgb(0xcb, 0xd5, 0xe1), // Slate
				Color::rgb(0xfb, 0xbf, 0x24), // Amber
				Color::rgb(0xfd, 0xe0, 0x47), // Gold
			],
		}
	}

	/// Daylight sky: saturated violets, pinks, and warm accents that stay
	/// visible on a bright background.
	pub fn light() -> Self {
		Self {
			colors: vec![
				Color::rgb(0x7c, 0x3a, 0xed), // Violet
				Color::rgb(0xec, 0x48, 0x99), // Pink
				Color::rgb(0xf5, 0x9e, 0x0b), // Amber
				Color::rgb(0xef, 0x44, 0x44), // Red
				Color::rgb(0x8b, 0x5c, 0xf6), // Lavender
				Color::rgb(0xd9, 0x46, 0xef), // Fuchsia
			],
		}
	}

	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	/// Whether `color` is one of this palette's entries.
	pub fn contains(&self, color: Color) -> bool {
		self.colors.iter().any(|c| *c == color)
	}
}

/// Rest opacity per star tier, plus whether creation jitters it.
#[derive(Clone, Copy, Debug)]
pub struct OpacityStyle {
	pub bright: f64,
	pub medium: f64,
	pub dim: f64,
	/// Scale the rest opacity by a random factor in [0.7, 1.0] at creation.
	/// Dark mode only; daylight stars keep their full rest opacity.
	pub jitter: bool,
}

/// Shadow-blur multipliers per star tier (applied to the current radius).
/// A multiplier of 0 disables the glow for that tier.
#[derive(Clone, Copy, Debug)]
pub struct GlowStyle {
	pub bright: f64,
	pub medium: f64,
	pub dim: f64,
}

/// Connection-line style for the constellation overlay.
#[derive(Clone, Copy, Debug)]
pub struct ConnectionStyle {
	pub color: Color,
	/// Peak alpha for particle-to-particle segments (fades with distance).
	pub pair_alpha: f64,
	/// Peak alpha for particle-to-pointer segments.
	pub pointer_alpha: f64,
	pub pair_width: f64,
	pub pointer_width: f64,
}

/// Complete visual theme for one mode.
#[derive(Clone, Debug)]
pub struct Theme {
	pub mode: ThemeMode,
	pub palette: Palette,
	pub opacity: OpacityStyle,
	pub glow: GlowStyle,
	pub connection: ConnectionStyle,
}

impl Theme {
	pub fn dark() -> Self {
		Self {
			mode: ThemeMode::Dark,
			palette: Palette::dark(),
			opacity: OpacityStyle {
				bright: 0.9,
				medium: 0.7,
				dim: 0.4,
				jitter: true,
			},
			glow: GlowStyle {
				bright: 4.0,
				medium: 2.0,
				dim: 0.0,
			},
			connection: ConnectionStyle {
				color: Color::rgb(0xa8, 0x55, 0xf7),
				pair_alpha: 0.2,
				pointer_alpha: 0.3,
				pair_width: 0.5,
				pointer_width: 1.0,
			},
		}
	}

	/// Light mode glows every tier so stars stay visible on a bright page.
	pub fn light() -> Self {
		Self {
			mode: ThemeMode::Light,
			palette: Palette::light(),
			opacity: OpacityStyle {
				bright: 1.0,
				medium: 1.0,
				dim: 0.9,
				jitter: false,
			},
			glow: GlowStyle {
				bright: 6.0,
				medium: 4.0,
				dim: 3.0,
			},
			connection: ConnectionStyle {
				color: Color::rgb(0x7c, 0x3a, 0xed),
				pair_alpha: 0.4,
				pointer_alpha: 0.6,
				pair_width: 1.0,
				pointer_width: 1.5,
			},
		}
	}

	pub fn for_mode(mode: ThemeMode) -> Self {
		match mode {
			ThemeMode::Dark => Self::dark(),
			ThemeMode::Light => Self::light(),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::dark()
	}
}
