//! Animated galaxy starfield background.
//!
//! Renders a field of twinkling star particles on an HTML canvas with:
//! - Population scaled to surface area, per viewport class
//! - Three fixed star tiers with distinct size, glow, and twinkle behavior
//! - Pointer interaction: click bursts and an optional constellation overlay
//! - Light/dark theming injected by the host
//!
//! # Example
//!
//! ```ignore
//! use galaxy_canvas::{GalaxyCanvas, ThemeMode};
//!
//! let mode = RwSignal::new(ThemeMode::Dark);
//!
//! view! { <GalaxyCanvas mode=mode fullscreen=true /> }
//! ```

mod component;
pub mod config;
mod engine;
mod particle;
mod render;
pub mod theme;

pub use component::GalaxyCanvas;
pub use config::{GalaxyConfig, GalaxyOptions, ViewportClass};
pub use engine::GalaxyEngine;
pub use particle::{Particle, StarTier};
pub use theme::{Theme, ThemeMode};

#[cfg(test)]
mod config_test;
#[cfg(test)]
mod engine_test;
#[cfg(test)]
mod theme_test;
