//! Canvas rendering for the starfield.
//!
//! One pass per frame, after the simulation update: clear the surface, draw
//! the constellation overlay when enabled (beneath the stars), then draw the
//! stars sorted by ascending brightness so the brightest paint on top.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::engine::GalaxyEngine;
use super::particle::{Particle, StarTier};

/// Renders the complete frame to the canvas.
pub fn render(engine: &GalaxyEngine, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, engine.width, engine.height);

	if engine.config.connection.enabled {
		draw_connections(engine, ctx);
	}

	draw_particles(engine, ctx);
}

fn draw_connections(engine: &GalaxyEngine, ctx: &CanvasRenderingContext2d) {
	let style = engine.theme.connection;
	let max_distance = engine.config.connection.max_distance;
	let pointer_distance = engine.config.connection.pointer_distance;
	let (px, py) = engine.pointer;
	let color = style.color.to_css();

	ctx.save();
	ctx.set_stroke_style_str(&color);

	// Particle-to-particle segments, faded with distance. O(n²), which the
	// density divisors keep tractable.
	for (i, p) in engine.particles.iter().enumerate() {
		for other in &engine.particles[i + 1..] {
			let (dx, dy) = (p.x - other.x, p.y - other.y);
			let distance = (dx * dx + dy * dy).sqrt();
			if distance < max_distance {
				ctx.set_global_alpha((1.0 - distance / max_distance) * style.pair_alpha);
				ctx.set_line_width(style.pair_width);
				ctx.begin_path();
				ctx.move_to(p.x, p.y);
				ctx.line_to(other.x, other.y);
				ctx.stroke();
			}
		}

		// Particle-to-pointer segment, tighter radius and stronger line.
		let (dx, dy) = (p.x - px, p.y - py);
		let distance = (dx * dx + dy * dy).sqrt();
		if distance < pointer_distance {
			ctx.set_global_alpha((1.0 - distance / pointer_distance) * style.pointer_alpha);
			ctx.set_line_width(style.pointer_width);
			ctx.begin_path();
			ctx.move_to(p.x, p.y);
			ctx.line_to(px, py);
			ctx.stroke();
		}
	}

	ctx.restore();
}

fn draw_particles(engine: &GalaxyEngine, ctx: &CanvasRenderingContext2d) {
	// Brightest stars paint last, on top.
	let mut order: Vec<&Particle> = engine.particles.iter().collect();
	order.sort_by(|a, b| a.brightness.total_cmp(&b.brightness));

	for p in order {
		ctx.save();

		let blur_mult = match p.tier() {
			StarTier::Bright => engine.theme.glow.bright,
			StarTier::Medium => engine.theme.glow.medium,
			StarTier::Dim => engine.theme.glow.dim,
		};
		if blur_mult > 0.0 {
			ctx.set_shadow_color(&p.color.to_css());
			ctx.set_shadow_blur(p.radius * blur_mult);
			ctx.set_shadow_offset_x(0.0);
			ctx.set_shadow_offset_y(0.0);
		}

		ctx.set_global_alpha(p.current_opacity);
		ctx.set_fill_style_str(&p.color.to_css());
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius, 0.0, PI * 2.0);
		ctx.fill();

		// Solid white core on the prominent tiers.
		if p.tier().has_core() {
			ctx.set_global_alpha(p.current_opacity * 0.8);
			ctx.set_fill_style_str("#ffffff");
			ctx.begin_path();
			let _ = ctx.arc(p.x, p.y, p.radius * 0.4, 0.0, PI * 2.0);
			ctx.fill();
		}

		ctx.restore();
	}
}
