//! galaxy-canvas: animated starfield background for a marketing site.
//!
//! This crate provides a WASM-based canvas component that renders a field of
//! twinkling star particles with pointer interaction, viewport-aware density,
//! and light/dark theming, plus a copy-to-clipboard button for code blocks.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::copy_button::CopyButton;
pub use components::galaxy::{GalaxyCanvas, GalaxyEngine, GalaxyOptions, ThemeMode};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("galaxy-canvas: logging initialized");
}

/// Load runtime options from a script element with id="galaxy-options".
/// Expected format: JSON matching [`GalaxyOptions`]. A missing element or a
/// malformed payload falls back to the built-in defaults.
fn load_options() -> Option<GalaxyOptions> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("galaxy-options")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<GalaxyOptions>(&json_text) {
		Ok(options) => {
			info!("galaxy-canvas: loaded options {:?}", options);
			Some(options)
		}
		Err(e) => {
			warn!("galaxy-canvas: failed to parse options: {}", e);
			None
		}
	}
}

/// Main application component.
/// Owns the theme signal and composes the starfield with the page overlay.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let options = load_options().unwrap_or_default();
	let mode = RwSignal::new(ThemeMode::Dark);

	let toggle_label = move || match mode.get() {
		ThemeMode::Dark => "Switch to light",
		ThemeMode::Light => "Switch to dark",
	};
	let toggle = move |_| {
		mode.update(|m| {
			*m = match m {
				ThemeMode::Dark => ThemeMode::Light,
				ThemeMode::Light => ThemeMode::Dark,
			}
		})
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Galaxy" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-galaxy">
			<GalaxyCanvas mode=mode options=Some(options) fullscreen=true />
			<div class="galaxy-overlay">
				<h1>"Galaxy"</h1>
				<p class="subtitle">"Move the pointer to stir the sky. Click to add stars."</p>
				<pre><code>"cargo install galaxy-canvas"</code></pre>
				<CopyButton code="cargo install galaxy-canvas".to_string() />
				<button class="theme-toggle" on:click=toggle>
					{toggle_label}
				</button>
			</div>
		</div>
	}
}
