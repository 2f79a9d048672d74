//! Leptos component wrapping the starfield canvas.
//!
//! The component creates the canvas element, sizes it to its container with
//! device-pixel-ratio scaling, and wires up the DOM: mouse handlers feed the
//! engine pointer state, window listeners drive resize regeneration and
//! scroll throttling, and a reactive effect forwards the host's theme signal.
//! An animation loop runs via `requestAnimationFrame`, ticking the simulation
//! and rendering each frame; teardown cancels the pending frame and removes
//! every listener.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use leptos::leptos_dom::helpers::{TimeoutHandle, set_timeout_with_handle};
use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::config::{GalaxyConfig, GalaxyOptions, ViewportClass};
use super::engine::GalaxyEngine;
use super::render;
use super::theme::ThemeMode;

/// Quiet period after the last scroll event before updates resume full rate.
const SCROLL_SETTLE_MS: u64 = 100;

/// Renders an animated galaxy starfield on a canvas element.
///
/// The host owns the theme: pass a reactive `mode` signal and the engine is
/// recolored on every flip. The component sizes itself to its parent
/// container by default; set `fullscreen = true` to fill the viewport.
/// Runtime tuning comes in through `options`.
#[component]
pub fn GalaxyCanvas(
	#[prop(into)] mode: Signal<ThemeMode>,
	#[prop(default = None)] options: Option<GalaxyOptions>,
	#[prop(default = false)] fullscreen: bool,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let engine: Rc<RefCell<Option<GalaxyEngine>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let scroll_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let scroll_timeout: Rc<Cell<Option<TimeoutHandle>>> = Rc::new(Cell::new(None));
	let (engine_init, animate_init, resize_cb_init, scroll_cb_init) = (
		engine.clone(),
		animate.clone(),
		resize_cb.clone(),
		scroll_cb.clone(),
	);
	let (raf_init, scroll_timeout_init) = (raf_id.clone(), scroll_timeout.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (width, height, viewport) = apply_surface_size(&canvas, &window, fullscreen);
		let Some(ctx) = context_2d(&canvas) else {
			warn!("galaxy: canvas has no 2d context, animation disabled");
			return;
		};

		let options = options.unwrap_or_default();
		let seed = options.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
		*engine_init.borrow_mut() = Some(GalaxyEngine::new(
			GalaxyConfig::from(options),
			mode.get_untracked(),
			width,
			height,
			viewport,
			seed,
		));

		let (engine_resize, canvas_resize) = (engine_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			let (nw, nh, class) = apply_surface_size(&canvas_resize, &win, fullscreen);
			if let Some(ref mut engine) = *engine_resize.borrow_mut() {
				engine.resize(nw, nh, class);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (engine_scroll, settle_timeout) = (engine_init.clone(), scroll_timeout_init.clone());
		*scroll_cb_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut engine) = *engine_scroll.borrow_mut() {
				engine.set_scrolling(true);
			}
			// Debounce: keep pushing the settle point out while scrolling.
			if let Some(handle) = settle_timeout.take() {
				handle.clear();
			}
			let engine_settled = engine_scroll.clone();
			if let Ok(handle) = set_timeout_with_handle(
				move || {
					if let Some(ref mut engine) = *engine_settled.borrow_mut() {
						engine.set_scrolling(false);
					}
				},
				Duration::from_millis(SCROLL_SETTLE_MS),
			) {
				settle_timeout.set(Some(handle));
			}
		}));
		if let Some(ref cb) = *scroll_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
		}

		let (engine_anim, animate_inner, raf_anim) =
			(engine_init.clone(), animate_init.clone(), raf_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut engine) = *engine_anim.borrow_mut() {
				engine.tick(js_sys::Date::now());
				render::render(engine, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Ok(id) = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref())
				{
					raf_anim.set(Some(id));
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				raf_init.set(Some(id));
			}
		}
	});

	let engine_theme = engine.clone();
	Effect::new(move |_| {
		let mode = mode.get();
		if let Some(ref mut engine) = *engine_theme.borrow_mut() {
			engine.set_theme(mode);
		}
	});

	let engine_mm = engine.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		if let Some(ref mut engine) = *engine_mm.borrow_mut() {
			engine.pointer_moved(
				ev.client_x() as f64 - rect.left(),
				ev.client_y() as f64 - rect.top(),
			);
		}
	};

	let engine_click = engine.clone();
	let on_click = move |_: MouseEvent| {
		if let Some(ref mut engine) = *engine_click.borrow_mut() {
			engine.pointer_clicked();
		}
	};

	let engine_cleanup = engine.clone();
	on_cleanup(move || {
		if let Some(id) = raf_id.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
		if let Some(handle) = scroll_timeout.take() {
			handle.clear();
		}
		if let Some(window) = web_sys::window() {
			if let Some(ref cb) = *resize_cb.borrow() {
				let _ = window
					.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
			if let Some(ref cb) = *scroll_cb.borrow() {
				let _ = window
					.remove_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
			}
		}
		*animate.borrow_mut() = None;
		*resize_cb.borrow_mut() = None;
		*scroll_cb.borrow_mut() = None;
		if let Some(ref mut engine) = *engine_cleanup.borrow_mut() {
			engine.stop();
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="galaxy-canvas"
			on:mousemove=on_mousemove
			on:click=on_click
			style="display: block;"
		/>
	}
}

/// Size the canvas backing store to its container (or the viewport when
/// fullscreen) and apply device-pixel-ratio scaling so strokes stay crisp.
/// Returns the surface size in CSS pixels and the viewport class.
fn apply_surface_size(
	canvas: &HtmlCanvasElement,
	window: &Window,
	fullscreen: bool,
) -> (f64, f64, ViewportClass) {
	let viewport_width = window.inner_width().unwrap().as_f64().unwrap();
	let viewport_height = window.inner_height().unwrap().as_f64().unwrap();
	let class = ViewportClass::from_width(viewport_width);

	let (mut width, height) = if fullscreen {
		(viewport_width, viewport_height)
	} else {
		(
			canvas
				.parent_element()
				.map(|p| p.client_width() as f64)
				.unwrap_or(800.0),
			canvas
				.parent_element()
				.map(|p| p.client_height() as f64)
				.unwrap_or(600.0),
		)
	};
	// Containers can overflow narrow viewports; the surface never should.
	if class == ViewportClass::Mobile {
		width = width.min(viewport_width);
	}

	let dpr = window.device_pixel_ratio().max(1.0);
	canvas.set_width((width * dpr) as u32);
	canvas.set_height((height * dpr) as u32);

	// Setting the backing size reset the context transform; re-apply the
	// pixel-ratio scale and pin the CSS size.
	if let Some(ctx) = context_2d(canvas) {
		let _ = ctx.scale(dpr, dpr);
	}
	let style = web_sys::HtmlElement::style(canvas);
	let _ = style.set_property("width", &format!("{width}px"));
	let _ = style.set_property("height", &format!("{height}px"));

	(width, height, class)
}

/// The canvas's 2d drawing context, if the surface provides one.
fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into().ok())
}
