//! Copy-to-clipboard button for code blocks.
//!
//! Writes its payload through the async clipboard API and swaps the button
//! label to a success message that reverts after a configurable duration.
//! When the clipboard write rejects, a legacy selection-based fallback copies
//! through a transient off-screen textarea. A double failure is only logged;
//! the absence of the success label is the sole failure signal.

use std::time::Duration;

use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

/// Button label while idle.
const DEFAULT_LABEL: &str = "Copy";

/// A button that copies a text payload to the clipboard.
///
/// The payload is the explicit `code` prop when given, otherwise the text
/// content scraped from the `source` code element.
#[component]
pub fn CopyButton(
	#[prop(optional, into)] code: Option<String>,
	#[prop(optional)] source: Option<NodeRef<leptos::html::Code>>,
	#[prop(default = "Copied!".into(), into)] success_message: String,
	#[prop(default = 2000)] success_duration_ms: u64,
) -> impl IntoView {
	let label = RwSignal::new(DEFAULT_LABEL.to_string());

	let on_click = move |_| {
		let payload = code
			.clone()
			.or_else(|| scrape_source(source))
			.unwrap_or_default();
		let success_message = success_message.clone();

		spawn_local(async move {
			let show_success = move || {
				label.set(success_message);
				set_timeout(
					move || label.set(DEFAULT_LABEL.to_string()),
					Duration::from_millis(success_duration_ms),
				);
			};

			let clipboard = web_sys::window().unwrap().navigator().clipboard();
			match JsFuture::from(clipboard.write_text(&payload)).await {
				Ok(_) => show_success(),
				Err(_) => {
					// Clipboard API unavailable or permission denied; try the
					// legacy selection-based path.
					if fallback_copy(&payload) {
						show_success();
					} else {
						warn!("copy: clipboard write and selection fallback both failed");
					}
				}
			}
		});
	};

	view! {
		<button class="copy-button" on:click=on_click>
			{move || label.get()}
		</button>
	}
}

fn scrape_source(source: Option<NodeRef<leptos::html::Code>>) -> Option<String> {
	source?.get()?.text_content()
}

/// Selection-based copy through a transient off-screen textarea.
fn fallback_copy(text: &str) -> bool {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return false;
	};
	let Some(body) = document.body() else {
		return false;
	};
	let Ok(element) = document.create_element("textarea") else {
		return false;
	};
	let Ok(textarea) = element.dyn_into::<HtmlTextAreaElement>() else {
		return false;
	};

	textarea.set_value(text);
	// Park it off-screen so the selection never flashes visibly.
	let style = web_sys::HtmlElement::style(&textarea);
	let _ = style.set_property("position", "fixed");
	let _ = style.set_property("left", "-9999px");
	let _ = style.set_property("top", "-9999px");

	if body.append_child(&textarea).is_err() {
		return false;
	}
	let _ = textarea.focus();
	textarea.select();
	let copied = document
		.clone()
		.dyn_into::<HtmlDocument>()
		.ok()
		.and_then(|doc| doc.exec_command("copy").ok())
		.unwrap_or(false);
	let _ = body.remove_child(&textarea);
	copied
}
