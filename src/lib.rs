//! little-whispers: interactive page effects for the Little Whispers band site.
//!
//! This crate is the WASM interactive layer of the promotional page:
//! scroll-driven header and navigation states, viewport reveal animations,
//! a tagline typewriter, an ambient particle field, and assorted pointer
//! effects. The markup and styling ship with the page; the crate only
//! attaches behavior, and skips any feature whose element is missing.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

// Pulled in for rand's wasm entropy; never referenced directly.
use getrandom as _;

pub mod components;

pub use components::page_effects::{EffectsConfig, PageConfig, PageEffects};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("little-whispers: logging initialized");
}

/// Load page configuration from a script element with id="fx-config".
/// Expected format: JSON with { release_epoch_ms, seed }, all optional.
fn load_page_config() -> Option<PageConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("fx-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<PageConfig>(&json_text) {
		Ok(config) => {
			info!("little-whispers: loaded page config");
			Some(config)
		}
		Err(e) => {
			warn!("little-whispers: failed to parse page config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Reads optional page config from the DOM and mounts the effects layer.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let page = load_page_config().unwrap_or_default();

	view! {
		<Title text="Little Whispers" />
		<PageEffects config=page />
	}
}
