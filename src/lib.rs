//! herd-canvas: cursor-driven particle swarm with a herding game mode.
//!
//! This crate provides a WASM-based canvas component where a swarm of
//! particles flees the cursor, with an optional game mode: herd the
//! particles into a target zone to score, with ripples and sound cues.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::swarm::{SwarmCanvas, SwarmSettings, Theme};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("herd-canvas: logging initialized");
}

/// Load settings from a script element with id="swarm-settings".
/// Expected format: a JSON object with any subset of the settings fields;
/// missing or malformed input falls back to the defaults.
fn load_settings() -> SwarmSettings {
	let Some(json_text) = settings_json() else {
		info!("herd-canvas: no settings element, using defaults");
		return SwarmSettings::default();
	};

	match serde_json::from_str::<SwarmSettings>(&json_text) {
		Ok(settings) => {
			info!(
				"herd-canvas: loaded settings, {} particles",
				settings.particle_count
			);
			settings
		}
		Err(e) => {
			warn!("herd-canvas: failed to parse settings: {}", e);
			SwarmSettings::default()
		}
	}
}

fn settings_json() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("swarm-settings")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Main application component.
/// Loads settings from the DOM and renders the fullscreen swarm.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let settings = load_settings();
	let settings_signal = Signal::derive(move || settings.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Herd" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-swarm">
			<SwarmCanvas settings=settings_signal fullscreen=true />
		</div>
	}
}
