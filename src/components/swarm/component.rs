//! Leptos component wrapping the swarm canvas.
//!
//! The component creates an HTML canvas element, tracks the pointer for the
//! repulsion force, and runs the animation loop via `requestAnimationFrame`:
//! one simulation tick, then one render pass, per frame. Game mode is entered
//! through an overlay button; capture cues and background music play through
//! audio elements when the settings provide sources.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlAudioElement, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::state::SwarmState;
use super::theme::Theme;
use super::types::SwarmSettings;

/// Bundles simulation state with the visual theme and audio collaborators.
struct SwarmContext {
	state: SwarmState,
	theme: Theme,
	audio: AudioCues,
}

/// Audio collaborator: optional capture pop and looping game music.
struct AudioCues {
	capture: Option<HtmlAudioElement>,
	music: Option<HtmlAudioElement>,
	capture_src: Option<String>,
	music_src: Option<String>,
}

impl AudioCues {
	fn new(settings: &SwarmSettings) -> Self {
		let capture = settings
			.capture_sound
			.as_deref()
			.and_then(|src| HtmlAudioElement::new_with_src(src).ok());
		let music = settings.music.as_deref().and_then(|src| {
			let audio = HtmlAudioElement::new_with_src(src).ok()?;
			audio.set_loop(true);
			Some(audio)
		});
		Self {
			capture,
			music,
			capture_src: settings.capture_sound.clone(),
			music_src: settings.music.clone(),
		}
	}

	fn sources_match(&self, settings: &SwarmSettings) -> bool {
		self.capture_src == settings.capture_sound && self.music_src == settings.music
	}

	/// Play the capture pop from the start. The cue gate upstream already
	/// enforced the cooldown.
	fn play_capture(&self) {
		if let Some(audio) = &self.capture {
			audio.set_current_time(0.0);
			let _ = audio.play();
		}
	}

	fn start_music(&self) {
		if let Some(audio) = &self.music {
			let _ = audio.play();
		}
	}

	fn stop_music(&self) {
		if let Some(audio) = &self.music {
			let _ = audio.pause();
		}
	}
}

fn now_ms() -> f64 {
	web_sys::window()
		.and_then(|w| w.performance())
		.map(|p| p.now())
		.unwrap_or(0.0)
}

/// Renders the interactive particle swarm on a canvas element.
///
/// Pass tunable settings via the reactive `settings` signal; changes apply
/// mid-run without restarting the field. The component sizes itself to its
/// parent container by default; set `fullscreen = true` to fill the viewport
/// and resize automatically with the window. Explicit `width`/`height`
/// override automatic sizing.
#[component]
pub fn SwarmCanvas(
	#[prop(into)] settings: Signal<SwarmSettings>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<SwarmContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (game_active, set_game_active) = signal(false);
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = if fullscreen {
			(
				window.inner_width().unwrap().as_f64().unwrap(),
				window.inner_height().unwrap().as_f64().unwrap(),
			)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let initial = settings.get_untracked();
		let theme = Theme::resolve(&initial);
		*context_init.borrow_mut() = Some(SwarmContext {
			state: SwarmState::new(&initial, &theme, w, h),
			theme,
			audio: AudioCues::new(&initial),
		});

		if fullscreen {
			let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let win: Window = web_sys::window().unwrap();
				let (nw, nh) = (
					win.inner_width().unwrap().as_f64().unwrap(),
					win.inner_height().unwrap().as_f64().unwrap(),
				);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.state.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				let report = c.state.tick(now_ms());
				if report.play_cue {
					c.audio.play_capture();
				}
				render::render(&c.state, &ctx, &c.theme);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	// Control-panel contract: settings changes land mid-run, between frames.
	let context_settings = context.clone();
	Effect::new(move |_| {
		let current = settings.get();
		if let Some(ref mut c) = *context_settings.borrow_mut() {
			c.theme = Theme::resolve(&current);
			c.state.apply_settings(&current, &c.theme);
			if !c.audio.sources_match(&current) {
				c.audio.stop_music();
				c.audio = AudioCues::new(&current);
			}
		}
	});

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
		if let Some(ref mut c) = *context_mm.borrow_mut() {
			c.state.set_cursor(x, y);
		}
	};

	let context_start = context.clone();
	let on_start = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_start.borrow_mut() {
			c.state.start_game();
			c.audio.start_music();
		}
		set_game_active.set(true);
	};

	let context_end = context.clone();
	let on_end = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_end.borrow_mut() {
			c.state.end_game();
			c.audio.stop_music();
		}
		set_game_active.set(false);
	};

	view! {
		<div class="swarm-wrap" style="position: relative;">
			<canvas
				node_ref=canvas_ref
				class="swarm-canvas"
				on:mousemove=on_mousemove
				style="display: block;"
			/>
			<div
				class="swarm-intro"
				style:display=move || if game_active.get() { "none" } else { "block" }
			>
				<p class="swarm-rules">"Use your cursor to herd the sheep."</p>
				<button class="swarm-start" on:click=on_start>
					"Start Game"
				</button>
			</div>
			<button
				class="swarm-end"
				style:display=move || if game_active.get() { "block" } else { "none" }
				on:click=on_end
			>
				"Back to pasture"
			</button>
		</div>
	}
}
