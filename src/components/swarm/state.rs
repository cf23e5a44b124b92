//! Simulation state and mode handling.
//!
//! Gathers every mutable piece the animation loop touches into one struct:
//! the particle field, the shared cursor, and the optional game session.
//! Created once when the component mounts, then mutated each frame. `tick`
//! mutates; rendering (in `render.rs`) only reads.

use super::field::{BoundaryPolicy, Cursor, FieldConfig, ParticleField};
use super::game::{GameSession, Target, TickReport};
use super::theme::Theme;
use super::types::SwarmSettings;

/// Which update loop is live.
pub enum Mode {
	/// Particles roam and bounce off the edges; nothing is scored.
	FreeRoam,
	/// Particles wrap around the edges and are herded into the target.
	Game(GameSession),
}

/// Everything the per-frame loop reads and writes.
pub struct SwarmState {
	pub field: ParticleField,
	pub cursor: Cursor,
	pub mode: Mode,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	particle_count: usize,
}

impl SwarmState {
	pub fn new(settings: &SwarmSettings, theme: &Theme, width: f64, height: f64) -> Self {
		let settings = settings.sanitized();
		let config = FieldConfig {
			repulsion_radius: settings.repulsion_radius,
			cursor_force: settings.cursor_force,
			boundary: BoundaryPolicy::Reflect,
			wander: true,
		};
		let mut field = ParticleField::new(
			config,
			settings.particle_size,
			theme.particle.fill,
			width,
			height,
		);
		field.init_particles(settings.particle_count);

		Self {
			field,
			cursor: Cursor {
				x: width / 2.0,
				y: height / 2.0,
			},
			mode: Mode::FreeRoam,
			width,
			height,
			animation_running: true,
			particle_count: settings.particle_count,
		}
	}

	/// Input collaborator write point; called on every pointer move.
	pub fn set_cursor(&mut self, x: f64, y: f64) {
		self.cursor = Cursor { x, y };
	}

	/// Advance the simulation one frame: step the field, then run the
	/// capture pass and ripple animation when a game is live. One call is
	/// one implicit unit timestep; the loop runs it once per display frame.
	pub fn tick(&mut self, now_ms: f64) -> TickReport {
		if !self.animation_running {
			return TickReport::default();
		}
		self.field.step(self.cursor);

		match &mut self.mode {
			Mode::FreeRoam => TickReport::default(),
			Mode::Game(session) => {
				let report = session.tick(&mut self.field.particles, now_ms);
				session.advance_ripples();
				report
			}
		}
	}

	/// Enter game mode: fresh herd, zero score, wrap-around edges, target
	/// fixed at the canvas center.
	pub fn start_game(&mut self) {
		self.field.config.boundary = BoundaryPolicy::Wrap;
		self.field.init_particles(self.particle_count);
		self.mode = Mode::Game(GameSession::new(Target::centered(self.width, self.height)));
	}

	/// Leave game mode and let the herd roam again.
	pub fn end_game(&mut self) {
		self.field.config.boundary = BoundaryPolicy::Reflect;
		self.mode = Mode::FreeRoam;
	}

	pub fn is_game(&self) -> bool {
		matches!(self.mode, Mode::Game(_))
	}

	/// Apply control-panel changes mid-run. Force knobs take effect on the
	/// next step, appearance restyles the live particles, and a count change
	/// respawns the field.
	pub fn apply_settings(&mut self, settings: &SwarmSettings, theme: &Theme) {
		let settings = settings.sanitized();
		self.field.config.repulsion_radius = settings.repulsion_radius;
		self.field.config.cursor_force = settings.cursor_force;
		self.field
			.set_appearance(settings.particle_size, theme.particle.fill);
		if settings.particle_count != self.particle_count {
			self.particle_count = settings.particle_count;
			self.field.init_particles(self.particle_count);
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.field.resize(width, height);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::swarm::field::Particle;

	const WIDTH: f64 = 800.0;
	const HEIGHT: f64 = 600.0;

	fn test_state() -> SwarmState {
		SwarmState::new(&SwarmSettings::default(), &Theme::default(), WIDTH, HEIGHT)
	}

	fn center_particle() -> Particle {
		Particle {
			x: WIDTH / 2.0,
			y: HEIGHT / 2.0,
			vx: 0.0,
			vy: 0.0,
			size: 7.0,
			color: Theme::default().particle.fill,
		}
	}

	#[test]
	fn free_roam_starts_with_reflecting_bounds() {
		let state = test_state();
		assert!(!state.is_game());
		assert_eq!(state.field.config.boundary, BoundaryPolicy::Reflect);
		assert_eq!(state.field.particles.len(), 250);
	}

	#[test]
	fn start_game_resets_particles_score_and_bounds() {
		let mut state = test_state();
		state.start_game();
		assert!(state.is_game());
		assert_eq!(state.field.config.boundary, BoundaryPolicy::Wrap);
		assert_eq!(state.field.particles.len(), 250);
		let Mode::Game(session) = &state.mode else {
			unreachable!()
		};
		assert_eq!(session.score, 0);
		assert_eq!((session.target.x, session.target.y), (WIDTH / 2.0, HEIGHT / 2.0));
		assert_eq!(session.target.radius, 100.0);
	}

	#[test]
	fn end_game_returns_to_free_roam() {
		let mut state = test_state();
		state.start_game();
		state.end_game();
		assert!(!state.is_game());
		assert_eq!(state.field.config.boundary, BoundaryPolicy::Reflect);
	}

	#[test]
	fn game_tick_captures_particles_in_the_target() {
		let mut state = test_state();
		state.start_game();
		state.field.particles.clear();
		state.field.particles.push(center_particle());

		let report = state.tick(0.0);
		assert_eq!(report.captured, 1);
		assert!(state.field.particles.is_empty());
		let Mode::Game(session) = &state.mode else {
			unreachable!()
		};
		assert_eq!(session.score, 1);
	}

	#[test]
	fn paused_state_does_not_move() {
		let mut state = test_state();
		state.animation_running = false;
		let before: Vec<(f64, f64)> = state.field.particles.iter().map(|p| (p.x, p.y)).collect();
		state.tick(0.0);
		let after: Vec<(f64, f64)> = state.field.particles.iter().map(|p| (p.x, p.y)).collect();
		assert_eq!(before, after);
	}

	#[test]
	fn free_roam_tick_reports_nothing() {
		let mut state = test_state();
		let report = state.tick(0.0);
		assert_eq!(report.captured, 0);
		assert!(!report.play_cue);
	}

	#[test]
	fn apply_settings_updates_forces_without_respawning() {
		let mut state = test_state();
		let first = state.field.particles[0];
		let settings = SwarmSettings {
			repulsion_radius: 50.0,
			cursor_force: 900.0,
			..SwarmSettings::default()
		};
		state.apply_settings(&settings, &Theme::default());
		assert_eq!(state.field.config.repulsion_radius, 50.0);
		assert_eq!(state.field.config.cursor_force, 900.0);
		assert_eq!(state.field.particles[0].x, first.x);
	}

	#[test]
	fn apply_settings_respawns_on_count_change() {
		let mut state = test_state();
		let settings = SwarmSettings {
			particle_count: 10,
			..SwarmSettings::default()
		};
		state.apply_settings(&settings, &Theme::default());
		assert_eq!(state.field.particles.len(), 10);
	}
}
