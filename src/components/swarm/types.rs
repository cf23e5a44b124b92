//! Tunable settings for the swarm, supplied by the host page.

use serde::Deserialize;

/// User-tunable knobs, as exposed to a control panel or supplied as JSON.
///
/// Every field has a default matching the stock look, so a page can provide
/// any subset. Out-of-range values are clamped by [`SwarmSettings::sanitized`]
/// rather than rejected; a bad knob never stops the loop.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SwarmSettings {
	/// Number of particles in the herd.
	pub particle_count: usize,
	/// Render radius of each particle, px.
	pub particle_size: f64,
	/// CSS color override for particles (e.g. `"rgba(150, 200, 100, 0.9)"`).
	pub particle_color: Option<String>,
	/// Distance under which the cursor pushes particles away, px.
	pub repulsion_radius: f64,
	/// Strength of the cursor push.
	pub cursor_force: f64,
	/// Background gradient center color override.
	pub inner_color: Option<String>,
	/// Background gradient edge color override.
	pub outer_color: Option<String>,
	/// Theme preset name (`"meadow"`, `"dusk"`, `"midnight"`).
	pub theme: Option<String>,
	/// URL of the capture sound cue. No sound when absent.
	pub capture_sound: Option<String>,
	/// URL of the looping game-mode music. No music when absent.
	pub music: Option<String>,
}

impl Default for SwarmSettings {
	fn default() -> Self {
		Self {
			particle_count: 250,
			particle_size: 7.0,
			particle_color: None,
			repulsion_radius: 100.0,
			cursor_force: 500.0,
			inner_color: None,
			outer_color: None,
			theme: None,
			capture_sound: None,
			music: None,
		}
	}
}

impl SwarmSettings {
	/// Copy with out-of-range values clamped into the working range.
	pub fn sanitized(&self) -> Self {
		let mut s = self.clone();
		s.particle_size = if s.particle_size.is_finite() {
			s.particle_size.max(0.5)
		} else {
			Self::default().particle_size
		};
		s.repulsion_radius = if s.repulsion_radius.is_finite() {
			s.repulsion_radius.max(1.0)
		} else {
			Self::default().repulsion_radius
		};
		s.cursor_force = if s.cursor_force.is_finite() {
			s.cursor_force.max(0.0)
		} else {
			Self::default().cursor_force
		};
		s
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_the_stock_look() {
		let s = SwarmSettings::default();
		assert_eq!(s.particle_count, 250);
		assert_eq!(s.particle_size, 7.0);
		assert_eq!(s.repulsion_radius, 100.0);
		assert_eq!(s.cursor_force, 500.0);
	}

	#[test]
	fn partial_json_falls_back_to_defaults() {
		let s: SwarmSettings =
			serde_json::from_str(r#"{ "particleCount": 40, "theme": "dusk" }"#).unwrap();
		assert_eq!(s.particle_count, 40);
		assert_eq!(s.theme.as_deref(), Some("dusk"));
		assert_eq!(s.cursor_force, 500.0);
	}

	#[test]
	fn sanitize_clamps_out_of_range_values() {
		let s = SwarmSettings {
			particle_size: -3.0,
			repulsion_radius: 0.0,
			cursor_force: -100.0,
			..SwarmSettings::default()
		}
		.sanitized();
		assert_eq!(s.particle_size, 0.5);
		assert_eq!(s.repulsion_radius, 1.0);
		assert_eq!(s.cursor_force, 0.0);
	}

	#[test]
	fn sanitize_replaces_non_finite_values() {
		let s = SwarmSettings {
			particle_size: f64::NAN,
			repulsion_radius: f64::INFINITY,
			..SwarmSettings::default()
		}
		.sanitized();
		assert_eq!(s.particle_size, 7.0);
		assert_eq!(s.repulsion_radius, 100.0);
	}
}
