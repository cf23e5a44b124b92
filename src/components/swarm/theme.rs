//! Visual theming for the swarm canvas.
//!
//! Provides the color type and preset palettes for the background gradient,
//! particles, and game-mode overlays.

use super::types::SwarmSettings;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	/// Parses a CSS color string.
	/// Supports hex (`#RRGGBB`) and `rgb()`/`rgba()` functional notation;
	/// anything else falls back to mid gray.
	pub fn parse(color_str: &str) -> Self {
		if color_str.starts_with('#') && color_str.len() == 7 {
			let r = u8::from_str_radix(&color_str[1..3], 16).unwrap_or(128);
			let g = u8::from_str_radix(&color_str[3..5], 16).unwrap_or(128);
			let b = u8::from_str_radix(&color_str[5..7], 16).unwrap_or(128);
			Color::rgb(r, g, b)
		} else if color_str.starts_with("rgb") {
			let nums: Vec<&str> = color_str
				.trim_start_matches("rgba(")
				.trim_start_matches("rgb(")
				.trim_end_matches(')')
				.split(',')
				.collect();
			let r = nums
				.first()
				.and_then(|s| s.trim().parse().ok())
				.unwrap_or(128);
			let g = nums
				.get(1)
				.and_then(|s| s.trim().parse().ok())
				.unwrap_or(128);
			let b = nums
				.get(2)
				.and_then(|s| s.trim().parse().ok())
				.unwrap_or(128);
			let a = nums
				.get(3)
				.and_then(|s| s.trim().parse().ok())
				.unwrap_or(1.0);
			Color::rgba(r, g, b, a)
		} else {
			Color::rgb(128, 128, 128)
		}
	}
}

/// Background gradient stops.
#[derive(Clone, Copy, Debug)]
pub struct BackgroundStyle {
	/// Gradient center color.
	pub inner: Color,
	/// Gradient edge color.
	pub outer: Color,
}

/// Particle rendering style.
#[derive(Clone, Copy, Debug)]
pub struct ParticleStyle {
	pub fill: Color,
	pub stroke: Color,
	pub stroke_width: f64,
}

/// Game-mode overlay colors.
#[derive(Clone, Copy, Debug)]
pub struct GameStyle {
	/// Target zone fill.
	pub target: Color,
	/// Ripple ring stroke; per-ripple alpha is applied on top.
	pub ripple: Color,
	/// Score text color.
	pub score_text: Color,
}

/// Complete visual theme.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub background: BackgroundStyle,
	pub particle: ParticleStyle,
	pub game: GameStyle,
}

impl Theme {
	/// Pale daylight pasture look (default).
	pub fn meadow() -> Self {
		Self {
			name: "meadow",
			background: BackgroundStyle {
				inner: Color::rgb(174, 204, 228),
				outer: Color::rgb(255, 255, 255),
			},
			particle: ParticleStyle {
				fill: Color::rgba(150, 200, 100, 0.9),
				stroke: Color::rgb(0, 0, 0),
				stroke_width: 0.5,
			},
			game: GameStyle {
				target: Color::rgba(165, 42, 42, 0.5),
				ripple: Color::rgb(255, 255, 255),
				score_text: Color::rgb(255, 255, 255),
			},
		}
	}

	/// Low evening light, warmer particles.
	pub fn dusk() -> Self {
		Self {
			name: "dusk",
			background: BackgroundStyle {
				inner: Color::rgb(90, 80, 110),
				outer: Color::rgb(35, 30, 45),
			},
			particle: ParticleStyle {
				fill: Color::rgba(230, 180, 120, 0.9),
				stroke: Color::rgb(20, 15, 25),
				stroke_width: 0.5,
			},
			game: GameStyle {
				target: Color::rgba(200, 90, 60, 0.45),
				ripple: Color::rgb(240, 220, 200),
				score_text: Color::rgb(240, 230, 220),
			},
		}
	}

	/// Near-black field with pale particles.
	pub fn midnight() -> Self {
		Self {
			name: "midnight",
			background: BackgroundStyle {
				inner: Color::rgb(25, 28, 38),
				outer: Color::rgb(10, 12, 18),
			},
			particle: ParticleStyle {
				fill: Color::rgba(200, 215, 235, 0.85),
				stroke: Color::rgb(0, 0, 0),
				stroke_width: 0.5,
			},
			game: GameStyle {
				target: Color::rgba(120, 60, 160, 0.5),
				ripple: Color::rgb(180, 200, 255),
				score_text: Color::rgb(220, 230, 245),
			},
		}
	}

	pub fn by_name(name: &str) -> Option<Self> {
		match name {
			"meadow" => Some(Self::meadow()),
			"dusk" => Some(Self::dusk()),
			"midnight" => Some(Self::midnight()),
			_ => None,
		}
	}

	/// Theme for a settings blob: named preset (default `meadow`) with any
	/// explicit color overrides applied on top.
	pub fn resolve(settings: &SwarmSettings) -> Self {
		let mut theme = settings
			.theme
			.as_deref()
			.and_then(Self::by_name)
			.unwrap_or_default();
		if let Some(c) = &settings.inner_color {
			theme.background.inner = Color::parse(c);
		}
		if let Some(c) = &settings.outer_color {
			theme.background.outer = Color::parse(c);
		}
		if let Some(c) = &settings.particle_color {
			theme.particle.fill = Color::parse(c);
		}
		theme
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::meadow()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_hex_colors() {
		let c = Color::parse("#aecce4");
		assert_eq!((c.r, c.g, c.b), (174, 204, 228));
		assert_eq!(c.a, 1.0);
	}

	#[test]
	fn parses_rgba_colors() {
		let c = Color::parse("rgba(150, 200, 100, 0.9)");
		assert_eq!((c.r, c.g, c.b), (150, 200, 100));
		assert_eq!(c.a, 0.9);
	}

	#[test]
	fn unknown_strings_fall_back_to_gray() {
		let c = Color::parse("cornflower");
		assert_eq!((c.r, c.g, c.b), (128, 128, 128));
	}

	#[test]
	fn css_round_trip_keeps_alpha_notation() {
		assert_eq!(Color::rgb(174, 204, 228).to_css(), "#aecce4");
		assert_eq!(
			Color::rgba(150, 200, 100, 0.9).to_css(),
			"rgba(150, 200, 100, 0.9)"
		);
	}

	#[test]
	fn resolve_applies_overrides_on_the_preset() {
		let settings = SwarmSettings {
			theme: Some("midnight".into()),
			particle_color: Some("#ff0000".into()),
			..SwarmSettings::default()
		};
		let theme = Theme::resolve(&settings);
		assert_eq!(theme.name, "midnight");
		assert_eq!(theme.particle.fill, Color::rgb(255, 0, 0));
	}

	#[test]
	fn unknown_theme_name_falls_back_to_meadow() {
		let settings = SwarmSettings {
			theme: Some("neon".into()),
			..SwarmSettings::default()
		};
		assert_eq!(Theme::resolve(&settings).name, "meadow");
	}
}
