//! Canvas rendering for the swarm.
//!
//! All drawing lives here; the simulation mutates state and this module
//! only reads it. Draw order: background gradient, target zone, particles,
//! ripples, score text.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::game::GameSession;
use super::state::{Mode, SwarmState};
use super::theme::Theme;

/// Renders one complete frame.
pub fn render(state: &SwarmState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	draw_background(state, ctx, theme);

	if let Mode::Game(session) = &state.mode {
		draw_target(ctx, session, theme);
	}

	draw_particles(state, ctx, theme);

	if let Mode::Game(session) = &state.mode {
		draw_ripples(ctx, session, theme);
		draw_score(ctx, session, theme);
	}
}

fn draw_background(state: &SwarmState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let gradient = ctx
		.create_radial_gradient(
			state.width / 2.0,
			state.height / 2.0,
			0.0,
			state.width / 2.0,
			state.height / 2.0,
			state.width / 1.2,
		)
		.unwrap();

	gradient
		.add_color_stop(0.0, &theme.background.inner.to_css())
		.unwrap();
	gradient
		.add_color_stop(0.9, &theme.background.outer.to_css())
		.unwrap();

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_target(ctx: &CanvasRenderingContext2d, session: &GameSession, theme: &Theme) {
	let target = &session.target;
	ctx.begin_path();
	let _ = ctx.arc(target.x, target.y, target.radius, 0.0, PI * 2.0);
	ctx.set_fill_style_str(&theme.game.target.to_css());
	ctx.fill();
	ctx.close_path();
}

fn draw_particles(state: &SwarmState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	for p in &state.field.particles {
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.size, 0.0, PI * 2.0);
		ctx.set_fill_style_str(&p.color.to_css());
		ctx.fill();

		ctx.set_line_width(theme.particle.stroke_width);
		ctx.set_stroke_style_str(&theme.particle.stroke.to_css());
		ctx.stroke();

		ctx.close_path();
	}
}

fn draw_ripples(ctx: &CanvasRenderingContext2d, session: &GameSession, theme: &Theme) {
	for ripple in &session.ripples {
		ctx.begin_path();
		let _ = ctx.arc(ripple.x, ripple.y, ripple.radius, 0.0, PI * 2.0);
		ctx.set_stroke_style_str(
			&theme
				.game
				.ripple
				.with_alpha(ripple.alpha.clamp(0.0, 1.0))
				.to_css(),
		);
		ctx.set_line_width(2.0);
		ctx.stroke();
	}
}

fn draw_score(ctx: &CanvasRenderingContext2d, session: &GameSession, theme: &Theme) {
	ctx.set_font("30px Arial");
	ctx.set_fill_style_str(&theme.game.score_text.to_css());
	let _ = ctx.fill_text(&format!("Score: {}", session.score), 10.0, 50.0);
}
