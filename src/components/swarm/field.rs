//! The particle field: spawning and the per-frame update rule.
//!
//! Particles are pushed away from the cursor and from each other with
//! inverse-square impulses, damped by friction, clamped to a top speed, and
//! nudged back into motion when they stall. This is a stylized force model
//! tuned for feel, not a physics engine.

use std::f64::consts::TAU;

use super::theme::Color;

/// Hard ceiling on particle speed, px per step.
pub const MAX_SPEED: f64 = 2.5;
/// Per-step velocity damping.
pub const FRICTION: f64 = 0.97;
/// Speed floor; slower particles get a wander kick back up to it.
pub const MIN_SPEED: f64 = 0.2;

/// Distance under which two particles push each other apart.
const MUTUAL_RADIUS: f64 = 10.0;
/// Numerator of the inverse-square mutual repulsion impulse.
const MUTUAL_FORCE: f64 = 5.0;

/// A single swarm particle.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Render radius, px.
	pub size: f64,
	pub color: Color,
}

/// Shared pointer position, written by the input layer and read by the
/// update rule.
#[derive(Clone, Copy, Debug)]
pub struct Cursor {
	pub x: f64,
	pub y: f64,
}

/// What happens when a particle crosses a canvas edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundaryPolicy {
	/// Teleport to the opposite edge.
	Wrap,
	/// Invert the crossed velocity component.
	#[default]
	Reflect,
}

/// Runtime-tunable parameters of the update rule.
#[derive(Clone, Copy, Debug)]
pub struct FieldConfig {
	/// Distance under which the cursor pushes particles away, px.
	pub repulsion_radius: f64,
	/// Numerator of the inverse-square cursor impulse.
	pub cursor_force: f64,
	pub boundary: BoundaryPolicy,
	/// Kick stalled particles back up to the speed floor.
	pub wander: bool,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			repulsion_radius: 100.0,
			cursor_force: 500.0,
			boundary: BoundaryPolicy::default(),
			wander: true,
		}
	}
}

/// Deterministic sin-hash noise stream for spawn jitter and wander kicks.
///
/// Same construction as the classic shader hash; plenty for visual
/// randomness, and every run is reproducible under test.
#[derive(Clone, Debug)]
pub struct WanderNoise {
	seed: f64,
	counter: f64,
}

impl WanderNoise {
	pub fn new(seed: f64) -> Self {
		Self { seed, counter: 0.0 }
	}

	/// Next value in [0, 1).
	pub fn next(&mut self) -> f64 {
		self.counter += 1.0;
		let x = (self.counter * 12.9898 + self.seed * 78.233).sin() * 43758.5453;
		x - x.floor()
	}

	/// Next value in [-1, 1).
	pub fn next_signed(&mut self) -> f64 {
		self.next() * 2.0 - 1.0
	}
}

/// Owns the particle collection and advances it frame by frame.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	pub config: FieldConfig,
	particle_size: f64,
	particle_color: Color,
	width: f64,
	height: f64,
	noise: WanderNoise,
}

impl ParticleField {
	pub fn new(
		config: FieldConfig,
		particle_size: f64,
		particle_color: Color,
		width: f64,
		height: f64,
	) -> Self {
		Self {
			particles: Vec::new(),
			config,
			particle_size,
			particle_color,
			width,
			height,
			noise: WanderNoise::new(1.0),
		}
	}

	/// Discard the current collection and spawn `count` fresh particles at
	/// random positions with small random velocities (each axis in [-1, 1]).
	/// `count = 0` yields an empty field.
	pub fn init_particles(&mut self, count: usize) {
		self.particles.clear();
		self.particles.reserve(count);
		for _ in 0..count {
			let x = self.noise.next() * self.width;
			let y = self.noise.next() * self.height;
			self.particles.push(Particle {
				x,
				y,
				vx: self.noise.next_signed(),
				vy: self.noise.next_signed(),
				size: self.particle_size,
				color: self.particle_color,
			});
		}
	}

	/// Advance every particle one step.
	///
	/// Particles update sequentially in collection order, each seeing the
	/// already-integrated positions of earlier ones; the dynamics were tuned
	/// against that single in-place pass. Force order matters: cursor
	/// repulsion, speed clamp, friction, mutual repulsion, wander,
	/// integration, boundary.
	pub fn step(&mut self, cursor: Cursor) {
		for i in 0..self.particles.len() {
			let mut p = self.particles[i];

			// Cursor repulsion, inverse-square falloff. A particle exactly
			// under the cursor gets no impulse: the force is undefined there.
			let dx = cursor.x - p.x;
			let dy = cursor.y - p.y;
			let distance = (dx * dx + dy * dy).sqrt();
			if distance > 0.0 && distance < self.config.repulsion_radius {
				let force = self.config.cursor_force / (distance * distance);
				if force.is_finite() {
					let angle = dy.atan2(dx);
					p.vx -= angle.cos() * force;
					p.vy -= angle.sin() * force;
				}
			}

			let speed = (p.vx * p.vx + p.vy * p.vy).sqrt();
			if speed > MAX_SPEED {
				p.vx = p.vx / speed * MAX_SPEED;
				p.vy = p.vy / speed * MAX_SPEED;
			}

			p.vx *= FRICTION;
			p.vy *= FRICTION;

			// Pairwise repulsion keeps the herd from stacking. O(n²) over
			// the field, but the radius is tiny and counts are modest.
			for (j, other) in self.particles.iter().enumerate() {
				if j == i {
					continue;
				}
				let dx = other.x - p.x;
				let dy = other.y - p.y;
				let dist = (dx * dx + dy * dy).sqrt();
				if dist > 0.0 && dist < MUTUAL_RADIUS {
					let force = MUTUAL_FORCE / (dist * dist);
					let angle = dy.atan2(dx);
					p.vx -= angle.cos() * force;
					p.vy -= angle.sin() * force;
				}
			}

			// Grazing drift: a particle is never allowed to stall outright.
			if self.config.wander {
				let speed = (p.vx * p.vx + p.vy * p.vy).sqrt();
				if speed < MIN_SPEED {
					let angle = self.noise.next() * TAU;
					p.vx += angle.cos() * MIN_SPEED;
					p.vy += angle.sin() * MIN_SPEED;
				}
			}

			p.x += p.vx;
			p.y += p.vy;

			match self.config.boundary {
				BoundaryPolicy::Wrap => {
					if p.x < 0.0 {
						p.x = self.width;
					} else if p.x > self.width {
						p.x = 0.0;
					}
					if p.y < 0.0 {
						p.y = self.height;
					} else if p.y > self.height {
						p.y = 0.0;
					}
				}
				BoundaryPolicy::Reflect => {
					if p.x < 0.0 || p.x > self.width {
						p.vx = -p.vx;
					}
					if p.y < 0.0 || p.y > self.height {
						p.vy = -p.vy;
					}
				}
			}

			self.particles[i] = p;
		}
	}

	/// Restyle existing particles in place; spawns inherit the new look.
	pub fn set_appearance(&mut self, size: f64, color: Color) {
		self.particle_size = size;
		self.particle_color = color;
		for p in &mut self.particles {
			p.size = size;
			p.color = color;
		}
	}

	/// Update the field bounds. Positions are left untouched; the boundary
	/// policy picks strays up on their next step.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
