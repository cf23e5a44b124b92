//! Cursor-driven particle swarm component.
//!
//! Renders a swarm of particles on an HTML canvas with:
//! - Cursor repulsion, mutual repulsion, friction, and wander forces
//! - Wrap or reflect boundary handling
//! - An optional herding game: drive particles into a target zone to score,
//!   with ripple effects and sound cues
//! - Configurable theming and live-tunable settings
//!
//! # Example
//!
//! ```ignore
//! use herd_canvas::{SwarmCanvas, SwarmSettings};
//!
//! let settings = SwarmSettings {
//!     particle_count: 400,
//!     theme: Some("dusk".into()),
//!     ..SwarmSettings::default()
//! };
//!
//! view! { <SwarmCanvas settings=settings fullscreen=true /> }
//! ```

mod component;
pub mod field;
pub mod game;
mod render;
pub mod state;
pub mod theme;
mod types;

pub use component::SwarmCanvas;
pub use theme::Theme;
pub use types::SwarmSettings;
