//! UI components.

pub mod swarm;
