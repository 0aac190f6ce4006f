//! Animated particle background component.
//!
//! Renders a full-viewport canvas of slowly drifting particles with
//! proximity connections:
//! - Particle count derived from canvas area, capped at a fixed maximum
//! - Edge bounces keep every particle inside the viewport
//! - Lines join particle pairs closer than a threshold, fading with distance
//! - Resizes with the window without regenerating particles
//!
//! The simulation itself ([`field`]) is pure and free of DOM types; the
//! component wires it to a canvas and a `requestAnimationFrame` loop.

mod component;
mod field;
mod render;
pub mod theme;

pub use component::ParticleCanvas;
pub use field::{Particle, ParticleField, particle_count};
