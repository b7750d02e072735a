//! Plain data: particles, segments, options.

pub mod options;
pub mod particle;
pub mod segment;

pub use options::{OptionsChange, OptionsPatch, SimulationOptions};
pub use particle::{Particle, ParticleId};
pub use segment::Segment;
