//! Systems that act on the particle set each frame.

pub mod connections;
pub mod integrator;
pub mod lod;
pub mod store;

pub use connections::{build_connections, ConnectionParams, ConnectionScratch};
pub use integrator::{integrate, Bounds, IntegratorParams, UpdateMode};
pub use lod::{LodController, LodState};
pub use store::ParticleStore;
