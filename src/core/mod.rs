//! Core helpers shared by every subsystem: colors, randomness, errors, logging.

pub mod color;
pub mod error;
pub mod logging;
pub mod random;
