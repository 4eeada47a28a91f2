//! Motion domain: character motion integrator
//!
//! ```text
//! KeyTransition (event)
//!     ↓
//! apply_key_transitions (systems.rs)
//!     ↓
//! MotionIntegrator (InputState + velocity)
//!     ↓ update(elapsed) из FrameDriver
//! Transform target entity
//! ```

pub mod events;
pub mod integrator;
pub mod systems;

#[cfg(test)]
mod integrator_tests;

pub use events::*;
pub use integrator::*;
pub use systems::*;
