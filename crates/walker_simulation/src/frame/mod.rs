//! Frame domain: display refresh cadence
//!
//! - clock: FrameClock (previous timestamp)
//! - driver: FrameDriver state machine + FrameHost seam
//! - systems: ECS host (`advance_frame`), DisplayTimestamp, FrameStats

pub mod clock;
pub mod driver;
pub mod systems;

pub use clock::*;
pub use driver::*;
pub use systems::*;
