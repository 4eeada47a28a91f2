//! Данные для motion integrator'а
//!
//! Организация:
//! - input: состояние клавиш движения (InputState, MoveKey)
//! - profile: константы ускорения/торможения (MotionProfile)

pub mod input;
pub mod profile;

// Re-exports для удобного импорта
pub use input::*;
pub use profile::*;
