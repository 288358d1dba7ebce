//! Stateless page widgets: theme toggle, clock, card tilt.

pub mod clock;
pub mod theme;
pub mod tilt;

pub use clock::Clock;
pub use theme::{Theme, ThemeStore};
pub use tilt::{tilt_for, CardRect, Pointer, Tilt};
