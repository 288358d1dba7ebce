pub mod clock;
pub mod presence;
pub mod theme;
pub mod tilt;
