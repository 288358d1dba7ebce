pub mod errors;

pub use errors::{ConfigError, HearthError, WidgetError};
