//! Config file discovery, parsing and first-run creation.

mod loader;
mod paths;
mod template;


pub use loader::{load_default, load_from_path, read_default, read_from_path};
pub use paths::{create_default_config, default_config_path};
