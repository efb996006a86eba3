//! Configuration loading for Revolve carousels.
//!
//! Options are read from one of, in order: the file named by
//! `$REVOLVE_CONFIG_PATH`, inline JSON in `$REVOLVE_CONFIG_JSON`, the first
//! default file found (`revolve.toml`, `revolve.json`, `config/revolve.toml`,
//! `config/revolve.json`), or built-in defaults. Individual `REVOLVE_*`
//! variables are applied on top and the result is validated before it is
//! handed out.

pub mod env;
pub mod loader;
pub mod source;

pub use env::{ENV_VARS, EnvOverrides, OverrideError};
pub use loader::{CarouselConfig, OptionsFormat, load_env_file, read_options};
pub use source::CarouselConfigSource;
