//! Loading [`AdapterConfig`] from a module config file.
//!
//! The file format follows the extension (`.toml`, `.yaml`, `.json`, …).
//! Any top-level key can be overridden from the environment with a
//! `MAILUP_` prefix, e.g. `MAILUP_PASSWORD`.

use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use mailup_core::config::AdapterConfig;

use crate::Result;

pub const ENV_PREFIX: &str = "MAILUP";

/// Read and validate the adapter configuration at `path`, layered with
/// `MAILUP_*` environment variables.
pub fn load(path: impl AsRef<Path>) -> Result<AdapterConfig> {
  let settings = Config::builder()
    .add_source(File::from(path.as_ref()))
    .add_source(Environment::with_prefix(ENV_PREFIX))
    .build()?;
  finish(settings)
}

/// Parse a configuration held in memory. The environment is not consulted.
pub fn parse(contents: &str, format: FileFormat) -> Result<AdapterConfig> {
  let settings = Config::builder()
    .add_source(File::from_str(contents, format))
    .build()?;
  finish(settings)
}

fn finish(settings: Config) -> Result<AdapterConfig> {
  let config: AdapterConfig = settings.try_deserialize()?;
  config.validate()?;
  Ok(config)
}
