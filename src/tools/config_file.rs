use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::errors::ConfigError;
use super::settings::EnvPolicy;

/// On-disk settings; every field optional so CLI flags and environment inputs can fill gaps.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
	pub surface_root: Option<PathBuf>,
	pub companion_repo: Option<PathBuf>,
	pub policy: Option<EnvPolicy>,
}

pub fn read_settings_from_path(path: &Path) -> Result<FileSettings, ConfigError> {
	let io_err = |source| ConfigError::Io { path: path.to_path_buf(), source };
	let mut f = File::open(path).map_err(io_err)?;
	let mut buf = String::new();
	f.read_to_string(&mut buf).map_err(io_err)?;
	read_settings_from_str(&buf)
}

pub fn read_settings_from_str(data: &str) -> Result<FileSettings, ConfigError> {
	Ok(serde_json::from_str(data)?)
}
