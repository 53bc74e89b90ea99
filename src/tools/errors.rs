use std::path::PathBuf;

use thiserror::Error;

use super::types::Tool;

/// Raised by numerical collaborators when a search or fit finds no solution.
#[derive(Error, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[error("no solution found")]
pub struct NoSolutionError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
	#[error("invalid environment variable name {0:?}")]
	InvalidKey(String),
	#[error("value for {0} contains a NUL byte")]
	InvalidValue(String),
}

#[derive(Error, Debug)]
pub enum ResolveError {
	#[error("ERROR: {} not set. Variable should point to {} program.", .tool.env_var(), .tool.program())]
	Unresolved { tool: Tool },
	#[error("ERROR: could not set {}: {source}", .tool.env_var())]
	Environment { tool: Tool, #[source] source: EnvError },
	#[error("tool paths were already installed for this process")]
	AlreadyInstalled,
}

impl ResolveError {
	pub fn exit_code(&self) -> i32 { 1 }

	pub fn tool(&self) -> Option<Tool> {
		match self {
			ResolveError::Unresolved { tool } | ResolveError::Environment { tool, .. } => Some(*tool),
			ResolveError::AlreadyInstalled => None,
		}
	}
}

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("surface root is not configured (use --surface-root, SURFENV_SURFACE_ROOT or a config file)")]
	MissingSurfaceRoot,
	#[error("{0} must not be empty")]
	Empty(&'static str),
	#[error("{0} must be an absolute path")]
	NotAbsolute(&'static str),
	#[error("read config {path}: {source}")]
	Io { path: PathBuf, #[source] source: std::io::Error },
	#[error("invalid config json: {0}")]
	Json(#[from] serde_json::Error),
}
