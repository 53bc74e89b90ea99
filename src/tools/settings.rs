use std::path::PathBuf;

use serde::Deserialize;

use super::config_file::FileSettings;
use super::constants::{COMPANION_REPO_VAR, SURFACE_ROOT_VAR};
use super::environment::Environment;
use super::errors::ConfigError;

/// What to do when a tool variable already holds a value before resolution.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvPolicy {
	/// Always replace with the derived default.
	#[default]
	Overwrite,
	/// Keep a non-empty operator value; only fill unset or empty variables.
	Preserve,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
	/// First companion repository. Passed through to collaborators; not used to derive tool paths.
	pub companion_repo: Option<PathBuf>,
	/// Root all four tool subpaths are joined onto.
	pub surface_root: PathBuf,
	pub policy: EnvPolicy,
}

/// Values given explicitly on the command line. They win over every other source.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
	pub surface_root: Option<PathBuf>,
	pub companion_repo: Option<PathBuf>,
	pub policy: Option<EnvPolicy>,
}

impl Settings {
	pub fn new(surface_root: impl Into<PathBuf>) -> Self {
		Self { companion_repo: None, surface_root: surface_root.into(), policy: EnvPolicy::default() }
	}

	pub fn with_companion_repo(mut self, path: impl Into<PathBuf>) -> Self {
		self.companion_repo = Some(path.into());
		self
	}

	pub fn with_policy(mut self, policy: EnvPolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Merge overrides, environment inputs and file settings, in that priority order.
	pub fn layered<E: Environment>(overrides: Overrides, env: &E, file: Option<FileSettings>) -> Result<Self, ConfigError> {
		let file = file.unwrap_or_default();
		let from_env = |key: &str| env.get(key).filter(|v| !v.is_empty()).map(PathBuf::from);

		let surface_root = overrides
			.surface_root
			.or_else(|| from_env(SURFACE_ROOT_VAR))
			.or(file.surface_root)
			.ok_or(ConfigError::MissingSurfaceRoot)?;
		let companion_repo = overrides.companion_repo.or_else(|| from_env(COMPANION_REPO_VAR)).or(file.companion_repo);
		let policy = overrides.policy.or(file.policy).unwrap_or_default();

		let settings = Self { companion_repo, surface_root, policy };
		settings.validate()?;
		Ok(settings)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.surface_root.as_os_str().is_empty() {
			return Err(ConfigError::Empty("surface_root"));
		}
		if !self.surface_root.is_absolute() {
			return Err(ConfigError::NotAbsolute("surface_root"));
		}
		if let Some(repo) = &self.companion_repo {
			if repo.as_os_str().is_empty() {
				return Err(ConfigError::Empty("companion_repo"));
			}
			if !repo.is_absolute() {
				return Err(ConfigError::NotAbsolute("companion_repo"));
			}
		}
		Ok(())
	}
}
