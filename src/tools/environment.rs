use std::collections::HashMap;
use std::env;
use std::ffi::{OsStr, OsString};

use super::errors::EnvError;

/// Key/value store the resolver binds tool paths through.
pub trait Environment {
	fn get(&self, key: &str) -> Option<OsString>;
	fn set(&mut self, key: &str, value: &OsStr) -> Result<(), EnvError>;
}

/// The real process environment.
///
/// `std::env::set_var` panics on malformed input, so keys and values are checked first.
#[derive(Copy, Clone, Debug, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
	fn get(&self, key: &str) -> Option<OsString> { env::var_os(key) }

	fn set(&mut self, key: &str, value: &OsStr) -> Result<(), EnvError> {
		if key.is_empty() || key.contains('=') || key.contains('\0') {
			return Err(EnvError::InvalidKey(key.to_string()));
		}
		if value.as_encoded_bytes().contains(&0) {
			return Err(EnvError::InvalidValue(key.to_string()));
		}
		env::set_var(key, value);
		Ok(())
	}
}

/// In-memory environment for hermetic configuration and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapEnv {
	vars: HashMap<String, OsString>,
}

impl MapEnv {
	pub fn new() -> Self { Self::default() }

	pub fn with_vars<I, K, V>(vars: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<OsString>,
	{
		Self { vars: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
	}
}

impl Environment for MapEnv {
	fn get(&self, key: &str) -> Option<OsString> { self.vars.get(key).cloned() }

	fn set(&mut self, key: &str, value: &OsStr) -> Result<(), EnvError> {
		if key.is_empty() {
			return Err(EnvError::InvalidKey(key.to_string()));
		}
		self.vars.insert(key.to_string(), value.to_os_string());
		Ok(())
	}
}
