use std::path::PathBuf;
use std::sync::OnceLock;

use tracing::{debug, error, info};

use super::environment::{Environment, ProcessEnv};
use super::errors::ResolveError;
use super::settings::{EnvPolicy, Settings};
use super::types::{Tool, ToolPaths};

static INSTALLED: OnceLock<ToolPaths> = OnceLock::new();

/// Bind one tool's variable to its default and read it back.
fn resolve_tool<E: Environment>(tool: Tool, settings: &Settings, env: &mut E) -> Result<PathBuf, ResolveError> {
	let var = tool.env_var();
	let preset = env.get(var).filter(|v| !v.is_empty());
	match (settings.policy, preset) {
		(EnvPolicy::Preserve, Some(v)) => debug!(var, value = ?v, "keeping operator value"),
		(_, _) => {
			let candidate = tool.default_path(&settings.surface_root);
			debug!(var, path = %candidate.display(), "setting default");
			env.set(var, candidate.as_os_str()).map_err(|source| ResolveError::Environment { tool, source })?;
		}
	}
	match env.get(var) {
		Some(v) if !v.is_empty() => Ok(PathBuf::from(v)),
		_ => Err(ResolveError::Unresolved { tool }),
	}
}

/// Resolve all four tools in order. Stops at the first one that cannot be bound.
pub fn resolve<E: Environment>(settings: &Settings, env: &mut E) -> Result<ToolPaths, ResolveError> {
	let msms = resolve_tool(Tool::Msms, settings, env)?;
	let pdb2pqr = resolve_tool(Tool::Pdb2Pqr, settings, env)?;
	let apbs = resolve_tool(Tool::Apbs, settings, env)?;
	let multivalue = resolve_tool(Tool::Multivalue, settings, env)?;
	let paths = ToolPaths { msms, pdb2pqr, apbs, multivalue };
	info!(root = %settings.surface_root.display(), "resolved tool paths");
	Ok(paths)
}

/// Resolve against the real process environment so spawned tools inherit the variables.
pub fn resolve_process(settings: &Settings) -> Result<ToolPaths, ResolveError> { resolve(settings, &mut ProcessEnv) }

/// Resolve or terminate the process with status 1.
pub fn resolve_or_exit<E: Environment>(settings: &Settings, env: &mut E) -> ToolPaths {
	match resolve(settings, env) {
		Ok(paths) => paths,
		Err(e) => {
			eprintln!("{e}");
			error!(tool = ?e.tool(), "tool path unresolved");
			std::process::exit(e.exit_code());
		}
	}
}

/// Store the paths for the rest of the process. Only the first call succeeds.
pub fn install(paths: ToolPaths) -> Result<&'static ToolPaths, ResolveError> {
	INSTALLED.set(paths).map_err(|_| ResolveError::AlreadyInstalled)?;
	INSTALLED.get().ok_or(ResolveError::AlreadyInstalled)
}

pub fn installed() -> Option<&'static ToolPaths> { INSTALLED.get() }
