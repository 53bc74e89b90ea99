use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::constants::{APBS_SUBPATH, MSMS_SUBPATH, MULTIVALUE_SUBPATH, PDB2PQR_SUBPATH};

/// External binaries the surface pipeline shells out to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tool {
	/// Molecular surface generator
	Msms,
	/// Structure protonation / PQR preparation
	Pdb2Pqr,
	/// Poisson-Boltzmann electrostatics solver
	Apbs,
	/// Maps solver output onto per-atom values
	Multivalue,
}

impl Tool {
	/// Resolution order.
	pub const ALL: [Tool; 4] = [Tool::Msms, Tool::Pdb2Pqr, Tool::Apbs, Tool::Multivalue];

	pub fn env_var(self) -> &'static str {
		match self {
			Tool::Msms => "MSMS_BIN",
			Tool::Pdb2Pqr => "PDB2PQR_BIN",
			Tool::Apbs => "APBS_BIN",
			Tool::Multivalue => "MULTIVALUE_BIN",
		}
	}

	/// Location of the binary relative to the surface root.
	pub fn subpath(self) -> &'static str {
		match self {
			Tool::Msms => MSMS_SUBPATH,
			Tool::Pdb2Pqr => PDB2PQR_SUBPATH,
			Tool::Apbs => APBS_SUBPATH,
			Tool::Multivalue => MULTIVALUE_SUBPATH,
		}
	}

	/// Name used in diagnostics.
	pub fn program(self) -> &'static str {
		match self {
			Tool::Msms => "MSMS",
			Tool::Pdb2Pqr => "PDB2PQR",
			Tool::Apbs => "APBS",
			Tool::Multivalue => "MULTIVALUE",
		}
	}

	pub fn default_path(self, surface_root: &Path) -> PathBuf { surface_root.join(self.subpath()) }
}

impl fmt::Display for Tool {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.env_var()) }
}

/// Resolved binary locations. Built once by the resolver and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ToolPaths {
	pub msms: PathBuf,
	pub pdb2pqr: PathBuf,
	pub apbs: PathBuf,
	pub multivalue: PathBuf,
}

impl ToolPaths {
	pub fn get(&self, tool: Tool) -> &Path {
		match tool {
			Tool::Msms => &self.msms,
			Tool::Pdb2Pqr => &self.pdb2pqr,
			Tool::Apbs => &self.apbs,
			Tool::Multivalue => &self.multivalue,
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = (Tool, &Path)> + '_ {
		Tool::ALL.into_iter().map(move |t| (t, self.get(t)))
	}

	/// Tools whose resolved path is not an existing file.
	pub fn missing_on_disk(&self) -> Vec<Tool> {
		self.iter().filter(|(_, p)| !p.is_file()).map(|(t, _)| t).collect()
	}
}
