/// Tolerance for near-equality checks in collaborating numerical code.
pub const EPSILON: f64 = 1.0e-6;

pub const MSMS_SUBPATH: &str = "comp_surface/tools/transfer/APBS-3.4.1.Linux/bin/msms";
pub const PDB2PQR_SUBPATH: &str = "comp_surface/tools/transfer/pdb2pqr-linux-bin64-2.1.1/pdb2pqr";
pub const APBS_SUBPATH: &str = "comp_surface/tools/transfer/APBS-3.4.1.Linux/bin/apbs";
pub const MULTIVALUE_SUBPATH: &str = "comp_surface/tools/transfer/APBS-3.4.1.Linux/share/apbs/tools/bin/multivalue";

/// Environment inputs consulted for the base directories when no CLI flag is given.
pub const SURFACE_ROOT_VAR: &str = "SURFENV_SURFACE_ROOT";
pub const COMPANION_REPO_VAR: &str = "SURFENV_COMPANION_REPO";

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn epsilon_is_exact() {
		assert_eq!(EPSILON, 1.0e-6);
		assert_eq!(EPSILON.to_bits(), 1.0e-6_f64.to_bits());
	}

	#[test]
	fn subpaths_live_under_transfer_dir() {
		for p in [MSMS_SUBPATH, PDB2PQR_SUBPATH, APBS_SUBPATH, MULTIVALUE_SUBPATH] {
			assert!(p.starts_with("comp_surface/tools/transfer/"), "{p}");
		}
	}
}
