use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::warn;

use surf_env::tools::config_file::{read_settings_from_path, FileSettings};
use surf_env::tools::settings::Overrides;
use surf_env::tools::{install, resolve_or_exit, ConfigError, EnvPolicy, ProcessEnv, Settings, ToolPaths, EPSILON};

/// Resolve the external surface/electrostatics binaries and print where they live.
#[derive(Parser, Debug)]
#[command(name = "surfenv", version)]
struct Cli {
    /// Root the tool bundles are located under
    #[arg(long)]
    surface_root: Option<PathBuf>,
    /// First companion repository
    #[arg(long)]
    companion_repo: Option<PathBuf>,
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Keep tool variables that are already set instead of replacing them
    #[arg(long)]
    preserve_env: bool,
    /// Print JSON instead of VAR=path lines
    #[arg(long)]
    json: bool,
    /// Fail if any resolved binary is missing on disk
    #[arg(long)]
    check: bool,
}

#[derive(serde::Serialize)]
struct Output<'a> {
    version: &'static str,
    epsilon: f64,
    companion_repo: Option<&'a Path>,
    tools: &'a ToolPaths,
}

fn load_settings(cli: &Cli) -> Result<Settings, ConfigError> {
    let file: Option<FileSettings> = cli.config.as_deref().map(read_settings_from_path).transpose()?;
    let overrides = Overrides {
        surface_root: cli.surface_root.clone(),
        companion_repo: cli.companion_repo.clone(),
        policy: cli.preserve_env.then_some(EnvPolicy::Preserve),
    };
    Settings::layered(overrides, &ProcessEnv, file)
}

fn main() -> anyhow::Result<()> {
    surf_env::logging::init();
    let cli = Cli::parse();

    let settings = match load_settings(&cli) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(1);
        }
    };

    let paths = install(resolve_or_exit(&settings, &mut ProcessEnv))?;

    if cli.json {
        let out = Output { version: env!("CARGO_PKG_VERSION"), epsilon: EPSILON, companion_repo: settings.companion_repo.as_deref(), tools: paths };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for (tool, path) in paths.iter() {
            println!("{}={}", tool.env_var(), path.display());
        }
    }

    if cli.check {
        let missing = paths.missing_on_disk();
        for tool in &missing {
            warn!(var = tool.env_var(), path = %paths.get(*tool).display(), "binary not found");
            eprintln!("WARNING: {} points to a missing file: {}", tool.env_var(), paths.get(*tool).display());
        }
        if !missing.is_empty() {
            std::process::exit(1);
        }
    }
    Ok(())
}
