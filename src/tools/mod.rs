pub mod types;
pub mod constants;
pub mod errors;
pub mod environment;
pub mod settings;
pub mod config_file;
pub mod resolver;

pub use constants::EPSILON;
pub use environment::{Environment, MapEnv, ProcessEnv};
pub use errors::{ConfigError, EnvError, NoSolutionError, ResolveError};
pub use resolver::{install, installed, resolve, resolve_or_exit, resolve_process};
pub use settings::{EnvPolicy, Settings};
pub use types::{Tool, ToolPaths};
