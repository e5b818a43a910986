use crate::constants::{DEFAULT_PUBLIC_DIR, DEFAULT_TOLERANCE, LOGO_JOBS};
use crate::error::AppError;
use crate::types::{AppConfig, Job, Tolerance};

use config::builder::DefaultState;
use config::{ConfigBuilder, File};
use serde_derive::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct SerializedAppConfig {
    tolerance: i64,
    public_dir: String,
}

fn user_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from(""))
        .join(".config/logo-bg-remover/config.toml")
}

fn load_config(user_config: &Path) -> Result<SerializedAppConfig, config::ConfigError> {
    let mut builder = ConfigBuilder::<DefaultState>::default()
        .set_default("tolerance", DEFAULT_TOLERANCE as i64)?
        .set_default("public_dir", DEFAULT_PUBLIC_DIR)?;

    if user_config.exists() {
        builder = builder.add_source(File::from(user_config).required(false));
    }

    builder.build()?.try_deserialize()
}

/// Expands the fixed logo list into jobs using the configured tolerance and
/// output directory.
pub fn logo_jobs(tolerance: Tolerance, public_dir: &Path) -> Vec<Job> {
    LOGO_JOBS
        .iter()
        .map(|(input, output)| Job {
            input: PathBuf::from(input),
            output: public_dir.join(output),
            tolerance,
        })
        .collect()
}

pub fn resolve(user_config: &Path) -> Result<AppConfig, AppError> {
    let config = load_config(user_config)?;
    let tolerance = Tolerance::try_from(config.tolerance)?;

    log::debug!(
        "tolerance {}, public dir {}",
        tolerance.value(),
        config.public_dir
    );

    Ok(AppConfig {
        jobs: logo_jobs(tolerance, Path::new(&config.public_dir)),
    })
}

/// Built-in defaults, overridden by `~/.config/logo-bg-remover/config.toml`
/// when that file exists. Command-line arguments are not read.
pub fn init() -> Result<AppConfig, AppError> {
    resolve(&user_config_path())
}
