use anyhow::{anyhow, ensure, Context};
use derive_builder::Builder;
use directories::UserDirs;
use std::path::{Path, PathBuf};

use crate::catalog::CatalogEntry;

pub const OUTPUT_DIR_VAR: &str = "AUTOSTACK_OUTPUT_DIR";
pub const COMPOSE_VAR: &str = "AUTOSTACK_COMPOSE";
pub const DEFAULT_COMPOSE: &str = "docker-compose";

#[derive(Builder, Debug, Clone)]
#[builder(setter(into))]
pub struct Settings {
    #[builder(default)]
    user_home: Option<PathBuf>,
    output_dir: PathBuf,
    #[builder(default = "vec![DEFAULT_COMPOSE.to_owned()]")]
    compose: Vec<String>,
}

impl Settings {
    /// Create a new [`Settings`] builder
    #[must_use]
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::create_empty()
    }

    /// Settings for the current process: `output` if given, otherwise
    /// `$AUTOSTACK_OUTPUT_DIR`, otherwise the working directory.
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if the working directory can not be read or the
    /// output path exists but is not a directory.
    pub fn from_env(output: Option<&Path>) -> anyhow::Result<Self> {
        let output_dir = match output {
            Some(path) => path.to_path_buf(),
            None => Self::get_output_dir()?,
        };

        ensure!(
            !output_dir.exists() || output_dir.is_dir(),
            anyhow!("Path {} is not a directory", output_dir.display())
        );

        Self::builder()
            .user_home(Self::get_user_home())
            .output_dir(output_dir)
            .compose(Self::get_compose_command())
            .build()
            .context("Failed to build settings")
    }

    /// Returns the path for the user home `~/`, if there is one.
    #[must_use]
    pub fn get_user_home() -> Option<PathBuf> {
        UserDirs::new().map(|dirs| dirs.home_dir().to_owned())
    }

    /// Returns `$AUTOSTACK_OUTPUT_DIR` or the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if the current working directory value is invalid.
    pub fn get_output_dir() -> anyhow::Result<PathBuf> {
        match std::env::var(OUTPUT_DIR_VAR) {
            Ok(dir) if !dir.trim().is_empty() => Ok(PathBuf::from(dir)),
            _ => std::env::current_dir().context("Failed to get current dir"),
        }
    }

    /// Orchestrator command line, `$AUTOSTACK_COMPOSE` split on whitespace
    /// (e.g. `docker compose`), or `docker-compose`.
    #[must_use]
    pub fn get_compose_command() -> Vec<String> {
        std::env::var(COMPOSE_VAR)
            .ok()
            .map(|cmd| cmd.split_whitespace().map(str::to_owned).collect::<Vec<_>>())
            .filter(|cmd| !cmd.is_empty())
            .unwrap_or_else(|| vec![DEFAULT_COMPOSE.to_owned()])
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        self.output_dir.as_path()
    }

    #[must_use]
    pub fn compose(&self) -> &[String] {
        &self.compose
    }

    #[must_use]
    pub fn stack_root(&self, entry: &CatalogEntry) -> PathBuf {
        self.output_dir.join(entry.root_dir)
    }

    /// Formats `path` for humans, with the home directory shortened to `~`.
    #[must_use]
    pub fn display_path(&self, path: &Path) -> String {
        match self
            .user_home
            .as_deref()
            .and_then(|home| path.strip_prefix(home).ok())
        {
            Some(rest) => Path::new("~").join(rest).display().to_string(),
            None => path.display().to_string(),
        }
    }
}
