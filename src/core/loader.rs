use crate::config::{DotenvFile, Layered, MapEnv, ProcessEnv};
use crate::domain::model::PublicConfig;
use crate::domain::ports::EnvSource;
use crate::utils::error::Result;
use std::path::PathBuf;

/// Builds the environment stack and resolves [`PublicConfig`] from it.
///
/// Precedence, highest first: the process environment, explicit env files
/// (later ones win), then the mode files of `env_dir`.
#[derive(Debug, Clone, Default)]
pub struct PublicConfigLoader {
    env_dir: Option<PathBuf>,
    mode: Option<String>,
    env_files: Vec<PathBuf>,
}

impl PublicConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_env_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.env_dir = Some(dir.into());
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_files.push(path.into());
        self
    }

    /// Everything below the process environment.
    pub fn file_env(&self) -> Result<MapEnv> {
        let mut env = match &self.env_dir {
            Some(dir) => DotenvFile::load_dir(dir, self.mode.as_deref())?,
            None => MapEnv::new(),
        };
        for path in &self.env_files {
            env.overlay(DotenvFile::load(path)?);
        }
        Ok(env)
    }

    pub fn build_source_over<U: EnvSource>(&self, upper: U) -> Result<Layered<U, MapEnv>> {
        Ok(Layered::new(upper, self.file_env()?))
    }

    pub fn build_source(&self) -> Result<Layered<ProcessEnv, MapEnv>> {
        self.build_source_over(ProcessEnv)
    }

    pub fn load(&self) -> Result<PublicConfig> {
        let source = self.build_source()?;
        let config = PublicConfig::from_env(&source)?;
        tracing::info!("✅ Public configuration loaded");
        Ok(config)
    }
}
