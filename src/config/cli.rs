use crate::core::loader::PublicConfigLoader;
use crate::utils::error::{EnvError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_range, Validate};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "multisweeper-env")]
#[command(about = "Resolve and check the public configuration of the Multisweeper client")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding .env files
    #[arg(long, global = true)]
    pub env_dir: Option<String>,

    /// Mode selecting .env.<mode> and .env.<mode>.local
    #[arg(long, global = true)]
    pub mode: Option<String>,

    /// Extra env file, applied after the directory files (repeatable)
    #[arg(long = "env-file", global = true)]
    pub env_files: Vec<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Fail unless PUBLIC_SERVER_URL is defined
    Check,
    /// Print every PUBLIC_ variable
    Show {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Send a GET request to the configured server
    Probe {
        #[arg(long, default_value = "5")]
        timeout_secs: u64,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl CliConfig {
    pub fn loader(&self) -> PublicConfigLoader {
        let mut loader = PublicConfigLoader::new();
        if let Some(dir) = &self.env_dir {
            loader = loader.with_env_dir(dir);
        }
        if let Some(mode) = &self.mode {
            loader = loader.with_mode(mode);
        }
        for file in &self.env_files {
            loader = loader.with_env_file(file);
        }
        loader
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.env_dir {
            validate_path("env_dir", dir)?;
        }
        if let Some(mode) = &self.mode {
            validate_non_empty_string("mode", mode)?;
            if mode.contains('/') || mode.contains('\\') {
                return Err(EnvError::InvalidConfigValueError {
                    field: "mode".to_string(),
                    value: mode.clone(),
                    reason: "Mode cannot contain path separators".to_string(),
                });
            }
        }
        for file in &self.env_files {
            validate_path("env_file", file)?;
        }
        if let Command::Probe { timeout_secs, .. } = self.command {
            validate_range("timeout_secs", timeout_secs, 1, 300)?;
        }

        tracing::debug!("✅ CLI configuration validation passed");
        Ok(())
    }
}
