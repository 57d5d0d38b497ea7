pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{DotenvFile, Layered, MapEnv, ProcessEnv};
pub use crate::core::global::server_url;
pub use crate::core::{loader::PublicConfigLoader, probe::probe};
pub use crate::domain::model::{PublicConfig, PublicEnv, PUBLIC_PREFIX, SERVER_URL_KEY};
pub use crate::domain::ports::EnvSource;
pub use crate::utils::error::{EnvError, Result};
