pub mod global;
pub mod loader;
pub mod probe;

pub use crate::domain::model::{PublicConfig, PublicEnv};
pub use crate::domain::ports::EnvSource;
pub use crate::utils::error::Result;
