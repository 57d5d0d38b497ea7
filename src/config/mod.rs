#[cfg(feature = "cli")]
pub mod cli;
pub mod dotenv_file;
pub mod layered;
pub mod map_env;
pub mod process_env;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, OutputFormat};
pub use dotenv_file::DotenvFile;
pub use layered::Layered;
pub use map_env::MapEnv;
pub use process_env::ProcessEnv;
