use crate::config::map_env::MapEnv;
use crate::utils::error::{EnvError, Result};
use std::path::{Path, PathBuf};

/// Reader for `.env`-format files.
pub struct DotenvFile;

impl DotenvFile {
    /// 讀取單一 .env 檔案，檔案不存在時回傳錯誤
    pub fn load<P: AsRef<Path>>(path: P) -> Result<MapEnv> {
        let path = path.as_ref();
        let to_error = |source: dotenvy::Error| EnvError::EnvFileError {
            path: path.display().to_string(),
            source,
        };

        let mut env = MapEnv::new();
        for entry in dotenvy::from_path_iter(path).map_err(to_error)? {
            let (key, value) = entry.map_err(to_error)?;
            env.insert(key, value);
        }

        tracing::debug!("Loaded {} variables from {}", env.len(), path.display());
        Ok(env)
    }

    /// File names consulted for `mode`, lowest precedence first.
    pub fn mode_files(dir: &Path, mode: Option<&str>) -> Vec<PathBuf> {
        let mut names = vec![".env".to_string(), ".env.local".to_string()];
        if let Some(mode) = mode {
            names.push(format!(".env.{}", mode));
            names.push(format!(".env.{}.local", mode));
        }
        names.into_iter().map(|name| dir.join(name)).collect()
    }

    /// Merges the mode files found in `dir`. Absent files are skipped.
    pub fn load_dir(dir: &Path, mode: Option<&str>) -> Result<MapEnv> {
        let mut env = MapEnv::new();
        for path in Self::mode_files(dir, mode) {
            if !path.is_file() {
                tracing::trace!("No env file at {}", path.display());
                continue;
            }
            env.overlay(Self::load(&path)?);
        }
        Ok(env)
    }
}
