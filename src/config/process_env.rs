use crate::domain::ports::EnvSource;
use crate::utils::error::{EnvError, Result};
use std::env;

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Result<Option<String>> {
        match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(EnvError::NotUnicodeError {
                field: key.to_string(),
            }),
        }
    }

    fn vars(&self) -> Result<Vec<(String, String)>> {
        let mut vars = Vec::new();
        for (key, value) in env::vars_os() {
            match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => vars.push((key, value)),
                (Ok(key), Err(_)) => tracing::debug!("Skipping non UTF-8 value of {}", key),
                (Err(_), _) => tracing::debug!("Skipping variable with non UTF-8 name"),
            }
        }
        Ok(vars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_present_and_absent_variables() {
        env::set_var("MULTISWEEPER_ENV_TEST_PRESENT", "");
        env::remove_var("MULTISWEEPER_ENV_TEST_ABSENT");

        assert_eq!(
            ProcessEnv.var("MULTISWEEPER_ENV_TEST_PRESENT").unwrap().as_deref(),
            Some("")
        );
        assert_eq!(ProcessEnv.var("MULTISWEEPER_ENV_TEST_ABSENT").unwrap(), None);
        assert!(ProcessEnv
            .vars()
            .unwrap()
            .iter()
            .any(|(k, _)| k == "MULTISWEEPER_ENV_TEST_PRESENT"));

        env::remove_var("MULTISWEEPER_ENV_TEST_PRESENT");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_value_is_an_error_not_absence() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        env::set_var("MULTISWEEPER_ENV_TEST_BYTES", OsStr::from_bytes(&[0x66, 0xff, 0x6f]));

        match ProcessEnv.var("MULTISWEEPER_ENV_TEST_BYTES") {
            Err(EnvError::NotUnicodeError { field }) => {
                assert_eq!(field, "MULTISWEEPER_ENV_TEST_BYTES")
            }
            other => panic!("expected not unicode error, got {:?}", other),
        }
        assert!(!ProcessEnv
            .vars()
            .unwrap()
            .iter()
            .any(|(k, _)| k == "MULTISWEEPER_ENV_TEST_BYTES"));

        env::remove_var("MULTISWEEPER_ENV_TEST_BYTES");
    }
}
