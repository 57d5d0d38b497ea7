use crate::domain::ports::EnvSource;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use serde::Serialize;
use std::collections::BTreeMap;

/// Variables with this prefix are safe to expose to the browser bundle.
pub const PUBLIC_PREFIX: &str = "PUBLIC_";

/// Base URL of the game server.
pub const SERVER_URL_KEY: &str = "PUBLIC_SERVER_URL";

/// Public client configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicConfig {
    server_url: String,
}

impl PublicConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
        }
    }

    /// 從環境變數來源載入，`PUBLIC_SERVER_URL` 不存在時回傳錯誤
    ///
    /// The value is taken as-is: no trimming, no URL parsing.
    pub fn from_env<E: EnvSource + ?Sized>(source: &E) -> Result<Self> {
        let server_url = source.var(SERVER_URL_KEY)?;
        let server_url = validate_required_field(SERVER_URL_KEY, &server_url)?;

        tracing::debug!("{} resolved ({} bytes)", SERVER_URL_KEY, server_url.len());
        Ok(Self::new(server_url.as_str()))
    }

    pub fn from_public_env(env: &PublicEnv) -> Result<Self> {
        let server_url = env.get(SERVER_URL_KEY).map(str::to_string);
        let server_url = validate_required_field(SERVER_URL_KEY, &server_url)?;
        Ok(Self::new(server_url.as_str()))
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}

/// Snapshot of every `PUBLIC_`-prefixed variable of a source, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PublicEnv {
    vars: BTreeMap<String, String>,
}

impl PublicEnv {
    pub fn collect<E: EnvSource + ?Sized>(source: &E) -> Result<Self> {
        let vars: BTreeMap<String, String> = source
            .vars()?
            .into_iter()
            .filter(|(key, _)| is_public_key(key))
            .collect();

        tracing::debug!("Collected {} public variables", vars.len());
        Ok(Self { vars })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

pub fn is_public_key(key: &str) -> bool {
    key.starts_with(PUBLIC_PREFIX)
}
