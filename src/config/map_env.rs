use crate::domain::ports::EnvSource;
use crate::utils::error::Result;
use std::collections::BTreeMap;

/// In-memory environment, used for env file contents and by embedding hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Entries of `other` replace entries with the same key.
    pub fn overlay(&mut self, other: MapEnv) {
        self.vars.extend(other.vars);
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = MapEnv::new();
        for (key, value) in iter {
            env.insert(key, value);
        }
        env
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Result<Option<String>> {
        Ok(self.vars.get(key).cloned())
    }

    fn vars(&self) -> Result<Vec<(String, String)>> {
        Ok(self
            .vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}
