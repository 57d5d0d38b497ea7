use crate::domain::ports::EnvSource;
use crate::utils::error::Result;
use std::collections::BTreeMap;

/// Two sources stacked: `upper` wins on every key it defines.
#[derive(Debug, Clone)]
pub struct Layered<U, L> {
    upper: U,
    lower: L,
}

impl<U: EnvSource, L: EnvSource> Layered<U, L> {
    pub fn new(upper: U, lower: L) -> Self {
        Self { upper, lower }
    }
}

impl<U: EnvSource, L: EnvSource> EnvSource for Layered<U, L> {
    fn var(&self, key: &str) -> Result<Option<String>> {
        match self.upper.var(key)? {
            Some(value) => Ok(Some(value)),
            None => self.lower.var(key),
        }
    }

    fn vars(&self) -> Result<Vec<(String, String)>> {
        let mut merged: BTreeMap<String, String> = self.lower.vars()?.into_iter().collect();
        merged.extend(self.upper.vars()?);
        Ok(merged.into_iter().collect())
    }
}
