use crate::utils::error::Result;

/// A keyed, read-only view of configuration state.
///
/// `var` distinguishes an absent key (`Ok(None)`) from a present one, and an
/// empty string is a present value.
pub trait EnvSource: Send + Sync {
    fn var(&self, key: &str) -> Result<Option<String>>;

    /// Every readable entry. Order is unspecified.
    fn vars(&self) -> Result<Vec<(String, String)>>;
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, key: &str) -> Result<Option<String>> {
        (**self).var(key)
    }

    fn vars(&self) -> Result<Vec<(String, String)>> {
        (**self).vars()
    }
}
