//! Sources of environment variables used to resolve secret references.

use std::collections::HashMap;

/// A source of environment variables.
pub trait Environment {
    fn read(&self, variable: &str) -> Result<String, Error>;
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn read(&self, variable: &str) -> Result<String, Error> {
        std::env::var(variable).map_err(|_| Error::NonPresentVariable(variable.to_string()))
    }
}

/// A fixed set of variables, for use in tests.
#[derive(Debug, Clone)]
pub struct FixedEnvironment(HashMap<String, String>);

impl<const N: usize> From<[(String, String); N]> for FixedEnvironment {
    fn from(value: [(String, String); N]) -> Self {
        Self(HashMap::from(value))
    }
}

impl Environment for FixedEnvironment {
    fn read(&self, variable: &str) -> Result<String, Error> {
        self.0
            .get(variable)
            .cloned()
            .ok_or_else(|| Error::NonPresentVariable(variable.to_string()))
    }
}

/// Errors reading from an environment.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("the environment variable was not present: {0}")]
    NonPresentVariable(String),
}
