use std::env;

use crate::{Error, Result};

pub const API_KEY_VAR: &str = "NEWS_API_KEY";

/// Process-environment configuration. Loading never fails; callers ask for
/// the credential when they actually need it so its absence stays a
/// reported error rather than a crash.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var(API_KEY_VAR).ok().filter(|k| !k.is_empty()),
        }
    }

    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            Error::Config(format!("{} not found in environment variables", API_KEY_VAR))
        })
    }
}
