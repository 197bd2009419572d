use std::env;

use thiserror::Error;

/// Environment variable holding the TDX application id.
pub const APP_ID_VAR: &str = "TDX_APP_ID";

/// Environment variable holding the TDX application key.
pub const APP_KEY_VAR: &str = "TDX_APP_KEY";

/// Missing or unusable key material. Fatal: raised before any request is
/// attempted, never silently signed around.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing credential: {0} is not set")]
    Missing(&'static str),

    #[error("credential {0} is set but empty")]
    Empty(&'static str),

    #[error("credential {0} is not valid unicode")]
    NotUnicode(&'static str),
}

/// The shared secret pair that signs every gateway request.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub app_id: String,
    pub app_key: String,
}

impl Credentials {
    /// Build credentials from explicit values, rejecting empty ones.
    pub fn new(
        app_id: impl Into<String>,
        app_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let app_id = app_id.into();
        let app_key = app_key.into();

        if app_id.is_empty() {
            return Err(ConfigError::Empty(APP_ID_VAR));
        }
        if app_key.is_empty() {
            return Err(ConfigError::Empty(APP_KEY_VAR));
        }

        Ok(Self { app_id, app_key })
    }

    /// Read `TDX_APP_ID` / `TDX_APP_KEY` from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(read_var(APP_ID_VAR)?, read_var(APP_KEY_VAR)?)
    }
}

fn read_var(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) => Ok(value),
        Err(env::VarError::NotPresent) => Err(ConfigError::Missing(name)),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_non_empty_values() {
        let creds = Credentials::new("app-id", "app-key").expect("credentials must build");

        assert_eq!(creds.app_id, "app-id");
        assert_eq!(creds.app_key, "app-key");
    }

    #[test]
    fn new_rejects_empty_app_id() {
        let err = Credentials::new("", "app-key").unwrap_err();
        assert!(matches!(err, ConfigError::Empty(APP_ID_VAR)));
    }

    #[test]
    fn new_rejects_empty_app_key() {
        let err = Credentials::new("app-id", "").unwrap_err();
        assert!(matches!(err, ConfigError::Empty(APP_KEY_VAR)));
    }

    // Single test for every from_env scenario: tests run in parallel and the
    // process environment is shared state.
    #[test]
    fn from_env_reads_and_validates_variables() {
        unsafe {
            env::set_var(APP_ID_VAR, "env-id");
            env::set_var(APP_KEY_VAR, "env-key");
        }
        let creds = Credentials::from_env().expect("credentials must load from env");
        assert_eq!(creds.app_id, "env-id");
        assert_eq!(creds.app_key, "env-key");

        unsafe {
            env::set_var(APP_KEY_VAR, "");
        }
        let err = Credentials::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Empty(APP_KEY_VAR)));

        unsafe {
            env::remove_var(APP_ID_VAR);
            env::remove_var(APP_KEY_VAR);
        }
        let err = Credentials::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Missing(APP_ID_VAR)));
    }
}
